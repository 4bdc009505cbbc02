use chrono::{DateTime, FixedOffset, Timelike};
use fake::{
    faker::{
        company::en::CompanyName,
        lorem::en::{Paragraph, Sentence, Words},
    },
    Dummy, Fake, Faker,
};
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::model::project::{Project, ProjectCategory, ProjectImage, TABLE_NAME};

pub struct ProjectFactory<T: Clone> {
    modifier_one: fn(x: &Project, ext: T) -> Project,
    modifier_many: fn(x: &Project, idx: usize, ext: T) -> Project,
}

impl<T: Clone> Default for ProjectFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProjectFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Project, ext: T) -> Project) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Project, idx: usize, ext: T) -> Project) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Project> {
        let data = ProjectDummy::generate_one();
        let data = (self.modifier_one)(&data, ext);
        insert_project(db, &data).await?;
        Ok(data)
    }

    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<Project>> {
        let data = ProjectDummy::generate_many(num);
        let mut result: Vec<Project> = vec![];
        for (idx, item) in data.iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        for item in result.iter() {
            insert_project(db, item).await?;
        }
        Ok(result)
    }
}

async fn insert_project(db: &PgPool, data: &Project) -> anyhow::Result<()> {
    sqlx::query(
        format!(
            "INSERT INTO {} (id, title, slug, category, tags, thumbnail, images, client, year,
        description, challenge, solution, featured, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(data.id)
    .bind(&data.title)
    .bind(&data.slug)
    .bind(&data.category)
    .bind(&data.tags)
    .bind(&data.thumbnail)
    .bind(&data.images)
    .bind(&data.client)
    .bind(data.year)
    .bind(&data.description)
    .bind(&data.challenge)
    .bind(&data.solution)
    .bind(data.featured)
    .bind(data.created_at)
    .execute(db)
    .await?;
    Ok(())
}

#[derive(Debug, Dummy, Clone)]
struct ProjectDummy {
    pub id: Uuid,
    #[dummy(faker = "Sentence(1..4)")]
    pub title: String,
    #[dummy(faker = "0..7")]
    pub category: usize,
    #[dummy(faker = "Words(1..4)")]
    pub tags: Vec<String>,
    #[dummy(faker = "1..4")]
    pub image_count: usize,
    #[dummy(faker = "CompanyName()")]
    pub client: String,
    #[dummy(faker = "2015..2026")]
    pub year: i32,
    #[dummy(faker = "Paragraph(1..3)")]
    pub description: String,
    pub featured: bool,
    pub created_at: DateTime<FixedOffset>,
}

impl ProjectDummy {
    fn image(id: &Uuid, idx: usize) -> ProjectImage {
        ProjectImage {
            src: format!("https://cdn.example.com/projects/{}/{}.jpg", id.simple(), idx),
            alt: Words(2..5).fake::<Vec<String>>().join(" "),
            width: 1600,
            height: 1200,
        }
    }

    fn into_project(self) -> Project {
        Project {
            id: self.id,
            title: self.title.trim_end_matches('.').to_string(),
            // uuid keeps slugs unique across a batch
            slug: format!("project-{}", self.id.simple()),
            category: ProjectCategory::ALL[self.category].as_str().to_string(),
            tags: Json(self.tags),
            thumbnail: Json(Self::image(&self.id, 0)),
            images: Json(
                (1..=self.image_count)
                    .map(|idx| Self::image(&self.id, idx))
                    .collect(),
            ),
            client: Some(self.client),
            year: Some(self.year),
            description: self.description,
            challenge: None,
            solution: None,
            featured: self.featured,
            // postgres keeps microseconds, so drop sub-second noise
            created_at: self.created_at.with_nanosecond(0).unwrap_or(self.created_at),
        }
    }

    pub fn generate_one() -> Project {
        Faker.fake::<Self>().into_project()
    }

    pub fn generate_many(num: u32) -> Vec<Project> {
        (0..num).map(|_| Self::generate_one()).collect()
    }
}
