use chrono::{DateTime, FixedOffset, Timelike};
use fake::{
    faker::{
        company::en::{Buzzword, CompanyName},
        job::en::Title,
        lorem::en::{Paragraph, Sentence},
    },
    Dummy, Fake, Faker,
};
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::model::about::{About, ExperienceEntry, HeroContent, TABLE_NAME};

/// About is a single record, so there is no `generate_many`.
pub struct AboutFactory<T: Clone> {
    modifier_one: fn(x: &About, ext: T) -> About,
}

impl<T: Clone> Default for AboutFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> AboutFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &About, ext: T) -> About) {
        self.modifier_one = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<About> {
        let data = Faker.fake::<AboutDummy>().into_about();
        let data = (self.modifier_one)(&data, ext);
        sqlx::query(
            format!(
                "INSERT INTO {} (id, bio, skills, experience, hero, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)",
                TABLE_NAME
            )
            .as_str(),
        )
        .bind(data.id)
        .bind(&data.bio)
        .bind(&data.skills)
        .bind(&data.experience)
        .bind(&data.hero)
        .bind(data.created_at)
        .execute(db)
        .await?;
        Ok(data)
    }
}

#[derive(Debug, Dummy, Clone)]
struct AboutDummy {
    pub id: Uuid,
    #[dummy(faker = "Paragraph(2..4)")]
    pub bio: String,
    #[dummy(faker = "(Buzzword(), 2..6)")]
    pub skills: Vec<String>,
    #[dummy(faker = "CompanyName()")]
    pub company: String,
    #[dummy(faker = "Title()")]
    pub role: String,
    #[dummy(faker = "Sentence(3..6)")]
    pub headline: String,
    pub created_at: DateTime<FixedOffset>,
}

impl AboutDummy {
    fn into_about(self) -> About {
        About {
            id: self.id,
            bio: self.bio,
            skills: Json(self.skills),
            experience: Some(Json(vec![ExperienceEntry {
                company: self.company,
                role: self.role,
                start: "2019".to_string(),
                end: None,
                description: None,
            }])),
            hero: Some(Json(HeroContent {
                headline: self.headline,
                subheadline: None,
                image: None,
            })),
            // postgres keeps microseconds, so drop sub-second noise
            created_at: self.created_at.with_nanosecond(0).unwrap_or(self.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::{factory::about::AboutFactory, model::about::About};

    #[sqlx::test]
    async fn test_generate_one(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = AboutFactory::new();
        let about = factory.generate_one(&pool, ()).await?;

        // Expect
        assert_eq!(about.validate(), Ok(()));
        let num_data: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM public.about"#)
            .fetch_one(&pool)
            .await?;
        assert_eq!(num_data.0, 1);
        Ok(())
    }

    #[sqlx::test]
    async fn test_second_row_is_rejected(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let mut factory = AboutFactory::<String>::new();
        factory.modified_one(|data, ext| About {
            bio: ext,
            ..data.clone()
        });
        factory.generate_one(&pool, "first".to_string()).await?;

        // When
        let second = factory.generate_one(&pool, "second".to_string()).await;

        // Expect
        assert!(second.is_err());
        let bio: (String,) = sqlx::query_as(r#"SELECT bio FROM public.about"#)
            .fetch_one(&pool)
            .await?;
        assert_eq!(bio.0, "first");
        Ok(())
    }
}
