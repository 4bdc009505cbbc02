//! Sample content for a fresh database.

use chrono::{FixedOffset, NaiveDate};
use sqlx::{types::Json, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::{
    model::{
        about::{About, ExperienceEntry, HeroContent},
        contact::{Contact, SocialLink},
        project::{Project, ProjectImage},
    },
    repository::{
        about::{create_about, get_about},
        contact::{create_contact, get_contact},
        project::{create_project, get_project_by_slug},
    },
};

#[derive(Debug, Default, PartialEq)]
pub struct SeedReport {
    pub projects: usize,
    pub about: bool,
    pub contact: bool,
}

fn image(dir: &str, name: &str, alt: &str, width: i32, height: i32) -> ProjectImage {
    ProjectImage {
        src: format!("/images/projects/{}/{}.jpg", dir, name),
        alt: alt.to_string(),
        width,
        height,
    }
}

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<chrono::DateTime<FixedOffset>> {
    let datetime = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|x| x.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow::anyhow!("invalid seed date {}-{}-{}", year, month, day))?;
    Ok(datetime.and_utc().fixed_offset())
}

#[allow(clippy::too_many_arguments)]
fn project(
    title: &str,
    slug: &str,
    category: &str,
    tags: &[&str],
    alts: &[&str],
    client: &str,
    year: i32,
    description: &str,
    featured: bool,
    created_at: chrono::DateTime<FixedOffset>,
) -> Project {
    let dir = slug.split('-').next().unwrap_or(slug);
    Project {
        id: Uuid::now_v7(),
        title: title.to_string(),
        slug: slug.to_string(),
        category: category.to_string(),
        tags: Json(tags.iter().map(|x| x.to_string()).collect()),
        thumbnail: Json(image(dir, "thumbnail", title, 800, 600)),
        images: Json(
            alts.iter()
                .enumerate()
                .map(|(idx, alt)| image(dir, &format!("image-{}", idx + 1), alt, 1200, 800))
                .collect(),
        ),
        client: Some(client.to_string()),
        year: Some(year),
        description: description.to_string(),
        challenge: None,
        solution: None,
        featured,
        created_at,
    }
}

pub fn sample_projects() -> anyhow::Result<Vec<Project>> {
    Ok(vec![
        project(
            "Evergreen Brand Identity",
            "evergreen-brand-identity",
            "branding",
            &["Logo Design", "Brand Guidelines", "Visual Identity"],
            &["Evergreen logo design", "Evergreen business cards", "Evergreen brand guidelines"],
            "Evergreen Sustainability",
            2023,
            "A brand identity for a sustainability consulting firm, built on organic forms and a restrained palette.",
            true,
            date(2023, 6, 15)?,
        ),
        project(
            "Harmony Music App",
            "harmony-music-app",
            "ui-ux",
            &["UI Design", "User Experience", "Mobile App"],
            &["Harmony app screens", "Harmony user flow", "Harmony design system"],
            "Harmony Music",
            2022,
            "A streaming app for classical music that organises content by composer, period and instrument.",
            true,
            date(2022, 11, 10)?,
        ),
        project(
            "Urban Jungle Illustrations",
            "urban-jungle-illustrations",
            "illustration",
            &["Digital Illustration", "Character Design", "Editorial"],
            &["Urban jungle cover", "Urban jungle spread"],
            "Urbanite Magazine",
            2022,
            "Editorial illustrations on urban wildlife, mixing realistic streets with stylised animals.",
            false,
            date(2022, 8, 5)?,
        ),
        project(
            "Artisan Coffee Packaging",
            "artisan-coffee-packaging",
            "packaging",
            &["Packaging Design", "Typography", "Print Production"],
            &["Coffee bag front", "Coffee label detail"],
            "Ridgeline Roasters",
            2021,
            "Packaging for a small-batch roaster, one typographic system across every origin.",
            false,
            date(2021, 4, 20)?,
        ),
    ])
}

pub fn sample_about() -> anyhow::Result<About> {
    Ok(About {
        id: Uuid::now_v7(),
        bio: "Graphic designer working across brand identity, interfaces and illustration.".to_string(),
        skills: Json(
            ["Brand Identity", "UI/UX Design", "Illustration", "Typography", "Motion"]
                .iter()
                .map(|x| x.to_string())
                .collect(),
        ),
        experience: Some(Json(vec![ExperienceEntry {
            company: "Independent".to_string(),
            role: "Designer".to_string(),
            start: "2019".to_string(),
            end: None,
            description: Some("Brand and product work for small studios.".to_string()),
        }])),
        hero: Some(Json(HeroContent {
            headline: "Design that feels considered".to_string(),
            subheadline: Some("Brand, interface and illustration".to_string()),
            image: None,
        })),
        created_at: date(2024, 1, 1)?,
    })
}

pub fn sample_contact() -> anyhow::Result<Contact> {
    Ok(Contact {
        id: Uuid::now_v7(),
        email: "hello@example.com".to_string(),
        phone: None,
        socials: Some(Json(vec![
            SocialLink {
                kind: "dribbble".to_string(),
                url: "https://dribbble.com/example".to_string(),
            },
            SocialLink {
                kind: "behance".to_string(),
                url: "https://behance.net/example".to_string(),
            },
        ])),
        address: None,
        created_at: date(2024, 1, 1)?,
    })
}

/// Insert whatever sample content is missing. Running it twice is a no-op.
pub async fn seed_content(pool: &PgPool) -> anyhow::Result<SeedReport> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    for project in sample_projects()? {
        if get_project_by_slug(&mut tx, &project.slug).await?.is_some() {
            continue;
        }
        project.validate().map_err(anyhow::Error::msg)?;
        create_project(&mut tx, &project).await?;
        report.projects += 1;
    }
    if get_about(&mut tx).await?.is_none() {
        let about = sample_about()?;
        about.validate().map_err(anyhow::Error::msg)?;
        create_about(&mut tx, &about).await?;
        report.about = true;
    }
    if get_contact(&mut tx).await?.is_none() {
        let contact = sample_contact()?;
        contact.validate().map_err(anyhow::Error::msg)?;
        create_contact(&mut tx, &contact).await?;
        report.contact = true;
    }

    tx.commit().await?;
    info!(?report, "seeded sample content");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::cli::seed::{sample_projects, seed_content, SeedReport};

    #[test]
    fn test_sample_content_is_valid() {
        for project in sample_projects().unwrap() {
            assert_eq!(project.validate(), Ok(()), "{}", project.slug);
        }
    }

    #[sqlx::test]
    async fn test_seed_content(pool: PgPool) -> anyhow::Result<()> {
        // When
        let first = seed_content(&pool).await?;
        let second = seed_content(&pool).await?;

        // Expect
        assert_eq!(
            first,
            SeedReport {
                projects: 4,
                about: true,
                contact: true
            }
        );
        assert_eq!(second, SeedReport::default());
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.projects")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count.0, 4);
        Ok(())
    }
}
