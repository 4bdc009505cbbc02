use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use uuid::Uuid;

pub const TABLE_NAME: &str = "public.about";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, FromRow)]
pub struct About {
    pub id: Uuid,
    pub bio: String,
    pub skills: Json<Vec<String>>,
    pub experience: Option<Json<Vec<ExperienceEntry>>>,
    pub hero: Option<Json<HeroContent>>,
    pub created_at: DateTime<FixedOffset>,
}

impl About {
    pub fn validate(&self) -> Result<(), String> {
        if self.bio.trim().is_empty() {
            return Err("bio is required".to_string());
        }
        if self.skills.iter().any(|x| x.trim().is_empty()) {
            return Err("skills must not be empty".to_string());
        }
        if let Some(experience) = &self.experience {
            for (idx, item) in experience.iter().enumerate() {
                if item.company.trim().is_empty()
                    || item.role.trim().is_empty()
                    || item.start.trim().is_empty()
                {
                    return Err(format!(
                        "experience[{}]: company, role and start are required",
                        idx
                    ));
                }
            }
        }
        if let Some(hero) = &self.hero {
            if hero.headline.trim().is_empty() {
                return Err("hero headline is required".to_string());
            }
        }
        Ok(())
    }
}
