use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use uuid::Uuid;

use crate::core::utils::is_valid_slug;

pub const TABLE_NAME: &str = "public.projects";

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Branding,
    UiUx,
    Illustration,
    Print,
    WebDesign,
    Packaging,
    Motion,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 7] = [
        ProjectCategory::Branding,
        ProjectCategory::UiUx,
        ProjectCategory::Illustration,
        ProjectCategory::Print,
        ProjectCategory::WebDesign,
        ProjectCategory::Packaging,
        ProjectCategory::Motion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Branding => "branding",
            ProjectCategory::UiUx => "ui-ux",
            ProjectCategory::Illustration => "illustration",
            ProjectCategory::Print => "print",
            ProjectCategory::WebDesign => "web-design",
            ProjectCategory::Packaging => "packaging",
            ProjectCategory::Motion => "motion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Branding => "Branding",
            ProjectCategory::UiUx => "UI/UX Design",
            ProjectCategory::Illustration => "Illustration",
            ProjectCategory::Print => "Print Design",
            ProjectCategory::WebDesign => "Web Design",
            ProjectCategory::Packaging => "Packaging",
            ProjectCategory::Motion => "Motion Graphics",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|x| x.as_str() == s)
            .ok_or_else(|| format!("unknown project category '{}'", s))
    }
}

/// Image descriptor, the asset host owns the bytes and we keep the URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
    pub width: i32,
    pub height: i32,
}

impl ProjectImage {
    pub fn validate(&self, field: &str) -> Result<(), String> {
        if self.src.trim().is_empty() {
            return Err(format!("{}: image src is required", field));
        }
        if self.alt.trim().is_empty() {
            return Err(format!("{}: alt text is required", field));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(format!("{}: width and height must be positive", field));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub tags: Json<Vec<String>>,
    pub thumbnail: Json<ProjectImage>,
    pub images: Json<Vec<ProjectImage>>,
    pub client: Option<String>,
    pub year: Option<i32>,
    pub description: String,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<FixedOffset>,
}

impl Project {
    /// Field rules enforced before any write.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is required".to_string());
        }
        if !is_valid_slug(&self.slug) {
            return Err(format!(
                "slug '{}' must be lowercase letters, digits and single dashes",
                self.slug
            ));
        }
        ProjectCategory::from_str(&self.category)?;
        if self.tags.iter().any(|x| x.trim().is_empty()) {
            return Err("tags must not be empty".to_string());
        }
        self.thumbnail.validate("thumbnail")?;
        if self.images.is_empty() {
            return Err("at least one image is required".to_string());
        }
        for (idx, image) in self.images.iter().enumerate() {
            image.validate(&format!("images[{}]", idx))?;
        }
        if let Some(year) = self.year {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                return Err(format!("year must be between {} and {}", MIN_YEAR, MAX_YEAR));
            }
        }
        if self.description.trim().is_empty() {
            return Err("description is required".to_string());
        }
        Ok(())
    }
}
