use std::str::FromStr;

use poem_openapi::{payload::Json, types::MaybeUndefined, ApiResponse, Object};
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlxJson;

use super::common::{
    merge_nullable, BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
    UnauthorizedResponse,
};
use crate::{
    core::utils::datetime_to_string,
    model::project::{Project, ProjectCategory, ProjectImage},
};

#[derive(Object, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[oai(rename = "ProjectImage")]
pub struct ProjectImagePayload {
    pub src: String,
    pub alt: String,
    pub width: i32,
    pub height: i32,
}

impl From<ProjectImage> for ProjectImagePayload {
    fn from(x: ProjectImage) -> Self {
        Self {
            src: x.src,
            alt: x.alt,
            width: x.width,
            height: x.height,
        }
    }
}

impl From<ProjectImagePayload> for ProjectImage {
    fn from(x: ProjectImagePayload) -> Self {
        Self {
            src: x.src,
            alt: x.alt,
            width: x.width,
            height: x.height,
        }
    }
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct ProjectDetail {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub category_label: String,
    pub tags: Vec<String>,
    pub thumbnail: ProjectImagePayload,
    pub images: Vec<ProjectImagePayload>,
    pub client: Option<String>,
    pub year: Option<i32>,
    pub description: String,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub featured: bool,
    pub created_at: String,
}

impl From<Project> for ProjectDetail {
    fn from(x: Project) -> Self {
        let category_label = ProjectCategory::from_str(&x.category)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|_| x.category.clone());
        Self {
            id: x.id.to_string(),
            title: x.title,
            slug: x.slug,
            category: x.category,
            category_label,
            tags: x.tags.0,
            thumbnail: x.thumbnail.0.into(),
            images: x.images.0.into_iter().map(Into::into).collect(),
            client: x.client,
            year: x.year,
            description: x.description,
            challenge: x.challenge,
            solution: x.solution,
            featured: x.featured,
            created_at: datetime_to_string(x.created_at),
        }
    }
}

#[derive(ApiResponse)]
pub enum ProjectListResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<ProjectDetail>>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[allow(clippy::large_enum_variant)]
#[derive(ApiResponse)]
pub enum ProjectDetailResponses {
    #[oai(status = 200)]
    Ok(Json<ProjectDetail>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct ProjectCreateRequest {
    pub title: String,
    pub slug: String,
    pub category: String,
    #[oai(default)]
    #[serde(default)]
    pub tags: Vec<String>,
    pub thumbnail: ProjectImagePayload,
    pub images: Vec<ProjectImagePayload>,
    pub client: Option<String>,
    pub year: Option<i32>,
    pub description: String,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    #[oai(default)]
    #[serde(default)]
    pub featured: bool,
}

#[allow(clippy::large_enum_variant)]
#[derive(ApiResponse)]
pub enum ProjectCreateResponses {
    #[oai(status = 201)]
    Created(Json<ProjectDetail>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

/// Partial update: absent fields are left untouched, `null` clears the
/// optional ones.
#[derive(Object, Default)]
pub struct ProjectUpdateRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub thumbnail: Option<ProjectImagePayload>,
    pub images: Option<Vec<ProjectImagePayload>>,
    pub client: MaybeUndefined<String>,
    pub year: MaybeUndefined<i32>,
    pub description: Option<String>,
    pub challenge: MaybeUndefined<String>,
    pub solution: MaybeUndefined<String>,
    pub featured: Option<bool>,
}

impl ProjectUpdateRequest {
    pub fn apply_to(self, project: &mut Project) {
        if let Some(val) = self.title {
            project.title = val;
        }
        if let Some(val) = self.slug {
            project.slug = val;
        }
        if let Some(val) = self.category {
            project.category = val;
        }
        if let Some(val) = self.tags {
            project.tags = SqlxJson(val);
        }
        if let Some(val) = self.thumbnail {
            project.thumbnail = SqlxJson(val.into());
        }
        if let Some(val) = self.images {
            project.images = SqlxJson(val.into_iter().map(Into::into).collect());
        }
        merge_nullable(self.client, &mut project.client);
        merge_nullable(self.year, &mut project.year);
        if let Some(val) = self.description {
            project.description = val;
        }
        merge_nullable(self.challenge, &mut project.challenge);
        merge_nullable(self.solution, &mut project.solution);
        if let Some(val) = self.featured {
            project.featured = val;
        }
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(ApiResponse)]
pub enum ProjectUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<ProjectDetail>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProjectDeleteResponses {
    #[oai(status = 204)]
    NoContent,

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[cfg(test)]
mod tests {
    use chrono::Local;
    use uuid::Uuid;

    use super::*;

    fn project() -> Project {
        let image = ProjectImage {
            src: "https://cdn.example.com/a.jpg".to_string(),
            alt: "a".to_string(),
            width: 10,
            height: 10,
        };
        Project {
            id: Uuid::now_v7(),
            title: "X".to_string(),
            slug: "x".to_string(),
            category: "ui-ux".to_string(),
            tags: SqlxJson(vec!["a".to_string()]),
            thumbnail: SqlxJson(image.clone()),
            images: SqlxJson(vec![image]),
            client: Some("Acme".to_string()),
            year: Some(2023),
            description: "d".to_string(),
            challenge: Some("c".to_string()),
            solution: None,
            featured: false,
            created_at: Local::now().fixed_offset(),
        }
    }

    #[test]
    fn test_apply_to_only_touches_given_fields() {
        let original = project();
        let mut updated = original.clone();
        ProjectUpdateRequest {
            title: Some("Y".to_string()),
            client: MaybeUndefined::Null,
            solution: MaybeUndefined::Value("s".to_string()),
            ..Default::default()
        }
        .apply_to(&mut updated);

        assert_eq!(updated.title, "Y");
        assert_eq!(updated.client, None);
        assert_eq!(updated.solution, Some("s".to_string()));
        assert_eq!(updated.year, original.year);
        assert_eq!(updated.challenge, original.challenge);
        assert_eq!(updated.slug, original.slug);
        assert_eq!(updated.images, original.images);
        assert_eq!(updated.created_at, original.created_at);
    }

    #[test]
    fn test_detail_carries_category_label() {
        let detail = ProjectDetail::from(project());
        assert_eq!(detail.category, "ui-ux");
        assert_eq!(detail.category_label, "UI/UX Design");
        assert!(detail.created_at.ends_with('Z'));
    }
}
