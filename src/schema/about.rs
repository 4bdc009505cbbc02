use poem_openapi::{payload::Json, types::MaybeUndefined, ApiResponse, Object};
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlxJson;

use super::common::{
    merge_nullable_with, BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
    UnauthorizedResponse,
};
use crate::{
    core::utils::datetime_to_string,
    model::about::{About, ExperienceEntry, HeroContent},
};

#[derive(Object, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[oai(rename = "ExperienceEntry")]
pub struct ExperienceEntryPayload {
    pub company: String,
    pub role: String,
    pub start: String,
    pub end: Option<String>,
    pub description: Option<String>,
}

impl From<ExperienceEntry> for ExperienceEntryPayload {
    fn from(x: ExperienceEntry) -> Self {
        Self {
            company: x.company,
            role: x.role,
            start: x.start,
            end: x.end,
            description: x.description,
        }
    }
}

impl From<ExperienceEntryPayload> for ExperienceEntry {
    fn from(x: ExperienceEntryPayload) -> Self {
        Self {
            company: x.company,
            role: x.role,
            start: x.start,
            end: x.end,
            description: x.description,
        }
    }
}

#[derive(Object, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[oai(rename = "HeroContent")]
pub struct HeroContentPayload {
    pub headline: String,
    pub subheadline: Option<String>,
    pub image: Option<String>,
}

impl From<HeroContent> for HeroContentPayload {
    fn from(x: HeroContent) -> Self {
        Self {
            headline: x.headline,
            subheadline: x.subheadline,
            image: x.image,
        }
    }
}

impl From<HeroContentPayload> for HeroContent {
    fn from(x: HeroContentPayload) -> Self {
        Self {
            headline: x.headline,
            subheadline: x.subheadline,
            image: x.image,
        }
    }
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct AboutDetail {
    pub id: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub experience: Option<Vec<ExperienceEntryPayload>>,
    pub hero: Option<HeroContentPayload>,
    pub created_at: String,
}

impl From<About> for AboutDetail {
    fn from(x: About) -> Self {
        Self {
            id: x.id.to_string(),
            bio: x.bio,
            skills: x.skills.0,
            experience: x
                .experience
                .map(|e| e.0.into_iter().map(Into::into).collect()),
            hero: x.hero.map(|h| h.0.into()),
            created_at: datetime_to_string(x.created_at),
        }
    }
}

#[derive(ApiResponse)]
pub enum AboutDetailResponses {
    #[oai(status = 200)]
    Ok(Json<AboutDetail>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct AboutCreateRequest {
    pub bio: String,
    #[oai(default)]
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience: Option<Vec<ExperienceEntryPayload>>,
    pub hero: Option<HeroContentPayload>,
}

#[derive(ApiResponse)]
pub enum AboutCreateResponses {
    #[oai(status = 201)]
    Created(Json<AboutDetail>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Default)]
pub struct AboutUpdateRequest {
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: MaybeUndefined<Vec<ExperienceEntryPayload>>,
    pub hero: MaybeUndefined<HeroContentPayload>,
}

impl AboutUpdateRequest {
    pub fn apply_to(self, about: &mut About) {
        if let Some(val) = self.bio {
            about.bio = val;
        }
        if let Some(val) = self.skills {
            about.skills = SqlxJson(val);
        }
        merge_nullable_with(
            self.experience,
            &mut about.experience,
            |x| SqlxJson(x.into_iter().map(Into::into).collect()),
        );
        merge_nullable_with(
            self.hero,
            &mut about.hero,
            |x| SqlxJson(x.into()),
        );
    }
}

#[derive(ApiResponse)]
pub enum AboutUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<AboutDetail>),

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
pub enum AboutDeleteResponses {
    #[oai(status = 204)]
    NoContent,

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
