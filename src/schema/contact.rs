use poem_openapi::{payload::Json, types::MaybeUndefined, ApiResponse, Object};
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlxJson;

use super::common::{
    merge_nullable, merge_nullable_with, BadRequestResponse, InternalServerErrorResponse,
    NotFoundResponse, UnauthorizedResponse,
};
use crate::{
    core::utils::datetime_to_string,
    model::contact::{Contact, SocialLink},
};

#[derive(Object, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[oai(rename = "SocialLink")]
pub struct SocialLinkPayload {
    #[oai(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl From<SocialLink> for SocialLinkPayload {
    fn from(x: SocialLink) -> Self {
        Self {
            kind: x.kind,
            url: x.url,
        }
    }
}

impl From<SocialLinkPayload> for SocialLink {
    fn from(x: SocialLinkPayload) -> Self {
        Self {
            kind: x.kind,
            url: x.url,
        }
    }
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct ContactDetail {
    pub id: String,
    pub email: String,
    pub phone: Option<String>,
    pub socials: Option<Vec<SocialLinkPayload>>,
    pub address: Option<String>,
    pub created_at: String,
}

impl From<Contact> for ContactDetail {
    fn from(x: Contact) -> Self {
        Self {
            id: x.id.to_string(),
            email: x.email,
            phone: x.phone,
            socials: x.socials.map(|s| s.0.into_iter().map(Into::into).collect()),
            address: x.address,
            created_at: datetime_to_string(x.created_at),
        }
    }
}

#[derive(ApiResponse)]
pub enum ContactDetailResponses {
    #[oai(status = 200)]
    Ok(Json<ContactDetail>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct ContactCreateRequest {
    pub email: String,
    pub phone: Option<String>,
    pub socials: Option<Vec<SocialLinkPayload>>,
    pub address: Option<String>,
}

#[derive(ApiResponse)]
pub enum ContactCreateResponses {
    #[oai(status = 201)]
    Created(Json<ContactDetail>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Default)]
pub struct ContactUpdateRequest {
    pub email: Option<String>,
    pub phone: MaybeUndefined<String>,
    pub socials: MaybeUndefined<Vec<SocialLinkPayload>>,
    pub address: MaybeUndefined<String>,
}

impl ContactUpdateRequest {
    pub fn apply_to(self, contact: &mut Contact) {
        if let Some(val) = self.email {
            contact.email = val;
        }
        merge_nullable(self.phone, &mut contact.phone);
        merge_nullable_with(
            self.socials,
            &mut contact.socials,
            |x| SqlxJson(x.into_iter().map(Into::into).collect()),
        );
        merge_nullable(self.address, &mut contact.address);
    }
}

#[derive(ApiResponse)]
pub enum ContactUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<ContactDetail>),

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
pub enum ContactDeleteResponses {
    #[oai(status = 204)]
    NoContent,

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
