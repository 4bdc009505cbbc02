use std::sync::Arc;

use chrono::Local;
use poem::web::Data;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use sqlx::types::Json as SqlxJson;
use uuid::Uuid;

use crate::{
    core::security::{is_admin, AdminCodeAuthorization},
    model::contact::Contact,
    repository::contact::{
        create_contact, delete_contact, get_contact, get_contact_by_id, update_contact,
    },
    schema::{
        common::{
            BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
            UnauthorizedResponse,
        },
        contact::{
            ContactCreateRequest, ContactCreateResponses, ContactDeleteResponses,
            ContactDetailResponses, ContactUpdateRequest, ContactUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiContactTags {
    Contact,
}

pub struct ApiContact;

#[OpenApi]
impl ApiContact {
    #[oai(path = "/admin/contact/", method = "get", tag = "ApiContactTags::Contact")]
    async fn get_contact_api(
        &self,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> ContactDetailResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return ContactDetailResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return ContactDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "get_contact_api",
                        "validate admin code",
                        &err.to_string(),
                    ),
                ))
            }
        }

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ContactDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "get_contact_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        match get_contact(&mut tx).await {
            Ok(Some(val)) => ContactDetailResponses::Ok(Json(val.into())),
            Ok(None) => ContactDetailResponses::NotFound(Json(NotFoundResponse {
                message: "contact details have not been created".to_string(),
            })),
            Err(err) => ContactDetailResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.contact",
                    "get_contact_api",
                    "get_contact",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/admin/contact/", method = "post", tag = "ApiContactTags::Contact")]
    async fn create_contact_api(
        &self,
        Json(json): Json<ContactCreateRequest>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> ContactCreateResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return ContactCreateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return ContactCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "create_contact_api",
                        "validate admin code",
                        &err.to_string(),
                    ),
                ))
            }
        }

        let contact = Contact {
            id: Uuid::now_v7(),
            email: json.email,
            phone: json.phone,
            socials: json
                .socials
                .map(|x| SqlxJson(x.into_iter().map(Into::into).collect())),
            address: json.address,
            created_at: Local::now().fixed_offset(),
        };
        if let Err(message) = contact.validate() {
            return ContactCreateResponses::BadRequest(Json(BadRequestResponse { message }));
        }

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ContactCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "create_contact_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        // single record, edits go through update
        let existing = match get_contact(&mut tx).await {
            Ok(val) => val,
            Err(err) => {
                return ContactCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "create_contact_api",
                        "get_contact",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if existing.is_some() {
            return ContactCreateResponses::BadRequest(Json(BadRequestResponse {
                message: "contact details already exist, update them instead".to_string(),
            }));
        }

        let new_contact = match create_contact(&mut tx, &contact).await {
            Ok(val) => val,
            Err(err) => {
                return ContactCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "create_contact_api",
                        "create_contact",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return ContactCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.contact",
                    "create_contact_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        ContactCreateResponses::Created(Json(new_contact.into()))
    }

    #[oai(path = "/admin/contact/:id", method = "put", tag = "ApiContactTags::Contact")]
    async fn update_contact_api(
        &self,
        Path(id): Path<String>,
        Json(json): Json<ContactUpdateRequest>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> ContactUpdateResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return ContactUpdateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return ContactUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "update_contact_api",
                        "validate admin code",
                        &err.to_string(),
                    ),
                ))
            }
        }

        let Ok(contact_id) = Uuid::parse_str(&id) else {
            return ContactUpdateResponses::NotFound(Json(NotFoundResponse {
                message: format!("contact with id = {} not found", id),
            }));
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ContactUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "update_contact_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_contact_by_id(&mut tx, &contact_id).await {
            Ok(val) => val,
            Err(err) => {
                return ContactUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "update_contact_api",
                        "get_contact_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(mut data) = data else {
            return ContactUpdateResponses::NotFound(Json(NotFoundResponse {
                message: format!("contact with id = {} not found", id),
            }));
        };

        json.apply_to(&mut data);
        if let Err(message) = data.validate() {
            return ContactUpdateResponses::BadRequest(Json(BadRequestResponse { message }));
        }

        let updated = match update_contact(&mut tx, &data).await {
            Ok(val) => val,
            Err(err) => {
                return ContactUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "update_contact_api",
                        "update_contact",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return ContactUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.contact",
                    "update_contact_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        ContactUpdateResponses::Ok(Json(updated.into()))
    }

    #[oai(path = "/admin/contact/:id", method = "delete", tag = "ApiContactTags::Contact")]
    async fn delete_contact_api(
        &self,
        Path(id): Path<String>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> ContactDeleteResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return ContactDeleteResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return ContactDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "delete_contact_api",
                        "validate admin code",
                        &err.to_string(),
                    ),
                ))
            }
        }

        let Ok(contact_id) = Uuid::parse_str(&id) else {
            return ContactDeleteResponses::NotFound(Json(NotFoundResponse {
                message: format!("contact with id = {} not found", id),
            }));
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ContactDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "delete_contact_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_contact_by_id(&mut tx, &contact_id).await {
            Ok(val) => val,
            Err(err) => {
                return ContactDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.contact",
                        "delete_contact_api",
                        "get_contact_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(data) = data else {
            return ContactDeleteResponses::NotFound(Json(NotFoundResponse {
                message: format!("contact with id = {} not found", id),
            }));
        };

        if let Err(err) = delete_contact(&mut tx, &data).await {
            return ContactDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.contact",
                    "delete_contact_api",
                    "delete_contact",
                    &err.to_string(),
                ),
            ));
        }
        if let Err(err) = tx.commit().await {
            return ContactDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.contact",
                    "delete_contact_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        ContactDeleteResponses::NoContent
    }
}
