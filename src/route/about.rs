use std::sync::Arc;

use chrono::Local;
use poem::web::Data;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use sqlx::types::Json as SqlxJson;
use uuid::Uuid;

use crate::{
    core::security::{is_admin, AdminCodeAuthorization},
    model::about::About,
    repository::about::{create_about, delete_about, get_about, get_about_by_id, update_about},
    schema::{
        about::{
            AboutCreateRequest, AboutCreateResponses, AboutDeleteResponses, AboutDetailResponses,
            AboutUpdateRequest, AboutUpdateResponses,
        },
        common::{
            BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
            UnauthorizedResponse,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiAboutTags {
    About,
}

pub struct ApiAbout;

#[OpenApi]
impl ApiAbout {
    #[oai(path = "/admin/about/", method = "get", tag = "ApiAboutTags::About")]
    async fn get_about_api(
        &self,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> AboutDetailResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return AboutDetailResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return AboutDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "get_about_api",
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
                return AboutDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "get_about_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        match get_about(&mut tx).await {
            Ok(Some(val)) => AboutDetailResponses::Ok(Json(val.into())),
            Ok(None) => AboutDetailResponses::NotFound(Json(NotFoundResponse {
                message: "about content has not been created".to_string(),
            })),
            Err(err) => AboutDetailResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.about",
                    "get_about_api",
                    "get_about",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/admin/about/", method = "post", tag = "ApiAboutTags::About")]
    async fn create_about_api(
        &self,
        Json(json): Json<AboutCreateRequest>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> AboutCreateResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return AboutCreateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return AboutCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "create_about_api",
                        "validate admin code",
                        &err.to_string(),
                    ),
                ))
            }
        }

        let about = About {
            id: Uuid::now_v7(),
            bio: json.bio,
            skills: SqlxJson(json.skills),
            experience: json
                .experience
                .map(|x| SqlxJson(x.into_iter().map(Into::into).collect())),
            hero: json.hero.map(|x| SqlxJson(x.into())),
            created_at: Local::now().fixed_offset(),
        };
        if let Err(message) = about.validate() {
            return AboutCreateResponses::BadRequest(Json(BadRequestResponse { message }));
        }

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return AboutCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "create_about_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        // single record, edits go through update
        let existing = match get_about(&mut tx).await {
            Ok(val) => val,
            Err(err) => {
                return AboutCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "create_about_api",
                        "get_about",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if existing.is_some() {
            return AboutCreateResponses::BadRequest(Json(BadRequestResponse {
                message: "about content already exists, update it instead".to_string(),
            }));
        }

        let new_about = match create_about(&mut tx, &about).await {
            Ok(val) => val,
            Err(err) => {
                return AboutCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "create_about_api",
                        "create_about",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return AboutCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.about",
                    "create_about_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        AboutCreateResponses::Created(Json(new_about.into()))
    }

    #[oai(path = "/admin/about/:id", method = "put", tag = "ApiAboutTags::About")]
    async fn update_about_api(
        &self,
        Path(id): Path<String>,
        Json(json): Json<AboutUpdateRequest>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> AboutUpdateResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return AboutUpdateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return AboutUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "update_about_api",
                        "validate admin code",
                        &err.to_string(),
                    ),
                ))
            }
        }

        let Ok(about_id) = Uuid::parse_str(&id) else {
            return AboutUpdateResponses::NotFound(Json(NotFoundResponse {
                message: format!("about with id = {} not found", id),
            }));
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return AboutUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "update_about_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_about_by_id(&mut tx, &about_id).await {
            Ok(val) => val,
            Err(err) => {
                return AboutUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "update_about_api",
                        "get_about_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(mut data) = data else {
            return AboutUpdateResponses::NotFound(Json(NotFoundResponse {
                message: format!("about with id = {} not found", id),
            }));
        };

        json.apply_to(&mut data);
        if let Err(message) = data.validate() {
            return AboutUpdateResponses::BadRequest(Json(BadRequestResponse { message }));
        }

        let updated = match update_about(&mut tx, &data).await {
            Ok(val) => val,
            Err(err) => {
                return AboutUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "update_about_api",
                        "update_about",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return AboutUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.about",
                    "update_about_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        AboutUpdateResponses::Ok(Json(updated.into()))
    }

    #[oai(path = "/admin/about/:id", method = "delete", tag = "ApiAboutTags::About")]
    async fn delete_about_api(
        &self,
        Path(id): Path<String>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> AboutDeleteResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return AboutDeleteResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return AboutDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "delete_about_api",
                        "validate admin code",
                        &err.to_string(),
                    ),
                ))
            }
        }

        let Ok(about_id) = Uuid::parse_str(&id) else {
            return AboutDeleteResponses::NotFound(Json(NotFoundResponse {
                message: format!("about with id = {} not found", id),
            }));
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return AboutDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "delete_about_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_about_by_id(&mut tx, &about_id).await {
            Ok(val) => val,
            Err(err) => {
                return AboutDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.about",
                        "delete_about_api",
                        "get_about_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(data) = data else {
            return AboutDeleteResponses::NotFound(Json(NotFoundResponse {
                message: format!("about with id = {} not found", id),
            }));
        };

        if let Err(err) = delete_about(&mut tx, &data).await {
            return AboutDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.about",
                    "delete_about_api",
                    "delete_about",
                    &err.to_string(),
                ),
            ));
        }
        if let Err(err) = tx.commit().await {
            return AboutDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.about",
                    "delete_about_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        AboutDeleteResponses::NoContent
    }
}
