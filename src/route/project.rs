use std::sync::Arc;

use chrono::Local;
use poem::web::Data;
use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};
use sqlx::types::Json as SqlxJson;
use uuid::Uuid;

use crate::{
    core::security::{is_admin, AdminCodeAuthorization},
    model::project::Project,
    repository::project::{
        create_project, delete_project, get_all_project, get_project_by_slug_or_id,
        update_project,
    },
    schema::{
        common::{
            BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
            UnauthorizedResponse,
        },
        project::{
            ProjectCreateRequest, ProjectCreateResponses, ProjectDeleteResponses, ProjectDetail,
            ProjectDetailResponses, ProjectListResponses, ProjectUpdateRequest,
            ProjectUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiProjectTags {
    Project,
}

pub struct ApiProject;

#[OpenApi]
impl ApiProject {
    #[oai(path = "/admin/projects/", method = "get", tag = "ApiProjectTags::Project")]
    async fn list_project_api(
        &self,
        Query(category): Query<Option<String>>,
        Query(featured): Query<Option<bool>>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> ProjectListResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return ProjectListResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return ProjectListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "list_project_api",
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
                return ProjectListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "list_project_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_all_project(&mut tx, category, featured, None).await {
            Ok(val) => val,
            Err(err) => {
                return ProjectListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "list_project_api",
                        "get_all_project",
                        &err.to_string(),
                    ),
                ))
            }
        };

        ProjectListResponses::Ok(Json(data.into_iter().map(ProjectDetail::from).collect()))
    }

    #[oai(path = "/admin/projects/:key", method = "get", tag = "ApiProjectTags::Project")]
    async fn get_project_api(
        &self,
        Path(key): Path<String>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> ProjectDetailResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return ProjectDetailResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return ProjectDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "get_project_api",
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
                return ProjectDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "get_project_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_project_by_slug_or_id(&mut tx, &key).await {
            Ok(val) => val,
            Err(err) => {
                return ProjectDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "get_project_api",
                        "get_project_by_slug_or_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        match data {
            Some(val) => ProjectDetailResponses::Ok(Json(val.into())),
            None => ProjectDetailResponses::NotFound(Json(NotFoundResponse {
                message: format!("project {} not found", key),
            })),
        }
    }

    #[oai(path = "/admin/projects/", method = "post", tag = "ApiProjectTags::Project")]
    async fn create_project_api(
        &self,
        Json(json): Json<ProjectCreateRequest>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> ProjectCreateResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return ProjectCreateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return ProjectCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "create_project_api",
                        "validate admin code",
                        &err.to_string(),
                    ),
                ))
            }
        }

        let project = Project {
            id: Uuid::now_v7(),
            title: json.title,
            slug: json.slug,
            category: json.category,
            tags: SqlxJson(json.tags),
            thumbnail: SqlxJson(json.thumbnail.into()),
            images: SqlxJson(json.images.into_iter().map(Into::into).collect()),
            client: json.client,
            year: json.year,
            description: json.description,
            challenge: json.challenge,
            solution: json.solution,
            featured: json.featured,
            created_at: Local::now().fixed_offset(),
        };
        if let Err(message) = project.validate() {
            return ProjectCreateResponses::BadRequest(Json(BadRequestResponse { message }));
        }

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProjectCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "create_project_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let new_project = match create_project(&mut tx, &project).await {
            Ok(val) => val,
            Err(err) => {
                return ProjectCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "create_project_api",
                        "create_project",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return ProjectCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.project",
                    "create_project_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        ProjectCreateResponses::Created(Json(new_project.into()))
    }

    #[oai(path = "/admin/projects/:key", method = "put", tag = "ApiProjectTags::Project")]
    async fn update_project_api(
        &self,
        Path(key): Path<String>,
        Json(json): Json<ProjectUpdateRequest>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> ProjectUpdateResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return ProjectUpdateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return ProjectUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "update_project_api",
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
                return ProjectUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "update_project_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_project_by_slug_or_id(&mut tx, &key).await {
            Ok(val) => val,
            Err(err) => {
                return ProjectUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "update_project_api",
                        "get_project_by_slug_or_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(mut data) = data else {
            return ProjectUpdateResponses::NotFound(Json(NotFoundResponse {
                message: format!("project {} not found", key),
            }));
        };

        json.apply_to(&mut data);
        if let Err(message) = data.validate() {
            return ProjectUpdateResponses::BadRequest(Json(BadRequestResponse { message }));
        }

        let updated = match update_project(&mut tx, &data).await {
            Ok(val) => val,
            Err(err) => {
                return ProjectUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "update_project_api",
                        "update_project",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return ProjectUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.project",
                    "update_project_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        ProjectUpdateResponses::Ok(Json(updated.into()))
    }

    #[oai(path = "/admin/projects/:key", method = "delete", tag = "ApiProjectTags::Project")]
    async fn delete_project_api(
        &self,
        Path(key): Path<String>,
        state: Data<&Arc<AppState>>,
        auth: AdminCodeAuthorization,
    ) -> ProjectDeleteResponses {
        // Validate admin code
        match is_admin(&auth, &state.admin_code_hash) {
            Ok(true) => {}
            Ok(false) => {
                return ProjectDeleteResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(err) => {
                return ProjectDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "delete_project_api",
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
                return ProjectDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "delete_project_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_project_by_slug_or_id(&mut tx, &key).await {
            Ok(val) => val,
            Err(err) => {
                return ProjectDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.project",
                        "delete_project_api",
                        "get_project_by_slug_or_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(data) = data else {
            return ProjectDeleteResponses::NotFound(Json(NotFoundResponse {
                message: format!("project {} not found", key),
            }));
        };

        if let Err(err) = delete_project(&mut tx, &data).await {
            return ProjectDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.project",
                    "delete_project_api",
                    "delete_project",
                    &err.to_string(),
                ),
            ));
        }
        if let Err(err) = tx.commit().await {
            return ProjectDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.project",
                    "delete_project_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        ProjectDeleteResponses::NoContent
    }
}
