use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{payload::Json, OpenApi, Tags};
use tracing::info;

use crate::{
    core::security::check_code,
    schema::{
        admin::{CheckCodeRequest, CheckCodeResponse, CheckCodeResponses},
        common::InternalServerErrorResponse,
    },
    AppState,
};

#[derive(Tags)]
enum ApiAdminTags {
    Admin,
}

pub struct ApiAdmin;

#[OpenApi]
impl ApiAdmin {
    #[oai(path = "/admin/check-code", method = "post", tag = "ApiAdminTags::Admin")]
    async fn check_code_api(
        &self,
        Json(json): Json<CheckCodeRequest>,
        state: Data<&Arc<AppState>>,
    ) -> CheckCodeResponses {
        let valid = match check_code(&json.code, &state.admin_code_hash) {
            Ok(val) => val,
            Err(err) => {
                return CheckCodeResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.admin",
                        "check_code_api",
                        "check_code",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if !valid {
            info!("admin code rejected");
        }
        CheckCodeResponses::Ok(Json(CheckCodeResponse { valid }))
    }
}
