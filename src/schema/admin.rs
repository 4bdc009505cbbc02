use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::InternalServerErrorResponse;

#[derive(Object, Deserialize, Serialize)]
pub struct CheckCodeRequest {
    pub code: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct CheckCodeResponse {
    pub valid: bool,
}

#[derive(ApiResponse)]
pub enum CheckCodeResponses {
    #[oai(status = 200)]
    Ok(Json<CheckCodeResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
