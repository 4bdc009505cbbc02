use poem_openapi::{types::MaybeUndefined, Object};
use serde::{Deserialize, Serialize};

#[derive(Object, Deserialize, Serialize, Debug)]
pub struct BadRequestResponse {
    pub message: String,
}

#[derive(Object, Deserialize, Serialize, Debug)]
pub struct NotFoundResponse {
    pub message: String,
}

#[derive(Object, Deserialize, Serialize, Debug)]
pub struct UnauthorizedResponse {
    pub message: String,
}

impl Default for UnauthorizedResponse {
    fn default() -> Self {
        Self {
            message: "invalid admin code".to_string(),
        }
    }
}

#[derive(Object, Deserialize, Serialize, Debug)]
pub struct InternalServerErrorResponse {
    pub message: String,
}

impl InternalServerErrorResponse {
    /// Logs the failing step and hides the detail behind a generic message.
    pub fn new(module: &str, function: &str, step: &str, err: &str) -> Self {
        tracing::error!(module, function, step, err, "request failed");
        Self {
            message: format!("{} failed at {}", function, step),
        }
    }
}

/// Apply a partial-update field: absent keeps, `null` clears, a value replaces.
pub fn merge_nullable<T>(value: MaybeUndefined<T>, target: &mut Option<T>) {
    merge_nullable_with(value, target, |x| x)
}

pub fn merge_nullable_with<T, U>(
    value: MaybeUndefined<T>,
    target: &mut Option<U>,
    f: impl FnOnce(T) -> U,
) {
    match value {
        MaybeUndefined::Undefined => {}
        MaybeUndefined::Null => *target = None,
        MaybeUndefined::Value(val) => *target = Some(f(val)),
    }
}
