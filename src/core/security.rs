use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use poem::Request;
use poem_openapi::{auth::ApiKey, SecurityScheme};
use serde::{Deserialize, Serialize};

use crate::settings::is_valid_admin_code;

/// admin code hashing
pub fn hash_admin_code(code: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    // Argon2 with default params (Argon2id v19)
    let argon2 = Argon2::default();

    // Hash code to PHC string ($argon2id$v=19$...)
    let code_hash = argon2.hash_password(code.as_bytes(), &salt)?.to_string();

    Ok(code_hash)
}

/// admin code hash verification
pub fn verify_admin_code(
    candidate: &str,
    code_hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(code_hash)?;
    let verify = Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(verify)
}

/// Compare a candidate against the server-held admin code.
///
/// Any candidate that is not four digits is rejected without touching the
/// hash. There is no lockout and no session: every call stands alone.
pub fn check_code(candidate: &str, code_hash: &str) -> anyhow::Result<bool> {
    if !is_valid_admin_code(candidate) {
        return Ok(false);
    }
    verify_admin_code(candidate, code_hash).map_err(|err| anyhow::anyhow!(err.to_string()))
}

/// Gate shared by every admin route.
pub fn is_admin(auth: &AdminCodeAuthorization, code_hash: &str) -> anyhow::Result<bool> {
    check_code(&auth.0.code, code_hash)
}


#[derive(Debug, Serialize, Deserialize)]
pub struct AdminCode {
    pub code: String,
}

/// Admin gate, the operator sends the 4-digit code on every admin request
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Admin-Code",
    key_in = "header",
    checker = "admin_code_checker"
)]
pub struct AdminCodeAuthorization(pub AdminCode);

pub async fn admin_code_checker(_req: &Request, api_key: ApiKey) -> Option<AdminCode> {
    Some(AdminCode { code: api_key.key })
}
