use std::sync::Arc;

use fake::{Fake, Faker};
use sqlx::PgPool;

use super::security::hash_admin_code;
use crate::{settings::Config, AppState};

/// Admin code every route test authenticates with.
pub const TEST_ADMIN_CODE: &str = "4821";

pub fn generate_random<T: fake::Dummy<fake::Faker>>() -> T {
    Faker.fake()
}

/// Config for in-process tests, routes mounted under `/api`.
pub fn generate_test_config() -> Config {
    Config {
        env: "server".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8000,
        prefix: Some("/api".to_string()),
        database_url: String::new(),
        admin_code: TEST_ADMIN_CODE.to_string(),
        log_dir: "./logs".to_string(),
        log_level: "debug".to_string(),
        db_max_connections: 5,
    }
}

pub fn generate_test_app_state(pool: PgPool) -> anyhow::Result<Arc<AppState>> {
    let admin_code_hash =
        hash_admin_code(TEST_ADMIN_CODE).map_err(|err| anyhow::anyhow!(err.to_string()))?;
    Ok(Arc::new(AppState {
        db: pool,
        admin_code_hash,
    }))
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::core::{
        security::check_code,
        test_utils::{generate_test_app_state, generate_test_config, TEST_ADMIN_CODE},
    };

    #[sqlx::test]
    async fn test_generate_test_app_state(pool: PgPool) -> anyhow::Result<()> {
        // When
        let app_state = generate_test_app_state(pool)?;
        let config = generate_test_config();

        // Expect
        assert!(check_code(TEST_ADMIN_CODE, &app_state.admin_code_hash)?);
        assert!(!check_code("0000", &app_state.admin_code_hash)?);
        assert_eq!(config.admin_code, TEST_ADMIN_CODE);
        let one: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&app_state.db).await?;
        assert_eq!(one.0, 1);
        Ok(())
    }
}
