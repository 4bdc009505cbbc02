use std::env;

use anyhow::bail;
use serde::Deserialize;
use tracing::info;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_env")]
    pub env: String, // file / server
    pub host: String,
    pub port: u16,
    pub prefix: Option<String>,
    pub database_url: String,
    pub admin_code: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
}

fn default_env() -> String {
    "file".to_string()
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_db_max_connections() -> u32 {
    20
}

/// The admin gate expects exactly four ASCII digits.
pub fn is_valid_admin_code(code: &str) -> bool {
    code.len() == 4 && code.chars().all(|c| c.is_ascii_digit())
}

pub fn get_config() -> anyhow::Result<Config> {
    let env_var = env::var("ENV").unwrap_or("file".to_string());
    if env_var == "file" {
        info!("using .env file as environment variable");
        let _ = dotenvy::dotenv();
    } else {
        info!("using server environment as environment variable");
    }
    let config = envy::from_env::<Config>()?;
    if !is_valid_admin_code(&config.admin_code) {
        bail!("ADMIN_CODE must be exactly 4 digits");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::is_valid_admin_code;

    #[test]
    fn test_admin_code_shape() {
        assert!(is_valid_admin_code("0420"));
        assert!(!is_valid_admin_code("042"));
        assert!(!is_valid_admin_code("04200"));
        assert!(!is_valid_admin_code("04a0"));
        assert!(!is_valid_admin_code(""));
    }
}
