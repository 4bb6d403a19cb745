use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

use crate::shared::error::{AppError, AppResult};

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub db_driver: String,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    /// Full connection string; takes precedence over the `DB_*` parts when set.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    pub database_connect_timeout: u64,
    pub database_idle_timeout: u64,
    pub server_host: String,
    pub server_port: u16,
    pub rust_log: String,
    pub app_env: String,
    pub jwt_secret: String,
    pub upload_dir: String,
    /// Phone number that registers as an admin account.
    pub admin_no_telp: Option<String>,
}

impl Config {
    pub fn init() -> AppResult<Self> {
        dotenv().ok();

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Dev runs on the in-memory store, so a throwaway secret is acceptable there.
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if app_env == "dev" => "dev_secret_change_me".to_string(),
            _ => {
                return Err(AppError::InternalServerError(
                    "JWT_SECRET must be set".to_string(),
                ));
            }
        };

        Ok(Self {
            db_driver: env::var("DB_DRIVER").unwrap_or_else(|_| "postgres".to_string()),
            db_user: env::var("DB_USER").unwrap_or_default(),
            db_password: env::var("DB_PASSWORD").unwrap_or_default(),
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            db_port: parse_var("DB_PORT", "5432")?,
            db_name: env::var("DB_NAME").unwrap_or_default(),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", "100")?,
            database_min_connections: parse_var("DATABASE_MIN_CONNECTIONS", "5")?,
            database_connect_timeout: parse_var("DATABASE_CONNECT_TIMEOUT", "8")?,
            database_idle_timeout: parse_var("DATABASE_IDLE_TIMEOUT", "8")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: parse_var("SERVER_PORT", "3000")?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            app_env,
            jwt_secret,
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "./public/uploads".to_string()),
            admin_no_telp: env::var("ADMIN_NO_TELP").ok().filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn is_dev(&self) -> bool {
        self.app_env == "dev"
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }
        format!(
            "{}://{}:{}@{}:{}/{}",
            self.db_driver, self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: &str) -> AppResult<T> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<T>()
        .map_err(|_| AppError::InternalServerError(format!("{} must be a valid number", key)))
}

#[cfg(test)]
impl Config {
    pub fn for_tests(upload_dir: &str) -> Self {
        Self {
            db_driver: "postgres".to_string(),
            db_user: "".to_string(),
            db_password: "".to_string(),
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_name: "".to_string(),
            database_url: None,
            database_max_connections: 100,
            database_min_connections: 5,
            database_connect_timeout: 8,
            database_idle_timeout: 8,
            server_host: "localhost".to_string(),
            server_port: 3000,
            rust_log: "info".to_string(),
            app_env: "test".to_string(),
            jwt_secret: "test_secret".to_string(),
            upload_dir: upload_dir.to_string(),
            admin_no_telp: None,
        }
    }
}
