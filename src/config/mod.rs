use serde::Deserialize;
use std::env;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub service_name: String,
    pub log_level: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub seed: SeedConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Process-wide signing secret. Never compiled in; required in prod.
    pub secret: String,
    pub token_expiry_hours: i64,
}

/// Credentials for the bootstrap administrator account.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let env_str = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let environment: Environment = env_str
            .parse()
            .map_err(|e: String| AppError::Config(e))?;

        let is_prod = environment == Environment::Prod;

        let config = AppConfig {
            environment,
            service_name: get_env("SERVICE_NAME", Some("employee-service"), is_prod)?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            port: get_env("PORT", Some("5000"), is_prod)?
                .parse()
                .map_err(|e: std::num::ParseIntError| AppError::Config(e.to_string()))?,
            database: DatabaseConfig {
                url: get_env("DATABASE_URL", Some("sqlite://employee.db"), is_prod)?,
                max_connections: get_env("DATABASE_MAX_CONNECTIONS", Some("5"), is_prod)?
                    .parse()
                    .unwrap_or(5),
            },
            jwt: JwtConfig {
                secret: get_env("JWT_SECRET", Some("dev-signing-secret-change-me"), is_prod)?,
                token_expiry_hours: get_env("JWT_TOKEN_EXPIRY_HOURS", Some("24"), is_prod)?
                    .parse()
                    .unwrap_or(24),
            },
            seed: SeedConfig {
                admin_username: get_env("ADMIN_USERNAME", Some("Admin"), is_prod)?,
                admin_email: get_env("ADMIN_EMAIL", Some("admin@example.com"), is_prod)?,
                admin_password: get_env("ADMIN_PASSWORD", Some("Admin1234"), is_prod)?,
            },
            security: SecurityConfig {
                allowed_origins: get_env("ALLOWED_ORIGINS", Some("*"), is_prod)?
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.port == 0 {
            return Err(AppError::Config("PORT must be greater than 0".to_string()));
        }

        if self.jwt.token_expiry_hours <= 0 {
            return Err(AppError::Config(
                "JWT_TOKEN_EXPIRY_HOURS must be positive".to_string(),
            ));
        }

        if self.environment == Environment::Prod && self.jwt.secret.len() < 32 {
            return Err(AppError::Config(
                "JWT_SECRET must be at least 32 characters in production".to_string(),
            ));
        }

        if self.seed.admin_password.is_empty() {
            return Err(AppError::Config(
                "ADMIN_PASSWORD must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::Config(format!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::Config(format!("{} is required but not set", key)))
            }
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}
