use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 4000;

/// Origins permitted to make cross-origin requests.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigins {
    /// Explicit `*` in configuration.
    Any,
    /// Reviewed allow-list; empty means no cross-origin access.
    List(Vec<HeaderValue>),
}

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub allowed_origins: AllowedOrigins,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok())?,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            allowed_origins: parse_allowed_origins(std::env::var("CORS_ALLOWED_ORIGINS").ok())?,
        })
    }
}

/// Parses the listening port, falling back to 4000 when unset.
fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

/// Parses a comma separated origin allow-list.
///
/// Blank entries are skipped. A lone `*` opts in to allowing every origin.
fn parse_allowed_origins(value: Option<String>) -> Result<AllowedOrigins, ConfigError> {
    let Some(raw) = value else {
        return Ok(AllowedOrigins::List(Vec::new()));
    };

    if raw.trim() == "*" {
        return Ok(AllowedOrigins::Any);
    }

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    value: raw.clone(),
                    reason: "'*' cannot be combined with other origins".to_string(),
                });
            }
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AllowedOrigins::List(origins))
}
