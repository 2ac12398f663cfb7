use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Origin allowed by CORS. Any origin is allowed when unset.
    pub cors_origin: Option<String>,

    /// Bootstrap admin, created at startup when no admin exists.
    pub admin_email: Option<String>,
    pub admin_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: Self::bind_address_from_env()?,
            cors_origin: optional_var("CORS_ORIGIN"),
            admin_email: optional_var("ADMIN_EMAIL"),
            admin_token: optional_var("ADMIN_TOKEN"),
        })
    }

    fn bind_address_from_env() -> Result<String, ConfigError> {
        let Some(value) = optional_var("BIND_ADDRESS") else {
            return Ok(DEFAULT_BIND_ADDRESS.to_string());
        };

        value
            .parse::<std::net::SocketAddr>()
            .map(|_| value.clone())
            .map_err(|_| ConfigError::InvalidValue {
                name: "BIND_ADDRESS".to_string(),
                value,
            })
    }
}

/// Reads an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
