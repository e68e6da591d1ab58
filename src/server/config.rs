use std::{net::SocketAddr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

pub struct Config {
    pub database_url: String,
    /// Base URL of the external auth service
    pub auth_service_url: String,

    pub server_address: SocketAddr,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a local `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let server_address = lookup("SERVER_ADDRESS")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let server_address = server_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "SERVER_ADDRESS".to_string(),
                value: server_address.clone(),
            })?;

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "REQUEST_TIMEOUT_SECS".to_string(),
                    value,
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            auth_service_url: required("AUTH_SERVICE_URL")?,
            server_address,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}
