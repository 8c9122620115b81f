//! API configuration.

use std::env;

use common::ServiceConfig;

/// Service name reported in logs
pub const SERVICE_NAME: &str = "person-api";

/// Default server host address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: u16 = 3000;

/// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default request body cap, which bounds image uploads (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// API configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Service identity and bind address
    pub service: ServiceConfig,
    /// Largest accepted request body in bytes
    pub max_upload_bytes: usize,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                host: env::var("API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
                log_level: DEFAULT_LOG_FILTER.to_string(),
            },
            max_upload_bytes: env::var("API_MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    /// Override the bind address (from CLI flags).
    pub fn with_addr(mut self, host: impl Into<String>, port: u16) -> Self {
        self.service.host = host.into();
        self.service.port = port;
        self
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        self.service.bind_addr()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                log_level: DEFAULT_LOG_FILTER.to_string(),
            },
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
