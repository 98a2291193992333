use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use env_helpers::get_env_default;

use crate::{infra::InfraError, use_cases::waitlist::ConfigSource};

/// Service settings read once at startup.
///
/// Waitlist store credentials are not part of this: they are resolved per
/// submission through [`EnvConfigSource`].
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Origin allowed to call `POST /api/waitlist` from a browser.
    pub cors_origin: HeaderValue,
    /// When set, JSON logs are written here in addition to the console.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)));

        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .map_err(|e: axum::http::header::InvalidHeaderValue| {
                    InfraError::ConfigInvalid {
                        var: "CORS_ORIGIN",
                        reason: e.to_string(),
                    }
                })?;

        let log_file = std::env::var("LOG_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            cors_origin,
            log_file,
        })
    }
}

/// Process environment, read at call time so credential changes apply to the
/// next submission.
#[derive(Default)]
pub struct EnvConfigSource;

impl ConfigSource for EnvConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
