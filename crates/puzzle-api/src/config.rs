//! Server configuration read from the environment.

use axum::http::HeaderValue;
use puzzle_gallery::domain::upload::{DEFAULT_MAX_UPLOAD_IMAGES, UploadLimits};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::error::AppError;

/// Origins of the local front-end dev servers.
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Default request body cap; uploads carry encoded images inline.
pub const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Piece images accepted per upload (`MAX_UPLOAD_IMAGES`).
    pub max_upload_images: usize,
    /// Request body cap in bytes (`MAX_BODY_BYTES`).
    pub max_body_bytes: usize,
    /// Origins allowed by CORS (`ALLOWED_ORIGINS`, comma separated).
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, applying defaults for absent
    /// keys.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000_u16)?;
        let max_upload_images = parse_or(&lookup, "MAX_UPLOAD_IMAGES", DEFAULT_MAX_UPLOAD_IMAGES)?;
        let max_body_bytes = parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(Self {
            host,
            port,
            max_upload_images,
            max_body_bytes,
            allowed_origins,
        })
    }

    /// Upload bounds derived from this configuration.
    #[must_use]
    pub fn upload_limits(&self) -> UploadLimits {
        UploadLimits {
            max_images: self.max_upload_images,
        }
    }

    /// CORS layer admitting the configured origins.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if an origin is not a valid header value.
    pub fn cors_layer(&self) -> Result<CorsLayer, AppError> {
        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|e| {
                    AppError::Config(format!("ALLOWED_ORIGINS entry {origin:?} is invalid: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any))
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key} must be a valid number: {e}"))),
    }
}
