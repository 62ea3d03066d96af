use std::net::IpAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use roomcraft_gemini::api::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Default JSON body ceiling: 50 MiB, enough for a full-resolution photo
/// embedded as base64.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Allowed CORS origins.
#[derive(Debug, Clone)]
pub enum CorsOrigins {
    /// Any origin, without credentials.
    Any,
    /// An explicit allow-list, with credentials.
    List(Vec<HeaderValue>),
}

/// Settings for the Gemini generation service.
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// `None` when `GEMINI_API_KEY` is unset or empty.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    pub cors_origins: CorsOrigins,
    /// Maximum accepted request body in bytes.
    pub body_limit_bytes: usize,
    /// Serve the bundled frontend (only when `APP_ENV=production`).
    pub serve_frontend: bool,
    pub frontend_dir: PathBuf,
    pub database_url: String,
    pub gemini: GeminiSettings,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var            | Default                                   |
    /// |--------------------|-------------------------------------------|
    /// | `HOST`             | `0.0.0.0`                                 |
    /// | `PORT`             | `5000`                                    |
    /// | `CORS_ORIGINS`     | `*`                                       |
    /// | `BODY_LIMIT_BYTES` | `52428800`                                |
    /// | `APP_ENV`          | `development`                             |
    /// | `FRONTEND_DIR`     | `../frontend/build`                       |
    /// | `DATABASE_URL`     | `postgres://localhost:5432/roomcraft`     |
    /// | `GEMINI_API_KEY`   | unset                                     |
    /// | `GEMINI_MODEL`     | `gemini-2.0-flash-exp-image-generation`   |
    /// | `GEMINI_API_BASE`  | `https://generativelanguage.googleapis.com` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let host: IpAddr = host.parse().map_err(|_| ConfigError::Invalid {
            name: "HOST",
            expected: "an IP address",
            value: host,
        })?;

        let port = var("PORT", "5000");
        let port: u16 = port.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            expected: "a valid u16",
            value: port,
        })?;

        let cors_origins = parse_cors_origins(&var("CORS_ORIGINS", "*"))?;

        let body_limit = var("BODY_LIMIT_BYTES", &DEFAULT_BODY_LIMIT_BYTES.to_string());
        let body_limit_bytes: usize = body_limit.parse().map_err(|_| ConfigError::Invalid {
            name: "BODY_LIMIT_BYTES",
            expected: "a byte count",
            value: body_limit,
        })?;

        let api_key = get("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            host,
            port,
            cors_origins,
            body_limit_bytes,
            serve_frontend: var("APP_ENV", "development") == "production",
            frontend_dir: PathBuf::from(var("FRONTEND_DIR", "../frontend/build")),
            database_url: var("DATABASE_URL", "postgres://localhost:5432/roomcraft"),
            gemini: GeminiSettings {
                api_key,
                model: var("GEMINI_MODEL", DEFAULT_MODEL),
                api_base: var("GEMINI_API_BASE", DEFAULT_API_BASE),
            },
        })
    }
}

/// Parse a comma-separated origin list. A `*` entry allows any origin.
fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                name: "CORS_ORIGINS",
                expected: "a comma-separated list of origins",
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
