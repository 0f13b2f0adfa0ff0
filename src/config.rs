// src/config.rs

use std::env;
use std::fmt;

use dotenvy::dotenv;
use url::Url;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret the hosted auth provider signs access tokens with.
    pub jwt_secret: String,
    /// Expected `aud` claim, if the provider sets one.
    pub jwt_audience: Option<String>,
    pub rust_log: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// Replaces the embedded career/subject tables when set.
    pub pathways_file: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, reason } => write!(f, "{} is invalid: {}", key, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let jwt_audience = env::var("JWT_AUDIENCE").ok().filter(|s| !s.is_empty());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            Err(_) => 3000,
        };

        let raw_origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());
        let cors_origins = parse_origins(&raw_origins)?;

        let pathways_file = env::var("PATHWAYS_FILE").ok().filter(|s| !s.is_empty());

        Ok(Self {
            jwt_secret,
            jwt_audience,
            rust_log,
            port,
            cors_origins,
            pathways_file,
        })
    }
}

/// Splits a comma separated origin list, rejecting anything that is not a URL.
pub fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            Url::parse(origin)
                .map(|_| origin.trim_end_matches('/').to_string())
                .map_err(|e| ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    reason: format!("{}: {}", origin, e),
                })
        })
        .collect()
}
