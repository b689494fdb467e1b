use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
    pub constants: AppConstants,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
    pub public_url: String,
    /// Which access policy guards every route.
    pub access_policy: AccessPolicyKind,
    /// Serve over https when both paths are given.
    #[serde(default)]
    pub tls: Option<TlsSettings>,
}

/// Access policies the server knows how to build.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessPolicyKind {
    /// Every request is allowed, no authentication and no CSRF verification.
    PermitAll,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TlsSettings {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    pub database_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConstants {
    pub database: DatabaseConstants,
    pub search: SearchConstants,
}

/// Database connection and related configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConstants {
    pub max_connections: u32,
    pub min_connection: u32,
    pub max_lifetime: u64,
    pub idle_timeout: u64,
    pub acquire_timeout: u64,
    /// Apply the migrations folder on startup.
    #[serde(default)]
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConstants {
    /// Number of records returned when the request has no `limit`.
    pub default_limit: i64,
    /// Upper bound for a requested `limit`.
    pub max_limit: i64,
    /// Keywords longer than this (in chars, after trimming) are rejected.
    pub max_keyword_length: usize,
}
