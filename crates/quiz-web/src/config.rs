//! Server configuration read from the environment.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_SESSION_TTL_SECS: i64 = 4 * 60 * 60;

/// Runtime configuration for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `PostgreSQL` connection string (`DATABASE_URL`, required).
    pub database_url: String,
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`).
    pub max_connections: u32,
    /// Idle lifetime of a browser session (`SESSION_TTL_SECS`).
    pub session_ttl: TimeDelta,
    /// Insert the default quizzes into an empty catalog at startup
    /// (`SEED_QUIZZES`).
    pub seed_quizzes: bool,
    /// OTLP collector endpoint; span export is off when unset
    /// (`OTEL_EXPORTER_OTLP_ENDPOINT`).
    pub otlp_endpoint: Option<String>,
    /// Fixed seed for random play picks (`RANDOM_SEED`); seeded from the OS
    /// when unset.
    pub random_seed: Option<u64>,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `DATABASE_URL` is missing or any value
    /// fails to parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps variable names to
    /// values.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `DATABASE_URL` is missing or any value
    /// fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| {
            AppError::Config("DATABASE_URL environment variable must be set".to_owned())
        })?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let max_connections =
            parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let ttl_secs = parse_var(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;
        let session_ttl = TimeDelta::try_seconds(ttl_secs)
            .filter(|ttl| *ttl > TimeDelta::zero())
            .ok_or_else(|| {
                AppError::Config(format!("SESSION_TTL_SECS must be positive, got {ttl_secs}"))
            })?;
        let seed_quizzes = match lookup("SEED_QUIZZES") {
            Some(raw) => parse_flag("SEED_QUIZZES", &raw)?,
            None => false,
        };
        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty());
        let random_seed = match lookup("RANDOM_SEED") {
            Some(_) => Some(parse_var(&lookup, "RANDOM_SEED", 0_u64)?),
            None => None,
        };

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            session_ttl,
            seed_quizzes,
            otlp_endpoint,
            random_seed,
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key} is invalid: {e}"))),
        None => Ok(default),
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::Config(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}
