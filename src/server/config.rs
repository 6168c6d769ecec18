//! Environment-based application configuration.
//!
//! `Config` is loaded once at startup and shared through `AppState`. Optional
//! settings fall back to development-friendly defaults.

use std::{net::SocketAddr, str::FromStr};

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: ([u8; 4], u16) = ([0, 0, 0, 0], 8000);
const DEFAULT_ACCESS_TOKEN_LIFETIME_MINUTES: i64 = 24 * 60;
const DEFAULT_CONFIRMATION_CODE_TIMEOUT_SECONDS: i64 = 3 * 24 * 60 * 60;
const DEFAULT_PAGE_SIZE: u64 = 10;
const DEFAULT_EMAIL_HOST: &str = "localhost";
const DEFAULT_EMAIL_PORT: u16 = 25;
const DEFAULT_EMAIL_FROM: &str = "noreply@yamdb.local";

/// Where outgoing mail goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBackend {
    /// Messages are written to the log instead of being sent.
    Console,
    /// Messages are relayed through the configured SMTP server.
    Smtp,
}

impl FromStr for EmailBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "smtp" => Ok(Self::Smtp),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub backend: EmailBackend,
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender address of confirmation letters.
    pub from_address: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Key for signing access tokens and confirmation codes.
    pub secret_key: String,
    pub access_token_lifetime: Duration,
    pub confirmation_code_timeout: Duration,

    /// Page size for every paginated list.
    pub page_size: u64,

    pub email: EmailConfig,

    /// Bootstrap admin created at startup when no admin exists yet.
    pub admin_username: Option<String>,
    pub admin_email: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: parsed_or("BIND_ADDRESS", || DEFAULT_BIND_ADDRESS.into())?,
            secret_key: required("SECRET_KEY")?,
            access_token_lifetime: Duration::minutes(parsed_or(
                "ACCESS_TOKEN_LIFETIME_MINUTES",
                || DEFAULT_ACCESS_TOKEN_LIFETIME_MINUTES,
            )?),
            confirmation_code_timeout: Duration::seconds(parsed_or(
                "CONFIRMATION_CODE_TIMEOUT_SECONDS",
                || DEFAULT_CONFIRMATION_CODE_TIMEOUT_SECONDS,
            )?),
            page_size: parsed_or("PAGE_SIZE", || DEFAULT_PAGE_SIZE)?.max(1),
            email: EmailConfig {
                backend: parsed_or("EMAIL_BACKEND", || EmailBackend::Console)?,
                host: optional("EMAIL_HOST").unwrap_or_else(|| DEFAULT_EMAIL_HOST.to_string()),
                port: parsed_or("EMAIL_PORT", || DEFAULT_EMAIL_PORT)?,
                username: optional("EMAIL_HOST_USER"),
                password: optional("EMAIL_HOST_PASSWORD"),
                from_address: optional("EMAIL_FOR_AUTH_LETTERS")
                    .unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
            },
            admin_username: optional("ADMIN_USERNAME"),
            admin_email: optional("ADMIN_EMAIL"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed_or<T: FromStr>(name: &str, default: impl FnOnce() -> T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default()),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for tests: in-memory database, console mail, fixed secret.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_address: ([127, 0, 0, 1], 0).into(),
            secret_key: "test-secret-key".to_string(),
            access_token_lifetime: Duration::minutes(DEFAULT_ACCESS_TOKEN_LIFETIME_MINUTES),
            confirmation_code_timeout: Duration::seconds(
                DEFAULT_CONFIRMATION_CODE_TIMEOUT_SECONDS,
            ),
            page_size: DEFAULT_PAGE_SIZE,
            email: EmailConfig {
                backend: EmailBackend::Console,
                host: DEFAULT_EMAIL_HOST.to_string(),
                port: DEFAULT_EMAIL_PORT,
                username: None,
                password: None,
                from_address: DEFAULT_EMAIL_FROM.to_string(),
            },
            admin_username: None,
            admin_email: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_email_backend_case_insensitively() {
        assert_eq!("SMTP".parse::<EmailBackend>(), Ok(EmailBackend::Smtp));
        assert_eq!("console".parse::<EmailBackend>(), Ok(EmailBackend::Console));
        assert!("carrier-pigeon".parse::<EmailBackend>().is_err());
    }
}
