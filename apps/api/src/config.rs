use anyhow::{bail, Context, Result};

use crate::auth::providers::{OAuthCredentials, ProviderKind};

/// Bounds for `SESSION_TTL_HOURS`: one hour up to one year.
const SESSION_TTL_RANGE: std::ops::RangeInclusive<i64> = 1..=8760;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub session_secret: String,
    pub session_ttl_hours: i64,
    /// Raw credentials for every provider that has both halves set.
    pub oauth: Vec<(ProviderKind, OAuthCredentials)>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let oauth = ProviderKind::ALL
            .iter()
            .filter_map(|kind| {
                let client_id = optional_env(&format!("{}_CLIENT_ID", kind.env_prefix()))?;
                let client_secret =
                    optional_env(&format!("{}_CLIENT_SECRET", kind.env_prefix()))?;
                Some((
                    *kind,
                    OAuthCredentials {
                        client_id,
                        client_secret,
                    },
                ))
            })
            .collect();

        Ok(Config {
            session_secret: require_env("SESSION_SECRET")?,
            session_ttl_hours: parse_ttl_hours(
                &std::env::var("SESSION_TTL_HOURS").unwrap_or_else(|_| "24".to_string()),
            )?,
            oauth,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_ttl_hours(raw: &str) -> Result<i64> {
    let hours = raw
        .trim()
        .parse::<i64>()
        .context("SESSION_TTL_HOURS must be a whole number of hours")?;
    if !SESSION_TTL_RANGE.contains(&hours) {
        bail!(
            "SESSION_TTL_HOURS must be between {} and {}, got {hours}",
            SESSION_TTL_RANGE.start(),
            SESSION_TTL_RANGE.end()
        );
    }
    Ok(hours)
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Empty values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        session_secret: "test-session-secret".to_string(),
        session_ttl_hours: 24,
        oauth: vec![(
            ProviderKind::Github,
            OAuthCredentials {
                client_id: "gh-client".to_string(),
                client_secret: "gh-secret".to_string(),
            },
        )],
        port: 0,
        rust_log: "debug".to_string(),
    }
}
