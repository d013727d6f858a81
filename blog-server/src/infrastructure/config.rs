use anyhow::{Context, Result};
use std::str::FromStr;
use std::time::Duration;

/// Runtime settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub http_port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub seed_sample_posts: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            db_host: text("DB_HOST", "localhost"),
            db_port: parsed(&lookup, "DB_PORT", 5432)?,
            db_name: text("DB_NAME", "blogdb"),
            db_user: text("DB_USER", "bloguser"),
            db_password: text("DB_PASSWORD", "blogpass123"),
            http_port: parsed(&lookup, "PORT", 5000)?,
            max_connections: parsed(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(parsed(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                5,
            )?),
            seed_sample_posts: parsed(&lookup, "SEED_SAMPLE_POSTS", true)?,
        })
    }

    pub fn http_addr(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
