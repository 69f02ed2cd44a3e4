use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Result count used when the form omits `num_results`.
    pub default_results: usize,
    /// Upper bound accepted for `num_results`.
    pub max_results: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            port: parse_or(&lookup, "PORT", 8080)
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            default_results: parse_or(&lookup, "DEFAULT_RESULTS", 5)
                .context("DEFAULT_RESULTS must be a non-negative integer")?,
            max_results: parse_or(&lookup, "MAX_RESULTS", 50)
                .context("MAX_RESULTS must be a non-negative integer")?,
        };

        if config.default_results > config.max_results {
            bail!(
                "DEFAULT_RESULTS ({}) cannot exceed MAX_RESULTS ({})",
                config.default_results,
                config.max_results
            );
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_results: 5,
            max_results: 50,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        None => Ok(default),
    }
}
