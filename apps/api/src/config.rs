use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::matching::skill_match::MatchMode;
use crate::session::store::DEFAULT_SESSION_TTL;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Artificial delay applied by the fixture providers before returning data.
    pub simulated_latency: Duration,
    pub skill_match_mode: MatchMode,
    /// Sessions untouched for this long are evicted.
    pub session_ttl: Duration,
    /// JSON file of internships to serve instead of the bundled fixtures.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            simulated_latency: Duration::from_millis(
                std::env::var("SIMULATED_LATENCY_MS")
                    .unwrap_or_else(|_| "0".to_string())
                    .parse::<u64>()
                    .context("SIMULATED_LATENCY_MS must be a whole number of milliseconds")?,
            ),
            skill_match_mode: std::env::var("SKILL_MATCH_MODE")
                .unwrap_or_else(|_| "substring".to_string())
                .parse::<MatchMode>()
                .map_err(|e| anyhow!("SKILL_MATCH_MODE must be 'substring' or 'exact': {e}"))?,
            session_ttl: Duration::from_secs(
                std::env::var("SESSION_TTL_SECS")
                    .unwrap_or_else(|_| "3600".to_string())
                    .parse::<u64>()
                    .context("SESSION_TTL_SECS must be a whole number of seconds")?,
            ),
            catalog_path: std::env::var_os("CATALOG_PATH").map(PathBuf::from),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            simulated_latency: Duration::ZERO,
            skill_match_mode: MatchMode::Substring,
            session_ttl: DEFAULT_SESSION_TTL,
            catalog_path: None,
        }
    }
}
