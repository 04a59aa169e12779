use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::ats::scorer::ScoringMode;
use crate::ats::validity::{DEFAULT_VALIDITY_THRESHOLD, STRICT_VALIDITY_THRESHOLD};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults match the built-in catalog.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Overrides the catalog's scoring mode when set.
    pub scoring_mode: Option<ScoringMode>,
    /// A number, or `strict` for the editor upload preset.
    pub validity_threshold: f64,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            scoring_mode: None,
            validity_threshold: DEFAULT_VALIDITY_THRESHOLD,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            scoring_mode: lookup("ATS_SCORING_MODE")
                .map(|v| v.parse::<ScoringMode>().map_err(|e| anyhow!(e)))
                .transpose()
                .context("ATS_SCORING_MODE must be 'weighted-bonus' or 'format-floor-requirement'")?,
            validity_threshold: match lookup("ATS_VALIDITY_THRESHOLD") {
                Some(v) if v.trim().eq_ignore_ascii_case("strict") => STRICT_VALIDITY_THRESHOLD,
                Some(v) => v
                    .parse::<f64>()
                    .context("ATS_VALIDITY_THRESHOLD must be a number")?,
                None => defaults.validity_threshold,
            },
            catalog_path: lookup("ATS_CATALOG_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
