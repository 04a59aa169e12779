//! Static scoring configuration: lexicon, job profiles, and scoring constants.
//!
//! Loaded once at startup. An optional JSON file extends the built-ins:
//!
//! ```json
//! {
//!   "lexicon": { "rust": ["rustlang", "cargo"] },
//!   "profiles": [{ "id": "rust", "title": "Rust Developer", "must_have": ["rust"] }],
//!   "scoring": { "variant_bonus": 3.0 }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::ats::lexicon::Lexicon;
use crate::ats::profiles::{JobProfile, ProfileCatalog};
use crate::ats::scorer::{Scorer, ScoringConfig};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    lexicon: HashMap<String, Vec<String>>,
    #[serde(default)]
    profiles: Vec<JobProfile>,
    #[serde(default)]
    scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub lexicon: Lexicon,
    pub profiles: ProfileCatalog,
    pub scoring: ScoringConfig,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
            profiles: ProfileCatalog::builtin(),
            scoring: ScoringConfig::default(),
        }
    }

    /// Built-ins, extended by the file at `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let mut catalog = Self::builtin();
        if let Some(path) = path {
            let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            catalog.extend_from_json(&raw)?;
            info!("Loaded catalog overrides from {}", path.display());
        }
        info!(
            "Catalog ready: {} profiles, {} lexicon entries",
            catalog.profiles.len(),
            catalog.lexicon.len()
        );
        Ok(catalog)
    }

    pub fn extend_from_json(&mut self, raw: &str) -> Result<(), CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;

        for profile in &file.profiles {
            if profile.id.trim().is_empty() {
                return Err(CatalogError::InvalidProfile(format!(
                    "profile '{}' has an empty id",
                    profile.title
                )));
            }
        }

        self.lexicon.merge(Lexicon::from_entries(file.lexicon));
        for profile in file.profiles {
            self.profiles.insert(profile);
        }
        if let Some(scoring) = file.scoring {
            self.scoring = scoring;
        }
        Ok(())
    }

    pub fn scorer(&self) -> Scorer<'_> {
        Scorer::new(&self.lexicon, self.scoring.clone())
    }
}
