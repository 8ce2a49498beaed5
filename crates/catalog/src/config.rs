//! Loader configuration
//!
//! ```json
//! { "extension": "xml", "malformed": "skip", "duplicates": "keep_first" }
//! ```
//!
//! Every key is optional; unknown keys are rejected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// What to do with a catalogue file that cannot be parsed or built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Log a warning and continue with the remaining files
    #[default]
    Skip,
    /// Fail the whole load
    Abort,
}

/// What to do when two files declare systems with the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first system in load order, drop later ones with a warning
    #[default]
    KeepFirst,
    /// Fail the whole load
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// File extension of catalogue documents, without the dot
    pub extension: String,
    pub malformed: MalformedPolicy,
    pub duplicates: DuplicatePolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            extension: "xml".to_string(),
            malformed: MalformedPolicy::default(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl LoaderConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| CatalogError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}
