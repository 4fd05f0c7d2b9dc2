//! Hand-authored kits keyed by exact (industry, topic).
//!
//! The shipped library is a JSON asset compiled into the binary; an operator
//! can replace it with `FALLBACK_LIBRARY_PATH`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::models::GeneratedKit;

const EMBEDDED_LIBRARY: &str = include_str!("../../data/fallback_library.json");

#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("failed to read fallback library {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("fallback library is not valid: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("fallback library entry {industry}/{topic} is not renderable: {reason}")]
    Unrenderable {
        industry: String,
        topic: String,
        reason: String,
    },
}

/// Industries and the topics each one has a hand-authored kit for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub industry: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FallbackLibrary {
    kits: BTreeMap<String, BTreeMap<String, GeneratedKit>>,
}

impl FallbackLibrary {
    pub fn embedded() -> Result<Self, FallbackError> {
        Self::from_json(EMBEDDED_LIBRARY)
    }

    pub fn from_path(path: &Path) -> Result<Self, FallbackError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FallbackError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let library = Self::from_json(&raw)?;
        info!(
            "Loaded fallback library from {} ({} kits)",
            path.display(),
            library.len()
        );
        Ok(library)
    }

    pub fn from_json(raw: &str) -> Result<Self, FallbackError> {
        let kits: BTreeMap<String, BTreeMap<String, GeneratedKit>> = serde_json::from_str(raw)?;

        // An empty slide deck in the table would break the "always renderable" guarantee.
        for (industry, topics) in &kits {
            for (topic, kit) in topics {
                kit.validate_shape()
                    .map_err(|e| FallbackError::Unrenderable {
                        industry: industry.clone(),
                        topic: topic.clone(),
                        reason: e.to_string(),
                    })?;
            }
        }

        Ok(Self { kits })
    }

    /// Exact, case-sensitive two-level lookup.
    pub fn lookup(&self, industry: &str, topic: &str) -> Option<&GeneratedKit> {
        self.kits.get(industry)?.get(topic)
    }

    pub fn len(&self) -> usize {
        self.kits.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn catalog(&self) -> Vec<CatalogEntry> {
        self.kits
            .iter()
            .map(|(industry, topics)| CatalogEntry {
                industry: industry.clone(),
                topics: topics.keys().cloned().collect(),
            })
            .collect()
    }
}
