//! Fallback Content Provider: canned plans and kits for when the live
//! generators are skipped or unavailable.
//!
//! Lookup order: exact (industry, topic) entry in the library, then the
//! themed generic template. Total over every input pair.

pub mod library;
pub mod template;
pub mod themes;

use tracing::debug;

use crate::models::{GeneratedKit, TrainingPlan};

pub use library::{CatalogEntry, FallbackError, FallbackLibrary};

#[derive(Debug, Clone)]
pub struct FallbackProvider {
    library: FallbackLibrary,
}

impl FallbackProvider {
    pub fn new(library: FallbackLibrary) -> Self {
        Self { library }
    }

    pub fn fallback_kit(&self, industry: &str, topic: &str) -> GeneratedKit {
        match self.library.lookup(industry, topic) {
            Some(kit) => {
                debug!("Fallback kit: library entry {industry}/{topic}");
                kit.clone()
            }
            None => {
                debug!("Fallback kit: generic template for {industry}/{topic}");
                template::template_kit(industry, topic)
            }
        }
    }

    pub fn fallback_plan(&self, industry: &str, topic: &str) -> TrainingPlan {
        template::template_plan(industry, topic)
    }

    pub fn catalog(&self) -> Vec<CatalogEntry> {
        self.library.catalog()
    }
}
