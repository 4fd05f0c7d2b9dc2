use std::sync::Arc;

use crate::config::Config;
use crate::fallback::FallbackProvider;
use crate::generation::source::TrainingGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Backs `/plans`, `/kits` and `/generate`. Chosen at startup from GENERATION_MODE.
    pub generator: Arc<dyn TrainingGenerator>,
    /// Backs the explicit `/fallback` endpoints regardless of generation mode.
    pub fallback: Arc<FallbackProvider>,
}
