//! Training generator: pluggable backend behind the plan and kit endpoints.
//!
//! `LiveGenerator` calls the completion endpoint; `FallbackGenerator` serves
//! canned content and never fails. `AppState` holds an `Arc<dyn TrainingGenerator>`
//! chosen at startup from `GENERATION_MODE`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::fallback::FallbackProvider;
use crate::generation::kit::{generate_kit, KitRequest};
use crate::generation::plan::{generate_plan, PlanRequest};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::{GeneratedKit, TrainingPlan};

/// Industry assumed for fallback kits when the caller sends no hint.
pub const DEFAULT_FALLBACK_INDUSTRY: &str = "General";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait TrainingGenerator: Send + Sync {
    /// Short backend name reported by `/health` ("live" | "fallback").
    fn name(&self) -> &'static str;

    async fn generate_plan(&self, request: &PlanRequest) -> Result<TrainingPlan, LlmError>;

    async fn generate_kit(&self, request: &KitRequest) -> Result<GeneratedKit, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LiveGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct LiveGenerator {
    llm: LlmClient,
}

impl LiveGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TrainingGenerator for LiveGenerator {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn generate_plan(&self, request: &PlanRequest) -> Result<TrainingPlan, LlmError> {
        generate_plan(&self.llm, request).await
    }

    async fn generate_kit(&self, request: &KitRequest) -> Result<GeneratedKit, LlmError> {
        generate_kit(&self.llm, &request.plan).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct FallbackGenerator {
    provider: Arc<FallbackProvider>,
}

impl FallbackGenerator {
    pub fn new(provider: Arc<FallbackProvider>) -> Self {
        Self { provider }
    }
}

fn hint_or<'a>(hint: Option<&'a str>, default: &'a str) -> &'a str {
    hint.map(str::trim)
        .filter(|h| !h.is_empty())
        .unwrap_or(default)
}

#[async_trait]
impl TrainingGenerator for FallbackGenerator {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn generate_plan(&self, request: &PlanRequest) -> Result<TrainingPlan, LlmError> {
        Ok(self
            .provider
            .fallback_plan(request.industry.trim(), request.topic.trim()))
    }

    async fn generate_kit(&self, request: &KitRequest) -> Result<GeneratedKit, LlmError> {
        let industry = hint_or(request.industry.as_deref(), DEFAULT_FALLBACK_INDUSTRY);
        let topic = hint_or(request.topic.as_deref(), request.plan.title.trim());
        Ok(self.provider.fallback_kit(industry, topic))
    }
}
