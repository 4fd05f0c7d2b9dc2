//! Axum route handlers for the Plan and Kit APIs.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::fallback::CatalogEntry;
use crate::generation::kit::KitRequest;
use crate::generation::plan::PlanRequest;
use crate::models::{GeneratedKit, TrainingPlan};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of the explicit fallback endpoints.
#[derive(Debug, Deserialize)]
pub struct FallbackRequest {
    pub industry: String,
    pub topic: String,
}

/// Single-endpoint form: `{"action": "plan", ...}` or `{"action": "kit", "plan": {...}}`.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum GenerateRequest {
    Plan(PlanRequest),
    Kit {
        plan: TrainingPlan,
        #[serde(default)]
        industry: Option<String>,
        #[serde(default)]
        topic: Option<String>,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Plan(TrainingPlan),
    Kit(GeneratedKit),
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn plan_with_generator(
    state: &AppState,
    request: PlanRequest,
) -> Result<TrainingPlan, AppError> {
    request.validate()?;

    let span = info_span!(
        "generate_plan",
        request_id = %Uuid::new_v4(),
        generator = state.generator.name(),
        industry = %request.industry.trim(),
        topic = %request.topic.trim(),
        from_document = request.document().is_some(),
    );

    async {
        let plan = state.generator.generate_plan(&request).await?;
        info!("Plan ready: {} modules", plan.modules.len());
        Ok::<_, AppError>(plan)
    }
    .instrument(span)
    .await
}

async fn kit_with_generator(state: &AppState, request: KitRequest) -> Result<GeneratedKit, AppError> {
    request.validate()?;

    let span = info_span!(
        "generate_kit",
        request_id = %Uuid::new_v4(),
        generator = state.generator.name(),
        plan = %request.plan.title,
    );

    async {
        let kit = state.generator.generate_kit(&request).await?;
        info!(
            "Kit ready: {} slides, {} flashcards",
            kit.slides.len(),
            kit.flashcards.len()
        );
        Ok::<_, AppError>(kit)
    }
    .instrument(span)
    .await
}

/// POST /api/v1/plans
///
/// Generates a training plan for an (industry, topic) pair, optionally from
/// uploaded document text.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<TrainingPlan>, AppError> {
    plan_with_generator(&state, request).await.map(Json)
}

/// POST /api/v1/kits
///
/// Expands a (possibly user-edited) plan into slides, flashcards, handout and
/// facilitator guide.
pub async fn handle_generate_kit(
    State(state): State<AppState>,
    Json(request): Json<KitRequest>,
) -> Result<Json<GeneratedKit>, AppError> {
    kit_with_generator(&state, request).await.map(Json)
}

/// POST /api/v1/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let response = match request {
        GenerateRequest::Plan(request) => {
            GenerateResponse::Plan(plan_with_generator(&state, request).await?)
        }
        GenerateRequest::Kit {
            plan,
            industry,
            topic,
        } => {
            let request = KitRequest {
                plan,
                industry,
                topic,
            };
            GenerateResponse::Kit(kit_with_generator(&state, request).await?)
        }
    };
    Ok(Json(response))
}

/// POST /api/v1/plans/fallback
///
/// Canned plan; never calls the model.
pub async fn handle_fallback_plan(
    State(state): State<AppState>,
    Json(request): Json<FallbackRequest>,
) -> Json<TrainingPlan> {
    Json(
        state
            .fallback
            .fallback_plan(request.industry.trim(), request.topic.trim()),
    )
}

/// POST /api/v1/kits/fallback
///
/// Library kit for the exact pair, else the themed template. Never fails.
pub async fn handle_fallback_kit(
    State(state): State<AppState>,
    Json(request): Json<FallbackRequest>,
) -> Json<GeneratedKit> {
    Json(
        state
            .fallback
            .fallback_kit(request.industry.trim(), request.topic.trim()),
    )
}

/// GET /api/v1/kits/fallback/catalog
pub async fn handle_fallback_catalog(State(state): State<AppState>) -> Json<Vec<CatalogEntry>> {
    Json(state.fallback.catalog())
}
