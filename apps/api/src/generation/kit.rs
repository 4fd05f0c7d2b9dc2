//! Kit Generator: `TrainingPlan` → `GeneratedKit`.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{KIT_PERSONA, KIT_PROMPT_TEMPLATE};
use crate::llm_client::prompts::{fill_template, system_prompt};
use crate::llm_client::{CompletionRequest, LlmClient, LlmError};
use crate::models::kit::{FLASHCARDS_RANGE, SLIDES_RANGE};
use crate::models::{GeneratedKit, TrainingPlan};

/// Body of a kit request: the plan itself, plus optional hints used only when
/// the kit is served from fallback content.
#[derive(Debug, Clone, Deserialize)]
pub struct KitRequest {
    #[serde(flatten)]
    pub plan: TrainingPlan,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

impl KitRequest {
    pub fn from_plan(plan: TrainingPlan) -> Self {
        Self {
            plan,
            industry: None,
            topic: None,
        }
    }

    /// A plan the caller edited into an unusable state is a client error.
    pub fn validate(&self) -> Result<(), AppError> {
        self.plan
            .validate_shape()
            .map_err(|e| AppError::Validation(format!("invalid training plan: {e}")))
    }
}

fn range(bounds: (usize, usize)) -> String {
    format!("{}-{}", bounds.0, bounds.1)
}

pub fn build_kit_prompt(plan: &TrainingPlan) -> String {
    let objectives = plan
        .learning_objectives
        .iter()
        .map(|o| format!("- {o}"))
        .collect::<Vec<_>>()
        .join("\n");

    let modules = plan
        .modules
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                "{}. {} ({} min): {}",
                i + 1,
                m.title,
                m.duration_minutes,
                m.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let total_minutes = plan.total_duration_minutes().to_string();
    let slides_range = range(SLIDES_RANGE);
    let flashcards_range = range(FLASHCARDS_RANGE);

    fill_template(
        KIT_PROMPT_TEMPLATE,
        &[
            ("title", plan.title.as_str()),
            ("target_audience", plan.target_audience.as_str()),
            ("total_minutes", total_minutes.as_str()),
            ("objectives", objectives.as_str()),
            ("modules", modules.as_str()),
            ("slides_range", slides_range.as_str()),
            ("flashcards_range", flashcards_range.as_str()),
        ],
    )
}

pub async fn generate_kit(llm: &LlmClient, plan: &TrainingPlan) -> Result<GeneratedKit, LlmError> {
    let prompt = build_kit_prompt(plan);
    let system = system_prompt(KIT_PERSONA);
    let config = llm.config();

    let kit: GeneratedKit = llm
        .call_json(CompletionRequest {
            model: &config.kit_model,
            system: &system,
            user: &prompt,
            max_tokens: Some(config.kit_max_tokens),
        })
        .await?;

    kit.validate_shape()
        .map_err(|e| LlmError::Parse(format!("training kit: {e}")))?;

    info!(
        "Kit generated for '{}': {} slides, {} flashcards",
        plan.title,
        kit.slides.len(),
        kit.flashcards.len()
    );

    Ok(kit)
}
