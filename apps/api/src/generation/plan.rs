//! Plan Generator: (industry, topic, optional document) → `TrainingPlan`.

use std::borrow::Cow;

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{
    PLAN_FROM_DOCUMENT, PLAN_FROM_SCRATCH, PLAN_PERSONA, PLAN_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{fill_template, system_prompt};
use crate::llm_client::{CompletionRequest, LlmClient, LlmError};
use crate::models::TrainingPlan;

/// Characters of document text embedded in the plan prompt.
pub const DOCUMENT_PROMPT_BUDGET: usize = 2_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub industry: String,
    pub topic: String,
    #[serde(default, alias = "fileContent")]
    pub document_text: Option<String>,
}

impl PlanRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.industry.trim().is_empty() {
            return Err(AppError::Validation("industry cannot be empty".to_string()));
        }
        if self.topic.trim().is_empty() {
            return Err(AppError::Validation("topic cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Document text, if any non-whitespace text was supplied.
    pub fn document(&self) -> Option<&str> {
        self.document_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Cuts `text` to at most `budget` characters, appending `...` when cut.
/// Never splits a multi-byte character.
pub fn truncate_document(text: &str, budget: usize) -> Cow<'_, str> {
    match text.char_indices().nth(budget) {
        Some((byte_index, _)) => Cow::Owned(format!("{}...", &text[..byte_index])),
        None => Cow::Borrowed(text),
    }
}

pub fn build_plan_prompt(request: &PlanRequest) -> String {
    let source_instructions = match request.document() {
        Some(text) => {
            let excerpt = truncate_document(text, DOCUMENT_PROMPT_BUDGET);
            fill_template(PLAN_FROM_DOCUMENT, &[("document_text", &*excerpt)])
        }
        None => PLAN_FROM_SCRATCH.to_string(),
    };

    fill_template(
        PLAN_PROMPT_TEMPLATE,
        &[
            ("industry", request.industry.trim()),
            ("topic", request.topic.trim()),
            ("source_instructions", source_instructions.as_str()),
        ],
    )
}

/// One completion call; the decoded plan passes the structural check or the
/// call fails with `LlmError::Parse`.
pub async fn generate_plan(
    llm: &LlmClient,
    request: &PlanRequest,
) -> Result<TrainingPlan, LlmError> {
    let prompt = build_plan_prompt(request);
    let system = system_prompt(PLAN_PERSONA);

    let plan: TrainingPlan = llm
        .call_json(CompletionRequest {
            model: &llm.config().plan_model,
            system: &system,
            user: &prompt,
            max_tokens: None,
        })
        .await?;

    plan.validate_shape()
        .map_err(|e| LlmError::Parse(format!("training plan: {e}")))?;

    info!(
        "Plan generated: '{}' ({} modules, {} min)",
        plan.title,
        plan.modules.len(),
        plan.total_duration_minutes()
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::{MockReply, MockUpstream};
    use serde_json::json;

    fn request(document_text: Option<&str>) -> PlanRequest {
        PlanRequest {
            industry: "Healthcare".to_string(),
            topic: "Patient Safety".to_string(),
            document_text: document_text.map(String::from),
        }
    }

    fn conformant_plan() -> serde_json::Value {
        json!({
            "title": "Patient Safety Fundamentals",
            "targetAudience": "Clinical staff",
            "learningObjectives": [
                "Apply the five rights of medication administration",
                "Use SBAR for handoffs",
                "Report near-misses without blame"
            ],
            "modules": [
                {"title": "Safety Culture", "description": "Why safety is everyone's job", "durationMinutes": 15},
                {"title": "Medication Safety", "description": "Five rights", "durationMinutes": 20},
                {"title": "Infection Control", "description": "Hand hygiene and PPE", "durationMinutes": 20},
                {"title": "Communication", "description": "SBAR and closed-loop", "durationMinutes": 25},
                {"title": "Action Planning", "description": "Commitments", "durationMinutes": 10}
            ],
            "suggestedEnhancements": [
                "Add simulation lab time",
                "Include a fall-risk walkthrough",
                "Follow up with a 30-day quiz"
            ]
        })
    }

    #[test]
    fn test_prompt_states_exact_count_constraints() {
        for doc in [None, Some("Chapter 1: Hand hygiene.")] {
            let prompt = build_plan_prompt(&request(doc));
            assert!(prompt.contains("3-5 learning objectives"));
            assert!(prompt.contains("4-6 modules"));
            assert!(prompt.contains("3-4 suggested enhancements"));
            assert!(prompt.contains("Industry: Healthcare"));
            assert!(prompt.contains("Topic: Patient Safety"));
            assert!(prompt.contains("\"durationMinutes\": number"));
        }
    }

    #[test]
    fn test_prompt_without_document_generates_from_scratch() {
        let prompt = build_plan_prompt(&request(None));
        assert!(prompt.contains("suitable for adult learners"));
        assert!(!prompt.contains("DOCUMENT CONTENT"));
    }

    #[test]
    fn test_blank_document_is_treated_as_absent() {
        let prompt = build_plan_prompt(&request(Some("   \n ")));
        assert!(!prompt.contains("DOCUMENT CONTENT"));
    }

    #[test]
    fn test_prompt_with_document_asks_for_analysis() {
        let prompt = build_plan_prompt(&request(Some("Wash hands for 20 seconds.")));
        assert!(prompt.contains("Analyze the uploaded training document"));
        assert!(prompt.contains("Wash hands for 20 seconds."));
        assert!(!prompt.contains("suitable for adult learners"));
    }

    #[test]
    fn test_long_document_is_truncated_to_budget() {
        let document = "x".repeat(10_000);
        let prompt = build_plan_prompt(&request(Some(&document)));
        let expected = format!("{}...", "x".repeat(DOCUMENT_PROMPT_BUDGET));
        assert!(prompt.contains(&expected));
        assert!(!prompt.contains(&"x".repeat(DOCUMENT_PROMPT_BUDGET + 1)));
    }

    #[test]
    fn test_placeholder_names_in_request_reach_prompt_verbatim() {
        let req = PlanRequest {
            industry: "Dev {topic} tooling".to_string(),
            topic: "Rendering {source_instructions}".to_string(),
            document_text: Some("See {industry} and {document_text} in the appendix.".to_string()),
        };
        let prompt = build_plan_prompt(&req);

        assert!(prompt.contains("Industry: Dev {topic} tooling\n"));
        assert!(prompt.contains("Topic: Rendering {source_instructions}\n"));
        assert!(prompt.contains("See {industry} and {document_text} in the appendix."));
        assert_eq!(prompt.matches("DOCUMENT CONTENT:").count(), 1);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(5);
        assert_eq!(truncate_document(&text, 3), "ééé...");
        assert_eq!(truncate_document(&text, 5), text);
        assert_eq!(truncate_document("", 3), "");
    }

    #[test]
    fn test_request_accepts_file_content_alias() {
        let req: PlanRequest = serde_json::from_value(json!({
            "industry": "Retail",
            "topic": "Customer Service",
            "fileContent": "Greet within 10 seconds."
        }))
        .unwrap();
        assert_eq!(req.document(), Some("Greet within 10 seconds."));
    }

    #[test]
    fn test_validate_rejects_blank_industry_and_topic() {
        let mut req = request(None);
        req.industry = " ".to_string();
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));

        let mut req = request(None);
        req.topic = String::new();
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_plan_decodes_conformant_payload() {
        let upstream = MockUpstream::start(MockReply::json_content(&conformant_plan())).await;
        let llm = LlmClient::new(upstream.config(Some("sk-test"))).unwrap();

        let plan = generate_plan(&llm, &request(None)).await.unwrap();

        assert!((4..=6).contains(&plan.modules.len()));
        assert!((3..=5).contains(&plan.learning_objectives.len()));
        assert_eq!(plan.total_duration_minutes(), 90);

        let captured = upstream.last_request().unwrap();
        assert_eq!(captured.body["model"], "gpt-4o-mini");
        assert!(captured.message("system").contains("training program designer"));
        assert!(captured.message("user").contains("4-6 modules"));
        assert_eq!(upstream.request_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_plan_upstream_500_is_not_masked() {
        let upstream = MockUpstream::start(MockReply::status(500, "upstream exploded {{{")).await;
        let llm = LlmClient::new(upstream.config(Some("sk-test"))).unwrap();

        let err = generate_plan(&llm, &request(None)).await.unwrap_err();
        assert!(
            matches!(err, LlmError::Upstream { status: 500, .. }),
            "got {err:?}"
        );
        assert_eq!(upstream.request_count(), 1, "no retries");
    }

    #[tokio::test]
    async fn test_generate_plan_non_json_content_is_parse_error() {
        let upstream = MockUpstream::start(MockReply::content("Here is a great plan!")).await;
        let llm = LlmClient::new(upstream.config(Some("sk-test"))).unwrap();

        let err = generate_plan(&llm, &request(None)).await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_generate_plan_wrong_shape_is_parse_error() {
        let upstream =
            MockUpstream::start(MockReply::json_content(&json!({"plan": "nothing useful"}))).await;
        let llm = LlmClient::new(upstream.config(Some("sk-test"))).unwrap();

        let err = generate_plan(&llm, &request(None)).await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_generate_plan_empty_modules_is_parse_error() {
        let mut payload = conformant_plan();
        payload["modules"] = json!([]);
        let upstream = MockUpstream::start(MockReply::json_content(&payload)).await;
        let llm = LlmClient::new(upstream.config(Some("sk-test"))).unwrap();

        let err = generate_plan(&llm, &request(None)).await.unwrap_err();
        match err {
            LlmError::Parse(message) => assert!(message.contains("modules")),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_plan_without_key_is_configuration_error() {
        let upstream = MockUpstream::start(MockReply::json_content(&conformant_plan())).await;
        let llm = LlmClient::new(upstream.config(None)).unwrap();

        let err = generate_plan(&llm, &request(None)).await.unwrap_err();
        assert!(matches!(err, LlmError::MissingCredentials));
        assert_eq!(upstream.request_count(), 0);
    }
}
