// Plan → Kit generation pipeline.
// Stage one turns (industry, topic, optional document) into a TrainingPlan;
// stage two expands a reviewed plan into a GeneratedKit.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod kit;
pub mod plan;
pub mod prompts;
pub mod source;
