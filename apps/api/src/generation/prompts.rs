// Prompt text for the plan and kit generators.
// The JSON-only rule comes from llm_client::prompts.

/// Persona line for plan generation.
pub const PLAN_PERSONA: &str = "You are an expert instructional designer and training program \
    designer specializing in corporate training. You create comprehensive, engaging training \
    plans tailored to specific industries and topics.";

/// Plan prompt. Placeholders: {industry}, {topic}, {source_instructions}.
pub const PLAN_PROMPT_TEMPLATE: &str = r#"Create a detailed training plan for:
Industry: {industry}
Topic: {topic}

{source_instructions}

Return a JSON object with this EXACT structure:
{
  "title": "string",
  "targetAudience": "string",
  "learningObjectives": ["objective1", "objective2", ...],
  "modules": [
    {
      "title": "string",
      "description": "string",
      "durationMinutes": number
    }
  ],
  "suggestedEnhancements": ["enhancement1", "enhancement2", ...]
}

Provide 3-5 learning objectives, 4-6 modules with realistic durations, and 3-4 suggested enhancements.
Durations are whole minutes; the session should total a realistic length (tens to low hundreds of minutes).
Respond with the JSON object only."#;

/// Used when no source document accompanies the request.
pub const PLAN_FROM_SCRATCH: &str = "The plan should be professional, actionable, and suitable \
    for adult learners. Provide varied content based on the specific industry and topic \
    combination.";

/// Used when the caller uploaded a document. Placeholder: {document_text}.
pub const PLAN_FROM_DOCUMENT: &str = r#"Analyze the uploaded training document below instead of generating the plan from scratch.
Create a structured training plan based on it: extract the key modules and learning objectives from the document, and suggest enhancements that would improve it.

DOCUMENT CONTENT:
{document_text}"#;

/// Persona line for kit generation.
pub const KIT_PERSONA: &str = "You are a world-class instructional designer creating \
    comprehensive training materials. Generate slides, flashcards, and documentation with \
    engaging, industry-specific content.";

/// Kit prompt. Placeholders: {title}, {target_audience}, {total_minutes}, {objectives},
/// {modules}, {slides_range}, {flashcards_range}.
pub const KIT_PROMPT_TEMPLATE: &str = r#"Based on this training plan, create a complete training kit.

Title: {title}
Target Audience: {target_audience}
Total Duration: {total_minutes} minutes

Learning Objectives:
{objectives}

Modules:
{modules}

Return a JSON object with this EXACT structure:
{
  "slides": [
    {
      "title": "string",
      "content": ["bullet1", "bullet2", ...],
      "speakerNotes": "string",
      "visualSearchTerm": "string for finding relevant images"
    }
  ],
  "flashcards": [
    {
      "front": "question or term",
      "back": "answer or definition"
    }
  ],
  "handoutMarkdown": "Complete markdown document for participant handout",
  "facilitatorGuideMarkdown": "Complete markdown document with facilitation tips",
  "backgroundImagePrompt": "A description for a background image that fits the training theme"
}

Create:
- {slides_range} slides covering every module, plus an intro slide and a conclusion slide
- {flashcards_range} flashcards for key concepts
- A comprehensive participant handout (markdown format) with all key information
- A detailed facilitator guide (markdown format) with timing, tips, and activities for each module
- A professional background image description

Make content engaging, professional, and aligned with the learning objectives.
Respond with the JSON object only."#;
