use serde::{Deserialize, Serialize};

use super::plan::warn_if_outside;
use super::ShapeError;

/// Live-path ranges requested by the kit prompt.
pub const SLIDES_RANGE: (usize, usize) = (8, 12);
pub const FLASHCARDS_RANGE: (usize, usize) = (10, 15);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub title: String,
    pub content: Vec<String>,
    #[serde(default)]
    pub speaker_notes: String,
    #[serde(default)]
    pub visual_search_term: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// Deliverable materials derived from exactly one `TrainingPlan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedKit {
    pub slides: Vec<Slide>,
    pub flashcards: Vec<Flashcard>,
    pub handout_markdown: String,
    pub facilitator_guide_markdown: String,
    #[serde(default)]
    pub background_image_prompt: String,
}

impl GeneratedKit {
    pub fn validate_shape(&self) -> Result<(), ShapeError> {
        if self.slides.is_empty() {
            return Err(ShapeError::Empty("slides"));
        }
        if self.flashcards.is_empty() {
            return Err(ShapeError::Empty("flashcards"));
        }
        if let Some(index) = self.slides.iter().position(|s| s.title.trim().is_empty()) {
            return Err(ShapeError::BlankItem {
                field: "slides",
                index,
                what: "title",
            });
        }
        for (index, card) in self.flashcards.iter().enumerate() {
            if card.front.trim().is_empty() {
                return Err(ShapeError::BlankItem {
                    field: "flashcards",
                    index,
                    what: "front",
                });
            }
            if card.back.trim().is_empty() {
                return Err(ShapeError::BlankItem {
                    field: "flashcards",
                    index,
                    what: "back",
                });
            }
        }

        warn_if_outside("slides", self.slides.len(), SLIDES_RANGE);
        warn_if_outside("flashcards", self.flashcards.len(), FLASHCARDS_RANGE);

        Ok(())
    }
}
