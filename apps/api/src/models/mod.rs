pub mod kit;
pub mod plan;

use thiserror::Error;

pub use kit::{Flashcard, GeneratedKit, Slide};
pub use plan::{TrainingModule, TrainingPlan};

/// A decoded payload that has the right JSON types but cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("field '{0}' is blank")]
    Blank(&'static str),

    #[error("field '{0}' is empty")]
    Empty(&'static str),

    #[error("{field}[{index}].{what} is blank")]
    BlankItem {
        field: &'static str,
        index: usize,
        what: &'static str,
    },

    #[error("modules[{index}].durationMinutes must be positive")]
    NonPositiveDuration { index: usize },
}
