use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ShapeError;

/// Contracted count ranges the plan prompt asks for. Checked for logging only.
pub const OBJECTIVES_RANGE: (usize, usize) = (3, 5);
pub const MODULES_RANGE: (usize, usize) = (4, 6);
pub const ENHANCEMENTS_RANGE: (usize, usize) = (3, 4);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingModule {
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
}

/// The negotiated scope of one training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    pub title: String,
    pub target_audience: String,
    pub learning_objectives: Vec<String>,
    pub modules: Vec<TrainingModule>,
    #[serde(default)]
    pub suggested_enhancements: Vec<String>,
}

impl TrainingPlan {
    pub fn total_duration_minutes(&self) -> u32 {
        self.modules.iter().map(|m| m.duration_minutes).sum()
    }

    /// Structural check applied after serde decode.
    ///
    /// Rejects plans a caller cannot render (blank title, no modules, zero-length
    /// modules). Counts outside the requested ranges are only logged.
    pub fn validate_shape(&self) -> Result<(), ShapeError> {
        if self.title.trim().is_empty() {
            return Err(ShapeError::Blank("title"));
        }
        if self.target_audience.trim().is_empty() {
            return Err(ShapeError::Blank("targetAudience"));
        }
        if self.learning_objectives.is_empty() {
            return Err(ShapeError::Empty("learningObjectives"));
        }
        if self.modules.is_empty() {
            return Err(ShapeError::Empty("modules"));
        }
        for (i, module) in self.modules.iter().enumerate() {
            if module.title.trim().is_empty() {
                return Err(ShapeError::BlankItem {
                    field: "modules",
                    index: i,
                    what: "title",
                });
            }
            if module.duration_minutes == 0 {
                return Err(ShapeError::NonPositiveDuration { index: i });
            }
        }

        warn_if_outside("learningObjectives", self.learning_objectives.len(), OBJECTIVES_RANGE);
        warn_if_outside("modules", self.modules.len(), MODULES_RANGE);
        warn_if_outside(
            "suggestedEnhancements",
            self.suggested_enhancements.len(),
            ENHANCEMENTS_RANGE,
        );

        Ok(())
    }
}

pub(crate) fn warn_if_outside(field: &str, len: usize, (min, max): (usize, usize)) {
    if len < min || len > max {
        warn!("Model returned {len} {field} (requested {min}-{max}); accepting as-is");
    }
}
