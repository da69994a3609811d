use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::{AppError, deserialize_opt_string_from_any};

/// Category id that stands for "any category".
pub const ANY_CATEGORY: &str = "0";

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct QuizCategory {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "deserialize_opt_string_from_any")]
    #[schema(value_type = Option<String>)]
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,

    /// `null` starts a quiz without excluding anything.
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}

impl QuizRequest {
    /// `None` means every category.
    pub fn category_filter(&self) -> Result<Option<String>, AppError> {
        let id = self
            .quiz_category
            .as_ref()
            .and_then(|c| c.id.as_deref())
            .map(str::trim)
            .ok_or_else(|| AppError::Unprocessable("quiz_category.id is required".to_string()))?;

        if id == ANY_CATEGORY {
            Ok(None)
        } else {
            Ok(Some(id.to_string()))
        }
    }
}
