use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::QuestionResponse;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub question: QuestionResponse,

    /// Only sent (as `true`) when the pick ignored previous questions.
    #[serde(
        rename = "forceEnd",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub force_end: bool,
}
