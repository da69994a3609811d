use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::question::Question;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct QuestionResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i64,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        QuestionResponse {
            id: question.id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        }
    }
}

/// One page of questions.
///
/// `total_questions` is always the size of the whole questions table, also
/// for searches and category listings. `matched_questions` is the size of the
/// set that was paginated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionResponse>,
    pub total_questions: i64,
    pub matched_questions: i64,
    pub categories: BTreeMap<i64, String>,
}
