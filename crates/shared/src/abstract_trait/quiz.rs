use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{ErrorResponse, QuizRequest, QuizResponse};

pub type DynQuizService = Arc<dyn QuizServiceTrait + Send + Sync>;

#[async_trait]
pub trait QuizServiceTrait {
    async fn next_question(&self, input: QuizRequest) -> Result<QuizResponse, ErrorResponse>;
}
