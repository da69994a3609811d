use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        CreateQuestionRequest, ErrorResponse, Pagination, QuestionFilter, QuestionListResponse,
        QuestionsPostRequest,
    },
    model::question::Question,
    utils::AppError,
};

pub type DynQuestionRepository = Arc<dyn QuestionRepositoryTrait + Send + Sync>;
pub type DynQuestionService = Arc<dyn QuestionServiceTrait + Send + Sync>;

#[async_trait]
pub trait QuestionRepositoryTrait {
    /// One page of the filtered questions, ordered by id.
    async fn find_page(
        &self,
        filter: &QuestionFilter,
        pagination: Pagination,
    ) -> Result<Vec<Question>, AppError>;

    /// Every filtered question, ordered by id.
    async fn find_all(&self, filter: &QuestionFilter) -> Result<Vec<Question>, AppError>;

    async fn count(&self, filter: &QuestionFilter) -> Result<i64, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError>;

    async fn create(&self, input: &CreateQuestionRequest) -> Result<Question, AppError>;

    /// Fails with `NotFound` when no row has that id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait QuestionServiceTrait {
    async fn list_questions(
        &self,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, ErrorResponse>;

    async fn delete_question(
        &self,
        id: i64,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, ErrorResponse>;

    async fn create_or_search(
        &self,
        input: QuestionsPostRequest,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, ErrorResponse>;

    async fn list_by_category(
        &self,
        category_id: &str,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, ErrorResponse>;
}
