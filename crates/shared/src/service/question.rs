use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::{
    abstract_trait::{DynCategoryRepository, DynQuestionRepository, QuestionServiceTrait},
    config::SearchMatch,
    domain::{
        ErrorResponse, Pagination, QuestionCommand, QuestionFilter, QuestionListResponse,
        QuestionResponse, QuestionsPostRequest,
    },
    utils::{AppError, Method, Metrics, OperationTracer},
};

#[derive(Clone)]
pub struct QuestionService {
    question_repository: DynQuestionRepository,
    category_repository: DynCategoryRepository,
    search_match: SearchMatch,
    tracer: OperationTracer,
}

impl std::fmt::Debug for QuestionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionService")
            .field("question_repository", &"DynQuestionRepository")
            .field("category_repository", &"DynCategoryRepository")
            .field("search_match", &self.search_match)
            .finish()
    }
}

impl QuestionService {
    pub fn new(
        question_repository: DynQuestionRepository,
        category_repository: DynCategoryRepository,
        search_match: SearchMatch,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("question_service", "QuestionService", registry);

        Self {
            question_repository,
            category_repository,
            search_match,
            tracer: OperationTracer::new("question", Arc::new(Mutex::new(metrics))),
        }
    }

    /// One page of `filter`, with the category lookup and both counts. An
    /// empty page is `NotFound`.
    async fn list_page(
        &self,
        filter: &QuestionFilter,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, AppError> {
        let questions = self
            .question_repository
            .find_page(filter, pagination)
            .await?;

        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions on page {} for {:?}",
                pagination.page, filter
            )));
        }

        let total_questions = self.question_repository.count(&QuestionFilter::All).await?;
        let matched_questions = match filter {
            QuestionFilter::All => total_questions,
            _ => self.question_repository.count(filter).await?,
        };

        let categories: BTreeMap<i64, String> = self
            .category_repository
            .find_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect();

        Ok(QuestionListResponse {
            questions: questions.into_iter().map(QuestionResponse::from).collect(),
            total_questions,
            matched_questions,
            categories,
        })
    }

    async fn delete_and_list(
        &self,
        id: i64,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, AppError> {
        let existing = self
            .question_repository
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("error looking up question {id}: {e}");
                e.into_unprocessable()
            })?;

        if existing.is_none() {
            return Err(AppError::NotFound(format!("Question with ID {id} not found")));
        }

        self.question_repository.delete(id).await.map_err(|e| {
            error!("error deleting question {id}: {e}");
            e.into_unprocessable()
        })?;

        self.list_page(&QuestionFilter::All, pagination)
            .await
            .map_err(|e| {
                error!("error listing questions after delete: {e}");
                match e {
                    AppError::NotFound(msg) => AppError::Unprocessable(msg),
                    other => other.into_unprocessable(),
                }
            })
    }

    async fn run_command(
        &self,
        command: QuestionCommand,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, AppError> {
        match command {
            QuestionCommand::ListAll => self.list_page(&QuestionFilter::All, pagination).await,
            QuestionCommand::Search(term) => {
                let filter = QuestionFilter::Search {
                    term,
                    strategy: self.search_match,
                };
                self.list_page(&filter, pagination).await
            }
            QuestionCommand::Create(request) => {
                let question = self
                    .question_repository
                    .create(&request)
                    .await
                    .map_err(|e| {
                        error!("error info: {e}");
                        e.into_unprocessable()
                    })?;

                info!("Created question {}", question.id);

                self.list_page(&QuestionFilter::All, pagination)
                    .await
                    .map_err(AppError::into_unprocessable)
            }
        }
    }
}

#[async_trait]
impl QuestionServiceTrait for QuestionService {
    async fn list_questions(
        &self,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, ErrorResponse> {
        let tracing_ctx = self.tracer.start_tracing(
            "ListQuestions",
            &[("page", pagination.page.to_string())],
        );

        let result = self.list_page(&QuestionFilter::All, pagination).await;

        self.tracer
            .complete(&tracing_ctx, Method::Get, result, "Questions retrieved")
            .await
    }

    async fn delete_question(
        &self,
        id: i64,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, ErrorResponse> {
        let tracing_ctx = self.tracer.start_tracing(
            "DeleteQuestion",
            &[
                ("id", id.to_string()),
                ("page", pagination.page.to_string()),
            ],
        );

        let result = self.delete_and_list(id, pagination).await;

        self.tracer
            .complete(&tracing_ctx, Method::Delete, result, "Question deleted")
            .await
    }

    async fn create_or_search(
        &self,
        input: QuestionsPostRequest,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, ErrorResponse> {
        let tracing_ctx = self.tracer.start_tracing(
            "CreateOrSearchQuestion",
            &[
                ("search_term", input.search_term.clone().unwrap_or_default()),
                ("page", pagination.page.to_string()),
            ],
        );

        let result = match input.into_command() {
            Ok(command) => self.run_command(command, pagination).await,
            Err(err) => Err(err),
        };

        self.tracer
            .complete(&tracing_ctx, Method::Post, result, "Questions created or searched")
            .await
    }

    async fn list_by_category(
        &self,
        category_id: &str,
        pagination: Pagination,
    ) -> Result<QuestionListResponse, ErrorResponse> {
        let tracing_ctx = self.tracer.start_tracing(
            "ListQuestionsByCategory",
            &[
                ("category", category_id.to_string()),
                ("page", pagination.page.to_string()),
            ],
        );

        let filter = QuestionFilter::Category(category_id.to_string());
        let result = self.list_page(&filter, pagination).await;

        self.tracer
            .complete(
                &tracing_ctx,
                Method::Get,
                result,
                "Questions retrieved by category",
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{DynCategoryRepository, DynQuestionRepository},
        config::{ConnectionManager, ConnectionPool},
        repository::{CategoryRepository, QuestionRepository},
    };

    async fn seeded_pool() -> ConnectionPool {
        let pool = ConnectionManager::in_memory().await.unwrap();
        ConnectionManager::seed(&pool).await.unwrap();
        pool
    }

    fn service(pool: ConnectionPool, search_match: SearchMatch) -> QuestionService {
        let mut registry = Registry::default();
        QuestionService::new(
            Arc::new(QuestionRepository::new(pool.clone())) as DynQuestionRepository,
            Arc::new(CategoryRepository::new(pool)) as DynCategoryRepository,
            search_match,
            &mut registry,
        )
    }

    fn search(term: &str) -> QuestionsPostRequest {
        QuestionsPostRequest {
            search_term: Some(term.to_string()),
            ..Default::default()
        }
    }

    fn new_question(answer: &str) -> QuestionsPostRequest {
        QuestionsPostRequest {
            question: Some("what does water boil at".into()),
            answer: Some(answer.into()),
            category: Some("1".into()),
            difficulty: Some(1),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn page_sizes_follow_the_window() {
        let service = service(seeded_pool().await, SearchMatch::Bounded);

        let first = service.list_questions(Pagination::new(1)).await.unwrap();
        assert_eq!(first.questions.len(), 10);
        assert_eq!(first.total_questions, 19);
        assert_eq!(first.categories.len(), 6);

        let second = service.list_questions(Pagination::new(2)).await.unwrap();
        assert_eq!(second.questions.len(), 9);

        let third = service.list_questions(Pagination::new(3)).await.unwrap_err();
        assert_eq!(third, ErrorResponse::not_found());
    }

    #[tokio::test]
    async fn empty_table_is_not_found() {
        let pool = ConnectionManager::in_memory().await.unwrap();
        let service = service(pool, SearchMatch::Bounded);

        let err = service.list_questions(Pagination::new(1)).await.unwrap_err();
        assert_eq!(err, ErrorResponse::not_found());
    }

    #[tokio::test]
    async fn category_listing_reports_unfiltered_total() {
        let service = service(seeded_pool().await, SearchMatch::Bounded);

        let science = service
            .list_by_category("1", Pagination::new(1))
            .await
            .unwrap();
        assert_eq!(science.questions.len(), 3);
        assert!(science.questions.iter().all(|q| q.category == "1"));
        assert_eq!(science.total_questions, 19);
        assert_eq!(science.matched_questions, 3);

        let missing = service
            .list_by_category("1000", Pagination::new(1))
            .await
            .unwrap_err();
        assert_eq!(missing, ErrorResponse::not_found());
    }

    #[tokio::test]
    async fn search_uses_configured_strategy() {
        let pool = seeded_pool().await;

        let bounded = service(pool.clone(), SearchMatch::Bounded);
        let hits = bounded
            .create_or_search(search("title"), Pagination::new(1))
            .await
            .unwrap();
        assert_eq!(hits.questions.len(), 1);
        assert_eq!(hits.matched_questions, 1);
        assert_eq!(hits.total_questions, 19);

        let err = bounded
            .create_or_search(search("What"), Pagination::new(1))
            .await
            .unwrap_err();
        assert_eq!(err, ErrorResponse::not_found());

        let substring = service(pool, SearchMatch::Substring);
        let hits = substring
            .create_or_search(search("What"), Pagination::new(1))
            .await
            .unwrap();
        assert!(hits.matched_questions > 1);
    }

    #[tokio::test]
    async fn empty_search_term_lists_everything() {
        let service = service(seeded_pool().await, SearchMatch::Bounded);

        let all = service
            .create_or_search(search(""), Pagination::new(2))
            .await
            .unwrap();
        assert_eq!(all.questions.len(), 9);
        assert_eq!(all.matched_questions, 19);
    }

    #[tokio::test]
    async fn create_adds_exactly_one_question() {
        let service = service(seeded_pool().await, SearchMatch::Bounded);

        let created = service
            .create_or_search(new_question("100"), Pagination::new(2))
            .await
            .unwrap();

        assert_eq!(created.total_questions, 20);
        assert_eq!(created.questions.len(), 10);
        let last = created.questions.last().unwrap();
        assert_eq!(last.question, "what does water boil at");
        assert_eq!(last.answer, "100");
    }

    #[tokio::test]
    async fn create_with_empty_answer_is_unprocessable() {
        let service = service(seeded_pool().await, SearchMatch::Bounded);

        let err = service
            .create_or_search(new_question(""), Pagination::new(1))
            .await
            .unwrap_err();
        assert_eq!(err, ErrorResponse::unprocessable());

        let all = service.list_questions(Pagination::new(1)).await.unwrap();
        assert_eq!(all.total_questions, 19);
    }

    #[tokio::test]
    async fn malformed_payload_is_unprocessable() {
        let service = service(seeded_pool().await, SearchMatch::Bounded);

        let err = service
            .create_or_search(QuestionsPostRequest::default(), Pagination::new(1))
            .await
            .unwrap_err();
        assert_eq!(err, ErrorResponse::unprocessable());
    }

    #[tokio::test]
    async fn delete_removes_one_question() {
        let service = service(seeded_pool().await, SearchMatch::Bounded);

        let remaining = service
            .delete_question(20, Pagination::new(1))
            .await
            .unwrap();
        assert_eq!(remaining.total_questions, 18);

        for page in 1..=2 {
            let listed = service.list_questions(Pagination::new(page)).await.unwrap();
            assert!(listed.questions.iter().all(|q| q.id != 20));
        }

        let again = service
            .delete_question(20, Pagination::new(1))
            .await
            .unwrap_err();
        assert_eq!(again, ErrorResponse::not_found());
    }

    #[tokio::test]
    async fn deleting_the_last_question_is_unprocessable() {
        let pool = ConnectionManager::in_memory().await.unwrap();
        sqlx::query(
            "INSERT INTO questions (id, question, answer, category, difficulty) VALUES (1, 'q', 'a', '1', 1)",
        )
        .execute(&pool)
        .await
        .unwrap();
        let service = service(pool, SearchMatch::Bounded);

        let err = service
            .delete_question(1, Pagination::new(1))
            .await
            .unwrap_err();
        assert_eq!(err, ErrorResponse::unprocessable());

        let gone = service.list_questions(Pagination::new(1)).await.unwrap_err();
        assert_eq!(gone, ErrorResponse::not_found());
    }
}
