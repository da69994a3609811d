use async_trait::async_trait;
use prometheus_client::registry::Registry;
use rand::seq::SliceRandom;
use std::{collections::HashSet, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    abstract_trait::{DynQuestionRepository, QuizServiceTrait},
    domain::{ErrorResponse, QuestionFilter, QuestionResponse, QuizRequest, QuizResponse},
    model::question::Question,
    utils::{AppError, Method, Metrics, OperationTracer},
};

#[derive(Clone)]
pub struct QuizService {
    repository: DynQuestionRepository,
    tracer: OperationTracer,
}

impl std::fmt::Debug for QuizService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizService")
            .field("repository", &"DynQuestionRepository")
            .finish()
    }
}

impl QuizService {
    pub fn new(repository: DynQuestionRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("quiz_service", "QuizService", registry);

        Self {
            repository,
            tracer: OperationTracer::new("quiz", Arc::new(Mutex::new(metrics))),
        }
    }

    /// Random pick over every remaining candidate, not only the first page.
    async fn pick_question(&self, input: QuizRequest) -> Result<QuizResponse, AppError> {
        let filter = match input.category_filter()? {
            None => QuestionFilter::All,
            Some(category) => QuestionFilter::Category(category),
        };

        let candidates = self.repository.find_all(&filter).await?;

        if candidates.is_empty() {
            return Err(AppError::NotFound(format!(
                "No quiz questions for {filter:?}"
            )));
        }

        match input.previous_questions {
            None => {
                let question = choose(&candidates).ok_or_else(|| {
                    AppError::NotFound("No quiz questions left".to_string())
                })?;

                Ok(QuizResponse {
                    question,
                    force_end: true,
                })
            }
            Some(previous) => {
                let asked: HashSet<i64> = previous.into_iter().collect();
                let remaining: Vec<Question> = candidates
                    .into_iter()
                    .filter(|q| !asked.contains(&q.id))
                    .collect();

                info!(
                    "{} of the candidate questions not asked yet",
                    remaining.len()
                );

                let question = choose(&remaining).ok_or_else(|| {
                    AppError::NotFound("Quiz exhausted, every question was already asked".to_string())
                })?;

                Ok(QuizResponse {
                    question,
                    force_end: false,
                })
            }
        }
    }
}

fn choose(questions: &[Question]) -> Option<QuestionResponse> {
    questions
        .choose(&mut rand::thread_rng())
        .cloned()
        .map(QuestionResponse::from)
}

#[async_trait]
impl QuizServiceTrait for QuizService {
    async fn next_question(&self, input: QuizRequest) -> Result<QuizResponse, ErrorResponse> {
        let tracing_ctx = self.tracer.start_tracing(
            "NextQuizQuestion",
            &[
                (
                    "quiz_category",
                    input
                        .quiz_category
                        .as_ref()
                        .and_then(|c| c.id.clone())
                        .unwrap_or_default(),
                ),
                (
                    "previous_questions",
                    input
                        .previous_questions
                        .as_ref()
                        .map(|p| p.len().to_string())
                        .unwrap_or_else(|| "none".to_string()),
                ),
            ],
        );

        let result = self.pick_question(input).await;

        self.tracer
            .complete(&tracing_ctx, Method::Post, result, "Quiz question picked")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ConnectionManager, domain::QuizCategory, repository::QuestionRepository,
    };

    async fn seeded_service() -> QuizService {
        let pool = ConnectionManager::in_memory().await.unwrap();
        ConnectionManager::seed(&pool).await.unwrap();
        let mut registry = Registry::default();
        QuizService::new(Arc::new(QuestionRepository::new(pool)), &mut registry)
    }

    fn request(category: &str, previous: Option<Vec<i64>>) -> QuizRequest {
        QuizRequest {
            quiz_category: Some(QuizCategory {
                kind: None,
                id: Some(category.to_string()),
            }),
            previous_questions: previous,
        }
    }

    #[tokio::test]
    async fn first_pick_forces_end() {
        let service = seeded_service().await;

        let response = service.next_question(request("0", None)).await.unwrap();
        assert!(response.force_end);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["forceEnd"], true);
    }

    #[tokio::test]
    async fn picks_stay_in_category() {
        let service = seeded_service().await;

        for _ in 0..20 {
            let response = service
                .next_question(request("1", Some(vec![])))
                .await
                .unwrap();
            assert_eq!(response.question.category, "1");
            assert!(!response.force_end);

            let json = serde_json::to_value(&response).unwrap();
            assert!(json.get("forceEnd").is_none());
        }
    }

    #[tokio::test]
    async fn previous_questions_are_never_repeated() {
        let service = seeded_service().await;

        for _ in 0..20 {
            let response = service
                .next_question(request("1", Some(vec![20, 21])))
                .await
                .unwrap();
            assert_eq!(response.question.id, 22);
        }
    }

    #[tokio::test]
    async fn exhausted_quiz_is_not_found() {
        let service = seeded_service().await;

        let err = service
            .next_question(request("1", Some(vec![20, 21, 22])))
            .await
            .unwrap_err();
        assert_eq!(err, ErrorResponse::not_found());
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let service = seeded_service().await;

        let err = service
            .next_question(request("1000", None))
            .await
            .unwrap_err();
        assert_eq!(err, ErrorResponse::not_found());
    }

    #[tokio::test]
    async fn missing_category_is_unprocessable() {
        let service = seeded_service().await;

        let err = service
            .next_question(QuizRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err, ErrorResponse::unprocessable());
    }
}
