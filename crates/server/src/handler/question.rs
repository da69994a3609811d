use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use shared::{
    domain::{ErrorResponse, PageQuery, Pagination, QuestionListResponse, QuestionsPostRequest},
    state::AppState,
};
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

use crate::middleware::validate::SimpleJson;

#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 404, description = "No questions on that page", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn get_questions(
    State(data): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let questions = data
        .di_container
        .question_service
        .list_questions(Pagination::from(&params))
        .await?;

    Ok((StatusCode::OK, Json(questions)))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted, remaining questions", body = QuestionListResponse),
        (status = 400, description = "Question ID is not an integer", body = ErrorResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Delete failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(data): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let id = id.parse::<i64>().map_err(|_| {
        warn!("Question ID is not an integer: {id}");
        ErrorResponse::bad_request()
    })?;

    let questions = data
        .di_container
        .question_service
        .delete_question(id, Pagination::from(&params))
        .await?;

    Ok((StatusCode::OK, Json(questions)))
}

#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = QuestionsPostRequest,
    responses(
        (status = 200, description = "Search results, or all questions after a create", body = QuestionListResponse),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 404, description = "Nothing matched", body = ErrorResponse),
        (status = 422, description = "Invalid question", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_or_search_question(
    State(data): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
    SimpleJson(body): SimpleJson<QuestionsPostRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let questions = data
        .di_container
        .question_service
        .create_or_search(body, Pagination::from(&params))
        .await?;

    Ok((StatusCode::OK, Json(questions)))
}

pub fn question_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/questions",
            get(get_questions).post(create_or_search_question),
        )
        .route("/questions/{id}", delete(delete_question))
        .with_state(app_state)
}
