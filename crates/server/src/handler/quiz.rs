use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use shared::{
    domain::{ErrorResponse, QuizRequest, QuizResponse},
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

use crate::middleware::validate::SimpleJson;

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next quiz question", body = QuizResponse),
        (status = 404, description = "No question left to ask", body = ErrorResponse),
        (status = 422, description = "quiz_category missing", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn next_quiz_question(
    State(data): State<Arc<AppState>>,
    SimpleJson(body): SimpleJson<QuizRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let question = data.di_container.quiz_service.next_question(body).await?;

    Ok((StatusCode::OK, Json(question)))
}

pub fn quiz_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/quizzes", post(next_quiz_question))
        .with_state(app_state)
}
