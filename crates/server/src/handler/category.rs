use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::{CategoriesResponse, ErrorResponse, PageQuery, Pagination, QuestionListResponse},
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories keyed by id", body = CategoriesResponse)
    ),
    tag = "categories"
)]
pub async fn get_categories(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let categories = data.di_container.category_service.get_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = String, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of the category's questions", body = QuestionListResponse),
        (status = 404, description = "No questions on that page", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category_questions(
    State(data): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let questions = data
        .di_container
        .question_service
        .list_by_category(&id, Pagination::from(&params))
        .await?;

    Ok((StatusCode::OK, Json(questions)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
        .with_state(app_state)
}
