mod category;
mod question;
mod quiz;

use std::sync::Arc;

use anyhow::Context;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::{Router, middleware::map_response};
use prometheus_client::encoding::text::encode;
use shared::domain::ErrorResponse;
use shared::state::AppState;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::middleware::cors::{add_cors_headers, cors_layer};

pub use self::category::category_routes;
pub use self::question::question_routes;
pub use self::quiz::quiz_routes;

pub const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        category::get_categories,
        category::get_category_questions,
        question::get_questions,
        question::delete_question,
        question::create_or_search_question,
        quiz::next_quiz_question,
    ),
    tags(
        (name = "categories", description = "Category listing endpoints."),
        (name = "questions", description = "Question management and search endpoints."),
        (name = "quizzes", description = "Quiz play endpoints.")
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let registry = state.registry.lock().await;
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &registry) {
        error!("Failed to encode metrics: {e}");
        return ErrorResponse::internal().into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

async fn not_found() -> ErrorResponse {
    ErrorResponse::not_found()
}

async fn method_not_allowed() -> ErrorResponse {
    ErrorResponse::method_not_allowed()
}

pub struct AppRouter;

impl AppRouter {
    /// Assembles every route, the OpenAPI document and the shared layers.
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let mut router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone());

        router = router.merge(category_routes(shared_state.clone()));
        router = router.merge(question_routes(shared_state.clone()));
        router = router.merge(quiz_routes(shared_state.clone()));

        let (router, api) = router.split_for_parts();

        router
            .route(
                "/api-docs/openapi.json",
                get(move || async move { Json(api) }),
            )
            .method_not_allowed_fallback(method_not_allowed)
            .fallback(not_found)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer())
            .layer(map_response(add_cors_headers))
    }

    pub async fn serve(port: u16, app_state: AppState) -> anyhow::Result<()> {
        let router = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("Server running on http://{}", listener.local_addr()?);
        info!("OpenAPI document at http://{addr}/api-docs/openapi.json");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        info!("Server stopped");

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => error!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
