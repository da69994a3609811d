use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::domain::ErrorResponse;
use tracing::warn;

/// `Json<T>` whose rejections use the API error body. A JSON object with
/// wrong field types is unprocessable. A body that is not a JSON object is a
/// bad request, and one over the body limit is too large.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleJson<T>(pub T);

impl<T, S> FromRequest<S> for SimpleJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(reject_body)?;

        if !value.is_object() {
            warn!("Rejected request body: expected a JSON object");
            return Err(ErrorResponse::bad_request());
        }

        serde_json::from_value(value).map(SimpleJson).map_err(|e| {
            warn!("Rejected request body: {e}");
            ErrorResponse::unprocessable()
        })
    }
}

fn reject_body(rejection: JsonRejection) -> ErrorResponse {
    warn!("Rejected request body: {}", rejection.body_text());

    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ErrorResponse::payload_too_large()
    } else {
        ErrorResponse::bad_request()
    }
}
