use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::AppError;

/// Wire shape of every failed request: `{"error": 404, "message": "resource not found"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ErrorResponse {
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad request")
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "resource not found")
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    }

    pub fn payload_too_large() -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, "payload too large")
    }

    pub fn unprocessable() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }

    fn new(status: StatusCode, message: &str) -> Self {
        Self {
            error: status.as_u16(),
            message: message.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.error).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => ErrorResponse::not_found(),
            AppError::Unprocessable(_) | AppError::ValidationError(_) => {
                ErrorResponse::unprocessable()
            }
            AppError::BadRequest(_) => ErrorResponse::bad_request(),
            AppError::SqlxError(_)
            | AppError::MigrateError(_)
            | AppError::QueryBuilderError(_) => ErrorResponse::internal(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_app_errors_to_fixed_bodies() {
        let not_found = ErrorResponse::from(AppError::NotFound("question 9".into()));
        assert_eq!(
            serde_json::to_value(&not_found).unwrap(),
            serde_json::json!({"error": 404, "message": "resource not found"})
        );

        let unprocessable = ErrorResponse::from(AppError::Unprocessable("bad".into()));
        assert_eq!(
            serde_json::to_value(&unprocessable).unwrap(),
            serde_json::json!({"error": 422, "message": "unprocessable"})
        );

        let internal = ErrorResponse::from(AppError::SqlxError(sqlx::Error::PoolTimedOut));
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_uses_matching_status() {
        let response = ErrorResponse::method_not_allowed().into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
