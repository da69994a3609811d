use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Query builder error: {0}")]
    QueryBuilderError(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Store faults raised by a mutating operation surface as unprocessable.
    /// Faults that already carry a client-facing meaning pass through.
    pub fn into_unprocessable(self) -> Self {
        match self {
            AppError::NotFound(_) | AppError::Unprocessable(_) | AppError::BadRequest(_) => self,
            AppError::ValidationError(e) => AppError::Unprocessable(e.to_string()),
            other => AppError::Unprocessable(other.to_string()),
        }
    }
}
