use std::sync::Arc;

use tokio::{sync::Mutex, time::Instant};
use tracing::{Span, error, info, info_span};

use crate::domain::ErrorResponse;
use crate::utils::{AppError, Method, Metrics, Status};

pub struct TracingContext {
    pub span: Span,
    pub start_time: Instant,
}

/// Per-service span + metrics bookkeeping around one operation.
#[derive(Clone)]
pub struct OperationTracer {
    component: &'static str,
    metrics: Arc<Mutex<Metrics>>,
}

impl OperationTracer {
    pub fn new(component: &'static str, metrics: Arc<Mutex<Metrics>>) -> Self {
        Self { component, metrics }
    }

    pub fn start_tracing(&self, operation_name: &str, attributes: &[(&str, String)]) -> TracingContext {
        let start_time = Instant::now();
        let span = info_span!(
            "operation",
            component = self.component,
            name = operation_name,
            attributes = ?attributes,
        );

        span.in_scope(|| info!("Starting operation: {operation_name}"));

        TracingContext { span, start_time }
    }

    pub async fn complete_tracing_success(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, true, message)
            .await;
    }

    pub async fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message)
            .await;
    }

    /// Closes the operation and converts a failure into its wire shape.
    pub async fn complete<T>(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        result: Result<T, AppError>,
        success_message: &str,
    ) -> Result<T, ErrorResponse> {
        match result {
            Ok(value) => {
                self.complete_tracing_success(tracing_ctx, method, success_message)
                    .await;
                Ok(value)
            }
            Err(err) => {
                self.complete_tracing_error(tracing_ctx, method, &err.to_string())
                    .await;
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.span.in_scope(|| {
            if is_success {
                info!(duration_secs = elapsed, "Operation completed successfully: {message}");
            } else {
                error!(duration_secs = elapsed, "Operation failed: {message}");
            }
        });

        self.metrics.lock().await.record(method, status, elapsed);
    }
}
