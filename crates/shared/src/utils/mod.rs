mod deserializers;
mod di;
mod errors;
mod log;
mod metrics;
mod trace_context;

pub use self::deserializers::{
    deserialize_opt_i64_from_any, deserialize_opt_string_from_any, deserialize_page,
};
pub use self::di::DependenciesInject;
pub use self::errors::AppError;
pub use self::log::init_logger;
pub use self::metrics::{Method, MethodLabels, Metrics, Status};
pub use self::trace_context::{OperationTracer, TracingContext};
