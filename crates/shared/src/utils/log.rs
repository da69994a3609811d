use tracing_subscriber::{EnvFilter, prelude::*};

use crate::config::LogFormat;

pub fn init_logger(service_name: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info")
            .add_directive("hyper=off".parse().expect("valid"))
            .add_directive("h2=off".parse().expect("valid"))
            .add_directive("sqlx=warn".parse().expect("valid"))
    });

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_thread_names(true),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_thread_names(true)
                    .with_ansi(true)
                    .pretty(),
            )
            .init(),
    }

    tracing::info!(service = service_name, "Logger initialized");
}
