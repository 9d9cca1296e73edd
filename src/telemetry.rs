use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Initialize structured logging. RUST_LOG wins over the configured default
/// level; `json_logs` switches between human and machine-readable lines.
pub fn init_telemetry(default_level: &str, json_logs: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    if json_logs {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("OnboardFlow telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking one workflow run's events
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span with common onboarding workflow attributes
pub fn create_workflow_span(
    operation: &str,
    document_id: Option<&str>,
    correlation_id: Option<&str>,
) -> tracing::Span {
    tracing::info_span!(
        "onboarding_workflow",
        operation = operation,
        document.id = document_id,
        correlation.id = correlation_id,
    )
}

/// Shutdown telemetry gracefully
pub fn shutdown_telemetry() {
    tracing::debug!("OnboardFlow telemetry shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_ids_are_unique() {
        assert_ne!(generate_correlation_id(), generate_correlation_id());
    }
}
