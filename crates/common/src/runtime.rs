//! Process runtime helpers shared by the service and gateway binaries.

use tracing::{error, info};
use uuid::Uuid;

/// Install a panic hook that logs unhandled panics with service context.
/// Returns the generated service instance id so binaries can reuse it in
/// their own start/stop events.
pub fn install_panic_hook(service: &'static str) -> Uuid {
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service,
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));
    service_id
}

/// Resolve when the process receives Ctrl+C. Used with
/// `axum::serve(...).with_graceful_shutdown` so in-flight requests drain
/// before the listener closes.
pub async fn shutdown_signal(service: &'static str) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(service, event = "signal_error", error = %e, "failed to listen for Ctrl+C");
        return;
    }
    info!(service, event = "shutdown_signal", "received Ctrl+C, shutting down");
}
