use dotenvy::dotenv;
use gateway::bootstrap;
use tracing::{error, info};

const SERVICE: &str = "gateway";

fn init_logging() {
    // Load .env first so RUST_LOG can come from it
    dotenv().ok();
    common::utils::logging::init_json();
    info!(service = SERVICE, event = "logger_init", "tracing subscriber initialized");
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = common::runtime::install_panic_hook(SERVICE);
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");
    info!(
        service = SERVICE,
        event = "start",
        %service_id,
        pid,
        version,
        "gateway starting"
    );

    if let Err(e) = bootstrap::run().await {
        error!(service = SERVICE, event = "run_failed", error = %e, "gateway exited with error");
        return std::process::ExitCode::FAILURE;
    }

    info!(service = SERVICE, event = "stop", %service_id, pid, "gateway stopped");
    std::process::ExitCode::SUCCESS
}
