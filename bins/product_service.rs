use dotenvy::dotenv;
use models::Product;
use tracing::{error, info};

const SERVICE: &str = "product-service";
const DEFAULT_PORT: u16 = 8082;

fn init_logging() {
    // Load .env first so RUST_LOG can come from it
    dotenv().ok();
    common::utils::logging::init_default();
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
        "product service starting"
    );

    // The product catalog starts empty
    if let Err(e) = server::run_service::<Product>(DEFAULT_PORT, Vec::new()).await {
        error!(service = SERVICE, event = "run_failed", error = %e, "service exited with error");
        return std::process::ExitCode::FAILURE;
    }

    info!(service = SERVICE, event = "stop", %service_id, pid, "product service stopped");
    std::process::ExitCode::SUCCESS
}
