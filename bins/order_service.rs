use dotenvy::dotenv;
use models::Order;
use tracing::{error, info};

const SERVICE: &str = "order-service";
const DEFAULT_PORT: u16 = 8083;

fn init_logging() {
    // Load .env first so RUST_LOG can come from it
    dotenv().ok();
    common::utils::logging::init_default();
    info!(service = SERVICE, event = "logger_init", "tracing subscriber initialized");
}

fn seeds() -> Vec<Order> {
    vec![
        Order {
            id: "1".into(),
            product_id: "101".into(),
            quantity: 1,
            total: 100.0,
        },
        Order {
            id: "2".into(),
            product_id: "102".into(),
            quantity: 2,
            total: 200.0,
        },
    ]
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
        "order service starting"
    );

    if let Err(e) = server::run_service(DEFAULT_PORT, seeds()).await {
        error!(service = SERVICE, event = "run_failed", error = %e, "service exited with error");
        return std::process::ExitCode::FAILURE;
    }

    info!(service = SERVICE, event = "stop", %service_id, pid, "order service stopped");
    std::process::ExitCode::SUCCESS
}
