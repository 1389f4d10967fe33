use dotenvy::dotenv;
use models::User;
use tracing::{error, info};

const SERVICE: &str = "user-service";
const DEFAULT_PORT: u16 = 8081;

fn init_logging() {
    // Load .env first so RUST_LOG can come from it
    dotenv().ok();
    common::utils::logging::init_default();
    info!(service = SERVICE, event = "logger_init", "tracing subscriber initialized");
}

fn seeds() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
        },
        User {
            id: "2".into(),
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
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
        "user service starting"
    );

    if let Err(e) = server::run_service(DEFAULT_PORT, seeds()).await {
        error!(service = SERVICE, event = "run_failed", error = %e, "service exited with error");
        return std::process::ExitCode::FAILURE;
    }

    info!(service = SERVICE, event = "stop", %service_id, pid, "user service stopped");
    std::process::ExitCode::SUCCESS
}
