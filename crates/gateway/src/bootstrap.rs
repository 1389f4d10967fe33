use configs::{GatewayConfig, ServerConfig};
use tracing::info;

use crate::forward::Forwarder;
use crate::routes::{gateway_router, GatewayState};
use crate::table::RouteTable;

/// Public entry: resolve the upstream table, build the dispatcher and run
/// the front door until shutdown. A bad table or an unbindable address is
/// fatal; everything after startup is reported per request.
pub async fn run() -> anyhow::Result<()> {
    let cfg = GatewayConfig::resolve();
    cfg.validate()?;

    let table = RouteTable::from_config(&cfg);
    info!(services = table.len(), "route table ready");

    let state = GatewayState {
        table,
        forwarder: Forwarder::new()?,
    };
    let app = gateway_router(state);

    let server = ServerConfig::resolve(8080);
    let addr = server.bind_addr()?;
    info!(%addr, "starting gateway");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(common::runtime::shutdown_signal("gateway"))
        .await?;
    Ok(())
}
