use axum::Router;
use configs::ServerConfig;
use models::Record;
use service::ResourceStore;
use tracing::info;

use crate::routes;

/// Public entry for one record service: build the store, seed it, and run
/// the HTTP server until shutdown. Failing to bind the listener is the
/// only fatal path; everything after that is reported per request.
pub async fn run_service<T: Record>(default_port: u16, seeds: Vec<T>) -> anyhow::Result<()> {
    let store = ResourceStore::<T>::new();
    store.seed(seeds).await;
    info!(resource = T::RESOURCE, records = store.len().await, "store ready");

    let app: Router = routes::service_router(store);

    let cfg = ServerConfig::resolve(default_port);
    let addr = cfg.bind_addr()?;
    info!(%addr, resource = T::RESOURCE, "starting record service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(common::runtime::shutdown_signal(T::RESOURCE))
        .await?;
    Ok(())
}
