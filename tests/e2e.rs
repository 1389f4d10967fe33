//! Whole-stack tests: the three record services and the gateway wired
//! together the way the binaries wire them, on ephemeral ports.

use std::net::SocketAddr;

use axum::Router;
use models::{Order, Product, Record, User};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use gateway::forward::Forwarder;
use gateway::routes::{gateway_router, GatewayState};
use gateway::table::RouteTable;
use server::routes::service_router;
use service::ResourceStore;

async fn spawn(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

async fn spawn_service<T: Record>(seeds: Vec<T>) -> anyhow::Result<String> {
    let store = ResourceStore::<T>::new();
    store.seed(seeds).await;
    spawn(service_router(store)).await
}

/// Bring up the full deployment shape: seeded users and orders, an empty
/// product catalog, and a gateway whose table carries each backend's
/// route prefix.
async fn spawn_stack() -> anyhow::Result<String> {
    let users = spawn_service(vec![
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
    ])
    .await?;
    let products = spawn_service::<Product>(Vec::new()).await?;
    let orders = spawn_service(vec![
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
    ])
    .await?;

    let table = RouteTable::new([
        ("users", format!("{}/users", users)),
        ("products", format!("{}/products", products)),
        ("orders", format!("{}/orders", orders)),
    ]);
    let state = GatewayState {
        table,
        forwarder: Forwarder::new()?,
    };
    spawn(gateway_router(state)).await
}

#[tokio::test]
async fn order_lifecycle_through_the_gateway() -> anyhow::Result<()> {
    let gw = spawn_stack().await?;
    let c = reqwest::Client::new();

    let payload = json!({"id": "9", "product_id": "101", "quantity": 2, "total": 50.0});

    let res = c.post(format!("{}/orders", gw)).json(&payload).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<serde_json::Value>().await?, payload);

    let res = c.get(format!("{}/orders/9", gw)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, payload);

    let res = c.delete(format!("{}/orders/9", gw)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/orders/9", gw)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<serde_json::Value>().await?["error"],
        "order not found"
    );
    Ok(())
}

#[tokio::test]
async fn seeded_collections_are_visible_through_the_gateway() -> anyhow::Result<()> {
    let gw = spawn_stack().await?;

    let res = reqwest::get(format!("{}/users", gw)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let users = res.json::<serde_json::Value>().await?;
    assert_eq!(users["1"]["name"], "John Doe");
    assert_eq!(users["2"]["email"], "jane@example.com");

    let res = reqwest::get(format!("{}/orders", gw)).await?;
    let orders = res.json::<serde_json::Value>().await?;
    assert_eq!(orders["1"]["total"], 100.0);
    assert_eq!(orders["2"]["quantity"], 2);

    let res = reqwest::get(format!("{}/products", gw)).await?;
    assert_eq!(res.json::<serde_json::Value>().await?, json!({}));
    Ok(())
}

#[tokio::test]
async fn services_are_isolated_and_unknown_selectors_rejected() -> anyhow::Result<()> {
    let gw = spawn_stack().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/products", gw))
        .json(&json!({"id": "101", "name": "Laptop", "price": 999.0}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c.get(format!("{}/products/101", gw)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // Same id, different service: nothing leaks across stores
    let res = c.get(format!("{}/users/101", gw)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.get(format!("{}/billing/1", gw)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<serde_json::Value>().await?["error"],
        "unknown service: billing"
    );
    Ok(())
}

#[tokio::test]
async fn backend_rejections_surface_through_the_gateway() -> anyhow::Result<()> {
    let gw = spawn_stack().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/orders", gw))
        .json(&json!({"id": "9", "product_id": "101", "quantity": 0, "total": 50.0}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<serde_json::Value>().await?["error"],
        "quantity must be positive"
    );

    let res = c
        .put(format!("{}/users/42", gw))
        .json(&json!({"id": "42", "name": "Ghost", "email": "ghost@example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<serde_json::Value>().await?["error"],
        "user not found"
    );
    Ok(())
}
