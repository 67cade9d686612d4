use std::net::IpAddr;

use axum::{extract::Path, routing, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting smoke test server on {host}:{port}");
    info!("Routes: GET /api/get, POST /api/post, PUT /api/put/:id, PATCH /api/patch/:id");

    crate::serve(host, port, router()).await
}

pub fn router() -> Router {
    Router::new()
        .route("/api/get", routing::get(get))
        .route("/api/post", routing::post(post))
        .route("/api/put/:id", routing::put(put))
        .route("/api/patch/:id", routing::patch(patch))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn get() -> Json<Value> {
    Json(json!({ "method": "GET", "message": "GET request received" }))
}

async fn post(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "method": "POST", "received": body }))
}

async fn put(Path(id): Path<u64>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "method": "PUT", "id": id, "received": body }))
}

async fn patch(Path(id): Path<u64>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "method": "PATCH", "id": id, "received": body }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_requests() {
        let addr = crate::spawn(router()).await.unwrap();
        let client = reqwest::Client::new();

        let body = client
            .put(format!("http://{addr}/api/put/42"))
            .json(&json!({ "update": "New Data" }))
            .send()
            .await
            .unwrap()
            .json::<Value>()
            .await
            .unwrap();

        assert_eq!(
            body,
            json!({ "method": "PUT", "id": 42, "received": { "update": "New Data" } })
        );
    }
}
