use std::{path::Path, sync::Arc};

use folio_config::{SmokeConfig, DEFAULT_CONFIG_PATH};
use folio_di::{provider, Provide};
use folio_extern_contracts::smoke::SmokeApiService;
use folio_extern_impl::smoke::{SmokeApiServiceConfig, SmokeApiServiceImpl};
use folio_models::smoke::{SmokePatchBody, SmokePostBody, SmokePutBody};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn get() {
    let (sut, _) = make_sut().await;

    let body = sut.get().await.unwrap();

    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "method": "GET", "message": "GET request received" })
    );
}

#[tokio::test]
async fn post() {
    let (sut, _) = make_sut().await;

    let body = sut.post(&SmokePostBody::default()).await.unwrap();

    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "method": "POST", "received": { "name": "Samuel" } })
    );
}

#[tokio::test]
async fn put_uses_configured_id() {
    let (sut, item_id) = make_sut().await;

    let body = sut.put(item_id, &SmokePutBody::default()).await.unwrap();

    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "method": "PUT", "id": 123, "received": { "update": "New Data" } })
    );
}

#[tokio::test]
async fn patch() {
    let (sut, _) = make_sut().await;

    let body = sut.patch(7, &SmokePatchBody::default()).await.unwrap();

    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "method": "PATCH", "id": 7, "received": { "partial": "Updated" } })
    );
}

#[tokio::test]
async fn error_status_returns_body() {
    let (sut, _) = make_sut_with(axum::Router::new().fallback(|| async {
        (axum::http::StatusCode::NOT_FOUND, "no such route")
    }))
    .await;

    let body = sut.get().await.unwrap();

    assert_eq!(body, "no such route");
}

#[tokio::test]
async fn unreachable() {
    let sut = build_sut("http://127.0.0.1:1/");

    assert!(sut.get().await.is_err());
}

async fn make_sut() -> (SmokeApiServiceImpl, u64) {
    make_sut_with(folio_testing::smoke::router()).await
}

async fn make_sut_with(router: axum::Router) -> (SmokeApiServiceImpl, u64) {
    let addr = folio_testing::spawn(router).await.unwrap();
    let paths = vec![Path::new(DEFAULT_CONFIG_PATH)];
    let config = folio_config::load_with_override(
        &paths,
        &[format!("smoke.base_url = \"http://{addr}/\"").as_str()],
    )
    .unwrap();

    let SmokeConfig { base_url, item_id } = config.smoke;
    (build_sut(base_url.as_str()), item_id)
}

fn build_sut(base_url: &str) -> SmokeApiServiceImpl {
    provider! {
        Provider { smoke_api_service_config: SmokeApiServiceConfig, }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        smoke_api_service_config: SmokeApiServiceConfig {
            base_url: Arc::new(base_url.parse().unwrap()),
        },
    };

    provider.provide()
}
