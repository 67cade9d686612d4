use std::{collections::BTreeMap, net::IpAddr, sync::Arc};

use axum::{
    extract::{Path, Query, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;

pub const ITEMS_ROUTE: &str = "/items";

pub const DEFAULT_API_KEY: &str = "default123";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting items testing server on {host}:{port}");
    info!("Writes require the api_key query parameter");

    crate::serve(host, port, router(api_key)).await
}

pub fn router(api_key: impl Into<String>) -> Router {
    let state = StateInner {
        api_key: api_key.into(),
        items: RwLock::default(),
    };

    Router::new()
        .route(ITEMS_ROUTE, routing::post(create))
        .route(
            "/items/:id",
            routing::get(get)
                .put(replace)
                .patch(update)
                .delete(delete),
        )
        .with_state(Arc::new(state))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
}

type State = axum::extract::State<Arc<StateInner>>;

struct StateInner {
    api_key: String,
    items: RwLock<Items>,
}

#[derive(Default)]
struct Items {
    last_id: u64,
    by_id: BTreeMap<u64, Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Deserialize)]
struct KeyQuery {
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct GetQuery {
    #[serde(default)]
    include_desc: bool,
}

async fn log_request(request: Request, next: Next) -> Response {
    info!("Request: {} {}", request.method(), request.uri());
    next.run(request).await
}

fn error(code: StatusCode, detail: &str) -> Response {
    (code, Json(json!({ "detail": detail }))).into_response()
}

fn unauthorized() -> Response {
    error(StatusCode::UNAUTHORIZED, "Unauthorized")
}

fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Item not found")
}

impl StateInner {
    fn authorized(&self, query: &KeyQuery) -> bool {
        query.api_key.as_deref() == Some(self.api_key.as_str())
    }
}

fn to_map(item: Item) -> Map<String, Value> {
    Map::from_iter([
        ("name".into(), item.name.into()),
        ("description".into(), item.description.into()),
        ("price".into(), item.price.into()),
    ])
}

fn stored(id: u64, item: &Map<String, Value>) -> Response {
    Json(json!({ "id": id, "item": item })).into_response()
}

async fn create(state: State, Query(key): Query<KeyQuery>, Json(item): Json<Item>) -> Response {
    if !state.authorized(&key) {
        return unauthorized();
    }

    let mut items = state.items.write().await;
    items.last_id += 1;
    let id = items.last_id;
    let item = to_map(item);
    let response = stored(id, &item);
    items.by_id.insert(id, item);
    response
}

async fn get(state: State, Path(id): Path<u64>, Query(query): Query<GetQuery>) -> Response {
    let items = state.items.read().await;
    let Some(item) = items.by_id.get(&id) else {
        return not_found();
    };

    let mut item = item.clone();
    if !query.include_desc {
        item.remove("description");
    }
    Json(item).into_response()
}

async fn replace(
    state: State,
    Path(id): Path<u64>,
    Query(key): Query<KeyQuery>,
    Json(item): Json<Item>,
) -> Response {
    if !state.authorized(&key) {
        return unauthorized();
    }

    let mut items = state.items.write().await;
    let Some(entry) = items.by_id.get_mut(&id) else {
        return not_found();
    };
    *entry = to_map(item);
    stored(id, entry)
}

async fn update(
    state: State,
    Path(id): Path<u64>,
    Query(key): Query<KeyQuery>,
    Json(updates): Json<Map<String, Value>>,
) -> Response {
    if !state.authorized(&key) {
        return unauthorized();
    }

    let mut items = state.items.write().await;
    let Some(entry) = items.by_id.get_mut(&id) else {
        return not_found();
    };
    entry.extend(updates);
    stored(id, entry)
}

async fn delete(state: State, Path(id): Path<u64>, Query(key): Query<KeyQuery>) -> Response {
    if !state.authorized(&key) {
        return unauthorized();
    }

    match state.items.write().await.by_id.remove(&id) {
        Some(deleted) => Json(json!({ "deleted": deleted })).into_response(),
        None => not_found(),
    }
}
