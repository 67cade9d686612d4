use std::{net::IpAddr, sync::Arc};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_models::contact::ContactForm;
use serde_json::json;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub const CONTACT_ROUTE: &str = "/api/contact";

/// Messages with a subject starting with this prefix are rejected with
/// `400 Bad Request`.
pub const REJECT_SUBJECT_PREFIX: &str = "reject";

pub const REJECT_DETAIL: &str = "Message rejected by testing server";

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting contact testing server on {host}:{port}");
    info!("Contact endpoint: http://{host}:{port}{CONTACT_ROUTE}");
    info!("Messages with a subject starting with {REJECT_SUBJECT_PREFIX:?} are rejected");

    crate::serve(host, port, router()).await
}

pub fn router() -> Router {
    Router::new()
        .route(CONTACT_ROUTE, routing::post(submit).get(list))
        .with_state(Arc::new(StateInner::default()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

type State = axum::extract::State<Arc<StateInner>>;

#[derive(Default)]
struct StateInner {
    messages: RwLock<Vec<ContactForm>>,
}

async fn submit(state: State, Json(message): Json<ContactForm>) -> Response {
    if message.subject.starts_with(REJECT_SUBJECT_PREFIX) {
        info!(subject = %message.subject, "rejecting contact message");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": REJECT_DETAIL })),
        )
            .into_response();
    }

    info!(name = %message.name, email = %message.email, "received contact message");
    state.messages.write().await.push(message);

    Json(json!({ "detail": "Message received" })).into_response()
}

async fn list(state: State) -> Json<Vec<ContactForm>> {
    Json(state.messages.read().await.clone())
}
