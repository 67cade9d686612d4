use std::sync::Arc;

use anyhow::Context;
use folio_di::Build;
use folio_extern_contracts::smoke::SmokeApiService;
use folio_models::smoke::{SmokePatchBody, SmokePostBody, SmokePutBody};
use folio_utils::{trace_instrument, Apply};
use reqwest::Method;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone, Build)]
pub struct SmokeApiServiceImpl {
    config: SmokeApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct SmokeApiServiceConfig {
    pub base_url: Arc<Url>,
}

impl SmokeApiServiceImpl {
    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        route: &str,
        body: Option<&B>,
    ) -> anyhow::Result<String> {
        let url = self
            .config
            .base_url
            .join(route)
            .with_context(|| format!("Failed to build smoke test URL for {route}"))?;

        let response = self
            .http
            .request(method.clone(), url)
            .apply_map(body, |request, body| request.json(body))
            .send()
            .await
            .with_context(|| format!("Failed to send {method} {route} request"))?;

        debug!(%method, route, status = %response.status(), "smoke test server responded");

        response
            .text()
            .await
            .with_context(|| format!("Failed to read {method} {route} response"))
    }
}

impl SmokeApiService for SmokeApiServiceImpl {
    #[trace_instrument(skip(self))]
    async fn get(&self) -> anyhow::Result<String> {
        self.send(Method::GET, "api/get", None::<&()>).await
    }

    #[trace_instrument(skip(self))]
    async fn post(&self, body: &SmokePostBody) -> anyhow::Result<String> {
        self.send(Method::POST, "api/post", Some(body)).await
    }

    #[trace_instrument(skip(self))]
    async fn put(&self, id: u64, body: &SmokePutBody) -> anyhow::Result<String> {
        self.send(Method::PUT, &format!("api/put/{id}"), Some(body))
            .await
    }

    #[trace_instrument(skip(self))]
    async fn patch(&self, id: u64, body: &SmokePatchBody) -> anyhow::Result<String> {
        self.send(Method::PATCH, &format!("api/patch/{id}"), Some(body))
            .await
    }
}
