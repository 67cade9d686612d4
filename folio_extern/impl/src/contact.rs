use std::sync::Arc;

use anyhow::Context;
use folio_di::Build;
use folio_extern_contracts::contact::{ContactApiError, ContactApiService};
use folio_models::contact::ContactMessage;
use folio_utils::trace_instrument;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

const CONTACT_ROUTE: &str = "api/contact";

#[derive(Debug, Clone, Build)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    endpoint: Arc<Url>,
}

impl ContactApiServiceConfig {
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        let endpoint = base_url
            .join(CONTACT_ROUTE)
            .context("Failed to build contact endpoint URL")?;
        Ok(Self {
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactApiService for ContactApiServiceImpl {
    #[trace_instrument(skip(self))]
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactApiError> {
        let response = self
            .http
            .post((*self.config.endpoint).clone())
            .json(message)
            .send()
            .await
            .context("Failed to send contact request")?;

        let status = response.status();
        debug!(%status, "contact endpoint responded");
        if status.is_success() {
            return Ok(());
        }

        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|response| response.detail)
            .map(|detail| match detail {
                serde_json::Value::String(detail) => detail,
                detail => detail.to_string(),
            });

        Err(ContactApiError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    detail: Option<serde_json::Value>,
}
