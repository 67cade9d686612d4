use std::future::Future;

use folio_models::smoke::{SmokePatchBody, SmokePostBody, SmokePutBody};

/// Requests against the smoke test server. Every method resolves to the raw
/// response body, whatever the status code.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SmokeApiService: Send + Sync + 'static {
    fn get(&self) -> impl Future<Output = anyhow::Result<String>> + Send;

    fn post(&self, body: &SmokePostBody) -> impl Future<Output = anyhow::Result<String>> + Send;

    fn put(
        &self,
        id: u64,
        body: &SmokePutBody,
    ) -> impl Future<Output = anyhow::Result<String>> + Send;

    fn patch(
        &self,
        id: u64,
        body: &SmokePatchBody,
    ) -> impl Future<Output = anyhow::Result<String>> + Send;
}

#[cfg(feature = "mock")]
impl MockSmokeApiService {
    pub fn with_get(mut self, response: String) -> Self {
        self.expect_get()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(response))));
        self
    }

    pub fn with_post(mut self, body: SmokePostBody, response: String) -> Self {
        self.expect_post()
            .once()
            .with(mockall::predicate::eq(body))
            .return_once(move |_| Box::pin(std::future::ready(Ok(response))));
        self
    }

    pub fn with_put(mut self, id: u64, body: SmokePutBody, response: String) -> Self {
        self.expect_put()
            .once()
            .with(mockall::predicate::eq(id), mockall::predicate::eq(body))
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(response))));
        self
    }

    pub fn with_patch(mut self, id: u64, body: SmokePatchBody, response: String) -> Self {
        self.expect_patch()
            .once()
            .with(mockall::predicate::eq(id), mockall::predicate::eq(body))
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(response))));
        self
    }

    pub fn with_get_error(mut self, error: &'static str) -> Self {
        self.expect_get()
            .once()
            .return_once(move || Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
