use std::future::Future;

use folio_models::smoke::SmokeMethod;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SmokeFeatureService: Send + Sync + 'static {
    /// Sends the smoke test request for `method` and writes the response body
    /// to the output element.
    ///
    /// If the request fails, the error is written to the output element instead
    /// and returned.
    fn run(&self, method: SmokeMethod) -> impl Future<Output = anyhow::Result<String>> + Send;
}

#[cfg(feature = "mock")]
impl MockSmokeFeatureService {
    pub fn with_run(mut self, method: SmokeMethod, response: String) -> Self {
        self.expect_run()
            .once()
            .with(mockall::predicate::eq(method))
            .return_once(move |_| Box::pin(std::future::ready(Ok(response))));
        self
    }
}
