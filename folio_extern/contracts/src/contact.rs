use std::future::Future;

use folio_models::contact::ContactMessage;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Posts `message` to the contact endpoint.
    fn submit(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), ContactApiError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    /// The endpoint answered with a non-success status.
    #[error("Contact endpoint responded with status {status}: {}", .detail.as_deref().unwrap_or("no details"))]
    Rejected { status: u16, detail: Option<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(mut self, message: ContactMessage, result: Result<(), ContactApiError>) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
