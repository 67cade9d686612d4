use std::future::Future;

use folio_models::contact::ContactFormErrors;
use thiserror::Error;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const RECORDED_MESSAGE: &str = "Form submitted successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Handles a submission of the contact form currently shown on the page.
    ///
    /// Validation errors and the outcome are displayed on the page and cleared
    /// again after the configured message ttl.
    fn submit(&self) -> impl Future<Output = Result<ContactSubmitted, ContactSubmitError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSubmitted {
    /// The message was accepted by the contact endpoint.
    Sent,
    /// The message was only logged locally.
    Recorded,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Invalid(#[from] ContactFormErrors),
    #[error("The contact endpoint rejected the message with status {status}.")]
    Rejected { status: u16, detail: Option<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(mut self, result: Result<ContactSubmitted, ContactSubmitError>) -> Self {
        self.expect_submit()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}
