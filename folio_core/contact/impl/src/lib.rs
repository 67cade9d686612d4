use std::time::Duration;

use folio_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, ContactSubmitted, FAILED_MESSAGE,
    RECORDED_MESSAGE, SENT_MESSAGE,
};
use folio_di::Build;
use folio_extern_contracts::contact::{ContactApiError, ContactApiService};
use folio_models::contact::{ContactFormErrors, ContactSubmissionMode};
use folio_shared_contracts::scheduler::{SchedulerService, TimerSlot};
use folio_ui_contracts::contact::{Banner, ContactFormView};
use folio_utils::trace_instrument;
use tracing::{error, info};

#[cfg(test)]
mod tests;

pub const ERRORS_SLOT: TimerSlot = TimerSlot::new("contact.errors");
pub const SUCCESS_BANNER_SLOT: TimerSlot = TimerSlot::new("contact.success");
pub const FAILURE_BANNER_SLOT: TimerSlot = TimerSlot::new("contact.failure");

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<View, Scheduler, ContactApi> {
    view: View,
    scheduler: Scheduler,
    contact_api: ContactApi,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub mode: ContactSubmissionMode,
    /// How long errors and banners stay visible.
    pub message_ttl: Duration,
}

fn banner_slot(banner: Banner) -> TimerSlot {
    match banner {
        Banner::Success => SUCCESS_BANNER_SLOT,
        Banner::Failure => FAILURE_BANNER_SLOT,
    }
}

impl<View, Scheduler, ContactApi> ContactFeatureService
    for ContactFeatureServiceImpl<View, Scheduler, ContactApi>
where
    View: ContactFormView,
    Scheduler: SchedulerService,
    ContactApi: ContactApiService,
{
    #[trace_instrument(skip(self))]
    async fn submit(&self) -> Result<ContactSubmitted, ContactSubmitError> {
        self.view.clear_errors();

        let message = match self.view.read_form().validate() {
            Ok(message) => message,
            Err(errors) => {
                self.show_errors(&errors);
                return Err(errors.into());
            }
        };

        match self.config.mode {
            ContactSubmissionMode::Local => {
                self.flash_banner(Banner::Success, RECORDED_MESSAGE);
                info!(?message, "Contact form submitted");
                self.view.clear_fields();
                Ok(ContactSubmitted::Recorded)
            }
            ContactSubmissionMode::Remote => match self.contact_api.submit(&message).await {
                Ok(()) => {
                    info!(email = %*message.email, "Contact message sent");
                    self.flash_banner(Banner::Success, SENT_MESSAGE);
                    self.view.clear_fields();
                    Ok(ContactSubmitted::Sent)
                }
                Err(err) => {
                    error!("Failed to send contact message: {err}");
                    self.flash_banner(Banner::Failure, FAILED_MESSAGE);
                    Err(match err {
                        ContactApiError::Rejected { status, detail } => {
                            ContactSubmitError::Rejected { status, detail }
                        }
                        ContactApiError::Other(err) => ContactSubmitError::Other(err),
                    })
                }
            },
        }
    }
}

impl<View, Scheduler, ContactApi> ContactFeatureServiceImpl<View, Scheduler, ContactApi>
where
    View: ContactFormView,
    Scheduler: SchedulerService,
{
    fn show_errors(&self, errors: &ContactFormErrors) {
        self.scheduler.cancel(ERRORS_SLOT);
        for (field, error) in errors.iter() {
            self.view.set_error(field, &error.to_string());
        }

        let view = self.view.clone();
        self.scheduler.schedule(
            ERRORS_SLOT,
            self.config.message_ttl,
            Box::new(move || view.clear_errors()),
        );
    }

    /// Shows `text` in `banner` and hides it again after the message ttl.
    fn flash_banner(&self, banner: Banner, text: &str) {
        let slot = banner_slot(banner);
        self.scheduler.cancel(slot);
        self.view.show_banner(banner, text);

        let view = self.view.clone();
        self.scheduler.schedule(
            slot,
            self.config.message_ttl,
            Box::new(move || view.hide_banner(banner)),
        );
    }
}
