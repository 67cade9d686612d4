use std::time::Duration;

use anyhow::Context;
use clap::Args;
use folio_config::Config;
use folio_core_contact_contracts::ContactFeatureService;
use folio_di::Provide;
use folio_models::contact::{ContactField, ContactForm, ContactSubmissionMode};
use folio_ui_contracts::contact::ContactFormView;

use super::make_provider;
use crate::environment::types::ContactFeature;

/// Extra time given to the scheduled clears before printing the page again.
const CLEAR_GRACE: Duration = Duration::from_millis(100);

#[derive(Debug, Args)]
pub struct ContactCommand {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    subject: String,
    #[arg(long, default_value = "")]
    message: String,
    /// Only log the message instead of sending it
    #[arg(long)]
    local: bool,
    /// Wait until errors and banners are cleared and print the page again
    #[arg(long)]
    wait: bool,
}

impl ContactCommand {
    pub async fn invoke(self, mut config: Config) -> anyhow::Result<()> {
        if self.local {
            config.contact.mode = ContactSubmissionMode::Local;
        }
        let ttl = *config.contact.message_ttl;

        let (mut provider, page) = make_provider(&config)?;
        let contact: ContactFeature = provider.provide();

        let form = ContactForm {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        };
        for field in ContactField::ALL {
            page.write_field(field, form.get(field));
        }

        let result = contact.submit().await;
        print!("{page}");

        if self.wait {
            tokio::time::sleep(ttl + CLEAR_GRACE).await;
            print!("\n{page}");
        }

        result
            .map(|submitted| println!("{submitted:?}"))
            .context("Failed to submit contact form")
    }
}
