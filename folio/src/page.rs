use folio_core_contact_contracts::ContactFeatureService;
use folio_core_navigation_contracts::NavigationFeatureService;
use folio_core_smoke_contracts::SmokeFeatureService;
use folio_di::Build;
use folio_ui_contracts::{
    contact::ContactFormView,
    event::{EventSource, EventSourceError, PageEvent},
};
use folio_utils::trace_instrument;
use tracing::{debug, warn};

/// Routes page events to the feature services.
#[derive(Debug, Clone, Build)]
pub struct PageController<View, Contact, Navigation, Smoke> {
    view: View,
    contact: Contact,
    navigation: Navigation,
    smoke: Smoke,
}

impl<View, Contact, Navigation, Smoke> PageController<View, Contact, Navigation, Smoke>
where
    View: ContactFormView,
    Contact: ContactFeatureService,
    Navigation: NavigationFeatureService,
    Smoke: SmokeFeatureService,
{
    /// Handles events until `events` is exhausted, calling `on_event` after
    /// each handled event.
    ///
    /// Events that cannot be parsed are skipped.
    pub async fn run(
        &self,
        events: &mut impl EventSource,
        mut on_event: impl FnMut(&PageEvent),
    ) -> anyhow::Result<()> {
        loop {
            let event = match events.next_event().await {
                Ok(Some(event)) => event,
                Ok(None) => return Ok(()),
                Err(EventSourceError::Parse(err)) => {
                    warn!("Skipping invalid event: {err}");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            self.handle(event.clone()).await;
            on_event(&event);
        }
    }

    #[trace_instrument(skip(self))]
    pub async fn handle(&self, event: PageEvent) {
        match event {
            PageEvent::Input { field, value } => self.view.write_field(field, &value),
            PageEvent::Submit => match self.contact.submit().await {
                Ok(submitted) => debug!(?submitted, "contact form submitted"),
                Err(err) => debug!("contact form not submitted: {err}"),
            },
            PageEvent::Click(target) => {
                self.navigation.click(target);
            }
            PageEvent::Smoke(method) => {
                if let Ok(body) = self.smoke.run(method).await {
                    debug!(%method, len = body.len(), "smoke test finished");
                }
            }
        }
    }
}
