use folio_core_smoke_contracts::SmokeFeatureService;
use folio_di::Build;
use folio_extern_contracts::smoke::SmokeApiService;
use folio_models::smoke::{SmokeMethod, SmokePatchBody, SmokePostBody, SmokePutBody};
use folio_ui_contracts::output::OutputView;
use folio_utils::trace_instrument;
use tracing::warn;

#[derive(Debug, Clone, Build)]
pub struct SmokeFeatureServiceImpl<View, SmokeApi> {
    view: View,
    smoke_api: SmokeApi,
    config: SmokeFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct SmokeFeatureConfig {
    /// The id sent to the put and patch routes.
    pub item_id: u64,
}

impl<View, SmokeApi> SmokeFeatureService for SmokeFeatureServiceImpl<View, SmokeApi>
where
    View: OutputView,
    SmokeApi: SmokeApiService,
{
    #[trace_instrument(skip(self))]
    async fn run(&self, method: SmokeMethod) -> anyhow::Result<String> {
        let id = self.config.item_id;
        let result = match method {
            SmokeMethod::Get => self.smoke_api.get().await,
            SmokeMethod::Post => self.smoke_api.post(&SmokePostBody::default()).await,
            SmokeMethod::Put => self.smoke_api.put(id, &SmokePutBody::default()).await,
            SmokeMethod::Patch => self.smoke_api.patch(id, &SmokePatchBody::default()).await,
        };

        match &result {
            Ok(body) => self.view.set_output(body),
            Err(err) => {
                warn!(%method, "Smoke test request failed: {err:#}");
                self.view.set_output(&format!("Error: {err:#}"));
            }
        }

        result
    }
}
