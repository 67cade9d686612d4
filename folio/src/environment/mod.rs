use folio_config::Config;
use folio_core_contact_impl::ContactFeatureConfig;
use folio_core_smoke_impl::SmokeFeatureConfig;
use folio_di::provider;
use folio_extern_impl::{contact::ContactApiServiceConfig, smoke::SmokeApiServiceConfig};
use types::Page;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        page: Page,
        ..config: ConfigProvider {
            // Extern
            ContactApiServiceConfig,
            SmokeApiServiceConfig,

            // Core
            ContactFeatureConfig,
            SmokeFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, page: Page) -> Self {
        Self {
            _cache: Default::default(),
            page,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // Extern
        contact_api_service_config: ContactApiServiceConfig,
        smoke_api_service_config: SmokeApiServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
        smoke_feature_config: SmokeFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // Extern
        let contact_api_service_config = ContactApiServiceConfig::new(&config.contact.base_url)?;

        let smoke_api_service_config = SmokeApiServiceConfig {
            base_url: config.smoke.base_url.clone().into(),
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            mode: config.contact.mode,
            message_ttl: config.contact.message_ttl.into(),
        };

        let smoke_feature_config = SmokeFeatureConfig {
            item_id: config.smoke.item_id,
        };

        Ok(Self {
            _cache: Default::default(),

            // Extern
            contact_api_service_config,
            smoke_api_service_config,

            // Core
            contact_feature_config,
            smoke_feature_config,
        })
    }
}
