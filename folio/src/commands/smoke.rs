use folio_config::Config;
use folio_core_smoke_contracts::SmokeFeatureService;
use folio_di::Provide;
use folio_models::smoke::SmokeMethod;

use super::make_provider;
use crate::environment::types::SmokeFeature;

/// Sends one smoke test request and prints the raw response body.
pub async fn smoke(config: Config, method: SmokeMethod) -> anyhow::Result<()> {
    let (mut provider, _) = make_provider(&config)?;
    let smoke: SmokeFeature = provider.provide();

    let body = smoke.run(method).await?;
    println!("{body}");

    Ok(())
}
