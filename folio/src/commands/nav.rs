use folio_config::Config;
use folio_core_navigation_contracts::NavigationFeatureService;
use folio_di::Provide;
use folio_models::navigation::ClickTarget;

use super::make_provider;
use crate::environment::types::NavigationFeature;

/// Replays `targets` on a fresh page and prints the menu state after each click.
pub fn nav(config: Config, targets: Vec<ClickTarget>) -> anyhow::Result<()> {
    let (mut provider, _) = make_provider(&config)?;
    let navigation: NavigationFeature = provider.provide();

    for target in targets {
        let open = navigation.click(target);
        println!("{target}: {}", if open { "open" } else { "closed" });
    }

    Ok(())
}
