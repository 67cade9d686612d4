use folio_config::Config;
use folio_di::Provide;

use crate::environment::{types::Page, ConfigProvider, Provider};

pub mod contact;
pub mod nav;
pub mod run;
pub mod smoke;

/// Builds a provider around a fresh portfolio page.
fn make_provider(config: &Config) -> anyhow::Result<(Provider, Page)> {
    let config_provider = ConfigProvider::new(config)?;
    let mut provider = Provider::new(config_provider, Page::portfolio());
    let page = provider.provide();
    Ok((provider, page))
}
