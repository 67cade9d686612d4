use folio_config::Config;
use folio_di::Provide;
use folio_ui_impl::event::LineEventSource;
use tokio::io::BufReader;
use tracing::info;

use super::make_provider;
use crate::environment::types::Controller;

/// Reads page events from stdin and prints the page after each one.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let (mut provider, page) = make_provider(&config)?;
    let controller: Controller = provider.provide();

    info!("Reading page events from stdin");
    let mut events = LineEventSource::new(BufReader::new(tokio::io::stdin()));
    controller
        .run(&mut events, |event| {
            println!("> {event:?}\n{page}");
        })
        .await
}
