use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio::commands::{contact::ContactCommand, nav::nav, run::run, smoke::smoke};
use folio_models::{navigation::ClickTarget, smoke::SmokeMethod};
use folio_utils::folio_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = folio_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Run => run(config).await?,
        Command::Contact(command) => command.invoke(config).await?,
        Command::Nav { targets } => nav(config, targets)?,
        Command::Smoke { method } => smoke(config, method).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = folio_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read page events from stdin and print the page after each one
    #[command(aliases(["r"]))]
    Run,
    /// Fill in and submit the contact form
    #[command(aliases(["c"]))]
    Contact(ContactCommand),
    /// Click through the mobile navigation
    #[command(aliases(["n"]))]
    Nav {
        /// Where to click: toggle, menu, link or outside
        #[arg(required = true)]
        targets: Vec<ClickTarget>,
    },
    /// Send a smoke test request and print the response body
    #[command(aliases(["s"]))]
    Smoke {
        /// get, post, put or patch
        method: SmokeMethod,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(pretty_logs)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
