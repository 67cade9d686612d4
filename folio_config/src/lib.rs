use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
pub use duration::Duration;
use folio_models::contact::ContactSubmissionMode;
use serde::Deserialize;
use url::Url;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon separated list of config files.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Loads the config files listed in `FOLIO_CONFIG`, falling back to the
/// default config file. Later files override earlier ones.
pub fn load() -> anyhow::Result<Config> {
    let paths = match std::env::var_os(CONFIG_PATH_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect::<Vec<_>>(),
        None => vec![PathBuf::from(DEFAULT_CONFIG_PATH)],
    };
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Loads the given config files and applies the inline TOML `overrides` on top.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, content| {
            builder.add_source(File::from_str(content, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    pub smoke: SmokeConfig,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub base_url: Url,
    pub mode: ContactSubmissionMode,
    pub message_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct SmokeConfig {
    pub base_url: Url,
    pub item_id: u64,
}
