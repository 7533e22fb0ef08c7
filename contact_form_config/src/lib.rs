use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files. Later files override
/// earlier ones.
pub const CONFIG_PATH_ENV: &str = "CONTACT_FORM_CONFIG";

/// Load the default config, then the files listed in `CONTACT_FORM_CONFIG`,
/// then `extra_paths`.
pub fn load(extra_paths: &[PathBuf]) -> anyhow::Result<Config> {
    let env_paths = std::env::var(CONFIG_PATH_ENV).ok();
    load_paths(&config_paths(env_paths.as_deref(), extra_paths))
}

/// The files [`load`] reads, in order. `env_paths` is the value of
/// `CONTACT_FORM_CONFIG`; empty segments are skipped.
pub fn config_paths(env_paths: Option<&str>, extra_paths: &[PathBuf]) -> Vec<PathBuf> {
    std::iter::once(PathBuf::from(DEFAULT_CONFIG_PATH))
        .chain(
            env_paths
                .into_iter()
                .flat_map(|x| x.split(':'))
                .filter(|x| !x.is_empty())
                .map(PathBuf::from),
        )
        .chain(extra_paths.iter().cloned())
        .collect()
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let sources = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    load_sources(&sources)
}

fn load_sources(sources: &[impl AsRef<str>]) -> anyhow::Result<Config> {
    sources
        .iter()
        .fold(config::Config::builder(), |builder, content| {
            builder.add_source(File::from_str(content.as_ref(), FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub form: FormConfig,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    pub title: String,
    pub reset_on_submit: bool,
}
