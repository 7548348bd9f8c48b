//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod serve;

use std::path::PathBuf;

use clap::Args;
use frxdocs_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use serve::ServeArgs;

/// Options shared by every command that reads `frxdocs.toml`.
#[derive(Args, Debug)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover frxdocs.toml).
    #[arg(short, long, env = "FRXDOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding `<version>.md` files (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Path of the generated docs.json (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load configuration, applying path overrides and the given server
    /// overrides.
    pub(crate) fn load(
        &self,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            host,
            port,
            content_dir: self.content_dir.clone(),
            output_path: self.output.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
