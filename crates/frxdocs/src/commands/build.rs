//! `frxdocs build` command implementation.

use clap::Args;
use frxdocs_builder::{BuildSummary, DocsBuilder};
use frxdocs_config::Config;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Enable verbose output (per-version progress).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any version fails to build.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.config.load(None, None)?;
        build_docs(&config, &Output::new())?;
        Ok(())
    }
}

/// Build `docs.json` for every configured version and report the result.
pub(crate) fn build_docs(config: &Config, output: &Output) -> Result<BuildSummary, CliError> {
    let builder = DocsBuilder::from_config(config)?;

    output.field("Content directory", &builder.config().content_dir.display().to_string());
    let summary = builder.build_and_write()?;

    output.success(&format!(
        "Built {} version(s), {} section(s) -> {}",
        summary.documents,
        summary.sections,
        summary.output_path.display()
    ));
    Ok(summary)
}
