//! `frxdocs serve` command implementation.

use clap::Args;
use frxdocs_server::{run_server, server_config_from_config};

use super::ConfigArgs;
use super::build::build_docs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Rebuild docs.json before starting.
    #[arg(long)]
    build: bool,

    /// Enable verbose output (request and build logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the artifact is missing or
    /// the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(self.host, self.port)?;

        if self.build {
            build_docs(&config, &output)?;
        }

        let docs_path = &config.content_resolved.output_path;
        if !docs_path.exists() {
            return Err(CliError::Server(format!(
                "{} not found; run `frxdocs build` first or pass --build",
                docs_path.display()
            )));
        }

        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.field("Documentation", &docs_path.display().to_string());

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
