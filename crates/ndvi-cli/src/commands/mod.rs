//! Command implementations

mod analyze;
mod config;
mod shell;

use crate::cli::{Cli, Commands};
use crate::config_loader;
use crate::errors;
use crate::output::OutputWriter;
use crate::terminal::{TerminalCharts, TerminalMap, TerminalSurface};
use anyhow::Result;
use ndvi_core::config::LayeredConfig;
use ndvi_core::gateway::HttpGateway;
use ndvi_core::WorkflowController;
use std::sync::Arc;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = config_loader::load_config(&cli)?;

    match cli.command {
        Commands::Shell(args) => shell::execute(args, &config, &output).await,
        Commands::Analyze(args) => analyze::execute(args, &config, &output).await,
        Commands::Config => config::execute(&config, &output),
    }
}

/// Controller wired to the configured backend and terminal ports
fn build_controller(config: &LayeredConfig, output: &OutputWriter) -> Result<WorkflowController> {
    let gateway = HttpGateway::new(config.api_url.value.clone())
        .map_err(|e| errors::invalid_config(&e.to_string()))?;
    tracing::debug!(api_url = gateway.base_url(), "Using NDVI backend");

    Ok(WorkflowController::new(
        Arc::new(gateway),
        Box::new(TerminalSurface::new(*output)),
        Box::new(TerminalMap::new(*output)),
        Box::new(TerminalCharts::new(*output)),
        config.view_settings(),
    ))
}
