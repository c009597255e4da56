use anyhow::Result;
use clap::Parser;
use inbound_core::{AssemblyContext, HandlerRegistry, PlaceholderResolver};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod deploy;
mod loader;

use config::{Cli, DeployerConfig, LogFormat};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DeployerConfig::load(&cli)?;
    init_tracing(config.log_format);

    info!("Starting inbound-deployer...");

    let registry = loader::load_registry(config.registry_file.as_deref())?;
    let properties = loader::load_properties(config.properties_file.as_deref())?;
    let resolver = PlaceholderResolver::from_env().with_properties(properties);
    let handlers = HandlerRegistry::with_builtins();
    info!("Handler classes available: {}", handlers.classes().join(", "));

    let context = AssemblyContext::new(Arc::new(registry), Arc::new(resolver), Arc::new(handlers));

    let files = loader::discover_definitions(&config.endpoints_dir)?;
    if files.is_empty() {
        warn!("No endpoint definitions found in {}", config.endpoints_dir.display());
    }
    info!("Assembling {} endpoint definitions", files.len());

    let report = deploy::deploy_all(files, context, config.fail_fast).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!(
        "Deployed {} inbound endpoints, {} failed",
        report.deployed.len(),
        report.failures.len()
    );

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
