//! Concurrent assembly of every definition in a deployment

use crate::loader::load_definition;
use anyhow::{anyhow, Context, Result};
use inbound_api::InboundEndpoint;
use inbound_core::{assemble, AssemblyContext};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// An endpoint assembled from a definition file
#[derive(Debug, Serialize)]
pub struct DeployedEndpoint {
    pub source: PathBuf,
    pub endpoint: InboundEndpoint,
}

/// A definition file that failed to assemble
#[derive(Debug, Serialize)]
pub struct DeploymentFailure {
    pub source: PathBuf,
    pub error: String,
}

/// Outcome of a deployment run
#[derive(Debug, Default, Serialize)]
pub struct DeploymentReport {
    pub deployed: Vec<DeployedEndpoint>,
    pub failures: Vec<DeploymentFailure>,
}

impl DeploymentReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

fn deploy_file(path: &Path, context: &AssemblyContext) -> Result<InboundEndpoint> {
    let element = load_definition(path)?;
    let endpoint = assemble(&element, context)
        .with_context(|| format!("failed to assemble {}", path.display()))?;
    Ok(endpoint)
}

/// Assemble every file on the blocking pool.
///
/// Results are reported in file order. With `fail_fast` the first failure is
/// returned as an error instead of being collected.
pub async fn deploy_all(
    files: Vec<PathBuf>,
    context: AssemblyContext,
    fail_fast: bool,
) -> Result<DeploymentReport> {
    let tasks: Vec<_> = files
        .into_iter()
        .map(|path| {
            let context = context.clone();
            tokio::task::spawn_blocking(move || {
                let result = deploy_file(&path, &context);
                (path, result)
            })
        })
        .collect();

    let mut report = DeploymentReport::default();
    for task in tasks {
        let (source, result) = task.await?;
        match result {
            Ok(endpoint) => {
                info!(
                    "Deployed inbound endpoint {} from {}",
                    endpoint.name,
                    source.display()
                );
                report.deployed.push(DeployedEndpoint { source, endpoint });
            }
            Err(e) => {
                error!("Error deploying {}: {:#}", source.display(), e);
                if fail_fast {
                    return Err(anyhow!("deployment aborted: {:#}", e));
                }
                report.failures.push(DeploymentFailure {
                    source,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(report)
}
