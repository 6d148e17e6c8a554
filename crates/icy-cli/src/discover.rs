//! `discover` subcommand: run one discovery task to completion in-process.

use std::sync::Arc;
use std::time::Duration;

use icy_connectors::ConnectorRegistry;
use icy_core::{AppConfig, BrandCriteria, Platform};
use icy_discovery::{
    DiscoveryResults, DiscoverySettings, InMemoryTaskRepository, Orchestrator, TaskStatus,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Orchestrator settings for a one-shot run. Nobody polls progress from the
/// terminal, so steps run back to back.
pub(crate) fn cli_settings(config: &AppConfig, seed: Option<u64>) -> DiscoverySettings {
    DiscoverySettings {
        step_delay: Duration::ZERO,
        scoring_seed: seed.or(config.scoring_seed),
        ..DiscoverySettings::from_config(config)
    }
}

/// Start a discovery task and wait for it to finish.
///
/// # Errors
///
/// Returns an error if the request is rejected or the task ends in `failed`.
pub(crate) async fn run_discover(
    registry: ConnectorRegistry,
    settings: DiscoverySettings,
    criteria: BrandCriteria,
    platforms: Vec<Platform>,
    max_results: usize,
) -> anyhow::Result<DiscoveryResults> {
    let orchestrator = Orchestrator::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(registry),
        settings,
    );
    let task_id = orchestrator.start(criteria, platforms, max_results).await?;

    loop {
        let status = orchestrator.get_status(task_id).await?;
        match status.status {
            TaskStatus::Completed => break,
            TaskStatus::Failed => anyhow::bail!(
                "discovery failed: {}",
                status.error.unwrap_or_else(|| "unknown error".to_string())
            ),
            _ => {
                tracing::debug!(progress = status.progress, step = ?status.step, "waiting");
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        }
    }

    let results = orchestrator.get_results(task_id).await?;
    tracing::info!(
        total = results.total_count,
        high = results.high_matches,
        medium = results.medium_matches,
        low = results.low_matches,
        "discovery complete"
    );
    Ok(results)
}
