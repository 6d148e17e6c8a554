mod api;
mod middleware;
mod scheduler;

use std::sync::Arc;
use std::time::Duration;

use icy_connectors::{builtin_catalog, ConnectorRegistry};
use icy_discovery::{DiscoverySettings, InMemoryTaskRepository, Orchestrator};
use icy_outreach::{InMemoryCampaignRepository, SimulatedSender};
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::RateLimitState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = icy_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = match &config.creators_path {
        Some(path) => icy_core::load_catalog(path)?.creators,
        None => builtin_catalog()?,
    };
    tracing::info!(creators = catalog.len(), env = %config.env, "creator catalog loaded");

    let latency = Duration::from_millis(config.connector_latency_ms);
    let connectors = ConnectorRegistry::simulated(&catalog, latency);
    let orchestrator = Orchestrator::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(connectors),
        DiscoverySettings::from_config(&config),
    );

    let _scheduler = scheduler::build_scheduler(
        orchestrator.clone(),
        Duration::from_secs(config.task_retention_secs),
    )
    .await?;

    let state = AppState {
        orchestrator,
        campaigns: Arc::new(InMemoryCampaignRepository::new()),
        sender: Arc::new(SimulatedSender::new(
            config.send_success_rate,
            latency,
            config.scoring_seed,
        )),
        rng_seed: config.scoring_seed,
    };
    let rate_limit = RateLimitState::new(config.rate_limit_per_minute, Duration::from_secs(60));
    let app = build_app(state, rate_limit);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "icy-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
