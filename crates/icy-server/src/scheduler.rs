//! Background job scheduler.
//!
//! Evicts finished discovery tasks once they outlive the retention window.

use std::time::Duration;

use icy_discovery::Orchestrator;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Every minute, on the minute.
const EVICTION_SCHEDULE: &str = "0 * * * * *";

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process. Dropping it shuts down all scheduled jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised, the
/// job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(
    orchestrator: Orchestrator,
    retention: Duration,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;
    register_eviction_job(&scheduler, orchestrator, retention).await?;
    scheduler.start().await?;
    Ok(scheduler)
}

async fn register_eviction_job(
    scheduler: &JobScheduler,
    orchestrator: Orchestrator,
    retention: Duration,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_async(EVICTION_SCHEDULE, move |_uuid, _lock| {
        let orchestrator = orchestrator.clone();

        Box::pin(async move {
            if let Err(e) = orchestrator.evict_finished(retention).await {
                tracing::error!(error = %e, "scheduler: task eviction failed");
            }
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}
