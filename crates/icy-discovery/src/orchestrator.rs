use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use icy_connectors::{retry_with_backoff, ConnectorError, ConnectorRegistry};
use icy_core::{AppConfig, BrandCriteria, CreatorRecord, Platform, ValidationError};
use icy_scoring::{analyze_creator, rank, ScoredCreator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use uuid::Uuid;

use crate::error::DiscoveryError;
use crate::plan::{plan_steps, platform_quota, StepKind};
use crate::repository::TaskRepository;
use crate::results::DiscoveryResults;
use crate::task::{DiscoveryTask, TaskId, TaskStatus, TaskStatusView};

/// Tunables for the background pipeline.
#[derive(Debug, Clone)]
pub struct DiscoverySettings {
    /// Largest `max_results` a caller may request.
    pub max_results_limit: usize,
    pub step_delay: Duration,
    pub connector_max_retries: u32,
    pub connector_retry_backoff_ms: u64,
    /// Seeds scoring randomness for every task when set.
    pub scoring_seed: Option<u64>,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            max_results_limit: 200,
            step_delay: Duration::from_millis(500),
            connector_max_retries: 2,
            connector_retry_backoff_ms: 100,
            scoring_seed: None,
        }
    }
}

impl DiscoverySettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_results_limit: config.discovery_max_results,
            step_delay: Duration::from_millis(config.discovery_step_delay_ms),
            connector_max_retries: config.connector_max_retries,
            connector_retry_backoff_ms: config.connector_retry_backoff_ms,
            scoring_seed: config.scoring_seed,
        }
    }
}

/// Why a background run ended in `failed`.
#[derive(Debug, Error)]
enum PipelineFailure {
    #[error(transparent)]
    Connector(#[from] ConnectorError),

    #[error(transparent)]
    Task(#[from] DiscoveryError),
}

/// Owns the lifecycle of discovery tasks.
///
/// Cloning is cheap; clones share the repository and connectors.
#[derive(Clone)]
pub struct Orchestrator {
    repository: Arc<dyn TaskRepository>,
    connectors: Arc<ConnectorRegistry>,
    settings: DiscoverySettings,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("connectors", &self.connectors)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

fn dedup_platforms(platforms: Vec<Platform>) -> Vec<Platform> {
    let mut unique = Vec::with_capacity(platforms.len());
    for platform in platforms {
        if !unique.contains(&platform) {
            unique.push(platform);
        }
    }
    unique
}

impl Orchestrator {
    #[must_use]
    pub fn new(
        repository: Arc<dyn TaskRepository>,
        connectors: Arc<ConnectorRegistry>,
        settings: DiscoverySettings,
    ) -> Self {
        Self {
            repository,
            connectors,
            settings,
        }
    }

    #[must_use]
    pub fn connectors(&self) -> &ConnectorRegistry {
        &self.connectors
    }

    /// Validate the request, record a new task and begin processing it in
    /// the background. Returns as soon as the task is recorded.
    ///
    /// Failures during processing are reported through the task's status,
    /// never through this call.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Validation`] for invalid criteria, an empty
    /// platform list or an out-of-range `max_results`, and
    /// [`DiscoveryError::Repository`] if the task cannot be stored.
    pub async fn start(
        &self,
        criteria: BrandCriteria,
        platforms: Vec<Platform>,
        max_results: usize,
    ) -> Result<TaskId, DiscoveryError> {
        criteria.validate()?;

        let platforms = dedup_platforms(platforms);
        if platforms.is_empty() {
            return Err(ValidationError::Empty("platforms").into());
        }

        let limit = self.settings.max_results_limit;
        if !(1..=limit).contains(&max_results) {
            return Err(ValidationError::OutOfRange {
                field: "max_results",
                min: 1,
                max: limit,
                value: max_results,
            }
            .into());
        }

        let task = DiscoveryTask::new(Uuid::new_v4(), criteria, platforms, max_results);
        let id = task.id;
        let started = task.start()?;
        self.repository.insert(task).await?;
        self.repository.put(started).await?;

        tracing::info!(
            task_id = %id,
            max_results,
            "discovery task started"
        );

        let worker = self.clone();
        tokio::spawn(async move {
            worker.execute(id).await;
        });

        Ok(id)
    }

    async fn load(&self, id: TaskId) -> Result<Arc<DiscoveryTask>, DiscoveryError> {
        self.repository
            .get(id)
            .await?
            .ok_or(DiscoveryError::NotFound(id))
    }

    /// # Errors
    ///
    /// Returns [`DiscoveryError::NotFound`] for an unknown or evicted task.
    pub async fn get_status(&self, id: TaskId) -> Result<TaskStatusView, DiscoveryError> {
        Ok(self.load(id).await?.status_view())
    }

    /// # Errors
    ///
    /// Returns [`DiscoveryError::NotFound`] for an unknown task and
    /// [`DiscoveryError::InvalidState`] if it has not completed.
    pub async fn get_results(&self, id: TaskId) -> Result<DiscoveryResults, DiscoveryError> {
        let task = self.load(id).await?;
        if task.status != TaskStatus::Completed {
            return Err(DiscoveryError::InvalidState(format!(
                "task {id} is {}; results are available once it completes",
                task.status
            )));
        }
        Ok(DiscoveryResults::from_task(&task))
    }

    /// Number of retained tasks, running or finished.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn task_count(&self) -> Result<usize, DiscoveryError> {
        self.repository.count().await
    }

    /// Drop finished tasks that completed more than `older_than` ago.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn evict_finished(&self, older_than: Duration) -> Result<usize, DiscoveryError> {
        let cutoff = TimeDelta::from_std(older_than)
            .ok()
            .and_then(|age| Utc::now().checked_sub_signed(age))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let removed = self.repository.remove_finished_before(cutoff).await?;
        if removed > 0 {
            tracing::info!(removed, "evicted finished discovery tasks");
        }
        Ok(removed)
    }

    async fn execute(&self, id: TaskId) {
        if let Err(failure) = self.run_pipeline(id).await {
            tracing::warn!(task_id = %id, error = %failure, "discovery task failed");
            self.mark_failed(id, failure.to_string()).await;
        }
    }

    async fn mark_failed(&self, id: TaskId, message: String) {
        if let Err(e) = self.record_failure(id, message).await {
            tracing::error!(task_id = %id, error = %e, "could not record discovery failure");
        }
    }

    async fn record_failure(&self, id: TaskId, message: String) -> Result<(), DiscoveryError> {
        let current = self.load(id).await?;
        if current.status.is_terminal() {
            return Ok(());
        }
        self.repository.put(current.fail(message)?).await
    }

    fn scoring_rng(&self) -> StdRng {
        match self.settings.scoring_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    async fn pause(&self) {
        if !self.settings.step_delay.is_zero() {
            tokio::time::sleep(self.settings.step_delay).await;
        }
    }

    async fn scan(
        &self,
        platform: Platform,
        criteria: &BrandCriteria,
        quota: usize,
    ) -> Result<Vec<CreatorRecord>, ConnectorError> {
        let connector = self.connectors.get(platform)?;
        let mut found = retry_with_backoff(
            self.settings.connector_max_retries,
            self.settings.connector_retry_backoff_ms,
            || connector.discover(criteria, quota),
        )
        .await?;
        found.truncate(quota);
        Ok(found)
    }

    async fn run_pipeline(&self, id: TaskId) -> Result<(), PipelineFailure> {
        let mut task = self.load(id).await?;
        let criteria = task.criteria.clone();
        let max_results = task.max_results;
        let steps = plan_steps(&task.platforms);
        let quota = platform_quota(max_results, task.platforms.len());
        let mut rng = self.scoring_rng();

        let mut raw: Vec<CreatorRecord> = Vec::new();
        let mut scored: Vec<ScoredCreator> = Vec::new();

        for step in &steps {
            let next = task.advance(&step.label, step.progress)?;
            self.repository.put(next.clone()).await?;
            task = Arc::new(next);
            tracing::debug!(task_id = %id, step = %step.label, progress = step.progress, "discovery step");

            self.pause().await;

            match step.kind {
                StepKind::Scan(platform) => {
                    let found = self.scan(platform, &criteria, quota).await?;
                    tracing::debug!(task_id = %id, %platform, found = found.len(), "platform scanned");
                    raw.extend(found);
                }
                StepKind::Analyze => {
                    raw.truncate(max_results);
                    scored = raw
                        .drain(..)
                        .map(|record| analyze_creator(record, &criteria, &mut rng))
                        .collect();
                }
                StepKind::Rank => {
                    scored = rank(std::mem::take(&mut scored));
                }
            }
        }

        let found = scored.len();
        self.repository.put(task.complete(scored)?).await?;
        tracing::info!(task_id = %id, found, "discovery task completed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
