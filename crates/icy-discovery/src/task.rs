use chrono::{DateTime, Utc};
use icy_core::{BrandCriteria, Platform};
use icy_scoring::ScoredCreator;
use serde::Serialize;
use uuid::Uuid;

use crate::error::DiscoveryError;

pub type TaskId = Uuid;

/// Lifecycle of a discovery task. Variants are declared in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Created,
    Started,
    Processing,
    Completed,
    Failed,
}

impl TaskStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Created => "created",
            TaskStatus::Started => "started",
            TaskStatus::Processing => "processing",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }

    /// Forward-only transitions. `Processing` may repeat; terminal states are final.
    #[must_use]
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            TaskStatus::Processing => self <= TaskStatus::Processing,
            TaskStatus::Failed => true,
            _ => next > self,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovery request and everything known about its progress.
///
/// Tasks are immutable snapshots: every transition produces a new value and
/// leaves the original untouched.
#[derive(Debug, Clone)]
pub struct DiscoveryTask {
    pub id: TaskId,
    pub status: TaskStatus,
    /// Label of the step currently running.
    pub step: Option<String>,
    pub progress: u8,
    pub criteria: BrandCriteria,
    pub platforms: Vec<Platform>,
    pub max_results: usize,
    pub results: Vec<ScoredCreator>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

/// Status snapshot returned to pollers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatusView {
    pub task_id: TaskId,
    pub status: TaskStatus,
    pub step: Option<String>,
    pub progress: u8,
    pub influencers_found: usize,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl DiscoveryTask {
    #[must_use]
    pub fn new(
        id: TaskId,
        criteria: BrandCriteria,
        platforms: Vec<Platform>,
        max_results: usize,
    ) -> Self {
        Self {
            id,
            status: TaskStatus::Created,
            step: None,
            progress: 0,
            criteria,
            platforms,
            max_results,
            results: Vec::new(),
            created_at: Utc::now(),
            completed_at: None,
            error: None,
        }
    }

    fn check(&self, next: TaskStatus, progress: u8) -> Result<(), DiscoveryError> {
        if !self.status.can_transition_to(next) {
            return Err(DiscoveryError::InvalidState(format!(
                "task {} cannot move from {} to {next}",
                self.id, self.status
            )));
        }
        if progress < self.progress || progress > 100 {
            return Err(DiscoveryError::InvalidState(format!(
                "task {} progress cannot move from {} to {progress}",
                self.id, self.progress
            )));
        }
        Ok(())
    }

    /// Mark the task as picked up by a worker.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::InvalidState`] unless the task is `created`.
    pub fn start(&self) -> Result<Self, DiscoveryError> {
        self.check(TaskStatus::Started, self.progress)?;
        Ok(Self {
            status: TaskStatus::Started,
            ..self.clone()
        })
    }

    /// Enter a processing step.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::InvalidState`] if the task is terminal or
    /// `progress` is lower than the current progress.
    pub fn advance(&self, step: &str, progress: u8) -> Result<Self, DiscoveryError> {
        self.check(TaskStatus::Processing, progress)?;
        Ok(Self {
            status: TaskStatus::Processing,
            step: Some(step.to_string()),
            progress,
            ..self.clone()
        })
    }

    /// Finish with ranked results.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::InvalidState`] if the task is already terminal.
    pub fn complete(&self, results: Vec<ScoredCreator>) -> Result<Self, DiscoveryError> {
        self.check(TaskStatus::Completed, 100)?;
        Ok(Self {
            status: TaskStatus::Completed,
            step: None,
            progress: 100,
            results,
            completed_at: Some(Utc::now()),
            ..self.clone()
        })
    }

    /// Finish with an error. Progress stays where it was.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::InvalidState`] if the task is already terminal.
    pub fn fail(&self, error: String) -> Result<Self, DiscoveryError> {
        self.check(TaskStatus::Failed, self.progress)?;
        Ok(Self {
            status: TaskStatus::Failed,
            completed_at: Some(Utc::now()),
            error: Some(error),
            ..self.clone()
        })
    }

    #[must_use]
    pub fn status_view(&self) -> TaskStatusView {
        TaskStatusView {
            task_id: self.id,
            status: self.status,
            step: self.step.clone(),
            progress: self.progress,
            influencers_found: self.results.len(),
            created_at: self.created_at,
            completed_at: self.completed_at,
            error: self.error.clone(),
        }
    }
}
