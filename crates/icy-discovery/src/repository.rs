use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::DiscoveryError;
use crate::task::{DiscoveryTask, TaskId};

/// Storage for discovery task snapshots.
///
/// Each task has a single writer (its background execution); readers get the
/// latest complete snapshot.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Store a new task.
    ///
    /// Fails with [`DiscoveryError::Repository`] if the id is already present.
    async fn insert(&self, task: DiscoveryTask) -> Result<(), DiscoveryError>;

    async fn get(&self, id: TaskId) -> Result<Option<Arc<DiscoveryTask>>, DiscoveryError>;

    /// Replace the snapshot for an existing task.
    ///
    /// Fails with [`DiscoveryError::NotFound`] if the task was never stored or
    /// has been evicted.
    async fn put(&self, task: DiscoveryTask) -> Result<(), DiscoveryError>;

    /// Remove terminal tasks that finished before `cutoff`. Returns how many
    /// were removed.
    async fn remove_finished_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DiscoveryError>;

    async fn count(&self) -> Result<usize, DiscoveryError>;
}

/// Process-local task store. Contents are lost on shutdown.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: DashMap<TaskId, Arc<DiscoveryTask>>,
}

impl InMemoryTaskRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: DiscoveryTask) -> Result<(), DiscoveryError> {
        match self.tasks.entry(task.id) {
            Entry::Occupied(_) => Err(DiscoveryError::Repository(format!(
                "task {} already exists",
                task.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(task));
                Ok(())
            }
        }
    }

    async fn get(&self, id: TaskId) -> Result<Option<Arc<DiscoveryTask>>, DiscoveryError> {
        Ok(self.tasks.get(&id).map(|entry| Arc::clone(entry.value())))
    }

    async fn put(&self, task: DiscoveryTask) -> Result<(), DiscoveryError> {
        match self.tasks.get_mut(&task.id) {
            Some(mut entry) => {
                *entry = Arc::new(task);
                Ok(())
            }
            None => Err(DiscoveryError::NotFound(task.id)),
        }
    }

    async fn remove_finished_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DiscoveryError> {
        let mut removed = 0usize;
        self.tasks.retain(|_, task| {
            let expired = task.status.is_terminal()
                && task.completed_at.is_some_and(|done| done < cutoff);
            if expired {
                removed += 1;
            }
            !expired
        });
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, DiscoveryError> {
        Ok(self.tasks.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use icy_core::{BrandCriteria, BrandTone, BudgetTier, CampaignGoal, Platform};
    use uuid::Uuid;

    use super::*;
    use crate::task::TaskStatus;

    fn task() -> DiscoveryTask {
        DiscoveryTask::new(
            Uuid::new_v4(),
            BrandCriteria {
                product_name: "Glow".to_string(),
                product_description: String::new(),
                target_interests: "beauty, skincare".to_string(),
                target_region: "global".to_string(),
                budget_tier: BudgetTier::Micro,
                platforms: vec![Platform::Instagram],
                brand_tone: BrandTone::Friendly,
                campaign_goal: CampaignGoal::Awareness,
            },
            vec![Platform::Instagram],
            10,
        )
    }

    #[tokio::test]
    async fn insert_then_get_returns_snapshot() {
        let repo = InMemoryTaskRepository::new();
        let t = task();
        let id = t.id;
        repo.insert(t).await.unwrap();
        let got = repo.get(id).await.unwrap().expect("stored");
        assert_eq!(got.status, TaskStatus::Created);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let repo = InMemoryTaskRepository::new();
        let t = task();
        repo.insert(t.clone()).await.unwrap();
        assert!(matches!(
            repo.insert(t).await,
            Err(DiscoveryError::Repository(_))
        ));
    }

    #[tokio::test]
    async fn put_replaces_but_readers_keep_old_snapshot() {
        let repo = InMemoryTaskRepository::new();
        let t = task();
        let id = t.id;
        repo.insert(t.clone()).await.unwrap();
        let before = repo.get(id).await.unwrap().unwrap();

        repo.put(t.start().unwrap()).await.unwrap();

        assert_eq!(before.status, TaskStatus::Created);
        let after = repo.get(id).await.unwrap().unwrap();
        assert_eq!(after.status, TaskStatus::Started);
    }

    #[tokio::test]
    async fn put_unknown_task_is_not_found() {
        let repo = InMemoryTaskRepository::new();
        assert!(matches!(
            repo.put(task()).await,
            Err(DiscoveryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn removes_only_expired_terminal_tasks() {
        let repo = InMemoryTaskRepository::new();
        let running = task().start().unwrap();
        let finished = task().start().unwrap().complete(Vec::new()).unwrap();
        let finished_id = finished.id;
        repo.insert(running).await.unwrap();
        repo.insert(finished).await.unwrap();

        let past = Utc::now() - TimeDelta::hours(1);
        assert_eq!(repo.remove_finished_before(past).await.unwrap(), 0);

        let future = Utc::now() + TimeDelta::seconds(5);
        assert_eq!(repo.remove_finished_before(future).await.unwrap(), 1);
        assert!(repo.get(finished_id).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
