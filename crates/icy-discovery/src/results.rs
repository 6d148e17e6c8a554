use icy_scoring::{ScoredCreator, TierCounts};
use serde::Serialize;

use crate::task::{DiscoveryTask, TaskId};

/// Ranked creators of a completed task with their match-tier breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryResults {
    pub task_id: TaskId,
    /// Sorted by match score, highest first.
    pub influencers: Vec<ScoredCreator>,
    pub total_count: usize,
    pub high_matches: usize,
    pub medium_matches: usize,
    pub low_matches: usize,
}

impl DiscoveryResults {
    #[must_use]
    pub fn from_task(task: &DiscoveryTask) -> Self {
        let counts = TierCounts::tally(&task.results);
        Self {
            task_id: task.id,
            influencers: task.results.clone(),
            total_count: counts.total,
            high_matches: counts.high,
            medium_matches: counts.medium,
            low_matches: counts.low,
        }
    }
}
