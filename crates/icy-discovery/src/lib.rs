//! Discovery task orchestration.
//!
//! The [`Orchestrator`] accepts brand criteria, records a [`DiscoveryTask`]
//! in a [`TaskRepository`], and runs the scan/score/rank pipeline in a
//! background tokio task. Callers poll status and fetch results by task id.

pub mod error;
pub mod orchestrator;
pub mod plan;
pub mod repository;
pub mod results;
pub mod task;

pub use error::DiscoveryError;
pub use orchestrator::{DiscoverySettings, Orchestrator};
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use results::DiscoveryResults;
pub use task::{DiscoveryTask, TaskId, TaskStatus, TaskStatusView};
