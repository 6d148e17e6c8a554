use icy_core::ValidationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("discovery task not found: {0}")]
    NotFound(Uuid),

    #[error("invalid task state: {0}")]
    InvalidState(String),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("task repository error: {0}")]
    Repository(String),
}
