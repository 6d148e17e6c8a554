use icy_core::ValidationError;
use thiserror::Error;

use crate::campaign::CampaignId;

#[derive(Debug, Error)]
pub enum OutreachError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("campaign {0} not found")]
    CampaignNotFound(CampaignId),

    #[error("campaign storage error: {0}")]
    Repository(String),
}
