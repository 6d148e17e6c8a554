//! Campaign records and their simulated performance metrics.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use icy_core::BrandCriteria;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::OutreachError;

pub type CampaignId = Uuid;

pub const DEFAULT_CAMPAIGN_NAME: &str = "Untitled Campaign";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub brand: BrandCriteria,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// Validate `brand` and build a campaign with a fresh id. A missing or
    /// blank name becomes [`DEFAULT_CAMPAIGN_NAME`].
    ///
    /// # Errors
    ///
    /// Returns [`OutreachError::Validation`] if the brand criteria are invalid.
    pub fn new(name: Option<String>, brand: BrandCriteria) -> Result<Self, OutreachError> {
        brand.validate()?;
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_CAMPAIGN_NAME.to_string());
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            brand,
            created_at: Utc::now(),
        })
    }
}

/// Storage for campaigns.
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Fails with [`OutreachError::Repository`] if the id is already present.
    async fn insert(&self, campaign: Campaign) -> Result<(), OutreachError>;

    async fn get(&self, id: CampaignId) -> Result<Option<Arc<Campaign>>, OutreachError>;
}

/// Process-local campaign store. Contents are lost on shutdown.
#[derive(Debug, Default)]
pub struct InMemoryCampaignRepository {
    campaigns: DashMap<CampaignId, Arc<Campaign>>,
}

impl InMemoryCampaignRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampaignRepository for InMemoryCampaignRepository {
    async fn insert(&self, campaign: Campaign) -> Result<(), OutreachError> {
        match self.campaigns.entry(campaign.id) {
            Entry::Occupied(_) => Err(OutreachError::Repository(format!(
                "campaign {} already exists",
                campaign.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(campaign));
                Ok(())
            }
        }
    }

    async fn get(&self, id: CampaignId) -> Result<Option<Arc<Campaign>>, OutreachError> {
        Ok(self.campaigns.get(&id).map(|entry| Arc::clone(entry.value())))
    }
}

/// Performance snapshot for one campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub campaign_id: CampaignId,
    pub total_reach: u64,
    pub total_engagement: u64,
    /// Percent, one decimal.
    pub response_rate: f64,
    pub conversion_rate: f64,
    pub roi_percentage: f64,
    pub messages_sent: u32,
    pub responses_received: u32,
    /// Never more than `responses_received`.
    pub collaborations_confirmed: u32,
    pub calculated_at: DateTime<Utc>,
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl CampaignMetrics {
    /// Draw a metrics snapshot for `campaign_id` from `rng`.
    pub fn simulate<R: Rng + ?Sized>(campaign_id: CampaignId, rng: &mut R) -> Self {
        let messages_sent = rng.random_range(20..=100);
        let responses_received = rng.random_range(5..=30);
        let collaborations_confirmed = rng.random_range(2..=15_u32).min(responses_received);
        Self {
            campaign_id,
            total_reach: rng.random_range(100_000..=5_000_000),
            total_engagement: rng.random_range(5_000..=200_000),
            response_rate: one_decimal(rng.random_range(15.0..=35.0)),
            conversion_rate: one_decimal(rng.random_range(1.5..=8.0)),
            roi_percentage: one_decimal(rng.random_range(120.0..=300.0)),
            messages_sent,
            responses_received,
            collaborations_confirmed,
            calculated_at: Utc::now(),
        }
    }
}

/// Look up a campaign and draw its current metrics.
///
/// # Errors
///
/// Returns [`OutreachError::CampaignNotFound`] for an unknown id and
/// propagates repository failures.
pub async fn campaign_metrics<R: Rng + ?Sized>(
    repository: &dyn CampaignRepository,
    id: CampaignId,
    rng: &mut R,
) -> Result<CampaignMetrics, OutreachError> {
    let campaign = repository
        .get(id)
        .await?
        .ok_or(OutreachError::CampaignNotFound(id))?;
    Ok(CampaignMetrics::simulate(campaign.id, rng))
}
