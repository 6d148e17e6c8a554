//! Delivery of outreach messages.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use icy_core::ValidationError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

pub const DEFAULT_SUCCESS_RATE: f64 = 0.75;

const UNDELIVERABLE: &str = "Creator inbox full or unavailable";

/// A message ready to be sent to a creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    #[serde(alias = "influencer_id")]
    pub creator_id: String,
    pub subject: String,
    #[serde(alias = "message")]
    pub body: String,
}

impl OutboundMessage {
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for a blank creator id, subject or
    /// body.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.creator_id.trim().is_empty() {
            return Err(ValidationError::Empty("creator_id"));
        }
        if self.subject.trim().is_empty() {
            return Err(ValidationError::Empty("subject"));
        }
        if self.body.trim().is_empty() {
            return Err(ValidationError::Empty("message"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

/// Outcome of one send attempt. A failed delivery is a normal outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub creator_id: String,
    pub status: DeliveryStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryReceipt {
    fn sent(creator_id: &str) -> Self {
        Self {
            creator_id: creator_id.to_string(),
            status: DeliveryStatus::Sent,
            message: "Message sent successfully".to_string(),
            sent_at: Some(Utc::now()),
            error: None,
        }
    }

    fn failed(creator_id: &str, reason: &str) -> Self {
        Self {
            creator_id: creator_id.to_string(),
            status: DeliveryStatus::Failed,
            message: "Failed to send message".to_string(),
            sent_at: None,
            error: Some(reason.to_string()),
        }
    }
}

/// Transport for outreach messages.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> DeliveryReceipt;
}

/// Sender that delivers nothing and reports success with a fixed
/// probability.
pub struct SimulatedSender {
    success_rate: f64,
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for SimulatedSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedSender")
            .field("success_rate", &self.success_rate)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl SimulatedSender {
    /// `success_rate` is clamped to `[0, 1]`; a non-finite rate falls back to
    /// [`DEFAULT_SUCCESS_RATE`]. A `seed` pins the delivery sequence.
    #[must_use]
    pub fn new(success_rate: f64, latency: Duration, seed: Option<u64>) -> Self {
        let success_rate = if success_rate.is_finite() {
            success_rate.clamp(0.0, 1.0)
        } else {
            DEFAULT_SUCCESS_RATE
        };
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            success_rate,
            latency,
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl MessageSender for SimulatedSender {
    async fn send(&self, message: &OutboundMessage) -> DeliveryReceipt {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let delivered = self.rng.lock().await.random_bool(self.success_rate);
        if delivered {
            tracing::info!(creator_id = %message.creator_id, "outreach message sent");
            DeliveryReceipt::sent(&message.creator_id)
        } else {
            tracing::warn!(
                creator_id = %message.creator_id,
                reason = UNDELIVERABLE,
                "outreach message not delivered"
            );
            DeliveryReceipt::failed(&message.creator_id, UNDELIVERABLE)
        }
    }
}
