//! Personalized outreach: message synthesis, delivery and campaigns.
//!
//! [`synthesize`] fills a tone-specific template with rule-selected
//! references to the creator's content, assembles the message body and
//! subject, and scores how personalized the result is. Template choices are
//! drawn from a caller-supplied [`rand::Rng`].
//!
//! Messages leave through a [`MessageSender`]; campaigns are kept in a
//! [`CampaignRepository`].

pub mod campaign;
pub mod error;
pub mod reference;
pub mod send;
pub mod synth;
pub mod templates;

pub use campaign::{
    campaign_metrics, Campaign, CampaignId, CampaignMetrics, CampaignRepository,
    InMemoryCampaignRepository,
};
pub use error::OutreachError;
pub use send::{DeliveryReceipt, DeliveryStatus, MessageSender, OutboundMessage, SimulatedSender};
pub use synth::{personalization_score, synthesize, CreatorContext, MessageParts, OutreachMessage};
pub use templates::resolve_tone;
