//! Platform connectors for creator discovery.
//!
//! A [`PlatformConnector`] yields raw creator records, recent content and
//! audience insights for one platform. The shipped Instagram and YouTube
//! connectors are simulated: they serve a seed catalog and pad results with
//! deterministic filler creators, with configurable latency and no network
//! access.

pub mod audience;
pub mod connector;
pub mod error;
pub mod registry;
pub mod retry;
pub mod simulated;

mod instagram;
mod youtube;

pub use audience::{
    AudienceInsights, ChannelAnalytics, Demographics, EngagementPatterns, InterestAffinity,
    RegionShare,
};
pub use connector::PlatformConnector;
pub use error::ConnectorError;
pub use registry::ConnectorRegistry;
pub use retry::retry_with_backoff;
pub use simulated::{builtin_catalog, SimulatedConnector};
