use async_trait::async_trait;
use icy_core::{BrandCriteria, ContentItem, CreatorRecord, Platform};

use crate::audience::AudienceInsights;
use crate::error::ConnectorError;

/// A source of creator profiles and content for one platform.
#[async_trait]
pub trait PlatformConnector: Send + Sync {
    fn platform(&self) -> Platform;

    /// Return at most `limit` creator records relevant to `criteria`.
    async fn discover(
        &self,
        criteria: &BrandCriteria,
        limit: usize,
    ) -> Result<Vec<CreatorRecord>, ConnectorError>;

    /// Look up one creator by connector-scoped id.
    ///
    /// Returns [`ConnectorError::NotFound`] if this connector does not know the id.
    async fn get_creator(&self, creator_id: &str) -> Result<CreatorRecord, ConnectorError>;

    /// Most recent posts or videos for a creator, newest first.
    async fn recent_content(
        &self,
        creator_id: &str,
        limit: usize,
    ) -> Result<Vec<ContentItem>, ConnectorError>;

    /// Audience demographics for a creator this connector owns.
    async fn audience_insights(
        &self,
        creator_id: &str,
    ) -> Result<AudienceInsights, ConnectorError>;
}
