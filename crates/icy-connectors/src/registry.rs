use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use icy_core::{ContentItem, CreatorRecord, Platform};

use crate::audience::AudienceInsights;
use crate::connector::PlatformConnector;
use crate::error::ConnectorError;
use crate::simulated::SimulatedConnector;

/// Platform-keyed set of connectors shared by discovery and outreach.
#[derive(Clone, Default)]
pub struct ConnectorRegistry {
    connectors: BTreeMap<Platform, Arc<dyn PlatformConnector>>,
}

impl std::fmt::Debug for ConnectorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorRegistry")
            .field("platforms", &self.platforms())
            .finish()
    }
}

impl ConnectorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the simulated Instagram and YouTube connectors over `catalog`.
    #[must_use]
    pub fn simulated(catalog: &[CreatorRecord], latency: Duration) -> Self {
        let unserved = catalog
            .iter()
            .filter(|c| !matches!(c.platform, Platform::Instagram | Platform::Youtube))
            .count();
        if unserved > 0 {
            tracing::warn!(
                unserved,
                "catalog contains creators on platforms without a connector"
            );
        }

        Self::new()
            .with(Arc::new(SimulatedConnector::instagram(catalog, latency)))
            .with(Arc::new(SimulatedConnector::youtube(catalog, latency)))
    }

    /// Register `connector`, replacing any existing one for the same platform.
    #[must_use]
    pub fn with(mut self, connector: Arc<dyn PlatformConnector>) -> Self {
        self.connectors.insert(connector.platform(), connector);
        self
    }

    /// # Errors
    ///
    /// Returns [`ConnectorError::UnsupportedPlatform`] if nothing is registered
    /// for `platform`.
    pub fn get(&self, platform: Platform) -> Result<Arc<dyn PlatformConnector>, ConnectorError> {
        self.connectors
            .get(&platform)
            .cloned()
            .ok_or(ConnectorError::UnsupportedPlatform(platform))
    }

    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        self.connectors.keys().copied().collect()
    }

    async fn owner_of(
        &self,
        creator_id: &str,
    ) -> Result<(Arc<dyn PlatformConnector>, CreatorRecord), ConnectorError> {
        for connector in self.connectors.values() {
            match connector.get_creator(creator_id).await {
                Ok(creator) => return Ok((Arc::clone(connector), creator)),
                Err(ConnectorError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Err(ConnectorError::NotFound(creator_id.to_string()))
    }

    /// Resolve a creator id against every registered connector.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::NotFound`] if no connector knows the id, or
    /// the first non-`NotFound` error a connector reports.
    pub async fn find_creator(&self, creator_id: &str) -> Result<CreatorRecord, ConnectorError> {
        self.owner_of(creator_id).await.map(|(_, creator)| creator)
    }

    /// Recent content for a creator on whichever platform owns the id.
    ///
    /// # Errors
    ///
    /// Same as [`ConnectorRegistry::find_creator`].
    pub async fn recent_content(
        &self,
        creator_id: &str,
        limit: usize,
    ) -> Result<Vec<ContentItem>, ConnectorError> {
        let (connector, _) = self.owner_of(creator_id).await?;
        connector.recent_content(creator_id, limit).await
    }

    /// Audience demographics from whichever platform owns the id.
    ///
    /// # Errors
    ///
    /// Same as [`ConnectorRegistry::find_creator`].
    pub async fn audience_insights(
        &self,
        creator_id: &str,
    ) -> Result<AudienceInsights, ConnectorError> {
        let (connector, _) = self.owner_of(creator_id).await?;
        connector.audience_insights(creator_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::builtin_catalog;

    fn registry() -> ConnectorRegistry {
        ConnectorRegistry::simulated(&builtin_catalog().unwrap(), Duration::ZERO)
    }

    #[test]
    fn simulated_registry_serves_instagram_and_youtube() {
        assert_eq!(
            registry().platforms(),
            vec![Platform::Instagram, Platform::Youtube]
        );
    }

    #[test]
    fn missing_platform_is_unsupported() {
        let Err(err) = registry().get(Platform::Tiktok) else {
            panic!("tiktok has no connector");
        };
        assert!(matches!(
            err,
            ConnectorError::UnsupportedPlatform(Platform::Tiktok)
        ));
    }

    #[tokio::test]
    async fn find_creator_searches_every_platform() {
        let registry = registry();
        let ig = registry.find_creator("instagram_002").await.unwrap();
        assert_eq!(ig.display_name, "Emma Thompson");
        let yt = registry.find_creator("youtube_002").await.unwrap();
        assert_eq!(yt.platform, Platform::Youtube);
    }

    #[tokio::test]
    async fn find_creator_unknown_id_is_not_found() {
        let result = registry().find_creator("myspace_001").await;
        assert!(matches!(result, Err(ConnectorError::NotFound(id)) if id == "myspace_001"));
    }

    #[tokio::test]
    async fn recent_content_routes_to_owner() {
        let items = registry().recent_content("youtube_001", 4).await.unwrap();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|i| i.platform == Platform::Youtube));
    }

    #[tokio::test]
    async fn audience_insights_route_to_owner() {
        let insights = registry().audience_insights("youtube_002").await.unwrap();
        assert_eq!(insights.platform, Platform::Youtube);
        assert_eq!(insights.creator_id, "youtube_002");
    }
}
