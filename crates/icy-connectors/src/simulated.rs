use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use icy_core::{parse_catalog, BrandCriteria, ContentItem, CreatorRecord, Platform};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::audience::{self, AudienceInsights, AudienceProfile};
use crate::connector::PlatformConnector;
use crate::error::ConnectorError;
use crate::{instagram, youtube};

/// Keeps audience draws independent of the content feed for the same id.
const AUDIENCE_SALT: u64 = 0xa0d1_e5ce;

const BUILTIN_CATALOG: &str = include_str!("../../../config/creators.yaml");

/// Parse the seed catalog compiled into the binary.
///
/// # Errors
///
/// Returns [`ConnectorError::Catalog`] if the embedded YAML fails validation.
pub fn builtin_catalog() -> Result<Vec<CreatorRecord>, ConnectorError> {
    Ok(parse_catalog(BUILTIN_CATALOG)?.creators)
}

/// Vocabulary used to fabricate filler creators and their feeds.
pub(crate) struct FillerProfile {
    pub(crate) platform: Platform,
    /// First filler index; seed ids sit below it.
    pub(crate) first_index: u32,
    pub(crate) seed_salt: u64,
    pub(crate) username: fn(u32) -> String,
    pub(crate) display_name: fn(u32) -> String,
    pub(crate) bio: fn(&str) -> String,
    pub(crate) categories: &'static [&'static str],
    pub(crate) locations: &'static [&'static str],
    pub(crate) followers: (u64, u64),
    /// Engagement rate range in tenths of a percent.
    pub(crate) engagement_tenths: (u32, u32),
    pub(crate) posts: &'static [&'static str],
    pub(crate) post_interval_days: i64,
    pub(crate) likes: (u64, u64),
    pub(crate) comments: (u64, u64),
    pub(crate) shares: (u64, u64),
    pub(crate) audience: &'static AudienceProfile,
}

/// In-process connector serving seed creators plus generated filler.
///
/// Filler creators are derived from their numeric id, so `get_creator`
/// resolves any id previously returned by `discover`.
pub struct SimulatedConnector {
    profile: &'static FillerProfile,
    seeds: Vec<CreatorRecord>,
    latency: Duration,
}

impl SimulatedConnector {
    /// Instagram connector over the instagram entries of `catalog`.
    #[must_use]
    pub fn instagram(catalog: &[CreatorRecord], latency: Duration) -> Self {
        Self::with_profile(&instagram::PROFILE, catalog, latency)
    }

    /// YouTube connector over the youtube entries of `catalog`.
    #[must_use]
    pub fn youtube(catalog: &[CreatorRecord], latency: Duration) -> Self {
        Self::with_profile(&youtube::PROFILE, catalog, latency)
    }

    fn with_profile(
        profile: &'static FillerProfile,
        catalog: &[CreatorRecord],
        latency: Duration,
    ) -> Self {
        let seeds = catalog
            .iter()
            .filter(|c| c.platform == profile.platform)
            .cloned()
            .collect();
        Self {
            profile,
            seeds,
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn filler(&self, index: u32) -> CreatorRecord {
        let p = self.profile;
        let mut rng = StdRng::seed_from_u64(p.seed_salt ^ u64::from(index));

        let followers = rng.random_range(p.followers.0..=p.followers.1);
        let engagement_rate =
            f64::from(rng.random_range(p.engagement_tenths.0..=p.engagement_tenths.1)) / 10.0;
        let bio_category = p.categories.choose(&mut rng).copied().unwrap_or("Lifestyle");
        let category = p.categories.choose(&mut rng).copied().unwrap_or("Lifestyle");
        let location = p.locations.choose(&mut rng).copied().unwrap_or_default();
        let recent_post = p.posts.choose(&mut rng).copied().unwrap_or_default();

        CreatorRecord {
            id: self.filler_id(index),
            platform: p.platform,
            username: (p.username)(index),
            display_name: (p.display_name)(index),
            followers,
            engagement_rate,
            category: category.to_string(),
            location: location.to_string(),
            bio: (p.bio)(bio_category),
            verified: rng.random_bool(0.5),
            recent_post: recent_post.to_string(),
        }
    }

    fn filler_id(&self, index: u32) -> String {
        format!("{}_{index:03}", self.profile.platform.as_str())
    }

    /// Index of a filler id. Only the canonical spelling `discover` emits
    /// resolves, so `instagram_0100` is unknown.
    fn filler_index(&self, creator_id: &str) -> Option<u32> {
        let index: u32 = creator_id
            .strip_prefix(self.profile.platform.as_str())?
            .strip_prefix('_')?
            .parse()
            .ok()?;
        (index >= self.profile.first_index && self.filler_id(index) == creator_id)
            .then_some(index)
    }

    fn lookup(&self, creator_id: &str) -> Result<CreatorRecord, ConnectorError> {
        if let Some(seed) = self.seeds.iter().find(|c| c.id == creator_id) {
            return Ok(seed.clone());
        }
        self.filler_index(creator_id)
            .map(|index| self.filler(index))
            .ok_or_else(|| ConnectorError::NotFound(creator_id.to_string()))
    }
}

fn id_seed(id: &str) -> u64 {
    id.bytes()
        .fold(0xcbf2_9ce4_8422_2325, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        })
}

#[async_trait]
impl PlatformConnector for SimulatedConnector {
    fn platform(&self) -> Platform {
        self.profile.platform
    }

    async fn discover(
        &self,
        criteria: &BrandCriteria,
        limit: usize,
    ) -> Result<Vec<CreatorRecord>, ConnectorError> {
        self.simulate_latency().await;

        let mut creators: Vec<CreatorRecord> = self.seeds.iter().take(limit).cloned().collect();
        let filler_needed = limit.saturating_sub(creators.len());
        creators.extend(
            (self.profile.first_index..)
                .take(filler_needed)
                .map(|index| self.filler(index)),
        );

        tracing::debug!(
            platform = %self.profile.platform,
            product = %criteria.product_name,
            limit,
            returned = creators.len(),
            "simulated discovery"
        );
        Ok(creators)
    }

    async fn get_creator(&self, creator_id: &str) -> Result<CreatorRecord, ConnectorError> {
        self.simulate_latency().await;
        self.lookup(creator_id)
    }

    async fn recent_content(
        &self,
        creator_id: &str,
        limit: usize,
    ) -> Result<Vec<ContentItem>, ConnectorError> {
        self.simulate_latency().await;
        let creator = self.lookup(creator_id)?;
        let p = self.profile;
        let mut rng = StdRng::seed_from_u64(id_seed(&creator.id));
        let now = Utc::now();

        let items = (0..limit)
            .map(|i| {
                let text = if i == 0 && !creator.recent_post.is_empty() {
                    creator.recent_post.clone()
                } else {
                    p.posts.choose(&mut rng).copied().unwrap_or_default().to_string()
                };
                let age_days = i64::try_from(i).unwrap_or(i64::MAX / 2) * p.post_interval_days;
                ContentItem {
                    id: format!("{}_post_{i}", creator.id),
                    platform: p.platform,
                    text,
                    published_at: now - TimeDelta::days(age_days),
                    likes: rng.random_range(p.likes.0..=p.likes.1),
                    comments: rng.random_range(p.comments.0..=p.comments.1),
                    shares: rng.random_range(p.shares.0..=p.shares.1),
                }
            })
            .collect();
        Ok(items)
    }

    async fn audience_insights(
        &self,
        creator_id: &str,
    ) -> Result<AudienceInsights, ConnectorError> {
        self.simulate_latency().await;
        let creator = self.lookup(creator_id)?;
        let mut rng = StdRng::seed_from_u64(id_seed(&creator.id) ^ AUDIENCE_SALT);
        Ok(audience::simulate(&creator, self.profile.audience, &mut rng))
    }
}

#[cfg(test)]
mod tests {
    use icy_core::{BrandTone, BudgetTier, CampaignGoal};

    use super::*;

    fn criteria() -> BrandCriteria {
        BrandCriteria {
            product_name: "Glow Serum".to_string(),
            product_description: String::new(),
            target_interests: "skincare, beauty".to_string(),
            target_region: "global".to_string(),
            budget_tier: BudgetTier::Micro,
            platforms: vec![Platform::Instagram],
            brand_tone: BrandTone::Friendly,
            campaign_goal: CampaignGoal::Awareness,
        }
    }

    fn instagram() -> SimulatedConnector {
        let catalog = builtin_catalog().expect("builtin catalog parses");
        SimulatedConnector::instagram(&catalog, Duration::ZERO)
    }

    #[test]
    fn builtin_catalog_has_both_platforms() {
        let catalog = builtin_catalog().expect("builtin catalog parses");
        assert!(catalog.iter().any(|c| c.platform == Platform::Instagram));
        assert!(catalog.iter().any(|c| c.platform == Platform::Youtube));
    }

    #[tokio::test]
    async fn discover_starts_with_seeds_then_fills() {
        let creators = instagram().discover(&criteria(), 10).await.unwrap();
        assert_eq!(creators.len(), 10);
        assert_eq!(creators[0].id, "instagram_001");
        assert_eq!(creators[3].id, "instagram_100");
        assert!(creators.iter().all(|c| c.platform == Platform::Instagram));
    }

    #[tokio::test]
    async fn discover_respects_small_limits() {
        let creators = instagram().discover(&criteria(), 2).await.unwrap();
        assert_eq!(creators.len(), 2);
        assert!(instagram().discover(&criteria(), 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn filler_creators_are_stable_by_id() {
        let connector = instagram();
        let discovered = connector.discover(&criteria(), 6).await.unwrap();
        let filler = &discovered[4];
        let fetched = connector.get_creator(&filler.id).await.unwrap();
        assert_eq!(&fetched, filler);
    }

    #[tokio::test]
    async fn filler_stays_within_profile_ranges() {
        let connector = instagram();
        for creator in connector.discover(&criteria(), 60).await.unwrap().iter().skip(3) {
            assert!((10_000..=500_000).contains(&creator.followers));
            assert!((2.0..=8.0).contains(&creator.engagement_rate));
            assert!(!creator.category.is_empty());
        }
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let connector = instagram();
        for id in [
            "youtube_001",
            "instagram_050",
            "instagram_abc",
            "nobody",
            "instagram_0100",
            "instagram_+100",
        ] {
            assert!(
                matches!(
                    connector.get_creator(id).await,
                    Err(ConnectorError::NotFound(_))
                ),
                "{id} should be unknown"
            );
        }
    }

    #[tokio::test]
    async fn recent_content_leads_with_latest_post() {
        let connector = instagram();
        let items = connector.recent_content("instagram_001", 5).await.unwrap();
        assert_eq!(items.len(), 5);
        assert!(items[0].text.starts_with("Just dropped my sustainable fashion haul"));
        assert!(items
            .windows(2)
            .all(|w| w[0].published_at >= w[1].published_at));
    }

    #[tokio::test]
    async fn recent_content_for_unknown_creator_fails() {
        let result = instagram().recent_content("instagram_007", 3).await;
        assert!(matches!(result, Err(ConnectorError::NotFound(_))));
    }

    #[tokio::test]
    async fn audience_insights_are_stable_and_normalized() {
        let connector = instagram();
        let first = connector.audience_insights("instagram_001").await.unwrap();
        let again = connector.audience_insights("instagram_001").await.unwrap();
        assert_eq!(first, again);

        assert_eq!(first.platform, Platform::Instagram);
        assert_eq!(first.demographics.age_groups.values().sum::<u32>(), 100);
        assert_eq!(first.demographics.gender.values().sum::<u32>(), 100);
        assert_eq!(first.demographics.top_regions.len(), 5);
        assert!(first
            .demographics
            .top_regions
            .windows(2)
            .all(|w| w[0].percentage >= w[1].percentage));
        assert!((2..=8).contains(&first.engagement_patterns.avg_session_minutes));
        assert!(first.channel.is_none());
    }

    #[tokio::test]
    async fn youtube_audience_includes_channel_stats() {
        let catalog = builtin_catalog().unwrap();
        let connector = SimulatedConnector::youtube(&catalog, Duration::ZERO);
        let insights = connector.audience_insights("youtube_200").await.unwrap();
        let channel = insights.channel.expect("youtube reports channel stats");
        assert!(channel.subscribers_gained_90d > channel.subscribers_gained_30d);
        assert!((45.0..=75.0).contains(&channel.audience_retention));
        assert!((190..=779).contains(&channel.avg_view_duration_secs));
    }

    #[tokio::test]
    async fn audience_for_unknown_creator_fails() {
        let result = instagram().audience_insights("instagram_0100").await;
        assert!(matches!(result, Err(ConnectorError::NotFound(_))));
    }

    #[tokio::test]
    async fn youtube_connector_serves_youtube_seeds() {
        let catalog = builtin_catalog().unwrap();
        let connector = SimulatedConnector::youtube(&catalog, Duration::ZERO);
        assert_eq!(connector.platform(), Platform::Youtube);
        let creator = connector.get_creator("youtube_001").await.unwrap();
        assert_eq!(creator.display_name, "Alex Rodriguez");
    }
}
