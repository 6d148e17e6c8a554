//! Audience demographics and channel statistics for one creator.

use std::collections::BTreeMap;

use icy_core::{CreatorRecord, Platform};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive draw ranges describing a platform's typical audience.
pub(crate) struct AudienceProfile {
    pub(crate) age_groups: &'static [(&'static str, (u32, u32))],
    pub(crate) genders: &'static [(&'static str, (u32, u32))],
    pub(crate) top_regions: &'static [(&'static str, (u32, u32))],
    pub(crate) interests: &'static [(&'static str, (u32, u32))],
    pub(crate) best_posting_times: &'static [&'static str],
    pub(crate) peak_days: &'static [&'static str],
    pub(crate) session_minutes: (u32, u32),
    /// Video platforms also report subscriber and view statistics.
    pub(crate) channel_stats: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceInsights {
    pub creator_id: String,
    pub platform: Platform,
    pub demographics: Demographics,
    pub interests: Vec<InterestAffinity>,
    pub engagement_patterns: EngagementPatterns,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelAnalytics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    /// Percent of the audience per age bracket. Sums to 100.
    pub age_groups: BTreeMap<String, u32>,
    /// Sums to 100.
    pub gender: BTreeMap<String, u32>,
    /// Largest audience regions, largest share first.
    pub top_regions: Vec<RegionShare>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionShare {
    pub region: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestAffinity {
    pub category: String,
    /// 0-100.
    pub affinity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementPatterns {
    pub best_posting_times: Vec<String>,
    pub peak_days: Vec<String>,
    pub avg_session_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelAnalytics {
    pub subscribers_gained_30d: u32,
    pub subscribers_gained_90d: u32,
    /// Monthly subscriber growth, percent.
    pub growth_rate: f64,
    pub views_30d: u64,
    pub avg_view_duration_secs: u32,
    /// Percent of each video watched on average.
    pub audience_retention: f64,
    pub avg_likes_per_video: u32,
    pub avg_comments_per_video: u32,
    pub subscriber_engagement_rate: f64,
    pub click_through_rate: f64,
    pub estimated_monthly_earnings_usd: u32,
    pub brand_deal_rate_usd: u32,
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Scale raw weights to whole percentages summing to 100. The rounding
/// remainder goes to the heaviest bucket, the first one on ties.
fn to_percentages(weights: &[u32]) -> Vec<u32> {
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return vec![0; weights.len()];
    }
    let mut shares: Vec<u32> = weights.iter().map(|w| w * 100 / total).collect();
    let assigned: u32 = shares.iter().sum();
    let heaviest = weights
        .iter()
        .enumerate()
        .max_by_key(|(i, w)| (**w, std::cmp::Reverse(*i)))
        .map(|(i, _)| i);
    if let Some(share) = heaviest.and_then(|i| shares.get_mut(i)) {
        *share += 100 - assigned;
    }
    shares
}

fn percentage_map<R: Rng + ?Sized>(
    buckets: &[(&'static str, (u32, u32))],
    rng: &mut R,
) -> BTreeMap<String, u32> {
    let weights: Vec<u32> = buckets
        .iter()
        .map(|(_, (min, max))| rng.random_range(*min..=*max))
        .collect();
    buckets
        .iter()
        .zip(to_percentages(&weights))
        .map(|((name, _), share)| ((*name).to_string(), share))
        .collect()
}

fn channel_analytics<R: Rng + ?Sized>(rng: &mut R) -> ChannelAnalytics {
    let gained_30d = rng.random_range(500..=5_000);
    ChannelAnalytics {
        subscribers_gained_30d: gained_30d,
        subscribers_gained_90d: gained_30d + rng.random_range(1_000..=10_000),
        growth_rate: round_to(rng.random_range(2.0..=15.0), 2),
        views_30d: rng.random_range(50_000..=500_000),
        avg_view_duration_secs: rng.random_range(3..=12) * 60 + rng.random_range(10..=59),
        audience_retention: round_to(rng.random_range(45.0..=75.0), 1),
        avg_likes_per_video: rng.random_range(500..=5_000),
        avg_comments_per_video: rng.random_range(50..=800),
        subscriber_engagement_rate: round_to(rng.random_range(3.0..=12.0), 2),
        click_through_rate: round_to(rng.random_range(4.0..=15.0), 2),
        estimated_monthly_earnings_usd: rng.random_range(500..=15_000),
        brand_deal_rate_usd: rng.random_range(1_000..=25_000),
    }
}

pub(crate) fn simulate<R: Rng + ?Sized>(
    creator: &CreatorRecord,
    profile: &AudienceProfile,
    rng: &mut R,
) -> AudienceInsights {
    let age_groups = percentage_map(profile.age_groups, rng);
    let gender = percentage_map(profile.genders, rng);

    let mut top_regions: Vec<RegionShare> = profile
        .top_regions
        .iter()
        .map(|(region, (min, max))| RegionShare {
            region: (*region).to_string(),
            percentage: rng.random_range(*min..=*max),
        })
        .collect();
    top_regions.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    let interests = profile
        .interests
        .iter()
        .map(|(category, (min, max))| InterestAffinity {
            category: (*category).to_string(),
            affinity: rng.random_range(*min..=*max),
        })
        .collect();

    let engagement_patterns = EngagementPatterns {
        best_posting_times: profile
            .best_posting_times
            .iter()
            .map(|t| (*t).to_string())
            .collect(),
        peak_days: profile.peak_days.iter().map(|d| (*d).to_string()).collect(),
        avg_session_minutes: rng.random_range(profile.session_minutes.0..=profile.session_minutes.1),
    };

    let channel = profile.channel_stats.then(|| channel_analytics(rng));

    AudienceInsights {
        creator_id: creator.id.clone(),
        platform: creator.platform,
        demographics: Demographics {
            age_groups,
            gender,
            top_regions,
        },
        interests,
        engagement_patterns,
        channel,
    }
}
