//! Deep-dive analysis of a single creator.
//!
//! Unlike [`crate::score_creator`] this does not depend on brand criteria:
//! it profiles the creator's content habits, audience health, brand safety
//! and expected campaign performance. Every figure is drawn from `rng` within
//! a fixed range.

use chrono::{DateTime, Utc};
use icy_core::{CreatorRecord, Platform};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const CONTENT_THEMES: [&str; 6] = [
    "Product Reviews",
    "Lifestyle Content",
    "Educational Posts",
    "Behind-the-Scenes",
    "User-Generated Content",
    "Tutorials",
];
const THEMES_REPORTED: usize = 3;

const PEAK_ENGAGEMENT_TIMES: [&str; 3] = ["9:00 AM", "1:00 PM", "7:00 PM"];
const BEST_POSTING_DAYS: [&str; 3] = ["Tuesday", "Wednesday", "Sunday"];
const AUDIENCE_MOST_ACTIVE: &str = "Evenings (6-9 PM)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthConsistency {
    Steady,
    Rapid,
    Fluctuating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignmentHistory {
    Excellent,
    Good,
    Fair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Likelihood {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagStrategy {
    pub avg_hashtags_per_post: u32,
    pub hashtag_effectiveness: f64,
    /// Percent of posts riding a trending tag.
    pub trending_hashtag_usage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub posts_per_week: u32,
    /// Three distinct recurring themes.
    pub content_themes: Vec<String>,
    pub hashtag_strategy: HashtagStrategy,
    pub visual_consistency: f64,
    pub brand_mentions_per_month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementWindows {
    pub peak_engagement_times: Vec<String>,
    pub best_posting_days: Vec<String>,
    pub audience_most_active: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerGrowth {
    pub monthly_growth_rate: f64,
    pub growth_consistency: GrowthConsistency,
    pub organic_growth_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceQuality {
    pub real_followers_percentage: f64,
    pub engaged_followers_percentage: f64,
    /// Lower is better.
    pub bot_detection_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceAnalysis {
    pub engagement_patterns: EngagementWindows,
    pub follower_growth: FollowerGrowth,
    pub audience_quality: AudienceQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSafety {
    pub content_appropriateness: f64,
    /// Lower is safer.
    pub controversy_score: f64,
    pub brand_alignment_history: AlignmentHistory,
    pub previous_partnerships: u32,
}

/// Projected reach of one sponsored post, in people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachRange {
    pub low: u64,
    pub high: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePredictions {
    pub estimated_reach: ReachRange,
    pub predicted_engagement_rate: f64,
    pub conversion_likelihood: Likelihood,
    pub viral_potential: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub creator_id: String,
    pub platform: Platform,
    pub content_analysis: ContentAnalysis,
    pub audience_analysis: AudienceAnalysis,
    pub brand_safety: BrandSafety,
    pub performance_predictions: PerformancePredictions,
    pub analyzed_at: DateTime<Utc>,
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

fn pick<T: Copy, R: Rng + ?Sized>(options: &[T], fallback: T, rng: &mut R) -> T {
    options.choose(rng).copied().unwrap_or(fallback)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn content_analysis<R: Rng + ?Sized>(rng: &mut R) -> ContentAnalysis {
    ContentAnalysis {
        posts_per_week: rng.random_range(3..=12),
        content_themes: CONTENT_THEMES
            .choose_multiple(rng, THEMES_REPORTED)
            .map(|t| (*t).to_string())
            .collect(),
        hashtag_strategy: HashtagStrategy {
            avg_hashtags_per_post: rng.random_range(5..=15),
            hashtag_effectiveness: round_to(rng.random_range(65.0..=95.0), 1),
            trending_hashtag_usage: round_to(rng.random_range(20.0..=60.0), 1),
        },
        visual_consistency: round_to(rng.random_range(70.0..=95.0), 1),
        brand_mentions_per_month: rng.random_range(1..=8),
    }
}

fn audience_analysis<R: Rng + ?Sized>(rng: &mut R) -> AudienceAnalysis {
    use GrowthConsistency::{Fluctuating, Rapid, Steady};

    AudienceAnalysis {
        engagement_patterns: EngagementWindows {
            peak_engagement_times: strings(&PEAK_ENGAGEMENT_TIMES),
            best_posting_days: strings(&BEST_POSTING_DAYS),
            audience_most_active: AUDIENCE_MOST_ACTIVE.to_string(),
        },
        follower_growth: FollowerGrowth {
            monthly_growth_rate: round_to(rng.random_range(2.0..=15.0), 2),
            growth_consistency: pick(&[Steady, Rapid, Fluctuating], Steady, rng),
            organic_growth_percentage: round_to(rng.random_range(75.0..=95.0), 1),
        },
        audience_quality: AudienceQuality {
            real_followers_percentage: round_to(rng.random_range(85.0..=98.0), 1),
            engaged_followers_percentage: round_to(rng.random_range(15.0..=35.0), 1),
            bot_detection_score: round_to(rng.random_range(1.0..=8.0), 1),
        },
    }
}

fn brand_safety<R: Rng + ?Sized>(rng: &mut R) -> BrandSafety {
    use AlignmentHistory::{Excellent, Fair, Good};

    BrandSafety {
        content_appropriateness: round_to(rng.random_range(85.0..=98.0), 1),
        controversy_score: round_to(rng.random_range(1.0..=15.0), 1),
        brand_alignment_history: pick(&[Excellent, Good, Fair], Good, rng),
        previous_partnerships: rng.random_range(2..=25),
    }
}

fn performance_predictions<R: Rng + ?Sized>(rng: &mut R) -> PerformancePredictions {
    use Likelihood::{High, Low, Medium};

    // The bands meet at 500K, so `low <= high` always holds.
    let low = rng.random_range(50..=500) * 1_000;
    let high = rng.random_range(500..=2_000) * 1_000;
    PerformancePredictions {
        estimated_reach: ReachRange { low, high },
        predicted_engagement_rate: round_to(rng.random_range(3.0..=8.0), 1),
        conversion_likelihood: pick(&[High, Medium, Low], Medium, rng),
        viral_potential: round_to(rng.random_range(20.0..=80.0), 1),
    }
}

/// Profile `creator` in depth. A seeded `rng` reproduces every figure.
pub fn detailed_analysis<R: Rng + ?Sized>(
    creator: &CreatorRecord,
    rng: &mut R,
) -> DetailedAnalysis {
    DetailedAnalysis {
        creator_id: creator.id.clone(),
        platform: creator.platform,
        content_analysis: content_analysis(rng),
        audience_analysis: audience_analysis(rng),
        brand_safety: brand_safety(rng),
        performance_predictions: performance_predictions(rng),
        analyzed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn creator() -> CreatorRecord {
        CreatorRecord {
            id: "youtube_001".to_string(),
            platform: Platform::Youtube,
            username: "techreviewalex".to_string(),
            display_name: "Alex Rodriguez".to_string(),
            followers: 450_000,
            engagement_rate: 5.1,
            category: "Technology".to_string(),
            location: "San Francisco, CA".to_string(),
            bio: String::new(),
            verified: true,
            recent_post: String::new(),
        }
    }

    #[test]
    fn seeded_analysis_is_reproducible() {
        let a = detailed_analysis(&creator(), &mut StdRng::seed_from_u64(5));
        let b = detailed_analysis(&creator(), &mut StdRng::seed_from_u64(5));
        assert_eq!(a.content_analysis, b.content_analysis);
        assert_eq!(a.audience_analysis, b.audience_analysis);
        assert_eq!(a.brand_safety, b.brand_safety);
        assert_eq!(a.performance_predictions, b.performance_predictions);
        assert_eq!(a.creator_id, "youtube_001");
        assert_eq!(a.platform, Platform::Youtube);
    }

    #[test]
    fn figures_stay_within_their_ranges() {
        for seed in 0..200 {
            let d = detailed_analysis(&creator(), &mut StdRng::seed_from_u64(seed));

            let content = &d.content_analysis;
            assert!((3..=12).contains(&content.posts_per_week));
            assert_eq!(content.content_themes.len(), THEMES_REPORTED);
            let mut themes = content.content_themes.clone();
            themes.sort();
            themes.dedup();
            assert_eq!(themes.len(), THEMES_REPORTED, "themes must be distinct");
            assert!((5..=15).contains(&content.hashtag_strategy.avg_hashtags_per_post));
            assert!((70.0..=95.0).contains(&content.visual_consistency));
            assert!((1..=8).contains(&content.brand_mentions_per_month));

            let quality = &d.audience_analysis.audience_quality;
            assert!((85.0..=98.0).contains(&quality.real_followers_percentage));
            assert!((1.0..=8.0).contains(&quality.bot_detection_score));

            assert!((2..=25).contains(&d.brand_safety.previous_partnerships));
            assert!((1.0..=15.0).contains(&d.brand_safety.controversy_score));

            let reach = d.performance_predictions.estimated_reach;
            assert!(reach.low <= reach.high);
            assert!((50_000..=500_000).contains(&reach.low));
            assert!((500_000..=2_000_000).contains(&reach.high));
            assert!((3.0..=8.0).contains(&d.performance_predictions.predicted_engagement_rate));
        }
    }

    #[test]
    fn engagement_windows_are_fixed() {
        let d = detailed_analysis(&creator(), &mut StdRng::seed_from_u64(1));
        let windows = &d.audience_analysis.engagement_patterns;
        assert_eq!(windows.peak_engagement_times, strings(&PEAK_ENGAGEMENT_TIMES));
        assert_eq!(windows.audience_most_active, "Evenings (6-9 PM)");
    }
}
