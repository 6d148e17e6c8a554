//! Deterministic rule evaluation.
//!
//! Every function here is a pure function of the creator record and brand
//! criteria. Random perturbation and clamping are applied by [`crate::engine`].

use icy_core::{BrandCriteria, CreatorRecord};

use crate::types::CostEstimate;

pub const MATCH_BASE: i32 = 50;
pub const MATCH_RANGE: (i32, i32) = (60, 98);
pub const MATCH_PERTURBATION: (i32, i32) = (-5, 10);

pub const AUTHENTICITY_BASE: i32 = 80;
pub const AUTHENTICITY_RANGE: (i32, i32) = (70, 98);
pub const AUTHENTICITY_PERTURBATION: (i32, i32) = (-3, 8);

pub const AUDIENCE_BASELINE: (i32, i32) = (75, 95);
pub const ENGAGEMENT_QUALITY_PERTURBATION: (i32, i32) = (-5, 10);

/// Upper bound shared by every score.
pub const SCORE_CEILING: i32 = 98;

/// Inclusive sampling ranges for visual, caption, consistency and originality.
pub const CONTENT_QUALITY_FACTORS: [(i32, i32); 4] = [(70, 95), (65, 90), (75, 95), (70, 88)];

const POSITIVE_BIO_KEYWORDS: &[&str] = &[
    "genuine",
    "authentic",
    "real",
    "honest",
    "transparent",
    "personal",
];

const NEGATIVE_BIO_KEYWORDS: &[&str] = &["fake", "sponsored", "ad", "promotion", "paid", "partnership"];

pub const INFLATION_FACTOR: &str =
    "Unusually high engagement rate may indicate artificial inflation";
pub const LOW_ENGAGEMENT_FACTOR: &str = "Low engagement rate may limit campaign effectiveness";
pub const INACTIVE_AUDIENCE_FACTOR: &str =
    "Large follower count with low engagement suggests inactive audience";

pub const MITIGATIONS: [&str; 2] = [
    "Request detailed analytics before collaboration",
    "Start with smaller test campaign",
];

/// `true` if the whole lower-cased category appears in the brand's target
/// interests.
#[must_use]
pub fn category_matches_interests(category: &str, interests: &str) -> bool {
    let category = category.trim().to_lowercase();
    !category.is_empty() && interests.to_lowercase().contains(&category)
}

/// Match score before perturbation and clamping.
#[must_use]
pub fn match_points(record: &CreatorRecord, criteria: &BrandCriteria) -> i32 {
    let mut score = MATCH_BASE;

    if category_matches_interests(&record.category, &criteria.target_interests) {
        score += 20;
    }

    if criteria.targets_global_region() {
        score += 10;
    } else {
        let location = record.primary_location().to_lowercase();
        if !location.is_empty() && criteria.target_region.to_lowercase().contains(&location) {
            score += 15;
        }
    }

    if criteria.budget_tier.expects_followers(record.followers) {
        score += 15;
    }

    if record.engagement_rate > 5.0 {
        score += 10;
    } else if record.engagement_rate > 3.0 {
        score += 5;
    }

    score
}

/// Number of keywords from `keywords` found anywhere in the lower-cased
/// `text`. Each keyword counts once.
fn keyword_hits(text: &str, keywords: &[&str]) -> i32 {
    let text = text.to_lowercase();
    let hits = keywords.iter().filter(|k| text.contains(**k)).count();
    i32::try_from(hits).unwrap_or(i32::MAX)
}

/// Authenticity score before perturbation and clamping.
#[must_use]
pub fn authenticity_points(record: &CreatorRecord) -> i32 {
    let mut score = AUTHENTICITY_BASE;

    if record.followers > 100_000 && record.engagement_rate > 8.0 {
        score -= 10;
    } else if record.followers > 500_000 && record.engagement_rate > 6.0 {
        score -= 5;
    }

    score += keyword_hits(&record.bio, POSITIVE_BIO_KEYWORDS) * 2;
    score -= keyword_hits(&record.bio, NEGATIVE_BIO_KEYWORDS) * 3;

    if record.verified {
        score += 5;
    }

    score
}

/// Bonus added to the random audience baseline.
#[must_use]
pub fn audience_platform_bonus(record: &CreatorRecord, criteria: &BrandCriteria) -> i32 {
    if criteria.targets_platform(record.platform) {
        5
    } else {
        0
    }
}

/// Engagement-quality score before perturbation and clamping.
#[must_use]
pub fn engagement_quality_points(record: &CreatorRecord) -> i32 {
    let mut score = if record.engagement_rate > 6.0 {
        90
    } else if record.engagement_rate > 4.0 {
        85
    } else if record.engagement_rate > 2.0 {
        75
    } else {
        65
    };

    if record.followers < 50_000 {
        score += 5;
    } else if record.followers > 500_000 {
        score -= 3;
    }

    score
}

/// Rule-derived risk factors, at most two.
#[must_use]
pub fn risk_factors(record: &CreatorRecord) -> Vec<String> {
    let mut factors = Vec::new();

    if record.engagement_rate > 8.0 {
        factors.push(INFLATION_FACTOR.to_string());
    } else if record.engagement_rate < 2.0 {
        factors.push(LOW_ENGAGEMENT_FACTOR.to_string());
    }

    if record.followers > 500_000 && record.engagement_rate < 2.0 {
        factors.push(INACTIVE_AUDIENCE_FACTOR.to_string());
    }

    factors.truncate(2);
    factors
}

/// Inclusive base-fee range for the creator's follower bracket.
#[must_use]
pub fn cost_bracket(followers: u64) -> (u32, u32) {
    match followers {
        0..=9_999 => (100, 500),
        10_000..=49_999 => (300, 1_000),
        50_000..=99_999 => (800, 2_000),
        100_000..=499_999 => (1_500, 5_000),
        _ => (3_000, 15_000),
    }
}

/// Apply the engagement premium to a drawn base fee and widen it into the
/// reported 80%–120% range.
#[must_use]
pub fn cost_range(base: u32, engagement_rate: f64) -> CostEstimate {
    let adjusted = if engagement_rate > 6.0 {
        base.saturating_mul(13) / 10
    } else if engagement_rate > 4.0 {
        base.saturating_mul(11) / 10
    } else {
        base
    };

    CostEstimate {
        low_usd: adjusted.saturating_mul(8) / 10,
        high_usd: adjusted.saturating_mul(12) / 10,
    }
}

/// Recommended content formats for the creator's platform and category.
#[must_use]
pub fn recommended_content_types(record: &CreatorRecord) -> Vec<String> {
    use icy_core::Platform;

    let category = record.category.to_lowercase();
    let mut types: Vec<&str> = Vec::new();

    match record.platform {
        Platform::Instagram => {
            types.extend(["Instagram Posts", "Stories", "Reels"]);
            if category.contains("fashion") || category.contains("beauty") {
                types.push("OOTD Posts");
            }
            if category.contains("food") {
                types.push("Recipe Stories");
            }
        }
        Platform::Youtube => {
            types.extend(["Product Review Videos", "Tutorial Videos"]);
            if category.contains("tech") {
                types.push("Unboxing Videos");
            }
            if category.contains("fitness") {
                types.push("Workout Videos");
            }
        }
        Platform::Tiktok | Platform::Twitter | Platform::Linkedin => {}
    }

    types.into_iter().take(3).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use icy_core::{BrandTone, BudgetTier, CampaignGoal, Platform};

    use super::*;

    fn creator() -> CreatorRecord {
        CreatorRecord {
            id: "instagram_001".to_string(),
            platform: Platform::Instagram,
            username: "sarahstyle".to_string(),
            display_name: "Sarah Chen".to_string(),
            followers: 60_000,
            engagement_rate: 4.2,
            category: "Fashion & Lifestyle".to_string(),
            location: "Los Angeles, CA".to_string(),
            bio: String::new(),
            verified: false,
            recent_post: String::new(),
        }
    }

    fn criteria() -> BrandCriteria {
        BrandCriteria {
            product_name: "EcoThread".to_string(),
            product_description: String::new(),
            target_interests: "fashion & lifestyle, sustainability".to_string(),
            target_region: "north-america".to_string(),
            budget_tier: BudgetTier::Micro,
            platforms: vec![Platform::Instagram],
            brand_tone: BrandTone::Friendly,
            campaign_goal: CampaignGoal::Awareness,
        }
    }

    #[test]
    fn category_term_matching() {
        assert!(category_matches_interests(
            "Fashion & Lifestyle",
            "fashion & lifestyle, sustainability"
        ));
        assert!(category_matches_interests("fitness", "Fitness and wellness"));
        assert!(!category_matches_interests("Fashion & Lifestyle", "sustainable fashion"));
        assert!(!category_matches_interests("Technology", "fashion, beauty"));
        assert!(!category_matches_interests("", "fashion"));
    }

    #[test]
    fn match_points_accumulates_every_rule() {
        // category +20, micro range +15, engagement > 3 +5; region does not match.
        assert_eq!(match_points(&creator(), &criteria()), 90);
    }

    #[test]
    fn partial_category_overlap_earns_no_bonus() {
        let mut record = creator();
        record.followers = 500;
        record.engagement_rate = 1.0;
        let mut c = criteria();
        c.target_interests = "sustainable fashion".to_string();
        assert_eq!(match_points(&record, &c), MATCH_BASE);
    }

    #[test]
    fn match_points_global_region_bonus() {
        let mut c = criteria();
        c.target_region = "global".to_string();
        assert_eq!(match_points(&creator(), &c), 100);
    }

    #[test]
    fn match_points_location_bonus() {
        let mut c = criteria();
        c.target_region = "Los Angeles metro".to_string();
        assert_eq!(match_points(&creator(), &c), 105);
    }

    #[test]
    fn match_points_high_engagement_bonus() {
        let mut record = creator();
        record.engagement_rate = 5.5;
        record.category = "Gaming".to_string();
        record.followers = 500;
        assert_eq!(match_points(&record, &criteria()), 60);
    }

    #[test]
    fn authenticity_inflation_penalty_for_large_hot_accounts() {
        let mut record = creator();
        record.followers = 600_000;
        record.engagement_rate = 9.0;
        assert_eq!(authenticity_points(&record), 70);
    }

    #[test]
    fn authenticity_milder_penalty_for_very_large_accounts() {
        let mut record = creator();
        record.followers = 600_000;
        record.engagement_rate = 7.0;
        assert_eq!(authenticity_points(&record), 75);
    }

    #[test]
    fn authenticity_counts_bio_keywords_and_verification() {
        let mut record = creator();
        record.bio = "Honest, genuine reviews. Sponsored posts marked #ad".to_string();
        record.verified = true;
        // +2 honest +2 genuine -3 sponsored -3 ad +5 verified
        assert_eq!(authenticity_points(&record), 83);
    }

    #[test]
    fn authenticity_keywords_match_inside_words() {
        let mut record = creator();
        // "real" inside "really" +2, "ad" inside "made" -3
        record.bio = "really made by hand".to_string();
        assert_eq!(authenticity_points(&record), 79);
    }

    #[test]
    fn authenticity_counts_each_keyword_once() {
        let mut record = creator();
        record.bio = "Genuine genuine GENUINE".to_string();
        assert_eq!(authenticity_points(&record), AUTHENTICITY_BASE + 2);
    }

    #[test]
    fn engagement_quality_tiers() {
        let mut record = creator();
        record.engagement_rate = 6.5;
        record.followers = 40_000;
        assert_eq!(engagement_quality_points(&record), 95);
        record.engagement_rate = 1.0;
        record.followers = 900_000;
        assert_eq!(engagement_quality_points(&record), 62);
        record.engagement_rate = 3.0;
        record.followers = 200_000;
        assert_eq!(engagement_quality_points(&record), 75);
    }

    #[test]
    fn risk_factors_flag_inflation() {
        let mut record = creator();
        record.engagement_rate = 9.0;
        assert_eq!(risk_factors(&record), vec![INFLATION_FACTOR.to_string()]);
    }

    #[test]
    fn risk_factors_flag_inactive_large_audience() {
        let mut record = creator();
        record.engagement_rate = 1.5;
        record.followers = 800_000;
        assert_eq!(
            risk_factors(&record),
            vec![
                LOW_ENGAGEMENT_FACTOR.to_string(),
                INACTIVE_AUDIENCE_FACTOR.to_string()
            ]
        );
    }

    #[test]
    fn risk_factors_empty_for_healthy_engagement() {
        assert!(risk_factors(&creator()).is_empty());
    }

    #[test]
    fn cost_brackets_cover_every_follower_count() {
        assert_eq!(cost_bracket(0), (100, 500));
        assert_eq!(cost_bracket(10_000), (300, 1_000));
        assert_eq!(cost_bracket(99_999), (800, 2_000));
        assert_eq!(cost_bracket(100_000), (1_500, 5_000));
        assert_eq!(cost_bracket(500_000), (3_000, 15_000));
    }

    #[test]
    fn cost_range_applies_engagement_premium() {
        assert_eq!(
            cost_range(1_000, 7.0),
            CostEstimate {
                low_usd: 1_040,
                high_usd: 1_560
            }
        );
        assert_eq!(
            cost_range(1_000, 5.0),
            CostEstimate {
                low_usd: 880,
                high_usd: 1_320
            }
        );
        assert_eq!(
            cost_range(1_000, 2.0),
            CostEstimate {
                low_usd: 800,
                high_usd: 1_200
            }
        );
    }

    #[test]
    fn content_types_capped_at_three() {
        let types = recommended_content_types(&creator());
        assert_eq!(types, vec!["Instagram Posts", "Stories", "Reels"]);
    }

    #[test]
    fn youtube_tech_gets_unboxing() {
        let mut record = creator();
        record.platform = Platform::Youtube;
        record.category = "Technology".to_string();
        assert_eq!(
            recommended_content_types(&record),
            vec!["Product Review Videos", "Tutorial Videos", "Unboxing Videos"]
        );
    }
}
