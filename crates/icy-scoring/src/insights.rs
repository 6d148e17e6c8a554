use icy_core::{CreatorRecord, Platform};

/// Maximum number of insights attached to one creator.
pub const MAX_INSIGHTS: usize = 3;

struct InsightRule {
    applies: fn(&CreatorRecord) -> bool,
    text: &'static str,
}

const ENGAGEMENT_RULES: &[InsightRule] = &[
    InsightRule {
        applies: |c| c.engagement_rate > 5.0,
        text: "Exceptional engagement rate indicates highly active and loyal audience",
    },
    InsightRule {
        applies: |c| c.engagement_rate > 3.0,
        text: "Good engagement rate suggests authentic follower base",
    },
];

const FOLLOWER_RULES: &[InsightRule] = &[
    InsightRule {
        applies: |c| c.followers < 100_000,
        text: "Micro-influencer with potentially higher conversion rates",
    },
    InsightRule {
        applies: |c| c.followers > 500_000,
        text: "Macro-influencer with broad reach potential",
    },
];

const PLATFORM_RULES: &[InsightRule] = &[
    InsightRule {
        applies: |c| c.platform == Platform::Instagram,
        text: "Instagram presence ideal for visual brand storytelling",
    },
    InsightRule {
        applies: |c| c.platform == Platform::Youtube,
        text: "YouTube format perfect for detailed product demonstrations",
    },
];

const CATEGORY_RULES: &[InsightRule] = &[
    InsightRule {
        applies: |c| c.category.to_lowercase().contains("fashion"),
        text: "Fashion content aligns well with lifestyle and beauty brands",
    },
    InsightRule {
        applies: |c| c.category.to_lowercase().contains("tech"),
        text: "Tech expertise valuable for product reviews and tutorials",
    },
];

const TABLES: [&[InsightRule]; 4] = [
    ENGAGEMENT_RULES,
    FOLLOWER_RULES,
    PLATFORM_RULES,
    CATEGORY_RULES,
];

/// Evaluate each rule table in order, taking the first matching rule from
/// each, and keep at most [`MAX_INSIGHTS`].
#[must_use]
pub fn generate_insights(record: &CreatorRecord) -> Vec<String> {
    TABLES
        .iter()
        .filter_map(|table| table.iter().find(|rule| (rule.applies)(record)))
        .take(MAX_INSIGHTS)
        .map(|rule| rule.text.to_string())
        .collect()
}
