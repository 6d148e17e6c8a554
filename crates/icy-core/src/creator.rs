use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::criteria::Platform;

/// A creator profile as supplied by a platform connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorRecord {
    /// Connector-scoped id, e.g. `instagram_001`.
    pub id: String,
    pub platform: Platform,
    pub username: String,
    pub display_name: String,
    pub followers: u64,
    /// Average engagement rate in percent, e.g. `4.2`.
    pub engagement_rate: f64,
    pub category: String,
    /// `"City, Region"`; only the first comma-separated token is matched.
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub verified: bool,
    /// Caption or title of the most recent post.
    #[serde(default)]
    pub recent_post: String,
}

impl CreatorRecord {
    /// First comma-separated token of `location`, trimmed.
    #[must_use]
    pub fn primary_location(&self) -> &str {
        self.location.split(',').next().unwrap_or_default().trim()
    }
}

/// One recent post or video from a creator's feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub platform: Platform,
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(location: &str) -> CreatorRecord {
        CreatorRecord {
            id: "instagram_001".to_string(),
            platform: Platform::Instagram,
            username: "sarahstyle".to_string(),
            display_name: "Sarah Chen".to_string(),
            followers: 125_000,
            engagement_rate: 4.2,
            category: "Fashion & Lifestyle".to_string(),
            location: location.to_string(),
            bio: String::new(),
            verified: false,
            recent_post: String::new(),
        }
    }

    #[test]
    fn primary_location_takes_first_token() {
        assert_eq!(record("Los Angeles, CA").primary_location(), "Los Angeles");
    }

    #[test]
    fn primary_location_without_comma_is_whole_string() {
        assert_eq!(record("Tokyo").primary_location(), "Tokyo");
    }

    #[test]
    fn primary_location_of_empty_string_is_empty() {
        assert_eq!(record("").primary_location(), "");
    }
}
