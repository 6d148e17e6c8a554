use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Social platforms a brand can target and a creator can publish on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Youtube,
    Tiktok,
    Twitter,
    Linkedin,
}

impl Platform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
        }
    }

    /// Human-facing name used in progress step labels.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "LinkedIn",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "youtube" => Ok(Platform::Youtube),
            "tiktok" => Ok(Platform::Tiktok),
            "twitter" => Ok(Platform::Twitter),
            "linkedin" => Ok(Platform::Linkedin),
            other => Err(ValidationError::Unknown {
                field: "platform",
                value: other.to_string(),
            }),
        }
    }
}

/// Creator size a brand is willing to pay for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Micro,
    Mid,
    Macro,
    Celebrity,
}

impl BudgetTier {
    /// Whether `followers` falls inside the audience size this tier expects.
    ///
    /// micro: 1K–100K, mid: 100K–1M, macro: above 1M. Celebrity has no
    /// expected range and never matches.
    #[must_use]
    pub fn expects_followers(self, followers: u64) -> bool {
        match self {
            BudgetTier::Micro => (1_000..=100_000).contains(&followers),
            BudgetTier::Mid => (100_000..=1_000_000).contains(&followers),
            BudgetTier::Macro => followers > 1_000_000,
            BudgetTier::Celebrity => false,
        }
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "micro" => Ok(BudgetTier::Micro),
            "mid" => Ok(BudgetTier::Mid),
            "macro" => Ok(BudgetTier::Macro),
            "celebrity" => Ok(BudgetTier::Celebrity),
            other => Err(ValidationError::Unknown {
                field: "budget_tier",
                value: other.to_string(),
            }),
        }
    }
}

/// Stylistic register of outreach copy.
///
/// Only the first four have dedicated templates; the rest are accepted on
/// input and rendered with the friendly templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandTone {
    Professional,
    #[default]
    Friendly,
    Luxury,
    Playful,
    Edgy,
    Casual,
    #[serde(other)]
    Other,
}

impl BrandTone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BrandTone::Professional => "professional",
            BrandTone::Friendly => "friendly",
            BrandTone::Luxury => "luxury",
            BrandTone::Playful => "playful",
            BrandTone::Edgy => "edgy",
            BrandTone::Casual => "casual",
            BrandTone::Other => "other",
        }
    }
}

impl std::str::FromStr for BrandTone {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "professional" => BrandTone::Professional,
            "friendly" => BrandTone::Friendly,
            "luxury" => BrandTone::Luxury,
            "playful" => BrandTone::Playful,
            "edgy" => BrandTone::Edgy,
            "casual" => BrandTone::Casual,
            _ => BrandTone::Other,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignGoal {
    #[default]
    Awareness,
    Sales,
    Ugc,
    Engagement,
    Leads,
    BrandBuilding,
}

impl std::str::FromStr for CampaignGoal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "awareness" => Ok(CampaignGoal::Awareness),
            "sales" => Ok(CampaignGoal::Sales),
            "ugc" | "user_generated_content" => Ok(CampaignGoal::Ugc),
            "engagement" => Ok(CampaignGoal::Engagement),
            "leads" => Ok(CampaignGoal::Leads),
            "brand_building" => Ok(CampaignGoal::BrandBuilding),
            other => Err(ValidationError::Unknown {
                field: "campaign_goal",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("unknown {field}: '{value}'")]
    Unknown { field: &'static str, value: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
        value: usize,
    },
}

/// A brand's campaign criteria. Snapshotted onto each discovery run and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandCriteria {
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    /// Free-text interests/categories the brand is targeting, e.g.
    /// `"fashion, sustainability"`.
    pub target_interests: String,
    /// Region name such as `north-america` or `global`.
    pub target_region: String,
    pub budget_tier: BudgetTier,
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub brand_tone: BrandTone,
    #[serde(default)]
    pub campaign_goal: CampaignGoal,
}

impl BrandCriteria {
    /// Check the fields discovery and synthesis depend on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_name.trim().chars().count() < 2 {
            return Err(ValidationError::TooShort {
                field: "product_name",
                min: 2,
            });
        }
        if self.target_interests.trim().chars().count() < 5 {
            return Err(ValidationError::TooShort {
                field: "target_interests",
                min: 5,
            });
        }
        if self.target_region.trim().is_empty() {
            return Err(ValidationError::Empty("target_region"));
        }
        if self.platforms.is_empty() {
            return Err(ValidationError::Empty("platforms"));
        }
        Ok(())
    }

    /// `true` when the target region covers every location.
    #[must_use]
    pub fn targets_global_region(&self) -> bool {
        self.target_region.to_lowercase().contains("global")
    }

    #[must_use]
    pub fn targets_platform(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria() -> BrandCriteria {
        BrandCriteria {
            product_name: "EcoThread".to_string(),
            product_description: "Organic cotton basics made to last.".to_string(),
            target_interests: "fashion, sustainability".to_string(),
            target_region: "north-america".to_string(),
            budget_tier: BudgetTier::Micro,
            platforms: vec![Platform::Instagram],
            brand_tone: BrandTone::Friendly,
            campaign_goal: CampaignGoal::Awareness,
        }
    }

    #[test]
    fn valid_criteria_pass() {
        assert!(criteria().validate().is_ok());
    }

    #[test]
    fn short_product_name_is_rejected() {
        let mut c = criteria();
        c.product_name = " X ".to_string();
        assert_eq!(
            c.validate(),
            Err(ValidationError::TooShort {
                field: "product_name",
                min: 2
            })
        );
    }

    #[test]
    fn short_interests_are_rejected() {
        let mut c = criteria();
        c.target_interests = "tech".to_string();
        assert!(matches!(
            c.validate(),
            Err(ValidationError::TooShort {
                field: "target_interests",
                ..
            })
        ));
    }

    #[test]
    fn missing_platforms_are_rejected() {
        let mut c = criteria();
        c.platforms.clear();
        assert_eq!(c.validate(), Err(ValidationError::Empty("platforms")));
    }

    #[test]
    fn blank_region_is_rejected() {
        let mut c = criteria();
        c.target_region = "   ".to_string();
        assert_eq!(c.validate(), Err(ValidationError::Empty("target_region")));
    }

    #[test]
    fn budget_tier_follower_ranges() {
        assert!(BudgetTier::Micro.expects_followers(1_000));
        assert!(BudgetTier::Micro.expects_followers(100_000));
        assert!(!BudgetTier::Micro.expects_followers(999));
        assert!(BudgetTier::Mid.expects_followers(100_000));
        assert!(BudgetTier::Mid.expects_followers(1_000_000));
        assert!(!BudgetTier::Macro.expects_followers(1_000_000));
        assert!(BudgetTier::Macro.expects_followers(1_000_001));
        assert!(!BudgetTier::Celebrity.expects_followers(50_000_000));
    }

    #[test]
    fn unknown_tone_deserializes_as_other() {
        let tone: BrandTone = serde_json::from_str("\"whimsical\"").expect("deserialize");
        assert_eq!(tone, BrandTone::Other);
        let tone: BrandTone = serde_json::from_str("\"luxury\"").expect("deserialize");
        assert_eq!(tone, BrandTone::Luxury);
    }

    #[test]
    fn criteria_deserialize_with_defaults() {
        let json = r#"{
            "product_name": "EcoThread",
            "target_interests": "fashion",
            "target_region": "global",
            "budget_tier": "mid",
            "platforms": ["instagram", "youtube"]
        }"#;
        let c: BrandCriteria = serde_json::from_str(json).expect("deserialize");
        assert_eq!(c.brand_tone, BrandTone::Friendly);
        assert_eq!(c.campaign_goal, CampaignGoal::Awareness);
        assert!(c.product_description.is_empty());
        assert!(c.targets_global_region());
        assert!(c.targets_platform(Platform::Youtube));
    }

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!("YouTube".parse::<Platform>().unwrap(), Platform::Youtube);
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn campaign_goal_accepts_long_ugc_name() {
        assert_eq!(
            "user-generated-content".parse::<CampaignGoal>().unwrap(),
            CampaignGoal::Ugc
        );
    }
}
