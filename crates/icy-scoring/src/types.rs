use chrono::{DateTime, Utc};
use icy_core::CreatorRecord;
use serde::{Deserialize, Serialize};

/// Qualitative collaboration risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// At most two rule-derived factors.
    pub factors: Vec<String>,
    pub mitigations: Vec<String>,
}

/// Estimated fee range for one collaboration, in whole US dollars.
///
/// Serializes with an extra `display` field, e.g. `"$1,040 - $1,560"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CostEstimateWire", from = "CostEstimateWire")]
pub struct CostEstimate {
    pub low_usd: u32,
    pub high_usd: u32,
}

#[derive(Serialize, Deserialize)]
struct CostEstimateWire {
    low_usd: u32,
    high_usd: u32,
    #[serde(default, skip_deserializing)]
    display: String,
}

impl From<CostEstimate> for CostEstimateWire {
    fn from(cost: CostEstimate) -> Self {
        Self {
            low_usd: cost.low_usd,
            high_usd: cost.high_usd,
            display: cost.to_string(),
        }
    }
}

impl From<CostEstimateWire> for CostEstimate {
    fn from(wire: CostEstimateWire) -> Self {
        Self {
            low_usd: wire.low_usd,
            high_usd: wire.high_usd,
        }
    }
}

/// `1040` -> `"1,040"`.
fn thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl std::fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${} - ${}",
            thousands(self.low_usd),
            thousands(self.high_usd)
        )
    }
}

/// Collaboration outlook, serialized as its descriptive label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum CollaborationPotential {
    Excellent,
    Good,
    Fair,
    Limited,
}

impl CollaborationPotential {
    const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Limited];

    #[must_use]
    pub fn from_match_score(match_score: u8) -> Self {
        match match_score {
            90.. => CollaborationPotential::Excellent,
            80..=89 => CollaborationPotential::Good,
            70..=79 => CollaborationPotential::Fair,
            _ => CollaborationPotential::Limited,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CollaborationPotential::Excellent => {
                "Excellent - Highly recommended for collaboration"
            }
            CollaborationPotential::Good => "Good - Strong potential for successful partnership",
            CollaborationPotential::Fair => "Fair - Consider for specific campaign types",
            CollaborationPotential::Limited => "Limited - May not align with brand objectives",
        }
    }
}

impl From<CollaborationPotential> for &'static str {
    fn from(potential: CollaborationPotential) -> Self {
        potential.label()
    }
}

impl TryFrom<String> for CollaborationPotential {
    type Error = String;

    /// Accepts the full label or its leading word (`"Good"`).
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let head = value.split(" - ").next().unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().split(" - ").next() == Some(head))
            .ok_or_else(|| format!("unknown collaboration potential '{value}'"))
    }
}

/// Every score computed for one creator in one discovery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSet {
    /// Primary brand-fit metric, always within `[60, 98]`.
    pub match_score: u8,
    /// Always within `[70, 98]`.
    pub authenticity_score: u8,
    pub audience_alignment: u8,
    pub content_quality_score: u8,
    pub engagement_quality_score: u8,
    pub risk: RiskAssessment,
    pub estimated_cost: CostEstimate,
    pub insights: Vec<String>,
    pub recommended_content_types: Vec<String>,
    pub collaboration_potential: CollaborationPotential,
}

/// A creator record paired with its scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCreator {
    #[serde(flatten)]
    pub creator: CreatorRecord,
    #[serde(flatten)]
    pub scores: ScoreSet,
    pub analyzed_at: DateTime<Utc>,
}

impl ScoredCreator {
    #[must_use]
    pub fn match_score(&self) -> u8 {
        self.scores.match_score
    }
}
