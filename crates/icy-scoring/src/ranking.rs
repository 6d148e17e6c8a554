use serde::Serialize;

use crate::types::ScoredCreator;

/// Match-score bucket used to summarise a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    #[must_use]
    pub fn from_score(match_score: u8) -> Self {
        match match_score {
            90.. => MatchTier::High,
            80..=89 => MatchTier::Medium,
            _ => MatchTier::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl TierCounts {
    #[must_use]
    pub fn tally(creators: &[ScoredCreator]) -> Self {
        creators.iter().fold(Self::default(), |mut counts, c| {
            match MatchTier::from_score(c.match_score()) {
                MatchTier::High => counts.high += 1,
                MatchTier::Medium => counts.medium += 1,
                MatchTier::Low => counts.low += 1,
            }
            counts.total += 1;
            counts
        })
    }
}

/// Order creators by match score, highest first. Ties keep their input order.
#[must_use]
pub fn rank(mut creators: Vec<ScoredCreator>) -> Vec<ScoredCreator> {
    creators.sort_by(|a, b| b.match_score().cmp(&a.match_score()));
    creators
}
