//! Multi-factor creator scoring.
//!
//! Each creator is scored against a brand's criteria by deterministic rules
//! ([`rules`]) plus bounded random perturbation drawn from a caller-supplied
//! [`rand::Rng`]. Seeding the generator pins every score. [`ranking`] sorts
//! scored creators and assigns match tiers. [`detail`] profiles a single
//! creator in depth, independent of any brand.

pub mod detail;
pub mod engine;
pub mod insights;
pub mod ranking;
pub mod rules;
pub mod types;

pub use detail::{detailed_analysis, DetailedAnalysis};
pub use engine::{analyze_creator, score_creator};
pub use ranking::{rank, MatchTier, TierCounts};
pub use types::{
    CollaborationPotential, CostEstimate, RiskAssessment, RiskLevel, ScoreSet, ScoredCreator,
};
