use chrono::Utc;
use icy_core::{BrandCriteria, CreatorRecord};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::insights::generate_insights;
use crate::rules::{
    audience_platform_bonus, authenticity_points, cost_bracket, cost_range,
    engagement_quality_points, match_points, recommended_content_types, risk_factors,
    AUDIENCE_BASELINE, AUTHENTICITY_PERTURBATION, AUTHENTICITY_RANGE, CONTENT_QUALITY_FACTORS,
    ENGAGEMENT_QUALITY_PERTURBATION, MATCH_PERTURBATION, MATCH_RANGE, MITIGATIONS, SCORE_CEILING,
};
use crate::types::{
    CollaborationPotential, CostEstimate, RiskAssessment, RiskLevel, ScoreSet, ScoredCreator,
};

const RISK_LEVELS: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

fn clamp_score(value: i32, (min, max): (i32, i32)) -> u8 {
    u8::try_from(value.clamp(min, max)).unwrap_or(u8::MAX)
}

fn draw<R: Rng + ?Sized>(rng: &mut R, (min, max): (i32, i32)) -> i32 {
    rng.random_range(min..=max)
}

fn content_quality<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let total: i32 = CONTENT_QUALITY_FACTORS
        .iter()
        .map(|range| draw(rng, *range))
        .sum();
    let count = i32::try_from(CONTENT_QUALITY_FACTORS.len()).unwrap_or(1);
    clamp_score(total / count, (0, SCORE_CEILING))
}

fn estimate_cost<R: Rng + ?Sized>(record: &CreatorRecord, rng: &mut R) -> CostEstimate {
    let (min, max) = cost_bracket(record.followers);
    let base = rng.random_range(min..=max);
    cost_range(base, record.engagement_rate)
}

fn assess_risk<R: Rng + ?Sized>(record: &CreatorRecord, rng: &mut R) -> RiskAssessment {
    // The level is drawn independently of the rule-derived factors.
    let level = RISK_LEVELS.choose(rng).copied().unwrap_or(RiskLevel::Medium);
    RiskAssessment {
        level,
        factors: risk_factors(record),
        mitigations: MITIGATIONS.iter().map(|m| (*m).to_string()).collect(),
    }
}

/// Score one creator against the brand criteria.
///
/// Deterministic rule points come from [`crate::rules`]; bounded noise is
/// drawn from `rng`. Every score lands in its documented range regardless of
/// what the generator returns, and a seeded generator reproduces the same
/// [`ScoreSet`] for the same inputs.
pub fn score_creator<R: Rng + ?Sized>(
    record: &CreatorRecord,
    criteria: &BrandCriteria,
    rng: &mut R,
) -> ScoreSet {
    let match_score = clamp_score(
        match_points(record, criteria) + draw(rng, MATCH_PERTURBATION),
        MATCH_RANGE,
    );

    let authenticity_score = clamp_score(
        authenticity_points(record) + draw(rng, AUTHENTICITY_PERTURBATION),
        AUTHENTICITY_RANGE,
    );

    let audience_alignment = clamp_score(
        draw(rng, AUDIENCE_BASELINE) + audience_platform_bonus(record, criteria),
        (0, SCORE_CEILING),
    );

    let content_quality_score = content_quality(rng);

    let engagement_quality_score = clamp_score(
        engagement_quality_points(record) + draw(rng, ENGAGEMENT_QUALITY_PERTURBATION),
        (0, SCORE_CEILING),
    );

    let risk = assess_risk(record, rng);
    let estimated_cost = estimate_cost(record, rng);

    ScoreSet {
        match_score,
        authenticity_score,
        audience_alignment,
        content_quality_score,
        engagement_quality_score,
        risk,
        estimated_cost,
        insights: generate_insights(record),
        recommended_content_types: recommended_content_types(record),
        collaboration_potential: CollaborationPotential::from_match_score(match_score),
    }
}

/// Score `record` and stamp it with the analysis time.
pub fn analyze_creator<R: Rng + ?Sized>(
    record: CreatorRecord,
    criteria: &BrandCriteria,
    rng: &mut R,
) -> ScoredCreator {
    let scores = score_creator(&record, criteria, rng);
    ScoredCreator {
        creator: record,
        scores,
        analyzed_at: Utc::now(),
    }
}
