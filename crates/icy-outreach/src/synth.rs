use chrono::{DateTime, Utc};
use icy_core::{BrandCriteria, BrandTone, CreatorRecord, Platform};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::reference::{content_focus_phrases, personal_reference};
use crate::templates::{brand_introduction, resolve_tone, templates_for, value_proposition};

const SIGN_OFF: [&str; 2] = ["Best regards,", "The ICY Team"];

/// Personalization ceiling, in hundredths.
const MAX_PERSONALIZATION: u32 = 95;

/// What synthesis needs to know about the recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorContext {
    pub creator_id: String,
    pub name: String,
    pub platform: Platform,
    pub category: String,
    pub recent_excerpt: String,
    pub followers: u64,
    pub engagement_rate: f64,
}

impl From<&CreatorRecord> for CreatorContext {
    fn from(record: &CreatorRecord) -> Self {
        Self {
            creator_id: record.id.clone(),
            name: record.display_name.clone(),
            platform: record.platform,
            category: record.category.clone(),
            recent_excerpt: record.recent_post.clone(),
            followers: record.followers,
            engagement_rate: record.engagement_rate,
        }
    }
}

/// The individual lines of a message before assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageParts {
    pub greeting: String,
    pub opening: String,
    pub compliment: String,
    pub personal_reference: String,
    pub brand_introduction: String,
    pub proposal: String,
    pub value_proposition: String,
    pub call_to_action: String,
    pub closing: String,
}

impl MessageParts {
    fn lines(&self) -> [&str; 9] {
        [
            self.greeting.as_str(),
            self.opening.as_str(),
            self.compliment.as_str(),
            self.personal_reference.as_str(),
            self.brand_introduction.as_str(),
            self.proposal.as_str(),
            self.value_proposition.as_str(),
            self.call_to_action.as_str(),
            self.closing.as_str(),
        ]
    }

    /// Body text: every non-empty part followed by the sign-off, one per line.
    #[must_use]
    pub fn assemble(&self) -> String {
        self.lines()
            .into_iter()
            .chain(SIGN_OFF)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachMessage {
    pub creator_id: String,
    pub subject: String,
    pub body: String,
    /// Within `[0.5, 0.95]`.
    pub personalization_score: f64,
    /// Tone whose templates were used, after fallback.
    pub tone: BrandTone,
    pub message_type: String,
    pub generated_at: DateTime<Utc>,
}

/// Score how personalized `parts` are for `ctx`.
///
/// Starts at 0.50 and adds 0.15 when the name appears in the greeting, 0.20
/// for a personal reference longer than ten characters, 0.10 when the
/// category appears in the lower-cased text and 0.05 when the platform does.
/// The result is capped at 0.95.
#[must_use]
pub fn personalization_score(parts: &MessageParts, ctx: &CreatorContext) -> f64 {
    let mut hundredths: u32 = 50;

    if !ctx.name.is_empty() && parts.greeting.contains(&ctx.name) {
        hundredths += 15;
    }

    if parts.personal_reference.chars().count() > 10 {
        hundredths += 20;
    }

    let text = parts.lines().join(" ").to_lowercase();
    let category = ctx.category.to_lowercase();
    if !category.is_empty() && text.contains(&category) {
        hundredths += 10;
    }
    if text.contains(ctx.platform.as_str()) {
        hundredths += 5;
    }

    f64::from(hundredths.min(MAX_PERSONALIZATION)) / 100.0
}

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn compose_parts<R: Rng + ?Sized>(
    ctx: &CreatorContext,
    criteria: &BrandCriteria,
    tone: BrandTone,
    rng: &mut R,
) -> MessageParts {
    let t = templates_for(tone);
    let name = if ctx.name.is_empty() { "there" } else { ctx.name.as_str() };
    let content_focus = pick(content_focus_phrases(&ctx.category), rng);

    MessageParts {
        greeting: pick(t.greeting, rng).replace("{name}", name),
        opening: pick(t.opening, rng).to_string(),
        compliment: pick(t.compliment, rng).replace("{content_focus}", content_focus),
        personal_reference: personal_reference(&ctx.recent_excerpt, ctx.platform).to_string(),
        brand_introduction: brand_introduction(
            tone,
            &criteria.product_name,
            &criteria.product_description,
        ),
        proposal: pick(t.proposal, rng).to_string(),
        value_proposition: value_proposition(criteria.campaign_goal, ctx.followers),
        call_to_action: t.call_to_action.to_string(),
        closing: pick(t.closing, rng).to_string(),
    }
}

fn subject_line<R: Rng + ?Sized>(
    ctx: &CreatorContext,
    criteria: &BrandCriteria,
    tone: BrandTone,
    rng: &mut R,
) -> String {
    let name = if ctx.name.is_empty() { "Creator" } else { ctx.name.as_str() };
    pick(templates_for(tone).subject, rng)
        .replace("{name}", name)
        .replace("{product}", &criteria.product_name)
}

/// Write an outreach message from the brand in `criteria` to the creator in `ctx`.
///
/// Template and phrase choices come from `rng`; everything else is rule-driven.
pub fn synthesize<R: Rng + ?Sized>(
    ctx: &CreatorContext,
    criteria: &BrandCriteria,
    message_type: &str,
    rng: &mut R,
) -> OutreachMessage {
    let tone = resolve_tone(criteria.brand_tone);
    let parts = compose_parts(ctx, criteria, tone, rng);
    let subject = subject_line(ctx, criteria, tone, rng);

    OutreachMessage {
        creator_id: ctx.creator_id.clone(),
        subject,
        body: parts.assemble(),
        personalization_score: personalization_score(&parts, ctx),
        tone,
        message_type: message_type.to_string(),
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use icy_core::{BudgetTier, CampaignGoal};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::reference::{GENERIC_REFERENCE, SUSTAINABLE_REFERENCE};

    fn sarah() -> CreatorContext {
        CreatorContext {
            creator_id: "instagram_001".to_string(),
            name: "Sarah Chen".to_string(),
            platform: Platform::Instagram,
            category: "fashion".to_string(),
            recent_excerpt: "Just dropped my sustainable fashion haul!".to_string(),
            followers: 125_000,
            engagement_rate: 4.2,
        }
    }

    fn criteria(tone: BrandTone) -> BrandCriteria {
        BrandCriteria {
            product_name: "EcoThread".to_string(),
            product_description: "Organic cotton basics made to last for years of everyday wear."
                .to_string(),
            target_interests: "sustainable fashion".to_string(),
            target_region: "global".to_string(),
            budget_tier: BudgetTier::Mid,
            platforms: vec![Platform::Instagram],
            brand_tone: tone,
            campaign_goal: CampaignGoal::Awareness,
        }
    }

    fn parts() -> MessageParts {
        MessageParts {
            greeting: "Hi Sarah Chen!".to_string(),
            opening: "Hope all is good with you!".to_string(),
            compliment: "Your styling posts are incredible!".to_string(),
            personal_reference: String::new(),
            brand_introduction: "I'm from the team at EcoThread! We're all about cotton...".to_string(),
            proposal: "We have an exciting partnership idea for you!".to_string(),
            value_proposition: "Value.".to_string(),
            call_to_action: "Chat?".to_string(),
            closing: "Hope to connect soon!".to_string(),
        }
    }

    #[test]
    fn sustainable_excerpt_gets_sustainability_reference() {
        let mut rng = StdRng::seed_from_u64(3);
        let parts = compose_parts(&sarah(), &criteria(BrandTone::Friendly), BrandTone::Friendly, &mut rng);
        assert_eq!(parts.personal_reference, SUSTAINABLE_REFERENCE);
        assert_ne!(parts.personal_reference, GENERIC_REFERENCE);
    }

    #[test]
    fn sustainable_fashion_message_scores_full_marks() {
        // name +0.15, reference +0.20, "fashion" in the reference +0.10; platform absent.
        let msg = synthesize(
            &sarah(),
            &criteria(BrandTone::Friendly),
            "collaboration",
            &mut StdRng::seed_from_u64(11),
        );
        assert!((msg.personalization_score - 0.95).abs() < f64::EPSILON);
        assert!(msg.body.contains(SUSTAINABLE_REFERENCE));
    }

    #[test]
    fn score_base_only() {
        let mut ctx = sarah();
        ctx.name = "Nobody Here".to_string();
        ctx.category = "gaming".to_string();
        assert!((personalization_score(&parts(), &ctx) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn score_adds_each_signal() {
        let mut ctx = sarah();
        ctx.category = "gaming".to_string();
        assert!((personalization_score(&parts(), &ctx) - 0.65).abs() < f64::EPSILON);

        let mut p = parts();
        p.personal_reference = "Loved your instagram reel".to_string();
        // name +0.15, reference +0.20, platform +0.05
        assert!((personalization_score(&p, &ctx) - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn score_is_capped() {
        let mut p = parts();
        p.personal_reference = "Your fashion post on instagram was great".to_string();
        assert!((personalization_score(&p, &sarah()) - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn body_has_no_empty_lines_and_signs_off() {
        let mut ctx = sarah();
        ctx.recent_excerpt = String::new();
        for tone in [
            BrandTone::Professional,
            BrandTone::Friendly,
            BrandTone::Luxury,
            BrandTone::Playful,
        ] {
            let msg = synthesize(&ctx, &criteria(tone), "collaboration", &mut StdRng::seed_from_u64(5));
            assert!(msg.body.lines().all(|l| !l.is_empty()));
            assert!(msg.body.ends_with("Best regards,\nThe ICY Team"));
            assert_eq!(msg.body.lines().count(), 10, "reference line dropped");
            assert!(msg.body.lines().next().unwrap().contains("Sarah Chen"));
            assert_eq!(msg.tone, tone);
        }
    }

    #[test]
    fn unknown_tone_uses_friendly_templates() {
        let msg = synthesize(
            &sarah(),
            &criteria(BrandTone::Edgy),
            "collaboration",
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(msg.tone, BrandTone::Friendly);
        assert!(msg.body.contains("I'm from the team at EcoThread!"));
    }

    #[test]
    fn subject_mentions_creator_or_product() {
        for seed in 0..30 {
            let msg = synthesize(
                &sarah(),
                &criteria(BrandTone::Professional),
                "collaboration",
                &mut StdRng::seed_from_u64(seed),
            );
            assert!(msg.subject.contains("Sarah Chen") || msg.subject.contains("EcoThread"));
            assert!(!msg.subject.contains('{'));
        }
    }

    #[test]
    fn personalization_stays_in_range() {
        let contexts = [
            sarah(),
            CreatorContext {
                creator_id: "youtube_900".to_string(),
                name: String::new(),
                platform: Platform::Youtube,
                category: String::new(),
                recent_excerpt: String::new(),
                followers: 0,
                engagement_rate: 0.0,
            },
        ];
        for ctx in &contexts {
            for seed in 0..100 {
                let msg = synthesize(
                    ctx,
                    &criteria(BrandTone::Playful),
                    "collaboration",
                    &mut StdRng::seed_from_u64(seed),
                );
                assert!((0.5..=0.95).contains(&msg.personalization_score));
                assert!(!msg.body.is_empty());
            }
        }
    }

    #[test]
    fn seeded_synthesis_is_reproducible() {
        let a = synthesize(&sarah(), &criteria(BrandTone::Luxury), "collaboration", &mut StdRng::seed_from_u64(9));
        let b = synthesize(&sarah(), &criteria(BrandTone::Luxury), "collaboration", &mut StdRng::seed_from_u64(9));
        assert_eq!(a.body, b.body);
        assert_eq!(a.subject, b.subject);
    }

    #[test]
    fn context_from_record_copies_fields() {
        let record = CreatorRecord {
            id: "youtube_001".to_string(),
            platform: Platform::Youtube,
            username: "@alexfitness".to_string(),
            display_name: "Alex Rodriguez".to_string(),
            followers: 89_000,
            engagement_rate: 6.8,
            category: "Fitness & Wellness".to_string(),
            location: "Miami, FL".to_string(),
            bio: String::new(),
            verified: false,
            recent_post: "New workout routine".to_string(),
        };
        let ctx = CreatorContext::from(&record);
        assert_eq!(ctx.name, "Alex Rodriguez");
        assert_eq!(ctx.recent_excerpt, "New workout routine");
    }
}
