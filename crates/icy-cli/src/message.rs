use icy_connectors::ConnectorRegistry;
use icy_core::BrandCriteria;
use icy_outreach::{synthesize, CreatorContext, OutreachMessage};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Resolve `creator_id` and write an outreach message for it.
///
/// Criteria without platforms target the creator's own platform.
///
/// # Errors
///
/// Returns an error for invalid criteria or an unknown creator.
pub(crate) async fn run_message(
    registry: &ConnectorRegistry,
    creator_id: &str,
    mut criteria: BrandCriteria,
    message_type: &str,
    seed: Option<u64>,
) -> anyhow::Result<OutreachMessage> {
    let creator = registry.find_creator(creator_id).await?;
    if criteria.platforms.is_empty() {
        criteria.platforms.push(creator.platform);
    }
    criteria.validate()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(synthesize(
        &CreatorContext::from(&creator),
        &criteria,
        message_type,
        &mut rng,
    ))
}

pub(crate) fn render(message: &OutreachMessage) -> String {
    format!(
        "Subject: {}\n\n{}\n\n(personalization {:.2})",
        message.subject, message.body, message.personalization_score
    )
}
