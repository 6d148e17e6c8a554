use super::*;

fn simulated() -> ConnectorRegistry {
    ConnectorRegistry::simulated(&builtin_catalog().unwrap(), Duration::ZERO)
}

fn settings() -> icy_discovery::DiscoverySettings {
    icy_discovery::DiscoverySettings {
        step_delay: Duration::ZERO,
        connector_retry_backoff_ms: 0,
        scoring_seed: Some(3),
        ..icy_discovery::DiscoverySettings::default()
    }
}

#[test]
fn parses_discover_with_defaults() {
    let cli = Cli::try_parse_from([
        "icy-cli",
        "discover",
        "--product",
        "EcoThread",
        "--interests",
        "sustainable fashion",
    ])
    .expect("expected valid cli args");

    let Commands::Discover {
        brand,
        platforms,
        max_results,
        seed,
    } = cli.command
    else {
        panic!("expected discover");
    };
    assert_eq!(brand.product, "EcoThread");
    assert_eq!(brand.region, "global");
    assert_eq!(brand.budget, BudgetTier::Micro);
    assert_eq!(brand.tone, BrandTone::Friendly);
    assert_eq!(platforms, vec![Platform::Instagram]);
    assert_eq!(max_results, 10);
    assert!(seed.is_none());
}

#[test]
fn parses_repeated_platforms_and_budget() {
    let cli = Cli::try_parse_from([
        "icy-cli",
        "discover",
        "--product",
        "Glow",
        "--interests",
        "beauty, skincare",
        "--region",
        "Los Angeles",
        "--budget",
        "mid",
        "--platform",
        "instagram",
        "--platform",
        "youtube",
        "--max-results",
        "25",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Commands::Discover {
            ref platforms,
            max_results: 25,
            ref brand,
            ..
        } if platforms == &vec![Platform::Instagram, Platform::Youtube]
            && brand.budget == BudgetTier::Mid
            && brand.region == "Los Angeles"
    ));
}

#[test]
fn rejects_unknown_budget_tier() {
    let result = Cli::try_parse_from([
        "icy-cli",
        "discover",
        "--product",
        "Glow",
        "--budget",
        "mega",
    ]);
    assert!(result.is_err());
}

#[test]
fn unknown_tone_parses_as_other() {
    let cli = Cli::try_parse_from([
        "icy-cli",
        "message",
        "--creator-id",
        "instagram_001",
        "--product",
        "Glow",
        "--tone",
        "edgy-ish",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Message { ref brand, json: false, .. } if brand.tone == BrandTone::Other
    ));
}

#[test]
fn message_requires_creator_id() {
    assert!(Cli::try_parse_from(["icy-cli", "message", "--product", "Glow"]).is_err());
}

#[tokio::test]
async fn discover_returns_ranked_instagram_creators() {
    let criteria = BrandArgs {
        product: "EcoThread".to_string(),
        description: String::new(),
        interests: "sustainable fashion".to_string(),
        region: "Los Angeles".to_string(),
        budget: BudgetTier::Micro,
        tone: BrandTone::Friendly,
        goal: CampaignGoal::Awareness,
    }
    .into_criteria(vec![Platform::Instagram]);

    let results = discover::run_discover(
        simulated(),
        settings(),
        criteria,
        vec![Platform::Instagram],
        10,
    )
    .await
    .unwrap();

    assert_eq!(results.total_count, 10);
    assert!(results
        .influencers
        .iter()
        .all(|c| c.creator.platform == Platform::Instagram));
    assert!(results
        .influencers
        .windows(2)
        .all(|w| w[0].match_score() >= w[1].match_score()));
}

#[tokio::test]
async fn discover_reports_failed_tasks() {
    let criteria = BrandArgs {
        product: "EcoThread".to_string(),
        description: String::new(),
        interests: "sustainable fashion".to_string(),
        region: "global".to_string(),
        budget: BudgetTier::Micro,
        tone: BrandTone::Friendly,
        goal: CampaignGoal::Awareness,
    }
    .into_criteria(vec![Platform::Linkedin]);

    let err = discover::run_discover(simulated(), settings(), criteria, vec![Platform::Linkedin], 5)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("discovery failed"));
}

#[tokio::test]
async fn message_fills_in_creator_platform() {
    let criteria = BrandArgs {
        product: "EcoThread".to_string(),
        description: "Organic cotton basics.".to_string(),
        interests: "lifestyle".to_string(),
        region: "global".to_string(),
        budget: BudgetTier::Micro,
        tone: BrandTone::Professional,
        goal: CampaignGoal::Sales,
    }
    .into_criteria(Vec::new());

    let message = message::run_message(
        &simulated(),
        "youtube_001",
        criteria,
        "collaboration",
        Some(9),
    )
    .await
    .unwrap();

    assert_eq!(message.creator_id, "youtube_001");
    assert_eq!(message.tone, BrandTone::Professional);
    let rendered = message::render(&message);
    assert!(rendered.starts_with("Subject: "));
    assert!(rendered.contains("The ICY Team"));
}

#[tokio::test]
async fn message_for_unknown_creator_fails() {
    let criteria = BrandArgs {
        product: "EcoThread".to_string(),
        description: String::new(),
        interests: "lifestyle".to_string(),
        region: "global".to_string(),
        budget: BudgetTier::Micro,
        tone: BrandTone::Friendly,
        goal: CampaignGoal::Awareness,
    }
    .into_criteria(Vec::new());

    let result =
        message::run_message(&simulated(), "instagram_050", criteria, "collaboration", None).await;
    assert!(result.is_err());
}
