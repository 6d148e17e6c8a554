mod discover;
mod message;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use icy_connectors::{builtin_catalog, ConnectorRegistry};
use icy_core::{AppConfig, BrandCriteria, BrandTone, BudgetTier, CampaignGoal, Platform};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "icy-cli")]
#[command(about = "Creator discovery and outreach from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a discovery task and print the ranked creators as JSON
    Discover {
        #[command(flatten)]
        brand: BrandArgs,
        /// Platform to scan; repeat for several
        #[arg(long = "platform", default_value = "instagram")]
        platforms: Vec<Platform>,
        #[arg(long, default_value = "10")]
        max_results: usize,
        /// Pin scoring randomness (overrides `ICY_SCORING_SEED`)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate an outreach message for one creator
    Message {
        /// Creator id as returned by discovery, e.g. `instagram_001`
        #[arg(long)]
        creator_id: String,
        #[command(flatten)]
        brand: BrandArgs,
        #[arg(long, default_value = "collaboration")]
        message_type: String,
        /// Print the full message as JSON instead of plain text
        #[arg(long)]
        json: bool,
        /// Pin template choices (overrides `ICY_SCORING_SEED`)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Brand fields shared by every subcommand.
#[derive(Debug, Clone, Args)]
struct BrandArgs {
    #[arg(long)]
    product: String,
    #[arg(long, default_value = "")]
    description: String,
    /// Comma-separated interests, e.g. "sustainable fashion, lifestyle"
    #[arg(long, default_value = "lifestyle")]
    interests: String,
    #[arg(long, default_value = "global")]
    region: String,
    #[arg(long, default_value = "micro")]
    budget: BudgetTier,
    #[arg(long, default_value = "friendly")]
    tone: BrandTone,
    #[arg(long, default_value = "awareness")]
    goal: CampaignGoal,
}

impl BrandArgs {
    fn into_criteria(self, platforms: Vec<Platform>) -> BrandCriteria {
        BrandCriteria {
            product_name: self.product,
            product_description: self.description,
            target_interests: self.interests,
            target_region: self.region,
            budget_tier: self.budget,
            platforms,
            brand_tone: self.tone,
            campaign_goal: self.goal,
        }
    }
}

/// Simulated connectors over the configured catalog, or the built-in one.
fn connectors(config: &AppConfig) -> anyhow::Result<ConnectorRegistry> {
    let catalog = match &config.creators_path {
        Some(path) => icy_core::load_catalog(path)?.creators,
        None => builtin_catalog()?,
    };
    Ok(ConnectorRegistry::simulated(
        &catalog,
        Duration::from_millis(config.connector_latency_ms),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = icy_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = connectors(&config)?;

    match cli.command {
        Commands::Discover {
            brand,
            platforms,
            max_results,
            seed,
        } => {
            let criteria = brand.into_criteria(platforms.clone());
            let results = discover::run_discover(
                registry,
                discover::cli_settings(&config, seed),
                criteria,
                platforms,
                max_results,
            )
            .await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Message {
            creator_id,
            brand,
            message_type,
            json,
            seed,
        } => {
            let criteria = brand.into_criteria(Vec::new());
            let message = message::run_message(
                &registry,
                &creator_id,
                criteria,
                &message_type,
                seed.or(config.scoring_seed),
            )
            .await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&message)?);
            } else {
                println!("{}", message::render(&message));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
