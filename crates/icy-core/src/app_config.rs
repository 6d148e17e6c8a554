use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Optional YAML creator catalog seeding the simulated connectors.
    /// When unset the built-in catalog is used.
    pub creators_path: Option<PathBuf>,
    /// Simulated I/O latency applied to every connector call.
    pub connector_latency_ms: u64,
    pub connector_max_retries: u32,
    pub connector_retry_backoff_ms: u64,
    /// Pause between discovery steps so progress is observable by pollers.
    pub discovery_step_delay_ms: u64,
    /// Upper bound accepted for `max_results` on a discovery request.
    pub discovery_max_results: usize,
    /// How long finished discovery tasks stay retrievable.
    pub task_retention_secs: u64,
    pub rate_limit_per_minute: usize,
    /// Probability that a simulated outreach send is delivered.
    pub send_success_rate: f64,
    /// Pins every random draw in scoring and message synthesis when set.
    pub scoring_seed: Option<u64>,
}
