//! Application configuration management.

use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Fiscal calendar configuration.
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Evaluation configuration.
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Fiscal calendar configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA time zone used to decide what "today" is.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Upper bound on how many periods one request may enumerate.
    #[serde(default = "default_max_periods")]
    pub max_periods: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            max_periods: default_max_periods(),
        }
    }
}

fn default_timezone() -> String {
    "Asia/Tokyo".to_string()
}

fn default_max_periods() -> i32 {
    100
}

impl CalendarConfig {
    /// Parses the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if the name is not a known IANA zone.
    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Configuration(format!("unknown timezone: {}", self.timezone)))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "appraisal=debug,tower_http=debug".to_string()
}

/// Evaluation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    /// Reward tiers keyed by minimum score.
    #[serde(default = "default_rank_tiers")]
    pub rank_tiers: Vec<RankTierConfig>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            rank_tiers: default_rank_tiers(),
        }
    }
}

/// One configured row of the reward table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RankTierConfig {
    /// Rank name (e.g., "S").
    pub rank: String,
    /// Minimum weighted score (0-100) to reach this rank.
    pub min_score: Decimal,
    /// Reward amount in yen.
    pub reward: Decimal,
}

fn default_rank_tiers() -> Vec<RankTierConfig> {
    [
        ("S", 90, 100_000),
        ("A", 80, 50_000),
        ("B", 65, 20_000),
        ("C", 50, 0),
        ("D", 0, 0),
    ]
    .into_iter()
    .map(|(rank, min_score, reward)| RankTierConfig {
        rank: rank.to_string(),
        min_score: Decimal::from(min_score),
        reward: Decimal::from(reward),
    })
    .collect()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("APPRAISAL").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
