//! Quote configuration

use std::path::PathBuf;

use clap::{Args, Parser};
use jiff::civil::Date;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Stay to price.
#[derive(Debug, Args)]
pub(crate) struct StayArgs {
    /// Room code (e.g. DLX-201)
    #[arg(long)]
    pub(crate) room: String,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) check_in: Date,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) check_out: Date,

    /// Number of guests
    #[arg(long, default_value_t = 1)]
    pub(crate) guests: u32,

    /// Promo code to apply
    #[arg(long)]
    pub(crate) promo: Option<String>,

    /// Price as if today were this date (YYYY-MM-DD); defaults to the UTC date
    #[arg(long, env = "STAY_QUOTE_TODAY")]
    pub(crate) today: Option<Date>,
}

/// Fixture settings.
#[derive(Debug, Args)]
pub(crate) struct FixtureArgs {
    /// Directory holding the config, rooms and promotions fixtures
    #[arg(long = "fixtures", env = "STAY_QUOTE_FIXTURES", default_value = "./fixtures")]
    pub(crate) base_path: PathBuf,

    /// Fixture set name
    #[arg(long, env = "STAY_QUOTE_SET", default_value = "oceanview")]
    pub(crate) set: String,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}

/// Stay quote configuration
#[derive(Debug, Parser)]
#[command(name = "stay-quote", about = "Price a hotel stay", long_about = None)]
pub(crate) struct QuoteConfig {
    /// Stay to price.
    #[command(flatten)]
    pub(crate) stay: StayArgs,

    /// Fixture settings.
    #[command(flatten)]
    pub(crate) fixtures: FixtureArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,
}

impl QuoteConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
