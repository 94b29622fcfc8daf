use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use sse::{BrokerConfig, OverflowPolicy};
use std::time::Duration;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of CORS origins allowed to read responses, including the event stream.
    /// Use `*` to allow any origin.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 3333)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Number of events each SSE subscriber can hold before the broker has to wait
    /// on it (or skip it, see `overflow_policy`)
    #[arg(long, env, default_value_t = sse::config::DEFAULT_SUBSCRIBER_CAPACITY)]
    pub subscriber_capacity: usize,

    /// What the broker does when a subscriber's buffer is full: `block` waits for it,
    /// stalling every other subscriber; `drop` skips the event for that subscriber only
    #[arg(
        long,
        env,
        default_value_t = OverflowPolicy::Block,
        value_parser = clap::builder::PossibleValuesParser::new(["block", "drop", "BLOCK", "DROP"])
            .map(|s| s.parse::<OverflowPolicy>().unwrap()),
        )]
    pub overflow_policy: OverflowPolicy,

    /// Seconds between keep-alive comments on idle event streams
    #[arg(long, env, default_value_t = 15)]
    pub sse_keep_alive_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn interface(&self) -> &str {
        self.interface.as_deref().unwrap_or("127.0.0.1")
    }

    pub fn broker_config(&self) -> BrokerConfig {
        BrokerConfig::new(self.subscriber_capacity, self.overflow_policy)
    }

    pub fn sse_keep_alive(&self) -> Duration {
        Duration::from_secs(self.sse_keep_alive_secs.max(1))
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}
