
use std::{path::PathBuf, time::Duration};

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "weather-station", version, about = "Weather station observer demo")]
pub struct Config {
    /// Measurement script to replay, one `temperature,humidity,pressure` per line.
    /// Without it the built-in demo sequence runs.
    pub script: Option<PathBuf>,

    /// Delay between replayed readings
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Stamp display lines with local time
    #[arg(long)]
    pub timestamps: bool,

    /// Also register a temperature statistics display
    #[arg(long)]
    pub stats: bool,

    /// Debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Config {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

// args[0] is the command name, as with env::args()
pub fn parse_config(args: &[String]) -> Result<Config, clap::Error> {
    Config::try_parse_from(args)
}
