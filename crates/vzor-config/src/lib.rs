use std::env;

use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::guess::GuessConfig;
use self::scoring::ScoringConfig;

pub mod data;
pub mod guess;
pub mod scoring;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub scoring: ScoringConfig,
    pub guess: GuessConfig,
}

impl Config {
    /// Defaults overridden by `VZOR_*` environment variables
    pub fn new() -> Self {
        Config {
            data: DataConfig::new(),
            scoring: ScoringConfig::new(),
            guess: GuessConfig::new(),
        }
    }
}

/// Parse an environment variable, `None` when unset or unparsable
pub(crate) fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
