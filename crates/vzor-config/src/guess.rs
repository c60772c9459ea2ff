use serde::{Deserialize, Serialize};

fn default_min_frequency() -> u64 {
    2
}

fn default_top_guesses() -> usize {
    5
}

fn default_common_suffixes() -> usize {
    100
}

/// Batch guessing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessConfig {
    /// Frequency-list rows below this count are not guessed
    #[serde(default = "default_min_frequency")]
    pub min_frequency: u64,
    /// Paradigms printed per word
    #[serde(default = "default_top_guesses")]
    pub top_guesses: usize,
    /// Size of the suffix set used by the vote strategy
    #[serde(default = "default_common_suffixes")]
    pub common_suffixes: usize,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            min_frequency: default_min_frequency(),
            top_guesses: default_top_guesses(),
            common_suffixes: default_common_suffixes(),
        }
    }
}

impl GuessConfig {
    pub fn new() -> Self {
        Self {
            min_frequency: crate::env_parse("VZOR_MIN_FREQUENCY")
                .unwrap_or_else(default_min_frequency),
            top_guesses: crate::env_parse("VZOR_TOP_GUESSES").unwrap_or_else(default_top_guesses),
            common_suffixes: crate::env_parse("VZOR_COMMON_SUFFIXES")
                .unwrap_or_else(default_common_suffixes),
        }
    }
}
