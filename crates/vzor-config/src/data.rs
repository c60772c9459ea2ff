use std::env;

use serde::{Deserialize, Serialize};
use vzor_core::FreqListLayout;

fn default_dictionary() -> String {
    "data/current.dic".to_string()
}

fn default_paradigms() -> String {
    "data/current.par".to_string()
}

fn default_frequency_list() -> String {
    "data/freqlist.cleaned.sorted_alpha".to_string()
}

fn default_frequency_layout() -> FreqListLayout {
    FreqListLayout::WordFreq
}

/// Input files of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    #[serde(default = "default_dictionary")]
    pub dictionary: String,
    #[serde(default = "default_paradigms")]
    pub paradigms: String,
    /// Alphabetically sorted list the tries are built from
    #[serde(default = "default_frequency_list")]
    pub frequency_list: String,
    #[serde(default = "default_frequency_layout")]
    pub frequency_layout: FreqListLayout,
    /// `paradigm word frequency` rows for the paradigm spreads
    pub filtered_frequency_list: Option<String>,
    /// Precomputed `=`-joined segmentations, `None` for the per-character baseline
    pub segmentation_list: Option<String>,
    /// Drop informal tags when building the database
    pub only_formal: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            paradigms: default_paradigms(),
            frequency_list: default_frequency_list(),
            frequency_layout: default_frequency_layout(),
            filtered_frequency_list: None,
            segmentation_list: None,
            only_formal: false,
        }
    }
}

impl DataConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            dictionary: env::var("VZOR_DICTIONARY").unwrap_or(defaults.dictionary),
            paradigms: env::var("VZOR_PARADIGMS").unwrap_or(defaults.paradigms),
            frequency_list: env::var("VZOR_FREQ_LIST").unwrap_or(defaults.frequency_list),
            frequency_layout: defaults.frequency_layout,
            filtered_frequency_list: env::var("VZOR_FILTERED_FREQ_LIST").ok(),
            segmentation_list: env::var("VZOR_SEGMENTATION_LIST").ok(),
            only_formal: crate::env_parse("VZOR_ONLY_FORMAL").unwrap_or(defaults.only_formal),
        }
    }
}
