use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use vzor_config::Config;

/// Read the JSON config at `path`, or build one from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No config file given, reading VZOR_* environment variables");
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("cannot open config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
