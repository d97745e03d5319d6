use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use crgms::{RankConfig, ReduceError, SortKey};

use crate::cli::RankOptions;

/// Merges the optional TOML file with command-line flags.
///
/// Flags win over the file. Choosing a key with `--sort-by` but no direction flag
/// resets the direction to the one that makes "top" meaningful for that key.
pub fn build_rank_config(opts: &RankOptions, n: Option<usize>) -> Result<RankConfig> {
    let mut config = match &opts.config {
        Some(path) => load_rank_file(path)?,
        None => RankConfig::default(),
    };

    if let Some(field) = opts.sort_by {
        let key = SortKey::from(field);
        config.key = key;
        config.descending = key.top_descending();
    }
    if let Some(descending) = opts.direction() {
        config.descending = descending;
    }
    if let Some(n) = n {
        config.n = n;
    }

    Ok(config)
}

/// Configuration for a full sort: any direction is allowed, but a configured
/// `n` must still be usable.
pub fn build_sort_config(opts: &RankOptions) -> Result<RankConfig> {
    let config = build_rank_config(opts, None)?;
    if config.n == 0 {
        return Err(ReduceError::InvalidTopCount).context("Invalid ranking configuration");
    }
    Ok(config)
}

fn load_rank_file(path: &Path) -> Result<RankConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    RankConfig::from_toml_str(&text)
        .with_context(|| format!("Invalid configuration file: {}", path.display()))
}
