//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level qbank configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QbankConfig {
    /// Bank used when a command is run without `--bank`.
    #[serde(default)]
    pub default_bank: Option<PathBuf>,
    /// Format for `qbank summary` when `--format` is not given.
    #[serde(default = "default_summary_format")]
    pub summary_format: String,
}

fn default_summary_format() -> String {
    "text".to_string()
}

impl Default for QbankConfig {
    fn default() -> Self {
        Self {
            default_bank: None,
            summary_format: default_summary_format(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `qbank.toml` in the current directory
/// 2. `~/.config/qbank/config.toml`
///
/// `QBANK_BANK` overrides `default_bank`.
pub fn load_config_from(path: Option<&Path>) -> Result<QbankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("qbank.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QbankConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QbankConfig::default(),
    };

    if let Ok(bank) = std::env::var("QBANK_BANK") {
        if !bank.is_empty() {
            config.default_bank = Some(PathBuf::from(bank));
        }
    }

    config.default_bank = config
        .default_bank
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("qbank"))
}
