pub mod answers;
pub mod csv;
pub mod edit;
pub mod find;
pub mod init;
pub mod names;
pub mod summary;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};

use qbank_core::bank::{parse_bank, QuestionBank};

use crate::config::QbankConfig;

/// The `--bank` argument, falling back to `default_bank` from config.
pub fn resolve_bank_path(bank: Option<PathBuf>, config: &QbankConfig) -> Result<PathBuf> {
    bank.or_else(|| config.default_bank.clone())
        .context("no question bank given; pass --bank or set default_bank in qbank.toml")
}

/// Resolve and parse a single bank file.
pub fn load_bank(bank: Option<PathBuf>, config: &QbankConfig) -> Result<QuestionBank> {
    let path = resolve_bank_path(bank, config)?;
    parse_bank(&path)
}
