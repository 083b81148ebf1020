//! The `qbank find` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use qbank_core::questions::find_question;

use crate::config::QbankConfig;

pub fn execute(bank: Option<PathBuf>, id: u32, config: &QbankConfig) -> Result<()> {
    let bank = super::load_bank(bank, config)?;

    let question = find_question(&bank.questions, id)
        .with_context(|| format!("question {id} not found in {}", bank.name))?;

    print!(
        "{}",
        toml::to_string(&question).context("failed to serialize question")?
    );

    Ok(())
}
