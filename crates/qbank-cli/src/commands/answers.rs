//! The `qbank answers` command.

use std::path::PathBuf;

use anyhow::Result;

use qbank_core::questions::make_answers;

use crate::config::QbankConfig;

pub fn execute(bank: Option<PathBuf>, config: &QbankConfig) -> Result<()> {
    let bank = super::load_bank(bank, config)?;
    let answers = make_answers(&bank.questions);
    println!("{}", serde_json::to_string_pretty(&answers)?);
    Ok(())
}
