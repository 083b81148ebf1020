//! The `qbank names` command.

use std::path::PathBuf;

use anyhow::Result;

use qbank_core::questions::get_names;

use crate::config::QbankConfig;

pub fn execute(bank: Option<PathBuf>, config: &QbankConfig) -> Result<()> {
    let bank = super::load_bank(bank, config)?;
    for name in get_names(&bank.questions) {
        println!("{name}");
    }
    Ok(())
}
