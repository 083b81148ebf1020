//! The `qbank csv` command.

use std::path::PathBuf;

use anyhow::Result;

use qbank_core::csv::to_csv;
use qbank_core::questions::{get_non_empty_questions, get_published_questions};

use crate::config::QbankConfig;

pub fn execute(
    bank: Option<PathBuf>,
    published_only: bool,
    non_empty: bool,
    config: &QbankConfig,
) -> Result<()> {
    let bank = super::load_bank(bank, config)?;

    let mut questions = bank.questions;
    if published_only {
        questions = get_published_questions(&questions);
    }
    if non_empty {
        questions = get_non_empty_questions(&questions);
    }

    println!("{}", to_csv(&questions));

    Ok(())
}
