//! The `qbank validate` command.

use std::path::PathBuf;

use anyhow::Result;

use qbank_core::bank::{load_bank_directory, parse_bank, validate_bank};

use crate::config::QbankConfig;

pub fn execute(bank: Option<PathBuf>, config: &QbankConfig) -> Result<()> {
    let bank_path = super::resolve_bank_path(bank, config)?;
    let banks = if bank_path.is_dir() {
        load_bank_directory(&bank_path)?
    } else {
        vec![parse_bank(&bank_path)?]
    };

    let mut total_warnings = 0;

    for bank in &banks {
        println!("Bank: {} ({} questions)", bank.name, bank.questions.len());

        let warnings = validate_bank(bank);
        for w in &warnings {
            let prefix = w
                .question_id
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
