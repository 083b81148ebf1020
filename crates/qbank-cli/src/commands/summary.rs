//! The `qbank summary` command.

use std::path::PathBuf;

use anyhow::Result;

use qbank_core::summary::BankSummary;

use crate::config::QbankConfig;

pub fn execute(bank: Option<PathBuf>, format: Option<String>, config: &QbankConfig) -> Result<()> {
    let bank = super::load_bank(bank, config)?;
    let summary = BankSummary::from_bank(&bank);

    let format = format.unwrap_or_else(|| config.summary_format.clone());
    match format.as_str() {
        "markdown" | "md" => print!("{}", summary.to_markdown()),
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        "text" => print_table(&summary),
        other => anyhow::bail!("unknown summary format: {other} (expected text, json, markdown)"),
    }

    Ok(())
}

fn print_table(summary: &BankSummary) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);

    let rows = [
        ("Questions", summary.question_count.to_string()),
        ("Published", summary.published_count.to_string()),
        ("Non-empty", summary.non_empty_count.to_string()),
        ("Total points", summary.total_points.to_string()),
        ("Published points", summary.published_points.to_string()),
        (
            "Single type",
            if summary.same_type { "yes" } else { "no" }.to_string(),
        ),
    ];
    for (metric, value) in rows {
        table.add_row(vec![Cell::new(metric), Cell::new(value)]);
    }

    println!("Bank: {} ({})", summary.name, summary.id);
    println!("{table}");
}
