//! The `qbank init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("qbank.toml").exists() {
        println!("qbank.toml already exists, skipping.");
    } else {
        std::fs::write("qbank.toml", SAMPLE_CONFIG)?;
        println!("Created qbank.toml");
    }

    std::fs::create_dir_all("banks")?;
    let example_path = std::path::Path::new("banks/example.toml");
    if example_path.exists() {
        println!("banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add questions to banks/example.toml");
    println!("  2. Run: qbank validate");
    println!("  3. Run: qbank summary");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# qbank configuration

default_bank = "banks/example.toml"
summary_format = "text"
"#;

const EXAMPLE_BANK: &str = r#"[bank]
id = "example"
name = "Example Bank"
description = "A small bank to get started"

[[questions]]
id = 1
name = "Addition"
body = "What is 2+2?"
type = "short_answer_question"
expected = "4"
points = 1
published = true

[[questions]]
id = 2
name = "Colors"
body = "Which of these is a color?"
type = "multiple_choice_question"
options = ["red", "apple", "firetruck"]
expected = "red"
points = 1
published = false
"#;
