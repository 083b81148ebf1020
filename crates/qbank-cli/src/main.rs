//! qbank CLI — question bank tooling.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::edit::EditOp;

#[derive(Parser)]
#[command(name = "qbank", version, about = "Question bank tooling")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create starter config and example bank
    Init,

    /// Validate question bank TOML files
    Validate {
        /// Path to bank file or directory
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Export questions as CSV
    Csv {
        /// Path to bank file
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Only published questions
        #[arg(long)]
        published_only: bool,

        /// Only questions with a body, expected answer, or options
        #[arg(long)]
        non_empty: bool,
    },

    /// Summarize a bank
    Summary {
        /// Path to bank file
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,
    },

    /// Print a blank answer sheet as JSON
    Answers {
        /// Path to bank file
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Show one question
    Find {
        /// Path to bank file
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Question id
        #[arg(long)]
        id: u32,
    },

    /// List question names
    Names {
        /// Path to bank file
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Edit a bank and print the result as TOML
    Edit {
        /// Path to bank file
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Write the edited bank here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        #[command(subcommand)]
        op: EditOp,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("qbank_core=info,qbank=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = config::load_config_from(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Init => commands::init::execute(),
            Commands::Validate { bank } => commands::validate::execute(bank, &config),
            Commands::Csv {
                bank,
                published_only,
                non_empty,
            } => commands::csv::execute(bank, published_only, non_empty, &config),
            Commands::Summary { bank, format } => commands::summary::execute(bank, format, &config),
            Commands::Answers { bank } => commands::answers::execute(bank, &config),
            Commands::Find { bank, id } => commands::find::execute(bank, id, &config),
            Commands::Names { bank } => commands::names::execute(bank, &config),
            Commands::Edit { bank, output, op } => {
                commands::edit::execute(bank, output, op, &config)
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
