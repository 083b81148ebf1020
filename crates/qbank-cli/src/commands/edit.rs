//! The `qbank edit` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;

use qbank_core::model::{OptionSlot, Question, QuestionType};
use qbank_core::questions::{
    add_new_question, change_question_type_by_id, duplicate_question_in_array, edit_option,
    publish_all, remove_question, rename_question_by_id,
};

use crate::config::QbankConfig;

#[derive(Debug, Subcommand)]
pub enum EditOp {
    /// Publish every question
    PublishAll,

    /// Append a blank question
    Add {
        #[arg(long)]
        id: u32,

        #[arg(long)]
        name: String,

        /// multiple_choice_question or short_answer_question
        #[arg(long = "type")]
        kind: QuestionType,
    },

    /// Rename a question
    Rename {
        #[arg(long)]
        id: u32,

        #[arg(long)]
        name: String,
    },

    /// Change a question's type
    Retype {
        #[arg(long)]
        id: u32,

        #[arg(long = "type")]
        kind: QuestionType,
    },

    /// Replace an option, or append with index -1
    #[command(name = "option")]
    SetOption {
        #[arg(long)]
        id: u32,

        #[arg(long, allow_negative_numbers = true)]
        index: i64,

        #[arg(long)]
        text: String,
    },

    /// Insert a copy of a question right after it
    Duplicate {
        #[arg(long)]
        id: u32,

        #[arg(long)]
        new_id: u32,
    },

    /// Remove a question
    Remove {
        #[arg(long)]
        id: u32,
    },
}

impl EditOp {
    /// Apply the edit to `questions`, returning the new sequence.
    pub fn apply(&self, questions: &[Question]) -> Result<Vec<Question>> {
        let edited = match self {
            EditOp::PublishAll => publish_all(questions),
            EditOp::Add { id, name, kind } => add_new_question(questions, *id, name, *kind),
            EditOp::Rename { id, name } => rename_question_by_id(questions, *id, name),
            EditOp::Retype { id, kind } => change_question_type_by_id(questions, *id, *kind),
            EditOp::SetOption { id, index, text } => {
                let slot = OptionSlot::try_from(*index)?;
                edit_option(questions, *id, slot, text)?
            }
            EditOp::Duplicate { id, new_id } => {
                duplicate_question_in_array(questions, *id, *new_id)
            }
            EditOp::Remove { id } => remove_question(questions, *id),
        };
        Ok(edited)
    }
}

pub fn execute(
    bank: Option<PathBuf>,
    output: Option<PathBuf>,
    op: EditOp,
    config: &QbankConfig,
) -> Result<()> {
    let bank = super::load_bank(bank, config)?;

    let questions = op.apply(&bank.questions)?;
    tracing::debug!(
        ?op,
        before = bank.questions.len(),
        after = questions.len(),
        "applied edit to {}",
        bank.id
    );

    let rendered = bank.with_questions(questions).to_toml_string()?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write bank to {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
