//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, validates them,
//! and renders them back to TOML after edits.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{default_points, Question, QuestionType};

/// A named, ordered collection of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this bank.
    #[serde(default)]
    pub description: String,
    /// The questions, in display order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Same header, different questions.
    pub fn with_questions(&self, questions: Vec<Question>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            questions,
        }
    }

    /// Render the bank in the same TOML layout `parse_bank_str` reads.
    pub fn to_toml_string(&self) -> Result<String> {
        let file = TomlBankFileRef {
            bank: TomlBankHeaderRef {
                id: &self.id,
                name: &self.name,
                description: &self.description,
            },
            questions: &self.questions,
        };
        toml::to_string(&file).context("failed to serialize question bank")
    }
}

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: u32,
    name: String,
    #[serde(default)]
    body: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    expected: String,
    #[serde(default = "default_points")]
    points: u32,
    #[serde(default)]
    published: bool,
}

#[derive(Serialize)]
struct TomlBankFileRef<'a> {
    bank: TomlBankHeaderRef<'a>,
    questions: &'a [Question],
}

#[derive(Serialize)]
struct TomlBankHeaderRef<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank`.
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let kind: QuestionType = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;

            Ok(Question {
                id: q.id,
                name: q.name,
                body: q.body,
                kind,
                options: q.options,
                expected: q.expected,
                points: q.points,
                published: q.published,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        bank = %parsed.bank.id,
        questions = questions.len(),
        "parsed question bank from {}",
        source_path.display()
    );

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        questions,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from bank validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_question(question: &Question, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(question.id),
            message: message.into(),
        }
    }
}

/// Check a bank for common authoring mistakes. Warnings never reject a bank.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for q in &bank.questions {
        if !seen_ids.insert(q.id) {
            warnings.push(ValidationWarning::for_question(
                q,
                format!("duplicate question ID: {}", q.id),
            ));
        }
    }

    for q in &bank.questions {
        if q.name.trim().is_empty() {
            warnings.push(ValidationWarning::for_question(q, "name is blank"));
        }

        if q.is_empty() {
            warnings.push(ValidationWarning::for_question(
                q,
                "question is empty (no body, expected answer, or options)",
            ));
        }

        if q.kind.is_choice() {
            if q.options.is_empty() {
                warnings.push(ValidationWarning::for_question(
                    q,
                    "multiple choice question has no options",
                ));
            } else if !q.expected.is_empty() && !q.options.contains(&q.expected) {
                warnings.push(ValidationWarning::for_question(
                    q,
                    format!("expected answer {:?} is not one of the options", q.expected),
                ));
            }
        } else if !q.options.is_empty() {
            warnings.push(ValidationWarning::for_question(
                q,
                format!("{} has options that will be ignored", q.kind),
            ));
        }
    }

    if bank.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "bank has no questions".into(),
        });
    }

    warnings
}
