//! Bank summary report.

use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::questions::{
    get_names, get_non_empty_questions, get_published_questions, same_type, sum_points,
    sum_published_points,
};

/// Aggregate figures for one question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
    pub published_count: usize,
    pub non_empty_count: usize,
    pub total_points: u64,
    pub published_points: u64,
    /// Whether every question has the same type.
    pub same_type: bool,
    /// Non-blank question names, in order.
    pub names: Vec<String>,
}

impl BankSummary {
    pub fn from_bank(bank: &QuestionBank) -> Self {
        let questions = &bank.questions;
        Self {
            id: bank.id.clone(),
            name: bank.name.clone(),
            question_count: questions.len(),
            published_count: get_published_questions(questions).len(),
            non_empty_count: get_non_empty_questions(questions).len(),
            total_points: sum_points(questions),
            published_points: sum_published_points(questions),
            same_type: same_type(questions),
            names: get_names(questions),
        }
    }

    /// Format the summary as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {} (`{}`)\n\n", self.name, self.id));
        md.push_str("| Metric | Value |\n");
        md.push_str("|--------|-------|\n");
        md.push_str(&format!("| Questions | {} |\n", self.question_count));
        md.push_str(&format!("| Published | {} |\n", self.published_count));
        md.push_str(&format!("| Non-empty | {} |\n", self.non_empty_count));
        md.push_str(&format!("| Total points | {} |\n", self.total_points));
        md.push_str(&format!("| Published points | {} |\n", self.published_points));
        md.push_str(&format!(
            "| Single type | {} |\n",
            if self.same_type { "yes" } else { "no" }
        ));

        if !self.names.is_empty() {
            md.push_str("\n### Questions\n\n");
            for name in &self.names {
                md.push_str(&format!("- {name}\n"));
            }
        }

        md
    }
}
