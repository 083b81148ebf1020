//! Core data model types for qbank.
//!
//! `Question` is the record every operation works on; `Answer` is derived
//! from it. Both are plain value types compared structurally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuestionError;

/// A single question record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within a sequence by caller convention.
    pub id: u32,
    /// Short label.
    pub name: String,
    /// Free-text prompt shown to the student.
    #[serde(default)]
    pub body: String,
    /// The question type tag.
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Choices offered for choice-type questions.
    #[serde(default)]
    pub options: Vec<String>,
    /// Expected answer.
    #[serde(default)]
    pub expected: String,
    /// Score value.
    #[serde(default = "default_points")]
    pub points: u32,
    /// Whether students can see the question.
    #[serde(default)]
    pub published: bool,
}

pub(crate) fn default_points() -> u32 {
    1
}

impl Question {
    /// A fresh unpublished question worth one point with no content.
    pub fn blank(id: u32, name: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            id,
            name: name.into(),
            body: String::new(),
            kind,
            options: Vec::new(),
            expected: String::new(),
            points: default_points(),
            published: false,
        }
    }

    /// True when `body`, `expected` and `options` are all empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.expected.is_empty() && self.options.is_empty()
    }

    /// An unpublished copy under a new id, named `Copy of <name>`.
    pub fn duplicate(&self, new_id: u32) -> Self {
        Self {
            id: new_id,
            name: format!("Copy of {}", self.name),
            published: false,
            ..self.clone()
        }
    }
}

/// Closed set of question types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "multiple_choice_question")]
    MultipleChoice,
    #[serde(rename = "short_answer_question")]
    ShortAnswer,
}

impl QuestionType {
    /// Whether answers are picked from `options`.
    pub fn is_choice(self) -> bool {
        matches!(self, QuestionType::MultipleChoice)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple_choice_question"),
            QuestionType::ShortAnswer => write!(f, "short_answer_question"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multiple_choice_question" | "multiple_choice" | "mc" => {
                Ok(QuestionType::MultipleChoice)
            }
            "short_answer_question" | "short_answer" | "sa" => Ok(QuestionType::ShortAnswer),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// A student's answer slot for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The `id` of the question this answers.
    pub question_id: u32,
    pub text: String,
    pub submitted: bool,
    pub correct: bool,
}

impl Answer {
    /// An empty, unsubmitted answer for `question`.
    pub fn for_question(question: &Question) -> Self {
        Self {
            question_id: question.id,
            text: String::new(),
            submitted: false,
            correct: false,
        }
    }
}

/// Where `edit_option` writes the new option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSlot {
    /// Push onto the end of the list.
    Append,
    /// Replace the option at this position.
    At(usize),
}

impl TryFrom<i64> for OptionSlot {
    type Error = QuestionError;

    /// `-1` appends; any other negative index is rejected.
    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            -1 => Ok(OptionSlot::Append),
            i if i >= 0 => usize::try_from(i)
                .map(OptionSlot::At)
                .map_err(|_| QuestionError::InvalidOptionIndex(i)),
            i => Err(QuestionError::InvalidOptionIndex(i)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Question {
        Question {
            id: 5,
            name: "Colors".into(),
            body: "Which of these is a color?".into(),
            kind: QuestionType::MultipleChoice,
            options: vec!["red".into(), "apple".into(), "firetruck".into()],
            expected: "red".into(),
            points: 1,
            published: true,
        }
    }

    #[test]
    fn question_type_display_and_parse() {
        assert_eq!(
            QuestionType::MultipleChoice.to_string(),
            "multiple_choice_question"
        );
        assert_eq!(
            "short_answer_question".parse::<QuestionType>().unwrap(),
            QuestionType::ShortAnswer
        );
        assert_eq!(
            "MC".parse::<QuestionType>().unwrap(),
            QuestionType::MultipleChoice
        );
        assert_eq!(
            "sa".parse::<QuestionType>().unwrap(),
            QuestionType::ShortAnswer
        );
        assert!("essay".parse::<QuestionType>().is_err());
    }

    #[test]
    fn only_multiple_choice_is_choice() {
        assert!(QuestionType::MultipleChoice.is_choice());
        assert!(!QuestionType::ShortAnswer.is_choice());
    }

    #[test]
    fn blank_question_defaults() {
        let q = Question::blank(9, "Shapes", QuestionType::ShortAnswer);
        assert_eq!(q.id, 9);
        assert_eq!(q.name, "Shapes");
        assert!(q.is_empty());
        assert_eq!(q.points, 1);
        assert!(!q.published);
    }

    #[test]
    fn emptiness_checks_each_field() {
        let blank = Question::blank(1, "x", QuestionType::ShortAnswer);
        assert!(blank.is_empty());
        assert!(!Question {
            body: "b".into(),
            ..blank.clone()
        }
        .is_empty());
        assert!(!Question {
            expected: "e".into(),
            ..blank.clone()
        }
        .is_empty());
        assert!(!Question {
            options: vec!["o".into()],
            ..blank
        }
        .is_empty());
    }

    #[test]
    fn duplicate_renames_and_unpublishes() {
        let original = colors();
        let copy = original.duplicate(27);
        assert_eq!(copy.id, 27);
        assert_eq!(copy.name, "Copy of Colors");
        assert!(!copy.published);
        assert_eq!(copy.options, original.options);
        assert_eq!(copy.body, original.body);
        assert_eq!(copy.expected, original.expected);
    }

    #[test]
    fn answer_for_question() {
        let answer = Answer::for_question(&colors());
        assert_eq!(answer.question_id, 5);
        assert_eq!(answer.text, "");
        assert!(!answer.submitted);
        assert!(!answer.correct);
    }

    #[test]
    fn option_slot_from_legacy_index() {
        assert_eq!(OptionSlot::try_from(-1).unwrap(), OptionSlot::Append);
        assert_eq!(OptionSlot::try_from(0).unwrap(), OptionSlot::At(0));
        assert_eq!(OptionSlot::try_from(4).unwrap(), OptionSlot::At(4));
        assert_eq!(
            OptionSlot::try_from(-2),
            Err(QuestionError::InvalidOptionIndex(-2))
        );
    }

    #[test]
    fn question_serde_uses_type_key() {
        let json = serde_json::to_value(colors()).unwrap();
        assert_eq!(json["type"], "multiple_choice_question");
        let back: Question = serde_json::from_value(json).unwrap();
        assert_eq!(back, colors());
    }
}
