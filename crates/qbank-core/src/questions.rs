//! Queries and edits over ordered question sequences.
//!
//! Every function borrows its input and returns freshly owned values. Edits
//! are copy-with-override: untouched records are cloned through in order,
//! and an edit aimed at an id that is not present returns an equal copy.

use crate::error::QuestionError;
use crate::model::{Answer, OptionSlot, Question, QuestionType};

/// Only the published questions, in order.
pub fn get_published_questions(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| q.published).cloned().collect()
}

/// Only the questions with a body, an expected answer, or options.
pub fn get_non_empty_questions(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| !q.is_empty()).cloned().collect()
}

/// The first question with the given `id`, or `None`.
pub fn find_question(questions: &[Question], id: u32) -> Option<Question> {
    questions.iter().find(|q| q.id == id).cloned()
}

/// Every question except the one with the given `id`.
pub fn remove_question(questions: &[Question], id: u32) -> Vec<Question> {
    log_if_missing(questions, id, "remove");
    questions.iter().filter(|q| q.id != id).cloned().collect()
}

/// Names of the questions, skipping blank ones.
pub fn get_names(questions: &[Question]) -> Vec<String> {
    questions
        .iter()
        .filter(|q| !q.name.is_empty())
        .map(|q| q.name.clone())
        .collect()
}

/// Total points across all questions.
pub fn sum_points(questions: &[Question]) -> u64 {
    questions.iter().map(|q| u64::from(q.points)).sum()
}

/// Total points across published questions only.
pub fn sum_published_points(questions: &[Question]) -> u64 {
    questions
        .iter()
        .filter(|q| q.published)
        .map(|q| u64::from(q.points))
        .sum()
}

/// Whether every question shares the first one's type. True when empty.
pub fn same_type(questions: &[Question]) -> bool {
    match questions.first() {
        Some(first) => questions.iter().all(|q| q.kind == first.kind),
        None => true,
    }
}

/// One blank answer per question, in order.
pub fn make_answers(questions: &[Question]) -> Vec<Answer> {
    questions.iter().map(Answer::for_question).collect()
}

/// Every question with `published` set.
pub fn publish_all(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .map(|q| Question {
            published: true,
            ..q.clone()
        })
        .collect()
}

/// A copy of `questions` with a blank question appended.
pub fn add_new_question(
    questions: &[Question],
    id: u32,
    name: &str,
    kind: QuestionType,
) -> Vec<Question> {
    let mut out = questions.to_vec();
    out.push(Question::blank(id, name, kind));
    out
}

/// Rename the question with `target_id`.
pub fn rename_question_by_id(
    questions: &[Question],
    target_id: u32,
    new_name: &str,
) -> Vec<Question> {
    log_if_missing(questions, target_id, "rename");
    questions
        .iter()
        .map(|q| {
            if q.id == target_id {
                Question {
                    name: new_name.to_string(),
                    ..q.clone()
                }
            } else {
                q.clone()
            }
        })
        .collect()
}

/// Change the type of the question with `target_id`.
///
/// Options are cleared when a choice question becomes a non-choice one and
/// left alone otherwise.
pub fn change_question_type_by_id(
    questions: &[Question],
    target_id: u32,
    new_kind: QuestionType,
) -> Vec<Question> {
    log_if_missing(questions, target_id, "change type");
    questions
        .iter()
        .map(|q| {
            if q.id != target_id {
                return q.clone();
            }
            let options = if q.kind.is_choice() && !new_kind.is_choice() {
                Vec::new()
            } else {
                q.options.clone()
            };
            Question {
                kind: new_kind,
                options,
                ..q.clone()
            }
        })
        .collect()
}

/// Append or replace an option on the question with `target_id`.
///
/// Replacing past the end of the target's option list is an error; the
/// input is never extended to fit.
pub fn edit_option(
    questions: &[Question],
    target_id: u32,
    slot: OptionSlot,
    new_option: &str,
) -> Result<Vec<Question>, QuestionError> {
    log_if_missing(questions, target_id, "edit option");
    questions
        .iter()
        .map(|q| {
            let mut edited = q.clone();
            if q.id != target_id {
                return Ok(edited);
            }
            match slot {
                OptionSlot::Append => edited.options.push(new_option.to_string()),
                OptionSlot::At(index) => {
                    let len = edited.options.len();
                    let option = edited.options.get_mut(index).ok_or(
                        QuestionError::OptionIndexOutOfBounds {
                            question_id: q.id,
                            index,
                            len,
                        },
                    )?;
                    *option = new_option.to_string();
                }
            }
            Ok(edited)
        })
        .collect()
}

/// Insert a duplicate of the question with `target_id` directly after it.
pub fn duplicate_question_in_array(
    questions: &[Question],
    target_id: u32,
    new_id: u32,
) -> Vec<Question> {
    log_if_missing(questions, target_id, "duplicate");
    questions
        .iter()
        .flat_map(|q| {
            let copy = (q.id == target_id).then(|| q.duplicate(new_id));
            std::iter::once(q.clone()).chain(copy)
        })
        .collect()
}

fn log_if_missing(questions: &[Question], id: u32, op: &str) {
    if !questions.iter().any(|q| q.id == id) {
        tracing::debug!(id, op, "no question with this id, returning unchanged copy");
    }
}
