//! CSV export of question sequences.
//!
//! The format is write-only: a fixed header, one row per question, options
//! rendered as a count. Field values are written verbatim without quoting.

use crate::model::Question;

/// Header row of every CSV export.
pub const CSV_HEADER: &str = "id,name,options,points,published";

/// Render one question as a CSV row.
pub fn question_row(question: &Question) -> String {
    format!(
        "{},{},{},{},{}",
        question.id,
        question.name,
        question.options.len(),
        question.points,
        question.published
    )
}

/// Render questions as CSV: header plus one row each, `\n`-separated, no
/// trailing newline.
pub fn to_csv(questions: &[Question]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(questions.iter().map(question_row))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionType;

    #[test]
    fn empty_input_is_header_only() {
        assert_eq!(to_csv(&[]), "id,name,options,points,published");
    }

    #[test]
    fn single_question() {
        let qs = vec![Question {
            published: true,
            ..Question::blank(1, "Addition", QuestionType::ShortAnswer)
        }];
        assert_eq!(
            to_csv(&qs),
            "id,name,options,points,published\n1,Addition,0,1,true"
        );
    }

    #[test]
    fn options_rendered_as_count() {
        let qs = vec![
            Question {
                published: true,
                ..Question::blank(1, "Addition", QuestionType::ShortAnswer)
            },
            Question::blank(2, "Letters", QuestionType::ShortAnswer),
            Question {
                options: vec!["red".into(), "apple".into(), "firetruck".into()],
                published: true,
                ..Question::blank(5, "Colors", QuestionType::MultipleChoice)
            },
            Question {
                options: vec!["square".into(), "triangle".into(), "circle".into()],
                points: 2,
                ..Question::blank(9, "Shapes", QuestionType::MultipleChoice)
            },
        ];
        assert_eq!(
            to_csv(&qs),
            "id,name,options,points,published\n\
             1,Addition,0,1,true\n\
             2,Letters,0,1,false\n\
             5,Colors,3,1,true\n\
             9,Shapes,3,2,false"
        );
    }

    #[test]
    fn no_trailing_newline() {
        let qs = vec![Question::blank(3, "Q", QuestionType::ShortAnswer)];
        let csv = to_csv(&qs);
        assert!(!csv.ends_with('\n'));
        assert_eq!(csv.lines().count(), 2);
    }
}
