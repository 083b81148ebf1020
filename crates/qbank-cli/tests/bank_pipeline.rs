//! Library pipeline tests over the fixture banks.
//!
//! Loads the shipped banks, chains record edits the way the CLI does, and
//! checks the results survive a TOML round trip.

use std::path::Path;

use qbank_core::bank::{load_bank_directory, parse_bank, parse_bank_str, validate_bank};
use qbank_core::csv::to_csv;
use qbank_core::model::{OptionSlot, QuestionType};
use qbank_core::questions::*;
use qbank_core::summary::BankSummary;

fn basics() -> qbank_core::bank::QuestionBank {
    parse_bank(Path::new("../../banks/basics.toml")).unwrap()
}

#[test]
fn fixture_banks_load() {
    let banks = load_bank_directory(Path::new("../../banks")).unwrap();
    let ids: Vec<&str> = banks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["basics", "drafts"]);
    assert!(validate_bank(&banks[0]).is_empty());
    assert!(!validate_bank(&banks[1]).is_empty());
}

#[test]
fn publishing_everything_equalizes_points() {
    let bank = basics();
    assert!(sum_published_points(&bank.questions) < sum_points(&bank.questions));

    let published = publish_all(&bank.questions);
    assert_eq!(
        sum_published_points(&published),
        sum_points(&bank.questions)
    );
    assert_eq!(get_published_questions(&published), published);
}

#[test]
fn chained_edits_keep_order_and_input() {
    let bank = basics();
    let original = bank.questions.clone();

    let step1 = add_new_question(&original, 10, "Subtraction", QuestionType::ShortAnswer);
    let step2 = rename_question_by_id(&step1, 2, "Alphabet");
    let step3 = duplicate_question_in_array(&step2, 5, 50);
    let step4 = change_question_type_by_id(&step3, 50, QuestionType::ShortAnswer);
    let step5 = edit_option(&step4, 9, OptionSlot::At(0), "rectangle").unwrap();
    let step6 = remove_question(&step5, 1);

    let ids: Vec<u32> = step6.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![2, 5, 50, 9, 10]);

    let copy = find_question(&step6, 50).unwrap();
    assert_eq!(copy.name, "Copy of Colors");
    assert_eq!(copy.kind, QuestionType::ShortAnswer);
    assert!(copy.options.is_empty());
    assert!(!copy.published);

    assert_eq!(find_question(&step6, 2).unwrap().name, "Alphabet");
    assert_eq!(find_question(&step6, 9).unwrap().options[0], "rectangle");
    assert_eq!(original, bank.questions);
}

#[test]
fn csv_after_edits() {
    let bank = basics();
    let edited = duplicate_question_in_array(&bank.questions, 1, 11);
    assert_eq!(
        to_csv(&get_published_questions(&edited)),
        "id,name,options,points,published\n1,Addition,0,1,true\n5,Colors,3,1,true"
    );
    assert_eq!(
        to_csv(&edited).lines().nth(2),
        Some("11,Copy of Addition,0,1,false")
    );
}

#[test]
fn edited_bank_round_trips_through_toml() {
    let bank = basics();
    let edited = bank.with_questions(
        edit_option(&bank.questions, 5, OptionSlot::Append, "blue").unwrap(),
    );

    let rendered = edited.to_toml_string().unwrap();
    let reparsed = parse_bank_str(&rendered, Path::new("edited.toml")).unwrap();
    assert_eq!(reparsed, edited);
    assert_eq!(
        BankSummary::from_bank(&reparsed),
        BankSummary::from_bank(&edited)
    );
}

#[test]
fn answers_match_bank() {
    let bank = basics();
    let answers = make_answers(&bank.questions);
    let ids: Vec<u32> = answers.iter().map(|a| a.question_id).collect();
    assert_eq!(ids, vec![1, 2, 5, 9]);
    assert!(answers.iter().all(|a| a.text.is_empty() && !a.correct));
}
