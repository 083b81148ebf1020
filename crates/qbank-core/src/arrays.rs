//! Small numeric and string list utilities.

/// First and last element. A single element is repeated; empty stays empty.
pub fn book_end_list(numbers: &[i64]) -> Vec<i64> {
    match (numbers.first(), numbers.last()) {
        (Some(&first), Some(&last)) => vec![first, last],
        _ => Vec::new(),
    }
}

pub fn triple_numbers(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().map(|n| n * 3).collect()
}

/// Parse each string as an integer, using 0 for anything unparsable.
pub fn strings_to_integers<S: AsRef<str>>(numbers: &[S]) -> Vec<i64> {
    numbers.iter().map(|s| parse_or_zero(s.as_ref())).collect()
}

/// Like [`strings_to_integers`], after dropping one leading `$`.
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Vec<i64> {
    amounts
        .iter()
        .map(|s| {
            let s: &str = s.as_ref();
            parse_or_zero(s.strip_prefix('$').unwrap_or(s))
        })
        .collect()
}

/// Drop questions (ending in `?`) and uppercase exclamations (ending in `!`).
pub fn shout_if_exclaiming<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages
        .iter()
        .filter_map(|m| {
            let m: &str = m.as_ref();
            if m.ends_with('?') {
                None
            } else if m.ends_with('!') {
                Some(m.to_uppercase())
            } else {
                Some(m.to_string())
            }
        })
        .collect()
}

/// Number of words shorter than four characters.
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .filter(|w| {
            let w: &str = w.as_ref();
            w.chars().count() < 4
        })
        .count()
}

/// Whether every colour is red, blue or green. True when empty.
pub fn all_rgb<S: AsRef<str>>(colors: &[S]) -> bool {
    colors.iter().all(|c| {
        let c: &str = c.as_ref();
        matches!(c, "red" | "blue" | "green")
    })
}

/// `[1, 2, 3]` becomes `"6=1+2+3"`; empty input becomes `"0=0"`.
pub fn make_math(addends: &[i64]) -> String {
    let sum: i64 = addends.iter().sum();
    if addends.is_empty() {
        return format!("{sum}=0");
    }
    let terms = addends
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("+");
    format!("{sum}={terms}")
}

/// Insert the running sum after the first negative number, or append the
/// total when there is none.
///
/// `[1, 9, -5, 7]` becomes `[1, 9, -5, 10, 7]`.
pub fn inject_positive(values: &[i64]) -> Vec<i64> {
    let mut out = values.to_vec();
    match values.iter().position(|&v| v < 0) {
        Some(i) => {
            let before: i64 = values[..i].iter().sum();
            out.insert(i + 1, before);
        }
        None => out.push(values.iter().sum()),
    }
    out
}

fn parse_or_zero(s: &str) -> i64 {
    s.trim().parse().unwrap_or(0)
}
