//! Question validation and display formatting.

use crate::error::InvalidQuestion;

/// Minimum number of characters in a trimmed question.
pub const MIN_QUESTION_CHARS: usize = 3;

/// Check that a question is worth asking.
///
/// Length is counted in characters of the trimmed input.
pub fn validate(question: &str) -> Result<(), InvalidQuestion> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(InvalidQuestion::Empty);
    }
    if trimmed.chars().count() < MIN_QUESTION_CHARS {
        return Err(InvalidQuestion::TooShort);
    }
    Ok(())
}

/// Upper-case the first character and lower-case the rest.
pub fn normalize(question: &str) -> String {
    let mut chars = question.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_and_blank() {
        assert_eq!(validate(""), Err(InvalidQuestion::Empty));
        assert_eq!(validate("  "), Err(InvalidQuestion::Empty));
        assert_eq!(validate("\t\n"), Err(InvalidQuestion::Empty));
    }

    #[test]
    fn too_short() {
        assert_eq!(validate("hi"), Err(InvalidQuestion::TooShort));
        assert_eq!(validate("  hi  "), Err(InvalidQuestion::TooShort));
    }

    #[test]
    fn long_enough() {
        assert_eq!(validate("hi?"), Ok(()));
        assert_eq!(validate("Will it rain tomorrow?"), Ok(()));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // two chars, four bytes
        assert_eq!(validate("éé"), Err(InvalidQuestion::TooShort));
        assert_eq!(validate("ééé"), Ok(()));
    }

    #[test]
    fn normalize_lowercase_input() {
        assert_eq!(normalize("what time is it"), "What time is it");
    }

    #[test]
    fn normalize_uppercase_input() {
        assert_eq!(normalize("WHO AM I"), "Who am i");
    }

    #[test]
    fn normalize_non_ascii() {
        assert_eq!(normalize("éTÉ?"), "Été?");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "[a-zA-Z0-9 ?!']{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn ascii_normalize_keeps_length(s in "[a-zA-Z ?]{0,40}") {
            prop_assert_eq!(normalize(&s).len(), s.len());
        }

        #[test]
        fn surrounding_whitespace_ignored(s in "\\PC{0,12}") {
            prop_assert_eq!(validate(&format!("  {s}\t\n")), validate(&s));
        }

        #[test]
        fn three_letters_always_valid(s in "[a-z]{3,20}") {
            prop_assert_eq!(validate(&s), Ok(()));
        }
    }
}
