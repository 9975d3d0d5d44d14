use std::sync::LazyLock;

use regex::Regex;

/// non-terminal chars followed by terminal punctuation
static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid")
});

/// Split a text into sentences
/// Terminal punctuation (`.`, `!`, `?`) stays in its sentence.
/// A trailing fragment without terminal punctuation is dropped.
///
/// # Arguments
/// * `text` - text to split
///
/// # Returns
/// * `Vec<String>` - sentences in text order
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_terminal_punctuation() {
        assert_eq!(
            split_sentences("One. Two!! Three?"),
            vec!["One.", " Two!!", " Three?"]
        );
    }

    #[test]
    fn drops_trailing_fragment() {
        assert_eq!(split_sentences("Cats run. Dogs"), vec!["Cats run."]);
    }

    #[test]
    fn no_terminal_punctuation_means_no_sentence() {
        assert!(split_sentences("cats run").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn leading_punctuation_is_not_a_sentence() {
        assert_eq!(split_sentences("...Hi."), vec!["Hi."]);
    }

    #[test]
    fn spans_lines() {
        assert_eq!(split_sentences("a\nb. c"), vec!["a\nb."]);
    }
}
