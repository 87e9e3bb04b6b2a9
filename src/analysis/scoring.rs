use crate::analysis::frequency::{frequency_order, letter_counts};
use crate::constants::{COMMON_DIGRAMS, COMMON_WORDS, ENGLISH_FREQUENCY_ORDER};

/// How many of the text's most frequent letters are compared against the
/// reference ranking.
const TOP_LETTERS_CHECKED: usize = 5;

/// How deep into the reference ranking a letter may sit and still count as
/// a frequency match.
const REFERENCE_PREFIX: usize = 6;

/// Scores how likely `text` is to be English. Higher is more English-like.
///
/// The score is a sum of independent signals: common-word hits (+1.0 each),
/// a space-density bonus (+2.0), top-letter frequency matches (+0.5 each),
/// and reference digram occurrences (+0.2 each). It is a relative ranking
/// signal only, not a probability.
pub fn score_candidate(text: &str) -> f64 {
    let mut score = 0.0;
    let text_upper = text.to_uppercase();

    for word in text_upper.split(|c: char| !c.is_ascii_alphabetic()) {
        if !word.is_empty() && COMMON_WORDS.contains(word) {
            score += 1.0;
        }
    }

    let char_count = text.chars().count();
    if char_count > 0 {
        let spaces = text.chars().filter(|&c| c == ' ').count();
        let space_ratio = spaces as f64 / char_count as f64;
        if space_ratio > 0.10 && space_ratio < 0.25 {
            score += 2.0;
        }
    }

    // Frequency matching only carries signal on longer texts.
    if char_count >= 5 {
        let order = frequency_order(&letter_counts(text));
        let reference = &ENGLISH_FREQUENCY_ORDER[..REFERENCE_PREFIX];
        for letter in order.chars().take(TOP_LETTERS_CHECKED) {
            if reference.contains(letter) {
                score += 0.5;
            }
        }
    }

    for digram in COMMON_DIGRAMS {
        let hits = text_upper
            .as_bytes()
            .windows(2)
            .filter(|pair| *pair == digram.as_bytes())
            .count();
        score += hits as f64 * 0.2;
    }

    score
}
