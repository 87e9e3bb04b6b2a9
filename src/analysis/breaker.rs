use crate::algos::caesar::decipher_with_shift;
use crate::analysis::frequency::{frequency_order, letter_counts};
use crate::analysis::scoring::score_candidate;
use crate::structs::{CrackResult, ScoredCandidate};
use crate::traits::CipherBreaker;

/// Frequency analysis needs at least this many letters to carry any signal.
const MIN_LETTERS_FOR_FREQUENCY: usize = 5;

fn best_candidate<I>(ciphertext: &str, shifts: I) -> ScoredCandidate
where
    I: IntoIterator<Item = i32>,
{
    let mut best = ScoredCandidate::sentinel();
    for shift in shifts {
        let plaintext = decipher_with_shift(ciphertext, shift);
        let score = score_candidate(&plaintext);
        // Strictly greater: on ties the shift tried first wins.
        if score > best.score {
            best = ScoredCandidate {
                plaintext,
                shift,
                score,
            };
        }
    }
    best
}

/// Tries all 26 shifts and returns the candidate scoring highest.
///
/// Always succeeds; empty or degenerate ciphertext yields shift 0 and the
/// ciphertext deciphered with it.
pub fn break_cipher_brute_force(ciphertext: &str) -> CrackResult {
    best_candidate(ciphertext, 0..26).into_result()
}

/// Estimates the shift from letter frequencies before falling back to the
/// full sweep.
///
/// The most frequent ciphertext letter is assumed to map to 'E', and the
/// shift implied by that mapping is scored first. All remaining shifts are
/// still tried, so the guess only affects which candidate wins a tie. Inputs
/// with fewer than 5 letters are handed to [`break_cipher_brute_force`]
/// unchanged.
pub fn break_cipher_frequency_analysis(ciphertext: &str) -> CrackResult {
    let letters_only: String = ciphertext
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();

    if letters_only.len() < MIN_LETTERS_FOR_FREQUENCY {
        return break_cipher_brute_force(ciphertext);
    }

    let order = frequency_order(&letter_counts(&letters_only));

    let mut candidate_shifts: Vec<i32> = Vec::with_capacity(27);
    if let Some(most_common) = order.chars().next() {
        candidate_shifts.push((most_common as i32 - 'E' as i32).rem_euclid(26));
    }
    let guess = candidate_shifts.first().copied();
    candidate_shifts.extend((0..26).filter(|shift| Some(*shift) != guess));

    best_candidate(ciphertext, candidate_shifts).into_result()
}

/// Breaking strategy that scores every possible shift.
pub struct BruteForce;

/// Breaking strategy that prioritizes the frequency-derived shift.
pub struct FrequencyGuided;

impl CipherBreaker for BruteForce {
    fn break_cipher(&self, ciphertext: &str) -> CrackResult {
        break_cipher_brute_force(ciphertext)
    }
}

impl CipherBreaker for FrequencyGuided {
    fn break_cipher(&self, ciphertext: &str) -> CrackResult {
        break_cipher_frequency_analysis(ciphertext)
    }
}
