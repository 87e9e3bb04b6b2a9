//! Caesar substitution cipher encoder and breaker.
//!
//! The encoder shifts alphabetic characters by a fixed offset, preserving
//! case and passing everything else through unchanged. The breaker recovers
//! the offset from ciphertext alone, either by scoring all 26 rotations
//! (brute force) or by guessing the shift from the most frequent ciphertext
//! letter first (frequency analysis). Candidates are ranked by an additive
//! English-plausibility score built from common words, space density, letter
//! frequencies and digrams.
//!
//! ```
//! use caesar_crack::{apply_cipher, break_cipher_brute_force};
//!
//! let ciphertext = apply_cipher("MEET ME AT THE USUAL PLACE", 11);
//! let cracked = break_cipher_brute_force(&ciphertext);
//! assert_eq!(cracked.shift, 11);
//! assert_eq!(cracked.plaintext, "MEET ME AT THE USUAL PLACE");
//! ```

#[macro_use]
extern crate lazy_static;

mod algos;
mod analysis;
mod constants;
mod structs;
mod traits;

pub use algos::caesar::{apply_cipher, decipher_with_shift};
pub use analysis::breaker::{
    break_cipher_brute_force, break_cipher_frequency_analysis, BruteForce, FrequencyGuided,
};
pub use analysis::frequency::{frequency_order, letter_counts};
pub use analysis::scoring::score_candidate;
pub use structs::{CrackResult, ScoredCandidate};
pub use traits::CipherBreaker;
