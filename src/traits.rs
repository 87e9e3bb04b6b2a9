use crate::structs::CrackResult;

/// A strategy for recovering plaintext and shift from Caesar ciphertext.
///
/// Breaking never fails: every strategy is total over its input, including
/// empty and non-ASCII text.
pub trait CipherBreaker: Send + Sync {
    fn break_cipher(&self, ciphertext: &str) -> CrackResult;
}
