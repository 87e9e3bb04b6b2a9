/// Outcome of a cipher-breaking attempt: the recovered plaintext and the
/// shift that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackResult {
    pub plaintext: String,
    pub shift: i32,
}

/// A candidate plaintext together with its plausibility score, used by the
/// breakers for best-so-far tracking.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub plaintext: String,
    pub shift: i32,
    pub score: f64,
}

impl ScoredCandidate {
    /// Sentinel below any attainable score, so even empty ciphertext yields
    /// a defined result (shift 0, empty plaintext).
    pub fn sentinel() -> Self {
        ScoredCandidate {
            plaintext: String::new(),
            shift: 0,
            score: -1.0,
        }
    }

    pub fn into_result(self) -> CrackResult {
        CrackResult {
            plaintext: self.plaintext,
            shift: self.shift,
        }
    }
}
