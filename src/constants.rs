use std::collections::HashSet;

/// English letters ranked from most to least common.
pub const ENGLISH_FREQUENCY_ORDER: &str = "ETAOINSHRDLUCMFWYPVBGKJQXZ";

/// Letter pairs that occur disproportionately often in English text.
pub const COMMON_DIGRAMS: [&str; 6] = ["TH", "HE", "IN", "ER", "AN", "RE"];

lazy_static! {
    /// The twenty most common English words, uppercased for matching.
    pub static ref COMMON_WORDS: HashSet<&'static str> = [
        "THE", "BE", "TO", "OF", "AND", "A", "IN", "THAT", "HAVE", "I", "IT", "FOR", "NOT", "ON",
        "WITH", "HE", "AS", "YOU", "DO", "AT",
    ]
    .into_iter()
    .collect();
}
