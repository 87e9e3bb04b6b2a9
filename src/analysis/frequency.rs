/// Counts occurrences of each letter in `text`, case-folded to uppercase.
/// Only ASCII letters are counted; everything else is ignored.
pub fn letter_counts(text: &str) -> [u32; 26] {
    let mut counts = [0u32; 26];
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            counts[(c.to_ascii_uppercase() as u8 - b'A') as usize] += 1;
        }
    }
    counts
}

/// Returns the letters present in `counts` ordered from most to least
/// frequent. Equal counts fall back to alphabetical order; letters that never
/// occur are omitted.
pub fn frequency_order(counts: &[u32; 26]) -> String {
    let mut present: Vec<(u8, u32)> = counts
        .iter()
        .enumerate()
        .filter(|(_, &n)| n > 0)
        .map(|(i, &n)| (b'A' + i as u8, n))
        .collect();
    present.sort_by(|a, b| b.1.cmp(&a.1));
    present.into_iter().map(|(letter, _)| letter as char).collect()
}

#[cfg(test)]
mod tests {
    use super::{frequency_order, letter_counts};

    #[test]
    fn counts_fold_case_and_skip_non_letters() {
        let counts = letter_counts("Aa, bB! ccc 123 é");
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 2);
        assert_eq!(counts[2], 3);
        assert_eq!(counts.iter().sum::<u32>(), 7);
    }

    #[test]
    fn order_is_descending_by_count() {
        let counts = letter_counts("zzz yy x");
        assert_eq!(frequency_order(&counts), "ZYX");
    }

    #[test]
    fn absent_letters_never_appear() {
        let counts = letter_counts("banana");
        let order = frequency_order(&counts);
        assert_eq!(order.len(), 3);
        assert!(order.starts_with('A'));
        assert!(!order.contains('Z'));
    }

    #[test]
    fn ties_break_alphabetically() {
        let counts = letter_counts("cba");
        assert_eq!(frequency_order(&counts), "ABC");
    }

    #[test]
    fn empty_input() {
        let counts = letter_counts("");
        assert_eq!(counts, [0u32; 26]);
        assert_eq!(frequency_order(&counts), "");
    }
}
