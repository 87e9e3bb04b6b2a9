/// Normalizes any shift, negative included, into [0, 26).
fn normalize_shift(shift: i32) -> u8 {
    shift.rem_euclid(26) as u8
}

fn rotate(text: &str, shift: u8) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
                (((c as u8 - base + shift) % 26) + base) as char
            } else {
                c
            }
        })
        .collect()
}

/// Applies a Caesar cipher to `plaintext`, rotating each ASCII alphabetic
/// character forward by `shift` positions. Case is preserved and all other
/// characters pass through unchanged.
pub fn apply_cipher(plaintext: &str, shift: i32) -> String {
    rotate(plaintext, normalize_shift(shift))
}

/// Reverses a Caesar cipher applied with `shift`.
pub fn decipher_with_shift(ciphertext: &str, shift: i32) -> String {
    rotate(ciphertext, (26 - normalize_shift(shift)) % 26)
}

#[cfg(test)]
mod tests {
    use super::{apply_cipher, decipher_with_shift};

    #[test]
    fn basic_encoding_decoding() {
        assert_eq!(apply_cipher("abc", 1), "bcd");
        assert_eq!(apply_cipher("ABC", 1), "BCD");
        assert_eq!(decipher_with_shift("bcd", 1), "abc");
        assert_eq!(decipher_with_shift("BCD", 1), "ABC");
    }

    #[test]
    fn wrap_around() {
        assert_eq!(apply_cipher("xyz", 3), "abc");
        assert_eq!(apply_cipher("XYZ", 3), "ABC");
        assert_eq!(decipher_with_shift("abc", 3), "xyz");
    }

    #[test]
    fn identity_and_full_cycle() {
        let s = "Hello, World!";
        assert_eq!(apply_cipher(s, 0), s);
        assert_eq!(apply_cipher(s, 26), s);
        assert_eq!(decipher_with_shift(s, 26), s);
    }

    #[test]
    fn shift_normalization() {
        assert_eq!(apply_cipher("aZ", 27), apply_cipher("aZ", 1));
        assert_eq!(apply_cipher("aZ", -25), apply_cipher("aZ", 1));
        assert_eq!(apply_cipher("Rust", -3), apply_cipher("Rust", 23));
        assert_eq!(decipher_with_shift(&apply_cipher("Rust", -3), -3), "Rust");
    }

    #[test]
    fn preserves_case_and_non_letters() {
        assert_eq!(apply_cipher("Attack at Dawn!", 5), "Fyyfhp fy Ifbs!");
        let s = "1234 !@# åßç";
        assert_eq!(apply_cipher(s, 5), s);
        assert_eq!(apply_cipher("", 10), "");
    }

    #[test]
    fn round_trip_all_shifts() {
        let s = "The Quick Brown Fox, 1975.";
        for shift in -30..30 {
            assert_eq!(
                decipher_with_shift(&apply_cipher(s, shift), shift),
                s,
                "round trip failed for shift {}",
                shift
            );
        }
    }
}
