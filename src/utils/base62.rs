//! Base62 integer codec used for deterministic slug generation.
//!
//! The alphabet is digits, then lowercase, then uppercase
//! (`0-9a-zA-Z`), which fixes the digit values 0..=61. Slugs produced
//! from store-assigned ids always decode back to the original number,
//! so no uniqueness probe is needed for generated slugs.

/// Base62 alphabet in digit-value order: digits, lowercase, uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = 62;

/// Error returned when a string cannot be decoded as Base62.
///
/// Store-generated slugs are valid by construction, so hitting this on
/// a slug read back from the database indicates a broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSlugFormat {
    #[error("slug is empty")]
    Empty,

    #[error("character '{0}' is outside the Base62 alphabet")]
    InvalidCharacter(char),

    #[error("slug value does not fit in 64 bits")]
    Overflow,
}

/// Encodes a non-negative integer as a minimal-length Base62 string.
///
/// `encode(0)` is `"0"`, never the empty string. Digits are produced
/// least-significant-first by repeated div/mod and then reversed.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    // 62^11 > 2^64, so any u64 fits in 11 digits.
    let mut digits = Vec::with_capacity(11);
    while n > 0 {
        digits.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }
    digits.reverse();

    String::from_utf8(digits).expect("alphabet is ASCII")
}

/// Decodes a Base62 string produced by [`encode`].
///
/// Accumulates left to right as `acc = acc * 62 + digit`, so
/// `decode(encode(n)) == n` for every `n`.
pub fn decode(s: &str) -> Result<u64, InvalidSlugFormat> {
    if s.is_empty() {
        return Err(InvalidSlugFormat::Empty);
    }

    let mut acc: u64 = 0;
    for c in s.chars() {
        let digit = digit_value(c).ok_or(InvalidSlugFormat::InvalidCharacter(c))?;
        acc = acc
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(InvalidSlugFormat::Overflow)?;
    }

    Ok(acc)
}

/// Digit value of a single alphabet character, `None` for anything else.
fn digit_value(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(c as u64 - '0' as u64),
        'a'..='z' => Some(c as u64 - 'a' as u64 + 10),
        'A'..='Z' => Some(c as u64 - 'A' as u64 + 36),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_is_single_character() {
        assert_eq!(encode(0), "0");
    }

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "A");
        assert_eq!(encode(61), "Z");
        assert_eq!(encode(62), "10");
        assert_eq!(encode(63), "11");
        assert_eq!(encode(62 * 62 - 1), "ZZ");
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode("0").unwrap(), 0);
        assert_eq!(decode("z").unwrap(), 35);
        assert_eq!(decode("Z").unwrap(), 61);
        assert_eq!(decode("10").unwrap(), 62);
        assert_eq!(decode("ZZ").unwrap(), 62 * 62 - 1);
    }

    #[test]
    fn test_round_trip() {
        for n in [0u64, 1, 61, 62, 63, 3843, 916_132_833, u64::MAX] {
            assert_eq!(decode(&encode(n)).unwrap(), n, "round trip failed for {n}");
        }
    }

    #[test]
    fn test_round_trip_dense_range() {
        for n in 0..10_000u64 {
            assert_eq!(decode(&encode(n)).unwrap(), n);
        }
    }

    #[test]
    fn test_decode_rejects_characters_outside_alphabet() {
        assert_eq!(
            decode("abc-def"),
            Err(InvalidSlugFormat::InvalidCharacter('-'))
        );
        assert_eq!(decode("a b"), Err(InvalidSlugFormat::InvalidCharacter(' ')));
        assert_eq!(decode("ü"), Err(InvalidSlugFormat::InvalidCharacter('ü')));
    }

    #[test]
    fn test_decode_rejects_empty_string() {
        assert_eq!(decode(""), Err(InvalidSlugFormat::Empty));
    }

    #[test]
    fn test_decode_rejects_overflow() {
        // u64::MAX is 11 digits in base62; 12 Z's cannot fit.
        assert_eq!(decode("ZZZZZZZZZZZZ"), Err(InvalidSlugFormat::Overflow));
    }

    #[test]
    fn test_encode_is_minimal_length() {
        assert_eq!(encode(61).len(), 1);
        assert_eq!(encode(62).len(), 2);
        assert_eq!(encode(62u64.pow(5) - 1).len(), 5);
        assert_eq!(encode(62u64.pow(5)).len(), 6);
    }
}
