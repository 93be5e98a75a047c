//! Decoding of unsigned integer literals written in an arbitrary radix into exact big integers. Share values may be
//! arbitrarily long, so no fixed-width integer is involved at any point.

use std::convert::TryFrom;
use std::fmt;

use num::BigUint;
use thiserror::Error;

/// Errors raised while decoding a share value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadixError {
    #[error("base {0} is outside of the supported range {min}..={max}", min = Radix::MIN, max = Radix::MAX)]
    InvalidBase(u64),

    #[error("character {digit:?} at position {position} is not a valid digit in base {base}")]
    MalformedDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("encoded value contains no digits")]
    Empty,
}

/// A validated radix in which share values may be encoded. Digits are `0-9` followed by the letters `a-z`
/// (case-insensitive), hence the upper bound of 36.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    /// Validate `base` and wrap it into a `Radix`. Every `u64` outside of `MIN..=MAX` is an `InvalidBase`.
    pub fn new(base: u64) -> Result<Self, RadixError> {
        if (u64::from(Self::MIN)..=u64::from(Self::MAX)).contains(&base) {
            Ok(Radix(base as u32))
        } else {
            Err(RadixError::InvalidBase(base))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Interpret `value` as an unsigned integer literal in this radix. Signs, separators and whitespace are rejected.
    /// #Parameters:
    /// - `value` the digit string, most significant digit first
    ///
    /// #Output
    /// The exact value of the literal or the first offending character.
    pub fn decode(self, value: &str) -> Result<BigUint, RadixError> {
        if value.is_empty() {
            return Err(RadixError::Empty);
        }

        let digits = value
            .chars()
            .enumerate()
            .map(|(position, digit)| {
                digit
                    .to_digit(self.0)
                    .map(|d| d as u8)
                    .ok_or(RadixError::MalformedDigit {
                        digit,
                        position,
                        base: self.0,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // every digit has been checked against the radix above
        BigUint::from_radix_be(&digits, self.0).ok_or(RadixError::InvalidBase(u64::from(self.0)))
    }
}

impl TryFrom<u64> for Radix {
    type Error = RadixError;

    fn try_from(base: u64) -> Result<Self, Self::Error> {
        Radix::new(base)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decode `value` as an unsigned integer literal in base `base`.
/// #Parameters:
/// - `value` the encoded share value
/// - `base` the radix the value is encoded in, within `2..=36`
///
/// #Output
/// Returns the exact value as an arbitrary-precision integer, or `InvalidBase`, `MalformedDigit` or `Empty`.
pub fn decode(value: &str, base: u64) -> Result<BigUint, RadixError> {
    Radix::new(base)?.decode(value)
}

#[cfg(test)]
mod tests {
    use num::{BigUint, Num, Zero};
    use rand::{thread_rng, Rng};

    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(decode("111", 2).unwrap(), BigUint::from(7u32));
        assert_eq!(decode("ff", 16).unwrap(), BigUint::from(255u32));
        assert_eq!(decode("z", 36).unwrap(), BigUint::from(35u32));
        assert_eq!(decode("213", 4).unwrap(), BigUint::from(39u32));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(decode("FF", 16), decode("ff", 16));
        assert_eq!(decode("DeadBeef", 16).unwrap(), BigUint::from(0xdead_beefu32));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(decode("000101", 2).unwrap(), BigUint::from(5u32));
        assert!(decode("0000", 7).unwrap().is_zero());
    }

    #[test]
    fn test_large_value() {
        let value = "e1b5e4f7b7a8c9d0e1f2a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8";
        assert_eq!(
            decode(value, 16).unwrap(),
            BigUint::from_str_radix(value, 16).unwrap()
        );
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(decode("1", 0), Err(RadixError::InvalidBase(0)));
        assert_eq!(decode("1", 1), Err(RadixError::InvalidBase(1)));
        assert_eq!(decode("1", 37), Err(RadixError::InvalidBase(37)));
        assert_eq!(
            decode("1", 99_999_999_999),
            Err(RadixError::InvalidBase(99_999_999_999))
        );
        assert!(Radix::new(2).is_ok());
        assert!(Radix::new(36).is_ok());
    }

    #[test]
    fn test_malformed_digit() {
        assert_eq!(
            decode("12a", 10),
            Err(RadixError::MalformedDigit {
                digit: 'a',
                position: 2,
                base: 10
            })
        );
        assert_eq!(
            decode("102", 2),
            Err(RadixError::MalformedDigit {
                digit: '2',
                position: 2,
                base: 2
            })
        );
    }

    /// Signs, separators and surrounding whitespace are accepted by `from_str_radix` but are not part of a share value
    #[test]
    fn test_rejects_non_digits() {
        for value in &["-1", "+1", "1_000", " 12", "12 ", "1.5"] {
            assert!(
                matches!(decode(value, 10), Err(RadixError::MalformedDigit { .. })),
                "{:?} must not decode",
                value
            );
        }
        assert_eq!(decode("", 10), Err(RadixError::Empty));
    }

    /// Decoding is the inverse of positional encoding, up to case and leading zeros
    #[test]
    fn test_reencoding() {
        let mut rng = thread_rng();
        const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

        for _ in 0..200 {
            let base: u32 = rng.gen_range(2, 37);
            let length: usize = rng.gen_range(1, 80);
            let value: String = (0..length)
                .map(|_| {
                    let digit = rng.gen_range(0, base) as usize;
                    // pick the upper case letter for roughly half of the letter digits
                    if digit >= 10 && rng.gen::<bool>() {
                        ALPHABET[digit + 26] as char
                    } else {
                        ALPHABET[digit] as char
                    }
                })
                .collect();

            let decoded = decode(&value, u64::from(base)).unwrap();
            let normalized = value.to_lowercase();
            let normalized = normalized.trim_start_matches('0');
            let expected = if normalized.is_empty() { "0" } else { normalized };
            assert_eq!(decoded.to_str_radix(base), expected, "base {} value {}", base, value);
        }
    }
}
