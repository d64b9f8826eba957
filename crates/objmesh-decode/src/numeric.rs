//! Numeric token lexing.
//!
//! Both parsers work character by character instead of going through
//! `str::parse`. Floats are truncated after [`SIGNIFICANT_DIGITS`] digits,
//! which is roughly what an `f32` can hold, so every loader produces the
//! same bits for the same text.

use crate::error::{DecodeError, DecodeResult};

/// Number of digits consumed by [`parse_fixed_float`] before it stops.
pub const SIGNIFICANT_DIGITS: usize = 7;

fn digit_value(character: char) -> Option<u8> {
    match character {
        '0'..='9' => u8::try_from(character).ok().map(|byte| byte - b'0'),
        _ => None,
    }
}

/// Parse an unsigned decimal integer.
///
/// The token is scanned from its last character to its first. Values that
/// do not fit in 32 bits wrap. An empty token yields 0.
pub fn parse_unsigned(token: &str) -> DecodeResult<u32> {
    let mut value = 0_u32;
    let mut weight = 1_u32;

    for (position, character) in token.char_indices().rev() {
        let Some(digit) = digit_value(character) else {
            return Err(DecodeError::InvalidNumericToken {
                character,
                position,
            });
        };
        value = value.wrapping_add(u32::from(digit).wrapping_mul(weight));
        weight = weight.wrapping_mul(10);
    }

    Ok(value)
}

/// Parse a fixed-notation floating point number.
///
/// Accepts one optional leading `-` and at most one `.`. Digits after the
/// seventh are ignored without being validated.
pub fn parse_fixed_float(token: &str) -> DecodeResult<f32> {
    let (sign, digits, offset) = match token.strip_prefix('-') {
        Some(rest) => (-1.0_f32, rest, 1),
        None => (1.0_f32, token, 0),
    };

    if digits.is_empty() {
        return Err(DecodeError::EmptyNumericToken);
    }

    // Weight of the leading digit: 10^(number of integral digits - 1).
    let integral_len = digits.find('.').unwrap_or(digits.len());
    let exponent = i32::try_from(integral_len).unwrap_or(i32::MAX) - 1;
    #[allow(clippy::cast_possible_truncation)]
    let mut weight = 10_f64.powi(exponent) as f32;

    let mut value = 0.0_f32;
    let mut consumed = 0;
    let mut seen_point = false;

    for (index, character) in digits.char_indices() {
        if consumed == SIGNIFICANT_DIGITS {
            break;
        }

        if character == '.' && !seen_point {
            seen_point = true;
            continue;
        }

        let Some(digit) = digit_value(character) else {
            return Err(DecodeError::InvalidNumericToken {
                character,
                position: index + offset,
            });
        };

        // Zeros still count toward the cutoff but never touch `value`; the
        // weight of a very long integral part overflows to infinity.
        if digit != 0 {
            value += f32::from(digit) * weight * sign;
        }
        weight /= 10.0;
        consumed += 1;
    }

    if consumed == 0 {
        return Err(DecodeError::EmptyNumericToken);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn unsigned_leading_zeros() {
        assert_eq!(parse_unsigned("007"), Ok(7));
        assert_eq!(parse_unsigned("0"), Ok(0));
        assert_eq!(parse_unsigned("1024"), Ok(1024));
    }

    #[test]
    fn unsigned_empty_is_zero() {
        assert_eq!(parse_unsigned(""), Ok(0));
    }

    #[test]
    fn unsigned_rejects_sign_and_whitespace() {
        assert_eq!(
            parse_unsigned("-1"),
            Err(DecodeError::InvalidNumericToken {
                character: '-',
                position: 0
            })
        );
        assert_eq!(
            parse_unsigned("12 "),
            Err(DecodeError::InvalidNumericToken {
                character: ' ',
                position: 2
            })
        );
    }

    #[test]
    fn unsigned_reports_last_bad_character_first() {
        // Scanning runs right to left.
        assert_eq!(
            parse_unsigned("a1b"),
            Err(DecodeError::InvalidNumericToken {
                character: 'b',
                position: 2
            })
        );
    }

    #[test]
    fn unsigned_wraps_past_u32() {
        assert_eq!(parse_unsigned("4294967295"), Ok(u32::MAX));
        assert_eq!(parse_unsigned("4294967296"), Ok(0));
        assert_eq!(parse_unsigned("4294967301"), Ok(5));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn float_exact_values() {
        assert_eq!(parse_fixed_float("12.5"), Ok(12.5));
        assert_eq!(parse_fixed_float("0.5"), Ok(0.5));
        assert_eq!(parse_fixed_float("100"), Ok(100.0));
        assert_eq!(parse_fixed_float("-1"), Ok(-1.0));
        assert_eq!(parse_fixed_float("-12.5"), Ok(-12.5));
    }

    #[test]
    fn float_fraction_only() {
        let value = parse_fixed_float(".25").unwrap();
        assert_relative_eq!(value, 0.25, max_relative = 1e-6);
        let value = parse_fixed_float("-0.75").unwrap();
        assert_relative_eq!(value, -0.75, max_relative = 1e-6);
    }

    #[test]
    fn float_truncates_after_seventh_digit() {
        // The leading zero counts: 0,1,2,3,4,5,6 are consumed.
        let value = parse_fixed_float("0.1234567891").unwrap();
        assert_eq!(value.to_bits(), 0.123_456_f32.to_bits());

        let value = parse_fixed_float("123456789").unwrap();
        assert_eq!(value.to_bits(), 123_456_700_f32.to_bits());
    }

    #[test]
    fn float_long_zero_padding_is_finite() {
        // 45 integral digits put the leading weight past `f32::MAX`.
        let token = format!("{}1", "0".repeat(45));
        assert_eq!(parse_fixed_float(&token).map(f32::to_bits), Ok(0.0_f32.to_bits()));

        let negative = format!("-{token}.5");
        assert_eq!(parse_fixed_float(&negative).map(f32::to_bits), Ok(0.0_f32.to_bits()));
    }

    #[test]
    fn float_ignores_input_after_cutoff() {
        let value = parse_fixed_float("1.234567x9").unwrap();
        assert_relative_eq!(value, 1.234_567, max_relative = 1e-6);
    }

    #[test]
    fn float_rejects_bad_characters() {
        assert_eq!(
            parse_fixed_float("1e5"),
            Err(DecodeError::InvalidNumericToken {
                character: 'e',
                position: 1
            })
        );
        assert_eq!(
            parse_fixed_float("+1"),
            Err(DecodeError::InvalidNumericToken {
                character: '+',
                position: 0
            })
        );
        // Position accounts for the stripped sign.
        assert_eq!(
            parse_fixed_float("-1-2"),
            Err(DecodeError::InvalidNumericToken {
                character: '-',
                position: 2
            })
        );
        assert_eq!(
            parse_fixed_float("1.2.3"),
            Err(DecodeError::InvalidNumericToken {
                character: '.',
                position: 3
            })
        );
    }

    #[test]
    fn float_rejects_empty() {
        assert_eq!(parse_fixed_float(""), Err(DecodeError::EmptyNumericToken));
        assert_eq!(parse_fixed_float("-"), Err(DecodeError::EmptyNumericToken));
        assert_eq!(parse_fixed_float("."), Err(DecodeError::EmptyNumericToken));
    }

    proptest! {
        #[test]
        fn unsigned_matches_display(n in any::<u32>()) {
            prop_assert_eq!(parse_unsigned(&n.to_string()), Ok(n));
        }

        #[test]
        fn unsigned_ignores_zero_padding(n in any::<u32>()) {
            prop_assert_eq!(parse_unsigned(&format!("{n:0>16}")), Ok(n));
        }

        #[test]
        #[allow(clippy::cast_precision_loss)]
        fn short_integers_are_exact(n in 0_i32..10_000_000) {
            prop_assert_eq!(parse_fixed_float(&n.to_string()), Ok(n as f32));
            prop_assert_eq!(parse_fixed_float(&(-n).to_string()), Ok(-(n as f32)));
        }

        #[test]
        fn letters_before_cutoff_are_rejected(
            prefix in "[0-9]{0,5}",
            letter in "[a-zA-Z]",
        ) {
            let token = format!("{prefix}{letter}1");
            let is_invalid = matches!(
                parse_fixed_float(&token),
                Err(DecodeError::InvalidNumericToken { .. })
            );
            prop_assert!(is_invalid);
        }
    }
}
