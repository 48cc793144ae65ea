//! Hexadecimal argument parsing and fixed-width formatting.

use core::fmt;

use thiserror::Error;

/// Most digits a 32-bit value can take.
pub const MAX_DIGITS: usize = 8;

/// Hex token rejected by [`parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexError {
    /// More than [`MAX_DIGITS`] digits after the prefix.
    #[error("Hex string too long.")]
    TooLong,
    /// First byte that is not a hex digit.
    #[error("Bad character in hex string: {}", as_char(.0))]
    InvalidChar(u8),
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

/// Parse `token` as a 32-bit hex value.
///
/// An optional `0x`/`0X` prefix is skipped. Leading zeros count towards the
/// digit limit. A bare prefix parses as 0.
pub fn parse(token: &str) -> Result<u32, HexError> {
    let bytes = token.as_bytes();
    let digits = match bytes {
        [b'0', b'x' | b'X', rest @ ..] => rest,
        _ => bytes,
    };

    if digits.len() > MAX_DIGITS {
        return Err(HexError::TooLong);
    }

    digits.iter().try_fold(0u32, |acc, &b| {
        let nybble = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 0xa,
            b'A'..=b'F' => b - b'A' + 0xa,
            _ => return Err(HexError::InvalidChar(b)),
        };
        Ok((acc << 4) | u32::from(nybble))
    })
}

/// Format `value` as `0x` plus exactly `digits` lowercase nybbles.
///
/// Higher nybbles that do not fit are dropped; missing ones are zero.
pub fn format(value: u32, digits: usize) -> HexDisplay {
    HexDisplay { value, digits }
}

/// Lazily formatted hex value, see [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDisplay {
    value: u32,
    digits: usize,
}

impl fmt::Display for HexDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NYBBLES: &[u8; 16] = b"0123456789abcdef";

        f.write_str("0x")?;
        for i in (0..self.digits).rev() {
            let shift = u32::try_from(4 * i).unwrap_or(u32::MAX);
            let nybble = self.value.checked_shr(shift).unwrap_or(0) & 0xf;
            fmt::Write::write_char(f, char::from(NYBBLES[nybble as usize]))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_digit_is_most_significant() {
        assert_eq!(parse("1234"), Ok(0x1234));
    }

    #[test]
    fn test_format_truncates_to_digit_count() {
        assert_eq!(format(0x1234_5678, 4).to_string(), "0x5678");
        assert_eq!(format(0xab, 0).to_string(), "0x");
    }

    #[test]
    fn test_format_wider_than_word() {
        assert_eq!(format(0xff, 10).to_string(), "0x00000000ff");
    }
}
