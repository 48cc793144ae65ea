//! Hex codec tests

use proptest::prelude::*;
use rust_mem_console::console::hex::{format, parse, HexError};

#[test]
fn test_parse_plain_digits() {
    assert_eq!(parse("cafebabe"), Ok(0xcafe_babe));
    assert_eq!(parse("c"), Ok(0xc));
    assert_eq!(parse("00201000"), Ok(0x0020_1000));
}

#[test]
fn test_parse_prefix_either_case() {
    assert_eq!(parse("0x100"), Ok(0x100));
    assert_eq!(parse("0X100"), Ok(0x100));
}

#[test]
fn test_parse_mixed_case_digits() {
    assert_eq!(parse("DeAdBeEf"), Ok(0xdead_beef));
}

#[test]
fn test_parse_eight_digits_with_prefix() {
    assert_eq!(parse("0xffffffff"), Ok(u32::MAX));
}

#[test]
fn test_parse_nine_digits_too_long() {
    assert_eq!(parse("123456789"), Err(HexError::TooLong));
    assert_eq!(parse("0x123456789"), Err(HexError::TooLong));
}

#[test]
fn test_parse_leading_zeros_count() {
    assert_eq!(parse("000000001"), Err(HexError::TooLong));
}

#[test]
fn test_parse_invalid_char_reported() {
    assert_eq!(parse("12g4"), Err(HexError::InvalidChar(b'g')));
    assert_eq!(parse("0x-1"), Err(HexError::InvalidChar(b'-')));
}

#[test]
fn test_parse_prefix_only_is_zero() {
    assert_eq!(parse("0x"), Ok(0));
    assert_eq!(parse("0X"), Ok(0));
}

#[test]
fn test_parse_lone_zero() {
    assert_eq!(parse("0"), Ok(0));
}

#[test]
fn test_error_messages() {
    assert_eq!(HexError::TooLong.to_string(), "Hex string too long.");
    assert_eq!(
        HexError::InvalidChar(b'z').to_string(),
        "Bad character in hex string: z"
    );
}

#[test]
fn test_format_zero_padded_lowercase() {
    assert_eq!(format(0x100, 8).to_string(), "0x00000100");
    assert_eq!(format(0xCAFE_BABE, 8).to_string(), "0xcafebabe");
    assert_eq!(format(0, 8).to_string(), "0x00000000");
}

proptest! {
    #[test]
    fn prop_format_then_parse_round_trips(v in any::<u32>()) {
        prop_assert_eq!(parse(&format(v, 8).to_string()), Ok(v));
    }

    #[test]
    fn prop_more_than_eight_digits_too_long(digits in "[0-9a-fA-F]{9,16}", prefixed in any::<bool>()) {
        let token = if prefixed { format!("0x{}", digits) } else { digits };
        prop_assert_eq!(parse(&token), Err(HexError::TooLong));
    }

    #[test]
    fn prop_first_non_hex_byte_reported(bad in "[g-zG-Z!-/:-@]", tail in "[0-9a-f]{0,7}") {
        let token = format!("{}{}", bad, tail);
        prop_assert_eq!(parse(&token), Err(HexError::InvalidChar(bad.as_bytes()[0])));
    }
}
