use bitlab::error::{BitError, ErrorKind};
use bitlab::radix::{DigitSeq, Radix, decode, encode, parse_digits};

#[test]
fn decode_decimal_digits() {
    assert_eq!(decode(&[1, 2, 3], Radix::Decimal).unwrap(), 123);
}

#[test]
fn encode_decimal_digits() {
    assert_eq!(encode(123, Radix::Decimal), [1u8, 2, 3]);
}

#[test]
fn encode_zero_is_single_digit() {
    let zero = encode(0, Radix::Binary);

    assert_eq!(zero, [0u8]);
    assert_eq!(zero.len(), 1);
    assert_eq!(zero.to_string(), "0");
}

#[test]
fn encode_binary_matches_std_formatting() {
    for n in [1u32, 2, 5, 13, 255, 256, 1023, 0x7FFF_FFFF, u32::MAX] {
        assert_eq!(encode(n, Radix::Binary).to_string(), format!("{n:b}"));
        assert_eq!(encode(n, Radix::Decimal).to_string(), n.to_string());
    }
}

#[test]
fn decode_binary_with_leading_zeros() {
    let digits = [0u8, 0, 0, 1, 1, 0, 1];
    assert_eq!(decode(&digits, Radix::Binary).unwrap(), 13);
}

#[test]
fn decode_empty_is_zero() {
    assert_eq!(decode(&[], Radix::Decimal).unwrap(), 0);
}

#[test]
fn decode_rejects_digit_outside_radix() {
    let err = decode(&[1, 0, 2], Radix::Binary).unwrap_err();

    assert_eq!(
        err,
        BitError::InvalidDigit {
            digit: 2,
            radix: 2,
            position: 2
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidDigit);

    assert!(decode(&[10], Radix::Decimal).is_err());
}

#[test]
fn decode_reports_overflow() {
    // u32::MAX + 1
    let digits = [4u8, 2, 9, 4, 9, 6, 7, 2, 9, 6];
    assert_eq!(
        decode(&digits, Radix::Decimal),
        Err(BitError::Overflow { radix: 10 })
    );

    let max = [4u8, 2, 9, 4, 9, 6, 7, 2, 9, 5];
    assert_eq!(decode(&max, Radix::Decimal).unwrap(), u32::MAX);

    let too_long = [1u8; 33];
    assert_eq!(
        decode(&too_long, Radix::Binary).unwrap_err().kind(),
        ErrorKind::Overflow
    );
}

#[test]
fn parse_binary_text() {
    let seq = parse_digits("10000010", Radix::Binary).unwrap();

    assert_eq!(seq.value().unwrap(), 130);
    assert_eq!(seq.radix(), Radix::Binary);
}

#[test]
fn parse_rejects_empty_and_bad_digits() {
    assert_eq!(parse_digits("", Radix::Decimal), Err(BitError::EmptyInput));
    assert_eq!(
        parse_digits("1021", Radix::Binary),
        Err(BitError::InvalidDigit {
            digit: 2,
            radix: 2,
            position: 2
        })
    );
    assert!(parse_digits(" 12", Radix::Decimal).is_err());
}

#[test]
fn digit_seq_display_round_trips_through_parse() {
    let seq = encode(987_654_321, Radix::Decimal);
    let parsed = parse_digits(&seq.to_string(), Radix::Decimal).unwrap();

    assert_eq!(parsed, seq);
}

#[test]
fn digit_seq_new_matches_encode() {
    let built = DigitSeq::new(&[0, 1, 1, 0, 1], Radix::Binary).unwrap();
    assert_eq!(built, encode(13, Radix::Binary));
}
