use bitlab::error::{BitError, ErrorKind};
use bitlab::primitives::{FixedInt, Width};
use bitlab::twos::{complement, negate, sign_extend, sign_extend_bits, truncate};

#[test]
fn negate_123_at_8_bits() {
    let a = FixedInt::from(123i8);
    let b = negate(a);

    assert_eq!(b.to_signed(), -123);
    assert_eq!(format!("{b:b}"), "10000101");
    assert_eq!(format!("{a:b}"), "01111011");
}

#[test]
fn complement_alone_sums_to_minus_one() {
    let a = FixedInt::from(123i8);
    let not_a = complement(a);

    assert_eq!(format!("{not_a:b}"), "10000100");
    assert_eq!(a.wrapping_add(not_a).unwrap().to_signed(), -1);
    assert_eq!(format!("{:b}", a.wrapping_add(not_a).unwrap()), "11111111");
    assert_ne!(not_a, negate(a));
}

#[test]
fn value_plus_negation_is_zero() {
    for value in [1i64, 5, 123, -7, 0] {
        for width in Width::ALL {
            let a = FixedInt::wrapping_new(value, width);
            assert!(a.wrapping_add(negate(a)).unwrap().is_zero());
        }
    }
}

#[test]
fn negate_zero_is_zero() {
    assert_eq!(negate(FixedInt::zero(Width::W16)), FixedInt::zero(Width::W16));
}

#[test]
fn sign_extend_negative_8_to_16() {
    let a = FixedInt::from(-5i8);
    let wide = sign_extend(a, Width::W16).unwrap();

    assert_eq!(format!("{wide:b}"), "1111111111111011");
    assert_eq!(wide.to_signed(), -5);
    assert_eq!(wide.width(), Width::W16);
}

#[test]
fn sign_extend_positive_keeps_high_bits_clear() {
    let a = FixedInt::from(123i8);
    let wide = sign_extend(a, Width::W32).unwrap();

    assert_eq!(wide.raw(), 123);
    assert_eq!(
        format!("{wide:b}"),
        "00000000000000000000000001111011"
    );
}

#[test]
fn sign_extend_chain_8_16_32() {
    let a = FixedInt::from(-123i8);
    let s = sign_extend(a, Width::W16).unwrap();
    let l = sign_extend(s, Width::W32).unwrap();

    assert_eq!(s.to_signed(), -123);
    assert_eq!(l.to_signed(), -123);
    assert_eq!(l.raw(), (-123i32) as u32);
}

#[test]
fn sign_extend_refuses_to_narrow() {
    let a = FixedInt::from(-5i32);
    let err = sign_extend(a, Width::W8).unwrap_err();

    assert_eq!(err, BitError::InvalidWidth { from: 32, to: 8 });
    assert_eq!(err.kind(), ErrorKind::InvalidWidth);
}

#[test]
fn truncate_refuses_to_widen() {
    let a = FixedInt::from(-5i8);
    assert_eq!(
        truncate(a, Width::W16),
        Err(BitError::InvalidWidth { from: 8, to: 16 })
    );
}

#[test]
fn truncate_reinterprets_top_bit() {
    assert_eq!(truncate(FixedInt::from(300i16), Width::W8).unwrap().to_signed(), 44);
    assert_eq!(truncate(FixedInt::from(200i16), Width::W8).unwrap().to_signed(), -56);
    assert_eq!(truncate(FixedInt::from(-1i32), Width::W16).unwrap().to_signed(), -1);
}

#[test]
fn sign_extend_bits_validates_widths() {
    let wide = sign_extend_bits(0xFB, 8, 16).unwrap();
    assert_eq!(wide.raw(), 0xFFFB);

    assert_eq!(
        sign_extend_bits(0xFB, 8, 21),
        Err(BitError::UnsupportedWidth { bits: 21 })
    );
    assert_eq!(
        sign_extend_bits(0xFB, 12, 16).unwrap_err().kind(),
        ErrorKind::InvalidWidth
    );
}

#[test]
fn signed_char_walk_wraps() {
    let mut value = FixedInt::zero(Width::W8);
    let mut seen = Vec::new();

    for _ in 0..256 {
        seen.push(value.to_signed());
        value = value.successor();
    }

    assert_eq!(seen[127], 127);
    assert_eq!(seen[128], -128);
    assert_eq!(seen[255], -1);
    assert!(value.is_zero());
}

#[test]
fn native_conversions() {
    let a = FixedInt::from(-2i16);
    assert_eq!(i16::try_from(a).unwrap(), -2);
    assert_eq!(i8::try_from(a).unwrap(), -2);
    assert_eq!(u16::try_from(a).unwrap(), 0xFFFE);
    assert!(u8::try_from(a).is_err());
    assert_eq!(i32::from(a), -2);

    let big = FixedInt::from(40_000i32);
    assert_eq!(
        i16::try_from(big),
        Err(BitError::ValueOutOfRange {
            value: 40_000,
            width: Width::W16
        })
    );
}

#[test]
fn width_from_bits() {
    assert_eq!(Width::try_from(16).unwrap(), Width::W16);
    assert_eq!(
        Width::try_from(64),
        Err(BitError::UnsupportedWidth { bits: 64 })
    );
    assert!(Width::W8 < Width::W16 && Width::W16 < Width::W32);
}

#[test]
fn display_shows_signed_decimal() {
    assert_eq!(FixedInt::from(0xFFu8).to_string(), "-1");
    assert_eq!(format!("{:#b}", FixedInt::from(5u8)), "0b00000101");
}
