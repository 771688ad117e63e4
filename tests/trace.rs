use bitlab::radix::trace::{decode_steps, decode_with, encode_steps, encode_with};
use bitlab::radix::{Radix, decode, encode};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("bitlab=trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn encode_reports_every_division() {
    init_tracing();

    let (digits, steps) = encode_steps(13, Radix::Binary);

    assert_eq!(digits, encode(13, Radix::Binary));
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0].dividend, 13);
    assert_eq!(steps[0].quotient, 6);
    assert_eq!(steps[0].remainder, 1);

    let remainders: Vec<u8> = steps.iter().rev().map(|s| s.remainder as u8).collect();
    assert_eq!(digits.as_slice(), remainders.as_slice());
}

#[test]
fn encode_zero_reports_one_step() {
    let mut count = 0;
    let digits = encode_with(0, Radix::Decimal, |_| count += 1);

    assert_eq!(count, 1);
    assert_eq!(digits.to_string(), "0");
}

#[test]
fn decode_reports_digit_weights() {
    init_tracing();

    let (value, steps) = decode_steps(&[1, 2, 3], Radix::Decimal).unwrap();

    assert_eq!(value, 123);
    let lines: Vec<String> = steps
        .iter()
        .map(|t| format!("{} x {} = {}", t.weight, t.digit, t.product))
        .collect();
    assert_eq!(lines, ["1 x 3 = 3", "10 x 2 = 20", "100 x 1 = 100"]);
}

#[test]
fn failed_decode_reports_nothing() {
    let mut count = 0;
    let result = decode_with(&[1, 7, 1], Radix::Binary, |_| count += 1);

    assert!(result.is_err());
    assert_eq!(count, 0);
}

#[test]
fn traced_results_match_pure_results() {
    for n in [0u32, 1, 42, 65_535, u32::MAX] {
        for radix in [Radix::Binary, Radix::Decimal] {
            let traced = encode_with(n, radix, |_| {});
            assert_eq!(traced, encode(n, radix));
            assert_eq!(
                decode_with(traced.as_slice(), radix, |_| {}).unwrap(),
                decode(traced.as_slice(), radix).unwrap()
            );
        }
    }
}
