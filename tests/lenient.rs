#![allow(clippy::float_cmp, clippy::unreadable_literal)]

use json_strtod::{parse_lenient, parse_lenient_checked, LenientNumber};

fn test_parse(tests: &[(&str, f64, usize)]) {
    for &(s, value, len) in tests {
        let (v, n) = parse_lenient(s);
        assert_eq!(v.to_bits(), value.to_bits(), "value of {:?}", s);
        assert_eq!(n, len, "length of {:?}", s);
    }
}

#[test]
fn test_no_number() {
    test_parse(&[
        ("", 0.0, 0),
        ("abc", 0.0, 0),
        ("+", 0.0, 0),
        (".", 0.0, 0),
        ("   x", 0.0, 0),
        ("  .e5", 0.0, 0),
        ("e5", 0.0, 0),
        ("+-1", 0.0, 0),
        ("\u{a0}1", 0.0, 0),
    ]);

    // The sign is remembered even though nothing is consumed.
    test_parse(&[("-", -0.0, 0), ("-.", -0.0, 0), (" -x", -0.0, 0), ("--1", -0.0, 0)]);
}

#[test]
fn test_whitespace_and_sign() {
    test_parse(&[
        (" 3.14abc", 3.14, 5),
        ("\x0B\x0C 42", 42.0, 5),
        ("\n\t-2.5", -2.5, 6),
        ("\r\n+7", 7.0, 4),
        ("+7", 7.0, 2),
        ("-0", -0.0, 2),
        ("-0.0", -0.0, 4),
    ]);
}

#[test]
fn test_mantissa_forms() {
    test_parse(&[
        ("5.", 5.0, 2),
        (".5", 0.5, 2),
        ("007", 7.0, 3),
        ("00.0012", 0.0012, 7),
        ("1.2.3", 1.2, 3),
        ("12345", 12345.0, 5),
        ("0.1", 0.1, 3),
        ("-.75x", -0.75, 4),
    ]);
}

#[test]
fn test_exponent_rollback() {
    test_parse(&[
        ("5e", 5.0, 1),
        ("5e+", 5.0, 1),
        ("5E-x", 5.0, 1),
        ("5.e", 5.0, 2),
        ("1.5ex", 1.5, 3),
        ("5e3", 5000.0, 3),
        ("1.5E+2x", 150.0, 6),
        (".5e-1;", 0.05, 5),
        ("2e0", 2.0, 3),
        ("1e0000000000000000001", 10.0, 21),
    ]);
}

#[test]
fn test_out_of_range() {
    assert_eq!(
        parse_lenient_checked("1e-999"),
        LenientNumber {
            value: 0.0,
            len: 6,
            out_of_range: true,
        }
    );
    assert_eq!(
        parse_lenient_checked("1e999"),
        LenientNumber {
            value: f64::INFINITY,
            len: 5,
            out_of_range: true,
        }
    );
    assert_eq!(
        parse_lenient_checked("-1e999"),
        LenientNumber {
            value: f64::NEG_INFINITY,
            len: 6,
            out_of_range: true,
        }
    );

    // Overflows without clamping.
    let number = parse_lenient_checked("1e400");
    assert_eq!(number.value, f64::INFINITY);
    assert!(!number.out_of_range);

    // Zero is in range whatever its exponent.
    let number = parse_lenient_checked("0e999999");
    assert_eq!(number.value.to_bits(), 0.0f64.to_bits());
    assert_eq!(number.len, 8);
    assert!(!number.out_of_range);

    let number = parse_lenient_checked("  1.25");
    assert_eq!(number.value, 1.25);
    assert!(!number.out_of_range);
}

#[test]
fn test_no_length_limit() {
    let text = format!("1{}", "0".repeat(1_000_001));
    let number = parse_lenient_checked(&text);
    assert_eq!(number.value, f64::INFINITY);
    assert_eq!(number.len, 1_000_002);
    assert!(number.out_of_range);

    let text = format!("0.{}1", "0".repeat(1_000_000));
    let number = parse_lenient_checked(&text);
    assert_eq!(number.value, 0.0);
    assert_eq!(number.len, 1_000_003);
    assert!(number.out_of_range);
}

#[test]
fn test_digit_shift_larger_than_exponent_clamp() {
    // About 1e21999999: the zeros shift the exponent by three million, still
    // far short of the exponent itself.
    let text = format!("0.{}1e25000000", "0".repeat(3_000_000));
    let number = parse_lenient_checked(&text);
    assert_eq!(number.value, f64::INFINITY);
    assert_eq!(number.len, text.len());
    assert!(number.out_of_range);

    // About 1e-22000000.
    let text = format!("1{}e-25000000", "0".repeat(3_000_000));
    let number = parse_lenient_checked(&text);
    assert_eq!(number.value.to_bits(), 0.0f64.to_bits());
    assert_eq!(number.len, text.len());
    assert!(number.out_of_range);

    // Exponent digits past `i32::MAX` saturate.
    let text = format!("-0.{}5e99999999999", "0".repeat(3_000_000));
    let number = parse_lenient_checked(&text);
    assert_eq!(number.value, f64::NEG_INFINITY);
    assert!(number.out_of_range);
}

#[test]
fn test_long_mantissa() {
    let (value, len) = parse_lenient("123456789012345678901234567890");
    assert_eq!(len, 30);
    assert!(((value - 1.2345678901234568e29) / 1.2345678901234568e29).abs() < 1e-15);

    // Leading zeros do not use up the 18 digit budget.
    let text = format!("0.{}123456789", "0".repeat(30));
    let (value, len) = parse_lenient(&text);
    assert_eq!(len, 41);
    assert!(((value - 1.23456789e-31) / 1.23456789e-31).abs() < 1e-15);
}

#[test]
fn test_parse_bytes() {
    assert_eq!(parse_lenient(b"  9.75\xff"), (9.75, 6));
    assert_eq!(parse_lenient(&b"-3"[..]), (-3.0, 2));
}
