use crate::{stringify, StringHost};

fn to_string(x: f64, radix: u32) -> std::string::String {
    let mut h = StringHost::default();
    stringify(&mut h, x, radix, 0);
    h.0
}

#[test]
fn nan_is_nan() {
    assert_eq!(to_string(f64::NAN, 10), "NaN");
}

#[test]
fn positive_and_negative_infinity() {
    assert_eq!(to_string(f64::INFINITY, 10), "Infinity");
    assert_eq!(to_string(f64::NEG_INFINITY, 10), "-Infinity");
}

#[test]
fn positive_and_negative_zero_both_print_unsigned() {
    assert_eq!(to_string(0.0, 10), "0");
    assert_eq!(to_string(-0.0, 10), "0");
}

#[test]
fn small_integer_uses_fast_path() {
    assert_eq!(to_string(42.0, 10), "42");
}

#[test]
fn simple_fraction() {
    assert_eq!(to_string(0.1, 10), "0.1");
}

#[test]
fn one_point_zero() {
    assert_eq!(to_string(1.0, 10), "1");
}

#[test]
fn negative_value_carries_sign() {
    assert_eq!(to_string(-2.5, 10), "-2.5");
}

#[test]
fn hexadecimal_radix() {
    assert_eq!(to_string(255.0, 16), "ff");
}

#[test]
fn binary_radix_one_half() {
    assert_eq!(to_string(0.5, 2), "0.1");
}

#[test]
fn large_integral_value_has_trailing_zeros() {
    // 1e23 is not an exact u32, so this exercises the full pipeline,
    // not the radix-10 fast path.
    let s = to_string(1e23, 10);
    assert_eq!(s.len(), 24);
    assert!(s.starts_with('1'));
    assert!(s[1..].bytes().all(|b| b == b'0'));
}

#[test]
fn smallest_positive_subnormal_round_trips() {
    let x = f64::from_bits(1);
    let s = to_string(x, 10);
    assert_eq!(s.parse::<f64>().unwrap(), x);
}

#[test]
fn smallest_positive_subnormal_in_binary_is_exact() {
    // 2^-1074 exactly: a single set bit 1074 places after the point.
    let x = f64::from_bits(1);
    let s = to_string(x, 2);
    assert_eq!(s.len(), 2 + 1073 + 1);
    assert!(s.starts_with("0."));
    assert!(s[2..s.len() - 1].bytes().all(|b| b == b'0'));
    assert_eq!(s.as_bytes()[s.len() - 1], b'1');
}

#[test]
fn max_finite_round_trips() {
    let x = f64::MAX;
    let s = to_string(x, 10);
    assert_eq!(s.parse::<f64>().unwrap(), x);
}

#[test]
fn shortest_digit_string_round_trips_for_assorted_values() {
    let samples = [
        1.0,
        0.1,
        0.5,
        2.5,
        100.0,
        1234.5678,
        core::f64::consts::PI,
        1e-300,
        1e300,
        f64::MIN_POSITIVE,
    ];
    for &x in samples.iter() {
        let s = to_string(x, 10);
        assert_eq!(s.parse::<f64>().unwrap(), x, "round-trip failed for {}", x);
    }
}

#[test]
fn every_supported_radix_uses_its_own_digit_alphabet() {
    // std's `f64::from_str` only understands base 10, so round-tripping
    // isn't checked here for every radix; instead we assert that each
    // radix's output is non-empty and uses only digits valid in that
    // radix.
    for radix in 2..=36u32 {
        let s = to_string(core::f64::consts::PI, radix);
        assert!(!s.is_empty());
        for c in s.chars() {
            if c == '-' || c == '.' {
                continue;
            }
            let digit = c.to_digit(36).expect("character outside digit alphabet");
            assert!(digit < radix, "digit {} out of range for radix {}", c, radix);
        }
    }
}

#[test]
fn negative_and_positive_produce_same_digits_different_sign() {
    let pos = to_string(1234.5, 10);
    let neg = to_string(-1234.5, 10);
    assert_eq!(neg, std::format!("-{}", pos));
}
