/*!

Dragon4: shortest correctly-rounded digit generation.

# Problem statement

Given a finite, positive `f64` decomposed as `f * 2^e`, produce the
shortest sequence of base-`B` digits `d[0..n-1]` such that the decimal
(or radix-`B`) value `0.d[0..n-1] * B^k` parses back, under IEEE
round-to-nearest-even, to the exact same `f64`. Equivalently: find the
shortest digit string inside the half-open admissibility window
`(x - m-, x + m+)` around the exact value `x = f * 2^e`, where the
window is closed at either end according to whether the bracketing
value's mantissa is even (`low_ok`/`high_ok`).

# Implementation overview

This is the Burger–Dybvig "free-format" variant of Steele & White's
Dragon4 (their Figure 1), built on the fixed-capacity [`BigUint`] in
[`crate::bigint`]. No logarithmic estimation of the scale exponent `k`
is used; `scale` finds it by a simple multiply-by-radix loop. Four
stages run in sequence for every non-fast-path conversion:

1. [`prepare`] builds the rational `(r, s, m+, m-)` from `(f, e)`.
2. [`scale`] finds the integer `k` such that the scaled value lands in
   `[B^(k-1), B^k)`.
3. [`generate`] emits digits by repeated quotient/remainder against
   `s`, stopping as soon as either rounding boundary is crossed (with
   round-to-even tie-breaking when both are crossed simultaneously).
4. [`format`] interleaves the digit stream with sign, decimal point and
   padding zeros dictated by `k`.

*/

use crate::bigint::BigUint;
use crate::Host;

pub mod format;
pub mod generate;
pub mod prepare;
pub mod scale;

/// The fixed digit alphabet: decimal digits then lowercase letters,
/// indexable directly by a computed digit value in `[0, 36)`.
pub(crate) const DIGIT_CHARS: [u8; 36] = *b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Upper bound on the number of significant digits `generate` can ever
/// produce for a finite `f64` in any radix in `[2, 36]`.
///
/// The shortest round-trip digit count is bounded by roughly
/// `ceil(53 * ln(2) / ln(B))`, maximized at `B = 2` (about 54 digits).
/// This leaves ample margin.
pub(crate) const MAX_SIG_DIGITS: usize = 64;

/// Maps a three-way [`core::cmp::Ordering`] to `-1`, `0` or `1`, the
/// form the scale/generate comparisons below are phrased in.
pub(crate) fn cmp_i8(o: core::cmp::Ordering) -> i32 {
    match o {
        core::cmp::Ordering::Less => -1,
        core::cmp::Ordering::Equal => 0,
        core::cmp::Ordering::Greater => 1,
    }
}

/// Runs the full prepare/scale/generate/format pipeline for a
/// decomposed `f * 2^e` and pushes the resulting string onto `host`.
pub(crate) fn run<H: Host>(host: &mut H, negative: bool, f: &BigUint, e: i32, radix: u32) {
    debug_assert!((2..=36).contains(&radix));

    let prepare::Prepared {
        mut r,
        mut s,
        mut m_plus,
        mut m_minus,
        low_ok,
        high_ok,
    } = prepare::prepare(f, e);

    let k = scale::scale(&mut r, &mut s, &mut m_plus, &mut m_minus, radix, high_ok);

    let mut digits = [0u8; MAX_SIG_DIGITS];
    let n = generate::generate(
        &mut r,
        &s,
        &mut m_plus,
        &mut m_minus,
        radix,
        low_ok,
        high_ok,
        &mut digits,
    );

    format::format(host, negative, &digits[..n], k);
}
