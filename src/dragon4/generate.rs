//! Generate stage: produces base-`B` digits by repeated
//! quotient/remainder against `s`, stopping as soon as the rounding
//! boundaries `(r - m-, r + m+)` are crossed, with round-to-even
//! tie-breaking at the boundary.

use super::{cmp_i8, DIGIT_CHARS};
use crate::bigint::BigUint;

/// Writes base-`B` digits into `out` and returns how many were written.
///
/// `r`, `m_plus`, `m_minus` are mutated in place; `s` is read-only here
/// (it no longer changes once `scale` has returned).
pub fn generate(
    r: &mut BigUint,
    s: &BigUint,
    m_plus: &mut BigUint,
    m_minus: &mut BigUint,
    radix: u32,
    low_ok: bool,
    high_ok: bool,
    out: &mut [u8],
) -> usize {
    let mut n = 0usize;
    let mut t1 = BigUint::zero();
    let mut scratch = BigUint::zero();
    let mut sum = BigUint::zero();

    let low_thresh = if low_ok { 0 } else { -1 };
    let high_thresh = if high_ok { 0 } else { 1 };

    loop {
        t1.mul_small(r, radix);
        let mut d: u32 = 0;
        while cmp_i8(t1.compare(s)) >= 0 {
            t1.sub_copy(s, &mut scratch);
            d += 1;
        }
        *r = t1;

        m_plus.mul_small_copy(radix, &mut scratch);
        m_minus.mul_small_copy(radix, &mut scratch);

        let low = cmp_i8(r.compare(m_minus)) <= low_thresh;
        sum.add(r, m_plus);
        let high = cmp_i8(sum.compare(s)) >= high_thresh;

        let (digit, stop) = match (low, high) {
            (true, false) => (d, true),
            (false, true) => (d + 1, true),
            (true, true) => {
                #[cfg(feature = "legacy-no-round-to-even")]
                {
                    (d + 1, true)
                }
                #[cfg(not(feature = "legacy-no-round-to-even"))]
                {
                    let mut two_r = BigUint::zero();
                    two_r.mul_small(r, 2);
                    if cmp_i8(two_r.compare(s)) < 0 {
                        (d, true)
                    } else {
                        (d + 1, true)
                    }
                }
            }
            (false, false) => (d, false),
        };

        debug_assert!((digit as usize) < DIGIT_CHARS.len());
        out[n] = DIGIT_CHARS[digit as usize];
        n += 1;

        if stop {
            break;
        }
        debug_assert!(n < out.len(), "digit buffer exhausted");
    }

    n
}
