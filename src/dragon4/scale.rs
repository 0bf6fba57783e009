//! Scale stage: finds the integer `k` such that, after scaling,
//! `B^(k-1) <= (r + m+) / s < B^k` (boundary inclusivity governed by
//! `high_ok`). No logarithmic estimation is used -- a simple scaling
//! loop pushes `k` toward the canonical interval one step at a time.

use super::cmp_i8;
use crate::bigint::BigUint;

/// Scales `r`, `s`, `m+`, `m-` in place and returns `k`.
pub fn scale(
    r: &mut BigUint,
    s: &mut BigUint,
    m_plus: &mut BigUint,
    m_minus: &mut BigUint,
    radix: u32,
    high_ok: bool,
) -> i32 {
    let mut k: i32 = 0;
    let mut sum = BigUint::zero();
    let mut scratch = BigUint::zero();

    // Step 1: grow s (and k) until r + m+ no longer exceeds the ceiling.
    let ceil_thresh = if high_ok { 0 } else { 1 };
    loop {
        sum.add(r, m_plus);
        if cmp_i8(sum.compare(s)) >= ceil_thresh {
            s.mul_small_copy(radix, &mut scratch);
            k += 1;
        } else {
            break;
        }
    }

    // Step 3: only runs if step 1 never incremented k.
    if k <= 0 {
        let floor_thresh = if high_ok { -1 } else { 0 };
        loop {
            sum.add(r, m_plus);
            scratch.mul_small(&sum, radix);
            if cmp_i8(scratch.compare(s)) <= floor_thresh {
                r.mul_small_copy(radix, &mut scratch);
                m_plus.mul_small_copy(radix, &mut scratch);
                m_minus.mul_small_copy(radix, &mut scratch);
                k -= 1;
            } else {
                break;
            }
        }
    }

    k
}
