//! Prepare stage: builds the initial rational representation `(r, s, m+,
//! m-)` and rounding-boundary flags from a decomposed `f * 2^e`.

use crate::bigint::BigUint;

/// The rational representation and boundary flags handed to `scale`.
pub struct Prepared {
    pub r: BigUint,
    pub s: BigUint,
    pub m_plus: BigUint,
    pub m_minus: BigUint,
    pub low_ok: bool,
    pub high_ok: bool,
}

/// Initializes `r`, `s`, `m+`, `m-` from `f * 2^e` per the four
/// Burger–Dybvig cases.
pub fn prepare(f: &BigUint, e: i32) -> Prepared {
    // Inclusive boundaries under round-to-nearest-even iff the
    // significand is even.
    let low_ok = f.is_even();
    let high_ok = low_ok;

    let mut r = BigUint::zero();
    let mut s = BigUint::zero();
    let mut m_plus = BigUint::zero();
    let mut m_minus = BigUint::zero();

    if e >= 0 {
        if f.is_2_to_52() {
            // (A) smallest mantissa of its binade: asymmetric gaps.
            let mut pow = BigUint::zero();
            pow.set_pow2(e + 2);
            r.mul(f, &pow);
            s.set_small(4);
            m_plus.set_pow2(e + 1);
            m_minus.set_pow2(e);
        } else {
            // (B) symmetric gaps.
            let mut pow = BigUint::zero();
            pow.set_pow2(e + 1);
            r.mul(f, &pow);
            s.set_small(2);
            m_plus.set_pow2(e);
            m_minus.set_pow2(e);
        }
    } else if e > -1074 && f.is_2_to_52() {
        // (C) asymmetric, lower gap halved.
        r.mul_small(f, 4);
        s.set_pow2(2 - e);
        m_plus.set_small(2);
        m_minus.set_small(1);
    } else {
        // (D) symmetric.
        r.mul_small(f, 2);
        s.set_pow2(1 - e);
        m_plus.set_small(1);
        m_minus.set_small(1);
    }

    Prepared {
        r,
        s,
        m_plus,
        m_minus,
        low_ok,
        high_ok,
    }
}
