//! Output formatter: interleaves the digit stream produced by
//! `generate` with an optional sign, decimal point and leading/trailing
//! zeros dictated by the scale exponent `k`.

use crate::Host;

/// Total size of the stack-resident output buffer.
///
/// Sized for the worst case: radix 2 of the smallest subnormal needs a
/// single significant digit but roughly 1074 leading zeros after the
/// decimal point, plus sign and point (>= 1100-1200 bytes needed).
pub const OUTPUT_BUF_LEN: usize = 1200;

/// Assembles `digits` (already rounded, most-significant first) with
/// sign and scale exponent `k` into plain positional notation and
/// pushes the result onto `host`.
pub fn format<H: Host>(host: &mut H, negative: bool, digits: &[u8], k: i32) {
    let mut buf = [0u8; OUTPUT_BUF_LEN];
    let mut p = 0usize;

    if negative {
        buf[p] = b'-';
        p += 1;
    }

    let n = digits.len();
    if k <= 0 {
        // First emitted digit sits at or before the ones place: write
        // "0.", the leading zeros implied by k, then the digits.
        buf[p] = b'0';
        p += 1;
        buf[p] = b'.';
        p += 1;
        for _ in 0..(-k) {
            buf[p] = b'0';
            p += 1;
        }
        buf[p..p + n].copy_from_slice(digits);
        p += n;
    } else {
        let k = k as usize;
        if k >= n {
            // All digits land in the integer part; pad with trailing
            // zeros, no decimal point.
            buf[p..p + n].copy_from_slice(digits);
            p += n;
            for _ in 0..(k - n) {
                buf[p] = b'0';
                p += 1;
            }
        } else {
            // The point falls inside the digit stream.
            buf[p..p + k].copy_from_slice(&digits[..k]);
            p += k;
            buf[p] = b'.';
            p += 1;
            buf[p..p + (n - k)].copy_from_slice(&digits[k..]);
            p += n - k;
        }
    }

    let s = core::str::from_utf8(&buf[..p]).unwrap_or_else(|_| {
        debug_assert!(false, "formatter produced non-ASCII output");
        ""
    });
    host.push_string(s);
}
