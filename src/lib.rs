//! `dragon4` converts any finite `f64` to the shortest sequence of
//! base-`B` digits (`2 <= B <= 36`) that round-trips back to the exact
//! same value under IEEE round-to-nearest-even.
//!
//! This crate implements only the *core*: double decomposition, the
//! Burger–Dybvig free-format variant of Steele & White's Dragon4 on a
//! fixed-capacity big-integer module, and plain positional output
//! formatting. It does not decide how the resulting string is used --
//! that is the job of the [`Host`] the caller supplies. This separation
//! mirrors how an embedding interpreter (rather than this crate) owns
//! string interning, locale and exponential notation.
//!
//! # Example
//!
//! ```
//! use dragon4::{stringify, Host, Literal};
//!
//! #[derive(Default)]
//! struct StringHost(String);
//!
//! impl Host for StringHost {
//!     fn push_literal(&mut self, lit: Literal) {
//!         self.0.push_str(match lit {
//!             Literal::Nan => "NaN",
//!             Literal::Infinity => "Infinity",
//!             Literal::NegInfinity => "-Infinity",
//!             Literal::Zero => "0",
//!         });
//!     }
//!     fn push_formatted_unsigned(&mut self, negative: bool, value: u32) {
//!         if negative {
//!             self.0.push('-');
//!         }
//!         self.0.push_str(&value.to_string());
//!     }
//!     fn push_string(&mut self, s: &str) {
//!         self.0.push_str(s);
//!     }
//! }
//!
//! let mut host = StringHost::default();
//! stringify(&mut host, 0.1, 10, 0);
//! assert_eq!(host.0, "0.1");
//! ```
//!
//! # Concurrency
//!
//! [`stringify`] is a pure function over stack-local state: it holds no
//! statics and performs no I/O beyond calling back into `host`. Two
//! calls on two threads, each with its own `Host`, never interact.

#![no_std]
#![deny(
    rust_2018_idioms,
    trivial_numeric_casts,
    unreachable_pub,
    unused_must_use,
    unused_qualifications
)]
#![forbid(unsafe_code)]

#[cfg(any(test, feature = "std-host"))]
extern crate std;

mod bigint;
mod decompose;
mod dragon4;

#[cfg(test)]
mod tests;

/// One of the small set of interned strings a [`Host`] is expected to
/// recognize for special (non-finite or zero) values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    /// `x` is NaN.
    Nan,
    /// `x` is positive infinity.
    Infinity,
    /// `x` is negative infinity.
    NegInfinity,
    /// `x` is positive or negative zero (the sign is not printed).
    Zero,
}

/// The collaborator that receives the converted string.
///
/// [`stringify`] never returns a value; the result is always pushed
/// through one of these three methods, exactly once, per call.
pub trait Host {
    /// Pushes one of the small set of interned special-value strings.
    fn push_literal(&mut self, lit: Literal);

    /// Pushes the decimal representation of an unsigned 32-bit value
    /// with an optional leading `-`. Used only by the radix-10
    /// fast path for doubles that are exact `u32`s.
    fn push_formatted_unsigned(&mut self, negative: bool, value: u32);

    /// Pushes a general, already-formatted string (the normal,
    /// non-fast-path result of a Dragon4 conversion).
    fn push_string(&mut self, s: &str);
}

/// Converts `x` to the shortest round-tripping base-`radix` string and
/// pushes the result onto `host`.
///
/// `radix` must be in `[2, 36]`; out-of-range values are a contract
/// violation the caller must prevent (checked with `debug_assert!` in
/// debug builds only).
///
/// `digits` is reserved for a future fixed-precision mode and is
/// currently ignored: this core always emits the shortest form.
pub fn stringify<H: Host>(host: &mut H, x: f64, radix: u32, _digits: i32) {
    debug_assert!((2..=36).contains(&radix));

    if x.is_nan() {
        host.push_literal(Literal::Nan);
        return;
    }
    if x.is_infinite() {
        host.push_literal(if x > 0.0 {
            Literal::Infinity
        } else {
            Literal::NegInfinity
        });
        return;
    }
    if x == 0.0 {
        // Covers both +0.0 and -0.0; sign is not printed.
        host.push_literal(Literal::Zero);
        return;
    }

    let negative = x.is_sign_negative();
    let abs_x = x.abs();

    // Fast path: radix 10 and x is an exact u32. Disabling this leaves
    // the output identical, just slower.
    if radix == 10 {
        let as_u32 = abs_x as u32;
        if f64::from(as_u32) == abs_x {
            host.push_formatted_unsigned(negative, as_u32);
            return;
        }
    }

    let decomposed = decompose::decompose(abs_x);
    dragon4::run(host, negative, &decomposed.f, decomposed.e, radix);
}

/// A [`Host`] that appends everything to an owned `String`.
///
/// This is a convenience for tests, examples and callers that have not
/// yet written their own `Host` (for instance one that interns into an
/// existing string table). It requires `std` and is gated accordingly;
/// the core conversion above never needs it.
#[cfg(any(test, feature = "std-host"))]
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct StringHost(pub std::string::String);

#[cfg(any(test, feature = "std-host"))]
impl Host for StringHost {
    fn push_literal(&mut self, lit: Literal) {
        self.0.push_str(match lit {
            Literal::Nan => "NaN",
            Literal::Infinity => "Infinity",
            Literal::NegInfinity => "-Infinity",
            Literal::Zero => "0",
        });
    }

    fn push_formatted_unsigned(&mut self, negative: bool, value: u32) {
        if negative {
            self.0.push('-');
        }
        self.0.push_str(&value.to_string());
    }

    fn push_string(&mut self, s: &str) {
        self.0.push_str(s);
    }
}
