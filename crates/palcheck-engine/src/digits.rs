//! Digit reversal by repeated division
//!
//! All three variants run the same loop:
//!
//! ```text
//! working = value
//! while working != 0:
//!     digit    = working % 10
//!     reversed = reversed * 10 + digit
//!     working  = working / 10
//! ```
//!
//! Rust's `/` and `%` truncate toward zero, so for a negative value every
//! digit is in `-9..=0` and the reversal keeps the sign: `-121` reverses to
//! `-121`, `-120` to `-21`. The variants differ only in how the accumulator
//! handles a reversal that does not fit the integer type.

use std::fmt::{Debug, Display};
use std::ops::{Div, Rem};

use tracing::trace;

/// Signed integer type the reversal loop can run in.
pub trait DigitInt:
    Copy
    + Eq
    + Debug
    + Display
    + Into<i128>
    + TryFrom<i128>
    + Rem<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    const TEN: Self;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_digit_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DigitInt for $ty {
                const ZERO: Self = 0;
                const TEN: Self = 10;

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }
            }
        )*
    };
}

impl_digit_int!(i16, i32, i64);

/// Exact reversal, accumulated in `i128`.
///
/// The widest supported input is `i64` (19 digits), whose reversal always
/// fits in `i128`.
#[must_use]
pub fn reverse_widened<T: DigitInt>(value: T) -> i128 {
    let mut working: i128 = value.into();
    let mut reversed: i128 = 0;

    while working != 0 {
        let digit = working % 10;
        reversed = reversed * 10 + digit;
        working /= 10;
        trace!(digit = %digit, reversed = %reversed, "reversal step");
    }

    reversed
}

/// Reversal with two's-complement wraparound in `T`.
#[must_use]
pub fn reverse_wrapping<T: DigitInt>(value: T) -> T {
    let mut working = value;
    let mut reversed = T::ZERO;

    while working != T::ZERO {
        let digit = working % T::TEN;
        reversed = reversed.wrapping_mul(T::TEN).wrapping_add(digit);
        working = working / T::TEN;
        trace!(digit = %digit, reversed = %reversed, "reversal step");
    }

    reversed
}

/// Reversal that returns `None` as soon as the accumulator leaves `T`'s range.
#[must_use]
pub fn reverse_checked<T: DigitInt>(value: T) -> Option<T> {
    let mut working = value;
    let mut reversed = T::ZERO;

    while working != T::ZERO {
        let digit = working % T::TEN;
        reversed = reversed.checked_mul(T::TEN)?.checked_add(digit)?;
        working = working / T::TEN;
        trace!(digit = %digit, reversed = %reversed, "reversal step");
    }

    Some(reversed)
}
