//! # Traits
//!
//! Logic shared by the fixed-width and the arbitrary precision representation of a mixed
//! fraction. The concrete types decide how their components are stored and how overflow is
//! handled; everything that only depends on the canonical form lives here.
use std::cmp::Ordering;
use std::fmt::Display;

use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::error::{FractionError, FractionResult};

/// A value `whole + numerator / denominator` in canonical form.
///
/// Implementors guarantee that
///
/// * `denominator > 0`,
/// * `whole` and `numerator` don't have opposite signs,
/// * `|numerator| < denominator` and `gcd(|numerator|, denominator) == 1`,
/// * a zero `numerator` comes with a `denominator` of `1`.
///
/// Under these invariants, two values are equal exactly when their components are equal, and the
/// provided methods can read sign and order directly from the components.
pub trait FractionBase {
    /// Integer type of the three components.
    type Int: Integer + Signed + Clone;

    /// Integer part.
    fn whole(&self) -> &Self::Int;
    /// Numerator of the fractional part, with the same sign as `whole` (or zero).
    fn numerator(&self) -> &Self::Int;
    /// Denominator of the fractional part, always positive.
    fn denominator(&self) -> &Self::Int;

    /// Compare the fractional parts of two values with different denominators.
    ///
    /// Only called when the whole parts are equal.
    fn cmp_fractional(&self, other: &Self) -> Ordering;

    /// The sign of the value: `-1`, `0` or `1`.
    fn signum(&self) -> i32 {
        if self.whole().is_zero() {
            sign_of(self.numerator())
        } else {
            sign_of(self.whole())
        }
    }

    /// Whether this value is zero.
    fn is_zero(&self) -> bool {
        self.whole().is_zero() && self.numerator().is_zero()
    }

    /// Whether this value is strictly larger than zero.
    fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Whether this value is strictly smaller than zero.
    fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Whether this value has no fractional part.
    fn is_integer(&self) -> bool {
        self.numerator().is_zero()
    }

    /// Total order of the represented rationals.
    ///
    /// Because `whole` and `numerator` never have opposite signs, values with a smaller whole part
    /// are always smaller.
    fn compare(&self, other: &Self) -> Ordering {
        self.whole().cmp(other.whole()).then_with(|| {
            if self.denominator() == other.denominator() {
                self.numerator().cmp(other.numerator())
            } else {
                self.cmp_fractional(other)
            }
        })
    }
}

fn sign_of<T: Signed>(value: &T) -> i32 {
    if value.is_positive() {
        1
    } else if value.is_negative() {
        -1
    } else {
        0
    }
}

/// Reject denominators that are zero or negative.
pub(crate) fn validate_denominator<T: Signed + Display>(denominator: &T) -> FractionResult<()> {
    if denominator.is_positive() {
        Ok(())
    } else {
        Err(FractionError::InvalidArgument(format!(
            "denominator must be positive, but was {}", denominator,
        )))
    }
}

/// Bring a value whose numerator is already smaller in magnitude than its denominator into
/// canonical form.
///
/// The carry of a large numerator into the whole part is left to the caller, because only the
/// caller knows whether that addition can overflow.
///
/// # Arguments
///
/// * `whole`: Integer part, any sign.
/// * `numerator`: Any sign, `|numerator| < denominator`.
/// * `denominator`: Positive.
pub(crate) fn settle<T: Integer + Signed + Clone>(
    mut whole: T,
    mut numerator: T,
    denominator: T,
) -> (T, T, T) {
    debug_assert!(denominator.is_positive());
    debug_assert!(numerator.abs() < denominator);

    // Borrowing moves the magnitude of `whole` towards zero, so neither branch can overflow.
    if whole.is_negative() && numerator.is_positive() {
        whole = whole + T::one();
        numerator = numerator - denominator.clone();
    } else if whole.is_positive() && numerator.is_negative() {
        whole = whole - T::one();
        numerator = numerator + denominator.clone();
    }

    if numerator.is_zero() {
        return (whole, T::zero(), T::one());
    }

    let divisor = numerator.gcd(&denominator);
    (whole, numerator / divisor.clone(), denominator / divisor)
}

#[cfg(test)]
mod test {
    use num_bigint::BigInt;

    use crate::number_types::traits::{settle, validate_denominator};

    #[test]
    fn settle_borrows() {
        assert_eq!(settle(-1_i64, 1, 4), (0, -3, 4));
        assert_eq!(settle(2_i64, -1, 4), (1, 3, 4));
        assert_eq!(settle(-3_i64, 2, 4), (-2, -1, 2));
        assert_eq!(settle(1_i64, -1, 2), (0, 1, 2));
    }

    #[test]
    fn settle_reduces() {
        assert_eq!(settle(0_i64, 6, 8), (0, 3, 4));
        assert_eq!(settle(5_i64, 0, 7), (5, 0, 1));
        assert_eq!(settle(-5_i64, -4, 6), (-5, -2, 3));
        assert_eq!(
            settle(BigInt::from(3), BigInt::from(-10), BigInt::from(15)),
            (BigInt::from(2), BigInt::from(1), BigInt::from(3)),
        );
    }

    #[test]
    fn denominators() {
        assert!(validate_denominator(&1_i64).is_ok());
        assert!(validate_denominator(&0_i64).is_err());
        assert!(validate_denominator(&BigInt::from(-3)).is_err());
    }
}
