//! # Arithmetic on fixed-width amounts
//!
//! Every binary operation comes in a few families:
//!
//! * `checked_*`: exact, fails with `ArithmeticOverflow` if the true result doesn't fit.
//! * `big_*`: exact, returns the arbitrary precision result.
//! * `saturated_*`: clamps results beyond the extremes to `MAX_VALUE` or `MIN_VALUE`.
//! * `rounded_*` and `safe_*`: round with a caller-chosen mode; `safe_*` also returns the exact
//! value.
//!
//! Addition, subtraction and multiplication try a checked 64-bit computation first. Division
//! always goes through `BigFluidAmount`.
use std::iter::{self, RepeatN};
use std::ops::{Add, Mul, Sub};

use num_integer::Integer;
use tracing::trace;

use crate::error::{FractionError, FractionResult};
use crate::number_types::big::BigFluidAmount;
use crate::number_types::fixed::FluidAmount;
use crate::number_types::rounding::{Rounded, RoundingMode};

impl FluidAmount {
    /// Add an integer.
    ///
    /// This doesn't escalate: if the whole part overflows, the result is not representable.
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the result doesn't fit.
    pub fn add_whole(&self, by: i64) -> FractionResult<Self> {
        let whole = self.whole.checked_add(by).ok_or(FractionError::ArithmeticOverflow)?;
        Self::of(whole, self.numerator, self.denominator)
    }

    /// Subtract an integer.
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the result doesn't fit.
    pub fn sub_whole(&self, by: i64) -> FractionResult<Self> {
        let whole = self.whole.checked_sub(by).ok_or(FractionError::ArithmeticOverflow)?;
        Self::of(whole, self.numerator, self.denominator)
    }

    /// Multiply by an integer.
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the result doesn't fit.
    pub fn mul_whole(&self, by: i64) -> FractionResult<Self> {
        let fast = self.whole.checked_mul(by)
            .zip(self.numerator.checked_mul(by))
            .and_then(|(whole, numerator)| Self::reduce(whole, numerator, self.denominator));

        Self::narrow_checked("multiplication", fast, || BigFluidAmount::from(self) * &BigFluidAmount::from(by))
    }

    /// Divide by an integer.
    ///
    /// # Errors
    ///
    /// * `DivideByZero` if `by` is zero.
    /// * `ArithmeticOverflow` if the result doesn't fit.
    pub fn div_whole(&self, by: i64) -> FractionResult<Self> {
        if by == 0 {
            return Err(FractionError::DivideByZero);
        }

        BigFluidAmount::from(self).checked_div(&BigFluidAmount::from(by))?.to_fixed_exact()
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// * `DivideByZero` if this value is zero.
    /// * `ArithmeticOverflow` if the result doesn't fit, as for `1 / MAX_VALUE`.
    pub fn reciprocal(&self) -> FractionResult<Self> {
        BigFluidAmount::from(self).reciprocal()?.to_fixed_exact()
    }

    /// How often `other` fits in this value, rounded towards zero.
    ///
    /// Results beyond the range of `i64` are clamped.
    ///
    /// # Errors
    ///
    /// `DivideByZero` if `other` is zero.
    pub fn count_of(&self, other: &Self) -> FractionResult<i64> {
        let count = self.big_div(other)?.round_to_integer(RoundingMode::Down)?;
        Ok(super::convert::clamp_to_i64(&count))
    }

    /// Split this value in `count` equal parts that sum to exactly this value.
    ///
    /// The parts are produced lazily, so a large `count` doesn't allocate.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` if `count` is zero.
    /// * `ArithmeticOverflow` if a part isn't representable.
    pub fn split_balanced(&self, count: u32) -> FractionResult<RepeatN<Self>> {
        if count == 0 {
            return Err(FractionError::InvalidArgument("can't split into zero parts".to_string()));
        }

        let part = self.div_whole(i64::from(count))?;
        Ok(iter::repeat_n(part, count as usize))
    }

    fn fast_add(&self, other: &Self) -> Option<Self> {
        let whole = self.whole.checked_add(other.whole)?;
        if self.denominator == other.denominator {
            let numerator = self.numerator.checked_add(other.numerator)?;
            return Self::reduce(whole, numerator, self.denominator);
        }

        let divisor = self.denominator.gcd(&other.denominator);
        let left_factor = other.denominator / divisor;
        let right_factor = self.denominator / divisor;
        let denominator = self.denominator.checked_mul(left_factor)?;
        let numerator = self.numerator.checked_mul(left_factor)?
            .checked_add(other.numerator.checked_mul(right_factor)?)?;

        Self::reduce(whole, numerator, denominator)
    }

    fn fast_sub(&self, other: &Self) -> Option<Self> {
        self.fast_add(&other.checked_negate().ok()?)
    }

    fn fast_mul(&self, other: &Self) -> Option<Self> {
        // (w1 + n1/d1)(w2 + n2/d2) = w1w2 + (w1n2d1 + w2n1d2 + n1n2) / (d1d2)
        let whole = self.whole.checked_mul(other.whole)?;
        let denominator = self.denominator.checked_mul(other.denominator)?;
        let left = self.whole.checked_mul(other.numerator)?.checked_mul(self.denominator)?;
        let right = other.whole.checked_mul(self.numerator)?.checked_mul(other.denominator)?;
        let both = self.numerator.checked_mul(other.numerator)?;
        let numerator = left.checked_add(right)?.checked_add(both)?;

        Self::reduce(whole, numerator, denominator)
    }

    /// Use the fast result if there is one, otherwise narrow the exact result.
    fn narrow_checked(
        operation: &'static str,
        fast: Option<Self>,
        exact: impl FnOnce() -> BigFluidAmount,
    ) -> FractionResult<Self> {
        match fast {
            Some(result) => Ok(result),
            None => {
                trace!(operation, "fixed-width computation overflowed, recomputing exactly");
                exact().to_fixed_exact()
            },
        }
    }

    fn narrow_saturated(
        operation: &'static str,
        fast: Option<Self>,
        exact: impl FnOnce() -> BigFluidAmount,
    ) -> Self {
        match fast {
            Some(result) => result,
            None => {
                trace!(operation, "fixed-width computation overflowed, recomputing exactly");
                exact().to_fixed_saturated()
            },
        }
    }

    fn narrow_safe(
        operation: &'static str,
        fast: Option<Self>,
        exact: impl FnOnce() -> BigFluidAmount,
        mode: RoundingMode,
    ) -> FractionResult<Rounded> {
        match fast {
            Some(rounded) => Ok(Rounded { rounded, exact: BigFluidAmount::from(rounded) }),
            None => {
                trace!(operation, "fixed-width computation overflowed, recomputing exactly");
                let exact = exact();
                let rounded = exact.to_fixed_rounded(mode)?;
                Ok(Rounded { rounded, exact })
            },
        }
    }
}

macro_rules! define_families {
    (
        $fast:ident, $big:ident, $exact:path, $name:literal,
        $checked:ident, $saturated:ident, $rounded:ident, $safe:ident $(,)?
    ) => {
        impl FluidAmount {
            #[doc = concat!("Exact ", $name, ", computed with arbitrary precision.")]
            pub fn $big(&self, other: &Self) -> BigFluidAmount {
                $exact(BigFluidAmount::from(self), &BigFluidAmount::from(other))
            }

            #[doc = concat!("Exact ", $name, ".")]
            ///
            /// # Errors
            ///
            /// `ArithmeticOverflow` if the true result doesn't fit.
            pub fn $checked(&self, other: &Self) -> FractionResult<Self> {
                Self::narrow_checked($name, self.$fast(other), || self.$big(other))
            }

            #[doc = concat!(
                "The ", $name, ", clamped to `MAX_VALUE` or `MIN_VALUE` if it lies beyond them."
            )]
            pub fn $saturated(&self, other: &Self) -> Self {
                Self::narrow_saturated($name, self.$fast(other), || self.$big(other))
            }

            #[doc = concat!("The ", $name, ", rounded to a representable value.")]
            ///
            /// # Errors
            ///
            /// `PrecisionLoss` if rounding is needed and `mode` is `Unnecessary`.
            pub fn $rounded(&self, other: &Self, mode: RoundingMode) -> FractionResult<Self> {
                self.$safe(other, mode).map(|result| result.rounded)
            }

            #[doc = concat!("The ", $name, ", rounded, together with the exact result.")]
            ///
            /// # Errors
            ///
            /// `PrecisionLoss` if rounding is needed and `mode` is `Unnecessary`.
            pub fn $safe(&self, other: &Self, mode: RoundingMode) -> FractionResult<Rounded> {
                Self::narrow_safe($name, self.$fast(other), || self.$big(other), mode)
            }
        }
    };
}

define_families!(fast_add, big_add, Add::add, "addition", checked_add, saturated_add, rounded_add, safe_add);
define_families!(fast_sub, big_sub, Sub::sub, "subtraction", checked_sub, saturated_sub, rounded_sub, safe_sub);
define_families!(fast_mul, big_mul, Mul::mul, "multiplication", checked_mul, saturated_mul, rounded_mul, safe_mul);

impl FluidAmount {
    /// Exact division, computed with arbitrary precision.
    ///
    /// # Errors
    ///
    /// `DivideByZero` if `other` is zero.
    pub fn big_div(&self, other: &Self) -> FractionResult<BigFluidAmount> {
        BigFluidAmount::from(self).checked_div(&BigFluidAmount::from(other))
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// * `DivideByZero` if `other` is zero.
    /// * `ArithmeticOverflow` if the true result doesn't fit.
    pub fn checked_div(&self, other: &Self) -> FractionResult<Self> {
        self.big_div(other)?.to_fixed_exact()
    }

    /// The quotient, clamped to `MAX_VALUE` or `MIN_VALUE` if it lies beyond them.
    ///
    /// # Errors
    ///
    /// `DivideByZero` if `other` is zero.
    pub fn saturated_div(&self, other: &Self) -> FractionResult<Self> {
        Ok(self.big_div(other)?.to_fixed_saturated())
    }

    /// The quotient, rounded to a representable value.
    ///
    /// # Errors
    ///
    /// * `DivideByZero` if `other` is zero.
    /// * `PrecisionLoss` if rounding is needed and `mode` is `Unnecessary`.
    pub fn rounded_div(&self, other: &Self, mode: RoundingMode) -> FractionResult<Self> {
        self.big_div(other)?.to_fixed_rounded(mode)
    }

    /// The quotient, rounded, together with the exact result.
    ///
    /// # Errors
    ///
    /// * `DivideByZero` if `other` is zero.
    /// * `PrecisionLoss` if rounding is needed and `mode` is `Unnecessary`.
    pub fn safe_div(&self, other: &Self, mode: RoundingMode) -> FractionResult<Rounded> {
        let exact = self.big_div(other)?;
        let rounded = exact.to_fixed_rounded(mode)?;
        Ok(Rounded { rounded, exact })
    }
}
