//! # An arbitrary precision fluid amount
//!
//! Three `BigInt` components in canonical form. This is the type that fixed-width arithmetic falls
//! back to when an intermediate doesn't fit in 64 bits, and the type of every exact result.
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FractionError, FractionResult, ParseError};
use crate::io::parse;
use crate::io::record::BigFluidAmountRecord;
use crate::number_types::fixed::FluidAmount;
use crate::number_types::rounding::RoundingMode;
use crate::number_types::traits::{settle, validate_denominator, FractionBase};

mod ops;

/// Number of bits a denominator may use to fit in an `i64`.
const FIXED_WIDTH_BITS: u64 = 63;

/// An exact amount of fluid of unbounded size and precision, `whole + numerator / denominator`.
///
/// Always in canonical form, see `FractionBase`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "BigFluidAmountRecord", into = "BigFluidAmountRecord")]
pub struct BigFluidAmount {
    whole: BigInt,
    numerator: BigInt,
    denominator: BigInt,
}

impl BigFluidAmount {
    /// Create a new amount, bringing the components in canonical form.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the denominator isn't positive.
    pub fn of(whole: BigInt, numerator: BigInt, denominator: BigInt) -> FractionResult<Self> {
        validate_denominator(&denominator)?;
        Ok(Self::reduce(whole, numerator, denominator))
    }

    /// Create a new amount `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the denominator isn't positive.
    pub fn of_fraction(numerator: BigInt, denominator: BigInt) -> FractionResult<Self> {
        Self::of(BigInt::zero(), numerator, denominator)
    }

    /// Create a new amount without a fractional part.
    pub fn of_whole(whole: BigInt) -> Self {
        Self { whole, numerator: BigInt::zero(), denominator: BigInt::one() }
    }

    /// Additive identity.
    pub fn zero() -> Self {
        Self::of_whole(BigInt::zero())
    }

    /// Multiplicative identity.
    pub fn one() -> Self {
        Self::of_whole(BigInt::one())
    }

    /// Canonicalize components with a positive denominator.
    pub(crate) fn reduce(whole: BigInt, numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(denominator.is_positive());

        let (carry, numerator) = numerator.div_rem(&denominator);
        let (whole, numerator, denominator) = settle(whole + carry, numerator, denominator);

        Self { whole, numerator, denominator }
    }

    /// Integer part.
    pub fn whole(&self) -> &BigInt {
        &self.whole
    }

    /// Numerator of the fractional part.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Denominator of the fractional part.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// The additive inverse.
    pub fn negate(&self) -> Self {
        Self {
            whole: -&self.whole,
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        if self.is_negative() { self.negate() } else { self.clone() }
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `DivideByZero` if this value is zero.
    pub fn reciprocal(&self) -> FractionResult<Self> {
        let improper = &self.whole * &self.denominator + &self.numerator;
        if improper.is_zero() {
            return Err(FractionError::DivideByZero);
        }

        // Move the sign to the numerator.
        let numerator = if improper.is_negative() { -&self.denominator } else { self.denominator.clone() };
        Ok(Self::reduce(BigInt::zero(), numerator, improper.abs()))
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// `DivideByZero` if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> FractionResult<Self> {
        Ok(self * &other.reciprocal()?)
    }

    /// Multiply by an integer.
    pub fn mul_integer(&self, by: &BigInt) -> Self {
        Self::reduce(&self.whole * by, &self.numerator * by, self.denominator.clone())
    }

    /// Round to an integer.
    ///
    /// # Errors
    ///
    /// `PrecisionLoss` if this value isn't an integer and `mode` is `Unnecessary`.
    pub fn round_to_integer(&self, mode: RoundingMode) -> FractionResult<BigInt> {
        mode.round(self.whole.clone(), &self.numerator, &self.denominator)
    }

    /// Nearest `f64`, up to the precision of the floating point operations involved.
    ///
    /// Values beyond the range of `f64` become infinite.
    pub fn as_inexact_f64(&self) -> f64 {
        let whole = self.whole.to_f64().unwrap_or(f64::NAN);
        let numerator = self.numerator.to_f64().unwrap_or(f64::NAN);
        let denominator = self.denominator.to_f64().unwrap_or(f64::NAN);
        if denominator.is_finite() {
            whole + numerator / denominator
        } else {
            // The fractional part is tiny; scale both down to stay finite.
            let shift = self.denominator.bits().saturating_sub(FIXED_WIDTH_BITS);
            let numerator = (&self.numerator >> shift).to_f64().unwrap_or(0.);
            let denominator = (&self.denominator >> shift).to_f64().unwrap_or(1.);
            whole + numerator / denominator
        }
    }

    /// Convert to a fixed-width amount if all components fit.
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if a component doesn't fit in an `i64`.
    pub fn to_fixed_exact(&self) -> FractionResult<FluidAmount> {
        match (self.whole.to_i64(), self.numerator.to_i64(), self.denominator.to_i64()) {
            (Some(whole), Some(numerator), Some(denominator)) => {
                Ok(FluidAmount::from_canonical(whole, numerator, denominator))
            },
            _ => Err(FractionError::ArithmeticOverflow),
        }
    }

    /// Convert to a fixed-width amount, clamping to `MAX_VALUE` or `MIN_VALUE`.
    ///
    /// Values between the extremes whose fractional part needs more than 63 bits are rounded half
    /// to even, see `to_fixed_rounded`.
    pub fn to_fixed_saturated(&self) -> FluidAmount {
        match self.to_fixed_rounded(RoundingMode::HalfEven) {
            Ok(value) => value,
            // Only `Unnecessary` can fail.
            Err(_) => if self.is_negative() { FluidAmount::MIN_VALUE } else { FluidAmount::MAX_VALUE },
        }
    }

    /// Convert to a fixed-width amount, rounding if needed.
    ///
    /// Values beyond the extremes are clamped to `MAX_VALUE` or `MIN_VALUE`. Otherwise, if the
    /// denominator needs more than 63 bits, it is shifted right until it fits, and the numerator is
    /// rounded onto the coarser grid using `mode`. The result is then a close neighbour in the
    /// direction `mode` asks for, but not necessarily the closest representable value.
    ///
    /// # Errors
    ///
    /// `PrecisionLoss` if the value isn't representable and `mode` is `Unnecessary`.
    pub fn to_fixed_rounded(&self, mode: RoundingMode) -> FractionResult<FluidAmount> {
        if let Ok(value) = self.to_fixed_exact() {
            return Ok(value);
        }
        if mode == RoundingMode::Unnecessary {
            return Err(FractionError::PrecisionLoss);
        }

        if self.compare(&Self::from(FluidAmount::MAX_VALUE)).is_ge() {
            return Ok(FluidAmount::MAX_VALUE);
        }
        if self.compare(&Self::from(FluidAmount::MIN_VALUE)).is_le() {
            return Ok(FluidAmount::MIN_VALUE);
        }

        // Strictly between the extremes, so the whole part fits.
        let whole = self.whole.to_i64().ok_or(FractionError::ArithmeticOverflow)?;
        let shift = self.denominator.bits().saturating_sub(FIXED_WIDTH_BITS);
        let denominator = &self.denominator >> shift;
        let (quotient, remainder) = (&self.numerator * &denominator).div_rem(&self.denominator);
        let numerator = mode.round(quotient, &remainder, &self.denominator)?;
        debug!(value = %self, shift, ?mode, "approximating amount with a shorter denominator");

        let approximation = numerator.to_i64()
            .zip(denominator.to_i64())
            .and_then(|(numerator, denominator)| FluidAmount::reduce(whole, numerator, denominator));
        Ok(approximation.unwrap_or(if whole < 0 { FluidAmount::MIN_VALUE } else { FluidAmount::MAX_VALUE }))
    }

    /// The exact text form, which `parse` reads back to the same value.
    pub fn to_mixed_string(&self) -> String {
        if self.numerator.is_zero() {
            self.whole.to_string()
        } else if self.whole.is_zero() {
            format!("{}/{}", self.numerator, self.denominator)
        } else if self.is_negative() {
            format!("-({} + {}/{})", -&self.whole, -&self.numerator, self.denominator)
        } else {
            format!("{} + {}/{}", self.whole, self.numerator, self.denominator)
        }
    }

    /// Read an amount from text, see `FluidAmount::parse`.
    ///
    /// # Errors
    ///
    /// If the text is malformed.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse::parse(text)
    }

    /// Like `parse`, but describes a failure with a message for the end user.
    pub fn try_parse(text: &str) -> Result<Self, String> {
        Self::parse(text).map_err(|error| error.to_string())
    }
}

impl FractionBase for BigFluidAmount {
    type Int = BigInt;

    fn whole(&self) -> &BigInt {
        &self.whole
    }

    fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    fn cmp_fractional(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl Ord for BigFluidAmount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigFluidAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for BigFluidAmount {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for BigFluidAmount {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

/// A decimal approximation, rounded half to even.
///
/// The precision of the formatter is the number of decimals. Without a precision, at most three
/// decimals are shown. Width, fill and alignment apply to the whole text.
impl fmt::Display for BigFluidAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (decimals, trim) = match f.precision() {
            Some(decimals) => (decimals, false),
            None => (3, true),
        };

        let scale = num_traits::pow(BigInt::from(10), decimals);
        let scaled = self.mul_integer(&scale)
            .round_to_integer(RoundingMode::HalfEven)
            .map_err(|_| fmt::Error)?;

        let digits = format!("{:0>width$}", scaled.abs(), width = decimals + 1);
        let (integer, fraction) = digits.split_at(digits.len() - decimals);
        let fraction = if trim { fraction.trim_end_matches('0') } else { fraction };

        let text = if fraction.is_empty() { integer.to_string() } else { format!("{}.{}", integer, fraction) };
        f.pad_integral(!scaled.is_negative(), "", &text)
    }
}
