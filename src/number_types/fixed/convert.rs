//! # Conversions of fixed-width amounts
//!
//! To and from native numbers and text.
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::error::{FractionResult, ParseError};
use crate::io::parse;
use crate::number_types::big::BigFluidAmount;
use crate::number_types::fixed::FluidAmount;
use crate::number_types::rounding::RoundingMode;

impl FluidAmount {
    /// Multiply by `base` and round to an integer, clamping to the range of `i64`.
    ///
    /// For example, with a base of `1000` this is the amount in millibuckets.
    ///
    /// # Errors
    ///
    /// `PrecisionLoss` if the scaled value isn't an integer and `mode` is `Unnecessary`.
    pub fn as_long(&self, base: i64, mode: RoundingMode) -> FractionResult<i64> {
        let scaled = self.scaled(base, mode)?;
        Ok(i64::try_from(scaled).unwrap_or(if scaled > 0 { i64::MAX } else { i64::MIN }))
    }

    /// Multiply by `base` and round to an integer, clamping to the range of `i32`.
    ///
    /// # Errors
    ///
    /// `PrecisionLoss` if the scaled value isn't an integer and `mode` is `Unnecessary`.
    pub fn as_int(&self, base: i32, mode: RoundingMode) -> FractionResult<i32> {
        let scaled = self.scaled(i64::from(base), mode)?;
        Ok(i32::try_from(scaled).unwrap_or(if scaled > 0 { i32::MAX } else { i32::MIN }))
    }

    /// Nearest `f64`, up to the precision of the floating point operations involved.
    pub fn as_inexact_f64(&self) -> f64 {
        self.whole as f64 + self.numerator as f64 / self.denominator as f64
    }

    /// The exact text form, which `parse` reads back to the same value.
    ///
    /// Examples are `"3"`, `"1/3"`, `"1 + 3/4"` and `"-(1 + 3/4)"`.
    pub fn to_mixed_string(&self) -> String {
        BigFluidAmount::from(self).to_mixed_string()
    }

    /// Read an amount from text.
    ///
    /// Accepted are integers (`"-12"`), decimals (`"0.25"`), fractions (`"3/4"`) and mixed
    /// fractions (`"1 + 3/4"`, `"-(1 + 3/4)"`, `"2 - (1/3)"`), with any whitespace between the
    /// tokens.
    ///
    /// # Errors
    ///
    /// If the text is malformed or the value is not representable with 64-bit components.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse::parse(text)?.to_fixed_exact().map_err(|error| ParseError::with_cause(
            format!("\"{}\" is not representable as a fixed-width amount", text),
            ParseError::new(error.to_string()),
        ))
    }

    /// Like `parse`, but describes a failure with a message for the end user.
    pub fn try_parse(text: &str) -> Result<Self, String> {
        Self::parse(text).map_err(|error| error.to_string())
    }

    /// Value multiplied by `base`, rounded, as a 128-bit integer.
    ///
    /// Both products fit in 127 bits, so nothing here can overflow.
    fn scaled(&self, base: i64, mode: RoundingMode) -> FractionResult<i128> {
        let base = i128::from(base);
        let denominator = i128::from(self.denominator);
        let (quotient, remainder) = (i128::from(self.numerator) * base).div_rem(&denominator);
        let quotient = i128::from(self.whole) * base + quotient;

        mode.round(quotient, &remainder, &denominator)
    }
}

/// Clamp an arbitrary precision integer to the range of `i64`.
pub(crate) fn clamp_to_i64(value: &BigInt) -> i64 {
    value.to_i64().unwrap_or(if value.sign() == num_bigint::Sign::Minus { i64::MIN } else { i64::MAX })
}

impl From<i64> for FluidAmount {
    fn from(whole: i64) -> Self {
        Self::of_whole(whole)
    }
}

impl From<i32> for FluidAmount {
    fn from(whole: i32) -> Self {
        Self::of_whole(i64::from(whole))
    }
}

impl FromStr for FluidAmount {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

/// A decimal approximation, rounded half to even.
///
/// The precision of the formatter is the number of decimals. Without a precision, at most three
/// decimals are shown. Width, fill and alignment apply to the whole text.
impl fmt::Display for FluidAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator == 0 && f.precision().is_none() {
            return fmt::Display::fmt(&self.whole, f);
        }

        fmt::Display::fmt(&BigFluidAmount::from(self), f)
    }
}
