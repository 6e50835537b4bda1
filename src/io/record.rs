//! # Structured records
//!
//! Key-value forms of the amount types with the fields `whole`, `numerator` and `denominator`,
//! for use with any `serde` data format. Both amount types serialize through these records, and
//! deserialize through the canonicalizing factory.
use std::str::FromStr;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::{FractionError, ParseError};
use crate::number_types::big::BigFluidAmount;
use crate::number_types::fixed::FluidAmount;

/// The components of a `FluidAmount`, not necessarily in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluidAmountRecord {
    /// Integer part.
    pub whole: i64,
    /// Numerator of the fractional part.
    pub numerator: i64,
    /// Denominator of the fractional part.
    pub denominator: i64,
}

impl From<FluidAmount> for FluidAmountRecord {
    fn from(value: FluidAmount) -> Self {
        Self {
            whole: value.whole(),
            numerator: value.numerator(),
            denominator: value.denominator(),
        }
    }
}

impl TryFrom<FluidAmountRecord> for FluidAmount {
    type Error = FractionError;

    fn try_from(record: FluidAmountRecord) -> Result<Self, Self::Error> {
        Self::of(record.whole, record.numerator, record.denominator)
    }
}

/// The components of a `BigFluidAmount` as decimal strings, not necessarily in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigFluidAmountRecord {
    /// Integer part.
    pub whole: String,
    /// Numerator of the fractional part.
    pub numerator: String,
    /// Denominator of the fractional part.
    pub denominator: String,
}

impl From<BigFluidAmount> for BigFluidAmountRecord {
    fn from(value: BigFluidAmount) -> Self {
        Self {
            whole: value.whole().to_string(),
            numerator: value.numerator().to_string(),
            denominator: value.denominator().to_string(),
        }
    }
}

impl TryFrom<BigFluidAmountRecord> for BigFluidAmount {
    type Error = FractionError;

    fn try_from(record: BigFluidAmountRecord) -> Result<Self, Self::Error> {
        let read = |name: &str, text: &str| BigInt::from_str(text).map_err(|error| {
            ParseError::new(format!("field {} is not an integer: \"{}\" ({})", name, text, error))
        });

        Self::of(
            read("whole", &record.whole)?,
            read("numerator", &record.numerator)?,
            read("denominator", &record.denominator)?,
        )
    }
}
