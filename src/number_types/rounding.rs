//! # Rounding
//!
//! Turning an exact quotient with a remainder into a single integer. Both amount types, and the
//! conversions to native integers, go through the same step.
use num_integer::Integer;
use num_traits::Signed;

use crate::error::{FractionError, FractionResult};
use crate::number_types::big::BigFluidAmount;
use crate::number_types::fixed::FluidAmount;

/// How to dispose of a nonzero remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Towards zero.
    Down,
    /// Away from zero.
    Up,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Towards the nearest neighbour, ties away from zero.
    HalfUp,
    /// Towards the nearest neighbour, ties towards zero.
    HalfDown,
    /// Towards the nearest neighbour, ties to the even neighbour.
    HalfEven,
    /// Any remainder is an error.
    Unnecessary,
}

impl RoundingMode {
    /// Round `quotient + remainder / divisor` to an integer.
    ///
    /// # Arguments
    ///
    /// * `quotient`: Truncated quotient.
    /// * `remainder`: Remainder of the truncating division. It has the sign of the exact value
    /// (or is zero) and `|remainder| < divisor`.
    /// * `divisor`: Positive.
    ///
    /// # Errors
    ///
    /// `PrecisionLoss` if the mode is `Unnecessary` and the remainder isn't zero.
    pub fn round<T: Integer + Signed + Clone>(
        self,
        quotient: T,
        remainder: &T,
        divisor: &T,
    ) -> FractionResult<T> {
        debug_assert!(divisor.is_positive());

        if remainder.is_zero() {
            return Ok(quotient);
        }

        let away = remainder.signum();
        let rounded = match self {
            RoundingMode::Down => quotient,
            RoundingMode::Up => quotient + away,
            RoundingMode::Ceiling => if remainder.is_positive() { quotient + away } else { quotient },
            RoundingMode::Floor => if remainder.is_negative() { quotient + away } else { quotient },
            RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
                let magnitude = remainder.abs();
                let rest = divisor.clone() - magnitude.clone();
                match magnitude.cmp(&rest) {
                    std::cmp::Ordering::Less => quotient,
                    std::cmp::Ordering::Greater => quotient + away,
                    std::cmp::Ordering::Equal => match self {
                        RoundingMode::HalfUp => quotient + away,
                        RoundingMode::HalfDown => quotient,
                        _ => if quotient.is_even() { quotient } else { quotient + away },
                    },
                }
            },
            RoundingMode::Unnecessary => return Err(FractionError::PrecisionLoss),
        };

        Ok(rounded)
    }
}

/// Result of an operation that always produces a fixed-width value.
///
/// The exact value is kept so that callers can inspect the error that was introduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rounded {
    /// Closest fixed-width value according to the rounding mode, or the saturated extreme.
    pub rounded: FluidAmount,
    /// The mathematically exact result.
    pub exact: BigFluidAmount,
}

impl Rounded {
    /// `exact - rounded`.
    pub fn error(&self) -> BigFluidAmount {
        &self.exact - self.rounded
    }

    /// Whether no rounding was needed.
    pub fn is_exact(&self) -> bool {
        self.exact == self.rounded
    }
}
