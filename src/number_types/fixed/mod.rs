//! # Fixed-width fluid amounts
//!
//! A mixed fraction stored as three `i64` components. Arithmetic first tries to stay within 64
//! bits using checked operations. When an intermediate overflows, the computation is redone with
//! `BigFluidAmount` and the result is narrowed back; how that narrowing may fail depends on the
//! family of the operation (checked, saturated, rounded or safe).
use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{FractionError, FractionResult};
use crate::io::record::FluidAmountRecord;
use crate::number_types::traits::{settle, validate_denominator, FractionBase};

mod arithmetic;
mod convert;
mod ops;

/// An exact amount of fluid, `whole + numerator / denominator`.
///
/// Always in canonical form, see `FractionBase`. The derived equality and hash are therefore the
/// equality and hash of the represented rational number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "FluidAmountRecord", into = "FluidAmountRecord")]
pub struct FluidAmount {
    whole: i64,
    numerator: i64,
    denominator: i64,
}

impl FluidAmount {
    /// Additive identity.
    pub const ZERO: Self = Self::of_whole(0);
    /// Multiplicative identity.
    pub const ONE: Self = Self::of_whole(1);
    /// Additive inverse of `ONE`.
    pub const NEGATIVE_ONE: Self = Self::of_whole(-1);

    /// The largest representable value.
    pub const MAX_VALUE: Self = Self::from_canonical(i64::MAX, i64::MAX - 1, i64::MAX);
    /// The smallest representable value.
    ///
    /// Its fractional part mirrors the one of `MAX_VALUE`, but because `i64::MIN` has no positive
    /// counterpart, `MIN_VALUE.negate()` saturates to `MAX_VALUE`.
    pub const MIN_VALUE: Self = Self::from_canonical(i64::MIN, 1 - i64::MAX, i64::MAX);

    /// The amount held by a bucket.
    pub const BUCKET: Self = Self::ONE;
    /// A third of a bucket.
    pub const BOTTLE: Self = Self::from_canonical(0, 1, 3);
    /// A ninth of a bucket.
    pub const INGOT: Self = Self::from_canonical(0, 1, 9);
    /// A ninth of an ingot.
    pub const NUGGET: Self = Self::from_canonical(0, 1, 81);

    /// Create a new amount, bringing the components in canonical form.
    ///
    /// # Arguments
    ///
    /// * `whole`: Integer part, any sign.
    /// * `numerator`: Numerator of the fractional part, any sign and magnitude.
    /// * `denominator`: Must be positive.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` if the denominator isn't positive.
    /// * `ArithmeticOverflow` if carrying the numerator into the whole part overflows.
    pub fn of(whole: i64, numerator: i64, denominator: i64) -> FractionResult<Self> {
        validate_denominator(&denominator)?;
        Self::reduce(whole, numerator, denominator).ok_or(FractionError::ArithmeticOverflow)
    }

    /// Create a new amount `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the denominator isn't positive.
    pub fn of_fraction(numerator: i64, denominator: i64) -> FractionResult<Self> {
        Self::of(0, numerator, denominator)
    }

    /// Create a new amount without a fractional part.
    pub const fn of_whole(whole: i64) -> Self {
        Self::from_canonical(whole, 0, 1)
    }

    /// Wrap components that are known to be in canonical form.
    pub(crate) const fn from_canonical(whole: i64, numerator: i64, denominator: i64) -> Self {
        Self { whole, numerator, denominator }
    }

    /// Canonicalize components with a positive denominator.
    ///
    /// `None` if the carry of the numerator into the whole part overflows.
    pub(crate) fn reduce(whole: i64, numerator: i64, denominator: i64) -> Option<Self> {
        debug_assert!(denominator > 0);

        let (carry, numerator) = numerator.div_rem(&denominator);
        let whole = whole.checked_add(carry)?;
        let (whole, numerator, denominator) = settle(whole, numerator, denominator);

        Some(Self { whole, numerator, denominator })
    }

    /// Integer part.
    pub fn whole(&self) -> i64 {
        self.whole
    }

    /// Numerator of the fractional part.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Denominator of the fractional part.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// The additive inverse.
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the whole part is `i64::MIN`.
    pub fn checked_negate(&self) -> FractionResult<Self> {
        let whole = self.whole.checked_neg().ok_or(FractionError::ArithmeticOverflow)?;
        // |numerator| < denominator <= i64::MAX, so this never overflows.
        Ok(Self { whole, numerator: -self.numerator, denominator: self.denominator })
    }

    /// The additive inverse, saturating to `MAX_VALUE` if the whole part is `i64::MIN`.
    pub fn negate(&self) -> Self {
        self.checked_negate().unwrap_or(Self::MAX_VALUE)
    }

    /// Absolute value, saturating like `negate`.
    pub fn abs(&self) -> Self {
        if self.whole < 0 || self.numerator < 0 { self.negate() } else { *self }
    }

    /// Compare to an optional value, where an absent value counts as zero.
    pub fn cmp_or_zero(&self, other: Option<&Self>) -> Ordering {
        match other {
            Some(other) => self.cmp(other),
            None => self.signum().cmp(&0),
        }
    }
}

impl FractionBase for FluidAmount {
    type Int = i64;

    fn whole(&self) -> &i64 {
        &self.whole
    }

    fn numerator(&self) -> &i64 {
        &self.numerator
    }

    fn denominator(&self) -> &i64 {
        &self.denominator
    }

    fn cmp_fractional(&self, other: &Self) -> Ordering {
        let left = self.numerator.checked_mul(other.denominator);
        let right = other.numerator.checked_mul(self.denominator);
        match (left, right) {
            (Some(left), Some(right)) => left.cmp(&right),
            _ => {
                trace!(lhs = ?self, rhs = ?other, "cross multiplication overflowed, comparing exactly");
                let left = BigInt::from(self.numerator) * other.denominator;
                let right = BigInt::from(other.numerator) * self.denominator;
                left.cmp(&right)
            },
        }
    }
}

impl Ord for FluidAmount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for FluidAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for FluidAmount {
    fn default() -> Self {
        Self::ZERO
    }
}
