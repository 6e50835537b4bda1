//! # Merging amounts
//!
//! Adding two amounts where each side may constrain the denominators it can hold, such as a tank
//! that only stores multiples of a millibucket.
use crate::error::{FractionError, FractionResult};
use crate::number_types::fixed::FluidAmount;

/// Add `to_add` to `target` under denominator constraints.
///
/// A constraint of `0` means unconstrained. A nonzero constraint has to be a positive multiple of
/// the denominator of the corresponding amount.
///
/// # Errors
///
/// * `InvalidArgument` if an amount doesn't satisfy its own constraint.
/// * `ArithmeticOverflow` if the unconstrained sum doesn't fit.
/// * `Unsupported` if any constraint is given, because distributing the sum over constrained
/// denominators is not implemented.
pub fn merge(
    target: &FluidAmount,
    to_add: &FluidAmount,
    denominator_target: i64,
    denominator_add: i64,
) -> FractionResult<FluidAmount> {
    validate("target", target, denominator_target)?;
    validate("addition", to_add, denominator_add)?;

    if denominator_target == 0 && denominator_add == 0 {
        target.checked_add(to_add)
    } else {
        Err(FractionError::Unsupported("merging with denominator constraints"))
    }
}

fn validate(name: &str, amount: &FluidAmount, denominator: i64) -> FractionResult<()> {
    if denominator == 0 {
        return Ok(());
    }

    if denominator < 0 || denominator % amount.denominator() != 0 {
        return Err(FractionError::InvalidArgument(format!(
            "denominator constraint {} of the {} is not a multiple of its denominator {}",
            denominator, name, amount.denominator(),
        )));
    }

    Ok(())
}
