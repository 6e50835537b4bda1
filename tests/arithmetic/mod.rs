use std::cmp::Ordering;

use fluid_amount::{BigFluidAmount, BigInt, FractionBase, FractionError, FluidAmount, RoundingMode};
use num_integer::Integer;
use proptest::prelude::*;

use crate::strategy::{amount, rounding_mode, small_amount};

/// The fixed-width result is either the exact result, or the exact result doesn't fit.
fn agrees(fixed: Result<FluidAmount, FractionError>, exact: &BigFluidAmount) -> bool {
    match fixed {
        Ok(value) => *exact == value,
        Err(FractionError::ArithmeticOverflow) => exact.to_fixed_exact().is_err(),
        Err(_) => false,
    }
}

proptest! {
    #[test]
    fn canonical_form(whole in any::<i64>(), numerator in any::<i64>(), denominator in 1_i64..=i64::MAX) {
        if let Ok(value) = FluidAmount::of(whole, numerator, denominator) {
            prop_assert!(value.denominator() > 0);
            prop_assert!(value.numerator().unsigned_abs() < value.denominator().unsigned_abs());
            prop_assert_eq!(value.numerator().gcd(&value.denominator()), 1);
            prop_assert!(value.numerator() != 0 || value.denominator() == 1);
            prop_assert!(value.whole().signum() * value.numerator().signum() >= 0);

            let expected = BigFluidAmount::of(BigInt::from(whole), BigInt::from(numerator), BigInt::from(denominator)).unwrap();
            prop_assert_eq!(expected, value);
        }
    }

    #[test]
    fn canonical_is_identity(value in amount()) {
        prop_assert_eq!(FluidAmount::of(value.whole(), value.numerator(), value.denominator()), Ok(value));
        prop_assert_eq!(BigFluidAmount::from(value).to_fixed_exact(), Ok(value));
    }

    #[test]
    fn identities(value in amount()) {
        prop_assert_eq!(value.checked_add(&FluidAmount::ZERO), Ok(value));
        prop_assert_eq!(value.checked_sub(&FluidAmount::ZERO), Ok(value));
        prop_assert_eq!(value.checked_mul(&FluidAmount::ONE), Ok(value));
        prop_assert_eq!(value.checked_mul(&FluidAmount::ZERO), Ok(FluidAmount::ZERO));
        prop_assert_eq!(value.checked_div(&FluidAmount::ONE), Ok(value));
        if value.whole() != i64::MIN {
            prop_assert_eq!(value.negate().negate(), value);
            prop_assert_eq!(value.checked_add(&value.negate()), Ok(FluidAmount::ZERO));
        }
    }

    #[test]
    fn agrees_with_exact(left in amount(), right in amount()) {
        prop_assert!(agrees(left.checked_add(&right), &left.big_add(&right)));
        prop_assert!(agrees(left.checked_sub(&right), &left.big_sub(&right)));
        prop_assert!(agrees(left.checked_mul(&right), &left.big_mul(&right)));
        prop_assert_eq!(left.big_add(&right), BigFluidAmount::from(left) + BigFluidAmount::from(right));
        prop_assert_eq!(left.big_mul(&right), left * right);
        if !right.is_zero() {
            prop_assert!(agrees(left.checked_div(&right), &left.big_div(&right).unwrap()));
        }
    }

    #[test]
    fn commutative(left in amount(), right in amount()) {
        prop_assert_eq!(left.checked_add(&right), right.checked_add(&left));
        prop_assert_eq!(left.checked_mul(&right), right.checked_mul(&left));
        prop_assert_eq!(left.big_add(&right), right.big_add(&left));
        prop_assert_eq!(left.big_sub(&right), -right.big_sub(&left));
    }

    #[test]
    fn associative(a in small_amount(), b in small_amount(), c in small_amount()) {
        let left = a.checked_add(&b).and_then(|ab| ab.checked_add(&c));
        let right = b.checked_add(&c).and_then(|bc| a.checked_add(&bc));
        prop_assert_eq!(left, right);

        let left = a.checked_mul(&b).and_then(|ab| ab.checked_mul(&c));
        let right = b.checked_mul(&c).and_then(|bc| a.checked_mul(&bc));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn reciprocal(value in amount()) {
        match BigFluidAmount::from(value).reciprocal() {
            Ok(inverse) => {
                prop_assert!(agrees(value.reciprocal(), &inverse));
                prop_assert_eq!(inverse * value, BigFluidAmount::one());
            },
            Err(error) => {
                prop_assert!(value.is_zero());
                prop_assert_eq!(error, FractionError::DivideByZero);
                prop_assert_eq!(value.reciprocal(), Err(FractionError::DivideByZero));
            },
        }
    }

    #[test]
    fn compare(left in amount(), right in amount()) {
        let improper = |value: &FluidAmount| BigInt::from(value.whole()) * value.denominator() + value.numerator();
        let expected = (improper(&left) * right.denominator()).cmp(&(improper(&right) * left.denominator()));

        prop_assert_eq!(left.cmp(&right), expected);
        prop_assert_eq!(BigFluidAmount::from(left).cmp(&BigFluidAmount::from(right)), expected);
        prop_assert_eq!(left == right, expected == Ordering::Equal);
        prop_assert!(FluidAmount::MIN_VALUE <= left && left <= FluidAmount::MAX_VALUE);
    }

    #[test]
    fn saturated(left in amount(), right in amount()) {
        for (saturated, exact) in [
            (left.saturated_add(&right), left.big_add(&right)),
            (left.saturated_sub(&right), left.big_sub(&right)),
            (left.saturated_mul(&right), left.big_mul(&right)),
        ] {
            if exact >= FluidAmount::MAX_VALUE {
                prop_assert_eq!(saturated, FluidAmount::MAX_VALUE);
            } else if exact <= FluidAmount::MIN_VALUE {
                prop_assert_eq!(saturated, FluidAmount::MIN_VALUE);
            } else if let Ok(fits) = exact.to_fixed_exact() {
                prop_assert_eq!(saturated, fits);
            }
        }
    }

    #[test]
    fn rounded(left in amount(), right in amount(), mode in rounding_mode()) {
        let result = left.safe_add(&right, mode).unwrap();
        prop_assert_eq!(&result.exact, &left.big_add(&right));
        prop_assert_eq!(left.rounded_add(&right, mode), Ok(result.rounded));
        prop_assert_eq!(result.is_exact(), result.error().is_zero());

        let inside = result.exact > FluidAmount::MIN_VALUE && result.exact < FluidAmount::MAX_VALUE;
        if inside {
            match mode {
                RoundingMode::Floor => prop_assert!(result.rounded <= result.exact),
                RoundingMode::Ceiling => prop_assert!(result.rounded >= result.exact),
                RoundingMode::Down => prop_assert!(result.rounded.abs() <= result.exact.abs()),
                _ => {},
            }
        }

        match left.safe_add(&right, RoundingMode::Unnecessary) {
            Ok(exact) => prop_assert!(exact.is_exact()),
            Err(error) => prop_assert_eq!(error, FractionError::PrecisionLoss),
        }
    }

    #[test]
    fn as_long(value in amount(), base in 1_i64..100_000, mode in rounding_mode()) {
        let exact = (BigFluidAmount::from(value) * BigFluidAmount::from(base)).round_to_integer(mode).unwrap();
        let expected = i64::try_from(exact.clone()).unwrap_or(if exact > BigInt::from(0) { i64::MAX } else { i64::MIN });
        prop_assert_eq!(value.as_long(base, mode), Ok(expected));

        let down = value.as_long(base, RoundingMode::Down).unwrap();
        let up = value.as_long(base, RoundingMode::Up).unwrap();
        prop_assert!(down.abs_diff(up) <= 1);
    }

    #[test]
    fn mixed_string(value in amount()) {
        prop_assert_eq!(FluidAmount::parse(&value.to_mixed_string()), Ok(value));
        prop_assert_eq!(BigFluidAmount::parse(&value.to_mixed_string()), Ok(BigFluidAmount::from(value)));
    }
}
