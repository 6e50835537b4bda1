//! # Operators
//!
//! Standard operations on the big type, also with fixed-width operands. Fixed-width operands are
//! widened, so none of these can overflow.
use num_bigint::BigInt;

use crate::number_types::big::BigFluidAmount;
use crate::number_types::fixed::FluidAmount;

mod creation {
    use super::*;

    impl From<FluidAmount> for BigFluidAmount {
        fn from(value: FluidAmount) -> Self {
            Self {
                whole: value.whole().into(),
                numerator: value.numerator().into(),
                denominator: value.denominator().into(),
            }
        }
    }

    impl From<&FluidAmount> for BigFluidAmount {
        fn from(value: &FluidAmount) -> Self {
            Self::from(*value)
        }
    }

    impl From<i64> for BigFluidAmount {
        fn from(whole: i64) -> Self {
            Self::of_whole(whole.into())
        }
    }

    impl From<BigInt> for BigFluidAmount {
        fn from(whole: BigInt) -> Self {
            Self::of_whole(whole)
        }
    }

    impl TryFrom<&BigFluidAmount> for FluidAmount {
        type Error = crate::error::FractionError;

        fn try_from(value: &BigFluidAmount) -> Result<Self, Self::Error> {
            value.to_fixed_exact()
        }
    }
}

mod compare {
    use std::cmp::Ordering;

    use super::*;

    impl PartialEq<FluidAmount> for BigFluidAmount {
        fn eq(&self, other: &FluidAmount) -> bool {
            // Both are canonical, so the components have to match.
            self.whole == BigInt::from(other.whole())
                && self.numerator == BigInt::from(other.numerator())
                && self.denominator == BigInt::from(other.denominator())
        }
    }

    impl PartialOrd<FluidAmount> for BigFluidAmount {
        fn partial_cmp(&self, other: &FluidAmount) -> Option<Ordering> {
            Some(self.cmp(&BigFluidAmount::from(other)))
        }
    }
}

mod field {
    use std::iter::Sum;
    use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

    use super::*;

    fn add(left: &BigFluidAmount, right: &BigFluidAmount) -> BigFluidAmount {
        let whole = &left.whole + &right.whole;
        if left.denominator == right.denominator {
            let numerator = &left.numerator + &right.numerator;
            return BigFluidAmount::reduce(whole, numerator, left.denominator.clone());
        }

        let numerator = &left.numerator * &right.denominator + &right.numerator * &left.denominator;
        BigFluidAmount::reduce(whole, numerator, &left.denominator * &right.denominator)
    }

    fn sub(left: &BigFluidAmount, right: &BigFluidAmount) -> BigFluidAmount {
        add(left, &right.negate())
    }

    fn mul(left: &BigFluidAmount, right: &BigFluidAmount) -> BigFluidAmount {
        // (w1 + n1/d1)(w2 + n2/d2) = w1w2 + (w1n2d1 + w2n1d2 + n1n2) / (d1d2)
        let whole = &left.whole * &right.whole;
        let numerator = &left.whole * &right.numerator * &left.denominator
            + &right.whole * &left.numerator * &right.denominator
            + &left.numerator * &right.numerator;
        BigFluidAmount::reduce(whole, numerator, &left.denominator * &right.denominator)
    }

    fn div(left: &BigFluidAmount, right: &BigFluidAmount) -> BigFluidAmount {
        match left.checked_div(right) {
            Ok(result) => result,
            Err(_) => panic!("attempt to divide a fluid amount by zero"),
        }
    }

    macro_rules! define_operator {
        ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $function:ident) => {
            impl $trait_name<&BigFluidAmount> for &BigFluidAmount {
                type Output = BigFluidAmount;

                fn $method(self, rhs: &BigFluidAmount) -> Self::Output {
                    $function(self, rhs)
                }
            }

            impl $trait_name<&BigFluidAmount> for BigFluidAmount {
                type Output = BigFluidAmount;

                fn $method(self, rhs: &BigFluidAmount) -> Self::Output {
                    $function(&self, rhs)
                }
            }

            impl $trait_name<BigFluidAmount> for BigFluidAmount {
                type Output = BigFluidAmount;

                fn $method(self, rhs: BigFluidAmount) -> Self::Output {
                    $function(&self, &rhs)
                }
            }

            impl $trait_name<BigFluidAmount> for &BigFluidAmount {
                type Output = BigFluidAmount;

                fn $method(self, rhs: BigFluidAmount) -> Self::Output {
                    $function(self, &rhs)
                }
            }

            impl $trait_name<FluidAmount> for BigFluidAmount {
                type Output = BigFluidAmount;

                fn $method(self, rhs: FluidAmount) -> Self::Output {
                    $function(&self, &BigFluidAmount::from(rhs))
                }
            }

            impl $trait_name<FluidAmount> for &BigFluidAmount {
                type Output = BigFluidAmount;

                fn $method(self, rhs: FluidAmount) -> Self::Output {
                    $function(self, &BigFluidAmount::from(rhs))
                }
            }

            impl $assign_trait<&BigFluidAmount> for BigFluidAmount {
                fn $assign_method(&mut self, rhs: &BigFluidAmount) {
                    *self = $function(self, rhs);
                }
            }

            impl $assign_trait<BigFluidAmount> for BigFluidAmount {
                fn $assign_method(&mut self, rhs: BigFluidAmount) {
                    *self = $function(self, &rhs);
                }
            }

            impl $assign_trait<FluidAmount> for BigFluidAmount {
                fn $assign_method(&mut self, rhs: FluidAmount) {
                    *self = $function(self, &BigFluidAmount::from(rhs));
                }
            }
        };
    }

    define_operator!(Add, add, AddAssign, add_assign, add);
    define_operator!(Sub, sub, SubAssign, sub_assign, sub);
    define_operator!(Mul, mul, MulAssign, mul_assign, mul);
    define_operator!(Div, div, DivAssign, div_assign, div);

    impl Neg for BigFluidAmount {
        type Output = Self;

        fn neg(self) -> Self::Output {
            Self {
                whole: -self.whole,
                numerator: -self.numerator,
                denominator: self.denominator,
            }
        }
    }

    impl Neg for &BigFluidAmount {
        type Output = BigFluidAmount;

        fn neg(self) -> Self::Output {
            self.negate()
        }
    }

    impl Sum for BigFluidAmount {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| add(&total, &item))
        }
    }

    impl Sum<FluidAmount> for BigFluidAmount {
        fn sum<I: Iterator<Item=FluidAmount>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| add(&total, &BigFluidAmount::from(item)))
        }
    }
}
