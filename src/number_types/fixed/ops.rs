//! # Operators
//!
//! The results of binary operators on fixed-width amounts are always exact, so they are
//! `BigFluidAmount`s. Use the named methods to stay within the fixed-width type.
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::number_types::big::BigFluidAmount;
use crate::number_types::fixed::FluidAmount;

mod compare {
    use super::*;

    impl PartialEq<BigFluidAmount> for FluidAmount {
        fn eq(&self, other: &BigFluidAmount) -> bool {
            other == self
        }
    }

    impl PartialOrd<BigFluidAmount> for FluidAmount {
        fn partial_cmp(&self, other: &BigFluidAmount) -> Option<Ordering> {
            other.partial_cmp(self).map(Ordering::reverse)
        }
    }
}

mod field {
    use super::*;

    impl Neg for FluidAmount {
        type Output = Self;

        /// Saturates for values with a whole part of `i64::MIN`, see `FluidAmount::negate`.
        fn neg(self) -> Self::Output {
            self.negate()
        }
    }

    impl Neg for &FluidAmount {
        type Output = FluidAmount;

        fn neg(self) -> Self::Output {
            self.negate()
        }
    }

    macro_rules! define_exact {
        ($trait_name:ident, $method:ident) => {
            impl $trait_name for FluidAmount {
                type Output = BigFluidAmount;

                fn $method(self, rhs: Self) -> Self::Output {
                    $trait_name::$method(BigFluidAmount::from(self), &BigFluidAmount::from(rhs))
                }
            }

            impl $trait_name<&FluidAmount> for &FluidAmount {
                type Output = BigFluidAmount;

                fn $method(self, rhs: &FluidAmount) -> Self::Output {
                    $trait_name::$method(*self, *rhs)
                }
            }

            impl $trait_name<BigFluidAmount> for FluidAmount {
                type Output = BigFluidAmount;

                fn $method(self, rhs: BigFluidAmount) -> Self::Output {
                    $trait_name::$method(BigFluidAmount::from(self), &rhs)
                }
            }

            impl $trait_name<&BigFluidAmount> for FluidAmount {
                type Output = BigFluidAmount;

                fn $method(self, rhs: &BigFluidAmount) -> Self::Output {
                    $trait_name::$method(BigFluidAmount::from(self), rhs)
                }
            }
        };
    }

    define_exact!(Add, add);
    define_exact!(Sub, sub);
    define_exact!(Mul, mul);
    // Panics on a zero divisor, like integer division.
    define_exact!(Div, div);
}
