/// Shorthand for creating a fixed-width amount in tests.
///
/// Panics if the components are invalid.
#[macro_export]
macro_rules! FA {
    ($whole:expr) => {
        $crate::FluidAmount::of_whole($whole)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::FluidAmount::of_fraction($numerator, $denominator).unwrap()
    };
    ($whole:expr, $numerator:expr, $denominator:expr) => {
        $crate::FluidAmount::of($whole, $numerator, $denominator).unwrap()
    };
}

/// Shorthand for creating an arbitrary precision amount from `i64` components in tests.
///
/// Panics if the components are invalid.
#[macro_export]
macro_rules! BFA {
    ($whole:expr) => {
        $crate::BigFluidAmount::of_whole($crate::BigInt::from($whole as i64))
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::BFA!(0, $numerator, $denominator)
    };
    ($whole:expr, $numerator:expr, $denominator:expr) => {
        $crate::BigFluidAmount::of(
            $crate::BigInt::from($whole as i64),
            $crate::BigInt::from($numerator as i64),
            $crate::BigInt::from($denominator as i64),
        ).unwrap()
    };
}
