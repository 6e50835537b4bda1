use fluid_amount::{FluidAmount, RoundingMode};
use proptest::prelude::*;

/// Amounts with small components, where the fast paths don't overflow.
pub fn small_amount() -> impl Strategy<Value = FluidAmount> {
    (-1_000_i64..1_000, 1_i64..1_000)
        .prop_flat_map(|(whole, denominator)| (Just(whole), -denominator + 1..denominator, Just(denominator)))
        .prop_filter_map("not representable", |(whole, numerator, denominator)| {
            FluidAmount::of(whole, numerator, denominator).ok()
        })
}

/// Amounts with components anywhere in the range of `i64`.
pub fn wide_amount() -> impl Strategy<Value = FluidAmount> {
    (any::<i64>(), any::<i64>(), 1_i64..=i64::MAX)
        .prop_filter_map("not representable", |(whole, numerator, denominator)| {
            FluidAmount::of(whole, numerator, denominator).ok()
        })
}

/// Mostly small amounts, some wide ones and the extremes.
pub fn amount() -> impl Strategy<Value = FluidAmount> {
    prop_oneof![
        6 => small_amount(),
        3 => wide_amount(),
        1 => prop_oneof![
            Just(FluidAmount::MAX_VALUE),
            Just(FluidAmount::MIN_VALUE),
            Just(FluidAmount::ZERO),
            Just(FluidAmount::NUGGET),
        ],
    ]
}

/// Rounding modes that never fail.
pub fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Down),
        Just(RoundingMode::Up),
        Just(RoundingMode::Ceiling),
        Just(RoundingMode::Floor),
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfDown),
        Just(RoundingMode::HalfEven),
    ]
}
