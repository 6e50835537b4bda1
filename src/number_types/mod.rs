//! # Number types
//!
//! Amounts of fluid are mixed fractions. Most of them are small and fit in three 64-bit integers,
//! which makes `FluidAmount` cheap to copy and compute with. Any result that doesn't fit is
//! computed exactly as a `BigFluidAmount`, and it is up to the caller whether that value is kept,
//! rejected, clamped or rounded.
pub mod traits;
pub mod rounding;
pub mod fixed;
pub mod big;
pub mod merge;
mod macros;
