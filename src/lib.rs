//! # Exact fluid amounts
//!
//! Quantities of fluid are exchanged between tanks, pipes and machines of different mods, and any
//! rounding error in that exchange creates or destroys fluid. This crate provides mixed fractions
//! `whole + numerator / denominator` that are always exact:
//!
//! * `FluidAmount` stores the three components in `i64`s and is `Copy`.
//! * `BigFluidAmount` stores them as arbitrary precision integers and never overflows.
//!
//! Operations on `FluidAmount` detect overflow of their 64-bit intermediates and recompute with
//! `BigFluidAmount`. The name of an operation tells what happens when the exact result doesn't fit:
//! `checked_*` fails, `saturated_*` clamps, `rounded_*` and `safe_*` round with a `RoundingMode`,
//! and `big_*` and the operators return the exact `BigFluidAmount`.
#![warn(missing_docs)]

pub mod error;
pub mod io;
pub mod number_types;

pub use num_bigint::BigInt;

pub use error::{FractionError, FractionResult, ParseError};
pub use number_types::big::BigFluidAmount;
pub use number_types::fixed::FluidAmount;
pub use number_types::merge::merge;
pub use number_types::rounding::{Rounded, RoundingMode};
pub use number_types::traits::FractionBase;
