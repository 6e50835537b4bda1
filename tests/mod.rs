//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! The properties are checked against the arbitrary precision type, which serves as the exact
//! reference for every fixed-width operation.

mod arithmetic;
mod codec;
mod strategy;
