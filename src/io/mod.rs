//! # Reading and writing amounts
//!
//! Text, byte and structured key-value forms of the amount types.
pub mod buffer;
pub mod record;
pub(crate) mod parse;
mod token;
