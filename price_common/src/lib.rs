//!
//! Common types and utilities shared by pair price front ends.
//!
//! This crate aggregates:
//! - `error`: unified error type `PriceError` used across the workspace.
//! - `result`: handy `Result<T, PriceError>` alias.
//! - `pair`: the pairs API response model (`PairsResponse`, `PairRecord`).
//! - `net`: endpoint constants and the request URL helper.
//! - `format`: USD display formatting for quoted prices.
#![warn(missing_docs)]
pub mod error;
pub mod format;
pub mod net;
pub mod pair;
pub mod result;

pub use error::PriceError;
pub use pair::PairRecord;
pub use result::Result;
