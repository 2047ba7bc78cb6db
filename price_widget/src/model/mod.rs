//! Display-state types of the price widget.
//!
//! - `view`: the `PriceView` tagged union, its flat snapshot and rendering.
pub mod view;
