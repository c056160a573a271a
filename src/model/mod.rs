//! Pizza products: the [`Pizza`] trait and its regional variants.

pub mod chicago_style;
pub mod ny_style;
pub mod order;
pub mod pizza;

pub use chicago_style::*;
pub use ny_style::*;
pub use order::*;
pub use pizza::*;
