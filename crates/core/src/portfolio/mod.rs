//! Portfolio module - holdings metrics, chart series, and the portfolio overview.

pub mod charts;
pub mod holdings;
pub mod overview;

pub use charts::*;
pub use holdings::*;
pub use overview::*;
