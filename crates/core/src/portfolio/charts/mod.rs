//! Chart series module - renderer-agnostic series for the dashboard charts.

mod chart_builder;
mod chart_model;

pub use chart_builder::*;
pub use chart_model::{ChartPoint, ChartSeries};

#[cfg(test)]
mod chart_builder_tests;
