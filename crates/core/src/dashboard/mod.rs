//! Dashboard module - the summary landing page.

mod dashboard_model;
mod dashboard_view;

pub use dashboard_model::{DashboardSummary, PortfolioSummary};
pub use dashboard_view::{distribution_series, DashboardView};
