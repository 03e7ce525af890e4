//! Service layer composing the repositories.

mod dashboard;

pub use dashboard::{DashboardManager, DashboardOverview, DashboardService};
