//! The dashboard session: a store bound to a record source.

mod dashboard;

pub use dashboard::{ChartData, DashboardSession, ExportScope};
