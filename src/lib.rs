//! Employee Dashboard Data Pipeline
//!
//! This crate provides the data side of an employee dashboard: filtering and
//! sorting the employee table, aggregating summary and chart metrics, exporting
//! records as CSV, JSON or XLSX, and a state container that keeps a derived
//! view consistent with the canonical records.

#![warn(missing_docs)]

pub mod aggregation;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod query;
pub mod session;
pub mod source;
pub mod store;

#[cfg(test)]
mod testing;
