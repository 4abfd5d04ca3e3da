//! Stats module - aggregation helpers for chart data

mod aggregator;

pub use aggregator::{AggregateError, Aggregator};
