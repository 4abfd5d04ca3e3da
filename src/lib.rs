//! StreamLens - Streaming Catalog CSV Analysis & Chart Generator
//!
//! Loads a streaming-catalog CSV export, cleans it and derives analysis
//! features, then renders a fixed set of statistical charts as PNG files.

pub mod charts;
pub mod data;
pub mod stats;

pub use charts::{ChartRenderer, ChartStyle};
pub use data::{DataCleaner, DatasetLoader};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
