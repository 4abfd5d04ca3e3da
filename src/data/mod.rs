//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{CleanError, DataCleaner, MONTH_NAMES, UNKNOWN};
pub use loader::{DatasetLoader, LoaderError};
