//! CSV Dataset Loader Module
//! Handles catalog CSV loading and shape reporting using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found at {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Handles catalog CSV loading with Polars.
pub struct DatasetLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a catalog CSV using Polars.
    ///
    /// A missing file surfaces as `LoaderError::FileNotFound` so the caller
    /// can abort downstream processing; no partial table is retained. On
    /// success a status line with the resulting shape is printed.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }
        self.file_path = Some(file_path.to_path_buf());

        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        println!(
            "Dataset loaded successfully. Shape: ({}, {})",
            df.height(),
            df.width()
        );

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get list of column names from the loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in"
        )
        .unwrap();
        writeln!(
            file,
            "s1,Movie,Sample Film,Jane Doe,Actor A,United States,\"September 25, 2021\",2020,PG-13,90 min,Dramas"
        )
        .unwrap();
        writeln!(
            file,
            "s2,TV Show,Sample Series,,,,\"October 1, 2021\",2021,TV-MA,2 Seasons,\"Crime TV Shows, Dramas\""
        )
        .unwrap();
        file
    }

    #[test]
    fn test_load_csv_reports_shape() {
        let file = create_test_csv();
        let mut loader = DatasetLoader::new();

        let df = loader.load_csv(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 11);
        assert_eq!(loader.get_row_count(), 2);
        assert!(loader.get_columns().contains(&"date_added".to_string()));
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let mut loader = DatasetLoader::new();
        let err = loader
            .load_csv(Path::new("does/not/exist.csv"))
            .err()
            .unwrap();
        assert!(matches!(err, LoaderError::FileNotFound(_)));
        assert!(loader.get_dataframe().is_none());
    }
}
