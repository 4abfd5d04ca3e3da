//! Data Cleaner Module
//! Handles missing-value imputation and feature derivation for the catalog table.

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use thiserror::Error;

/// Sentinel for absent free-text fields.
pub const UNKNOWN: &str = "Unknown";

/// Full English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Date formats observed in catalog exports.
const DATE_FORMATS: [&str; 2] = ["%B %d, %Y", "%Y-%m-%d"];

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles cleaning and feature derivation over the loaded catalog table.
///
/// `clean` is a pure transform: the input frame is never mutated. A row whose
/// `date_added` fails to parse keeps no date fields at all, so a second run
/// over the output drops it the way originally-absent dates are dropped;
/// everything else is left unchanged by re-running.
pub struct DataCleaner;

impl DataCleaner {
    /// Clean the catalog table and derive analysis features.
    ///
    /// Steps run in a fixed order: impute `country`/`director`/`cast` with
    /// "Unknown", drop rows missing `date_added` or `rating`, coerce-parse
    /// `date_added`, then derive `year_added`, `month_added`, `duration_val`,
    /// `primary_country` and `primary_genre`. An unparseable date degrades to
    /// absent `date_added`/`year_added`/`month_added` as one unit;
    /// unparseable durations degrade to 0.
    pub fn clean(df: &DataFrame) -> Result<DataFrame, CleanError> {
        let mut df = df
            .clone()
            .lazy()
            .with_columns([
                col("country").fill_null(lit(UNKNOWN)),
                col("director").fill_null(lit(UNKNOWN)),
                col("cast").fill_null(lit(UNKNOWN)),
            ])
            .filter(
                col("date_added")
                    .is_not_null()
                    .and(col("rating").is_not_null()),
            )
            .collect()?;

        let dates = Self::parse_dates(&df)?;

        let date_strings = Self::date_strings(&df, &dates)?;
        let years: Vec<Option<i32>> = dates.iter().map(|d| d.map(|d| d.year())).collect();
        let months: Vec<Option<String>> = dates
            .iter()
            .map(|d| d.map(|d| MONTH_NAMES[d.month0() as usize].to_string()))
            .collect();
        let durations = Self::extract_durations(&df)?;
        let primary_country = Self::first_tokens(&df, "country", None)?;
        let primary_genre = Self::first_tokens(&df, "listed_in", Some(UNKNOWN))?;

        df.with_column(Column::new("date_added".into(), date_strings))?;
        df.with_column(Column::new("year_added".into(), years))?;
        df.with_column(Column::new("month_added".into(), months))?;
        df.with_column(Column::new("duration_val".into(), durations))?;
        df.with_column(Column::new("primary_country".into(), primary_country))?;
        df.with_column(Column::new("primary_genre".into(), primary_genre))?;

        Ok(df)
    }

    /// Coerce-parse the `date_added` column. Non-string columns and malformed
    /// values yield `None` entries rather than an error.
    fn parse_dates(df: &DataFrame) -> Result<Vec<Option<NaiveDate>>, CleanError> {
        let column = df.column("date_added")?;
        if !matches!(column.dtype(), DataType::String) {
            return Ok(vec![None; df.height()]);
        }

        let ca = column.str()?;
        Ok((0..ca.len())
            .map(|i| ca.get(i).and_then(Self::parse_date))
            .collect())
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
    }

    /// Leading whitespace-delimited token of `duration` parsed as an integer.
    /// Absent, non-string or malformed values count as 0.
    fn extract_durations(df: &DataFrame) -> Result<Vec<i64>, CleanError> {
        let column = df.column("duration")?;
        if !matches!(column.dtype(), DataType::String) {
            return Ok(vec![0; df.height()]);
        }

        let ca = column.str()?;
        Ok((0..ca.len())
            .map(|i| ca.get(i).map_or(0, Self::leading_int))
            .collect())
    }

    fn leading_int(raw: &str) -> i64 {
        raw.split_whitespace()
            .next()
            .and_then(|token| token.parse::<i64>().ok())
            .filter(|n| *n >= 0)
            .unwrap_or(0)
    }

    /// First comma-delimited token of a column, kept verbatim (no trimming).
    /// Absent values fall back to `default`; non-string columns yield the
    /// fallback for every row.
    fn first_tokens(
        df: &DataFrame,
        name: &str,
        default: Option<&str>,
    ) -> Result<Vec<Option<String>>, CleanError> {
        let column = df.column(name)?;
        if !matches!(column.dtype(), DataType::String) {
            return Ok(vec![default.map(str::to_owned); df.height()]);
        }

        let ca = column.str()?;
        Ok((0..ca.len())
            .map(|i| match ca.get(i) {
                Some(value) => Some(value.split(',').next().unwrap_or(value).to_string()),
                None => default.map(str::to_owned),
            })
            .collect())
    }

    /// Trimmed `date_added` strings, kept only where the date parsed. A
    /// failed parse clears the value so `date_added` never disagrees with
    /// `year_added`/`month_added`; non-string columns yield all-absent.
    fn date_strings(
        df: &DataFrame,
        dates: &[Option<NaiveDate>],
    ) -> Result<Vec<Option<String>>, CleanError> {
        let column = df.column("date_added")?;
        if !matches!(column.dtype(), DataType::String) {
            return Ok(vec![None; df.height()]);
        }

        let ca = column.str()?;
        Ok((0..ca.len())
            .map(|i| match (dates[i], ca.get(i)) {
                (Some(_), Some(raw)) => Some(raw.trim().to_string()),
                _ => None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn sample_frame() -> DataFrame {
        df!(
            "title" => &["Alpha", "Beta", "Gamma", "Delta"],
            "type" => &["Movie", "TV Show", "Movie", "Movie"],
            "director" => &[Some("Jane Doe"), None, Some("John Roe"), None],
            "cast" => &[None::<&str>, Some("Actor A, Actor B"), None, None],
            "country" => &[None::<&str>, Some("USA, India"), Some("France"), Some("Japan")],
            "date_added" => &[Some("2021-03-05"), Some(" September 25, 2021"), None, Some("not a date")],
            "release_year" => &[2020i64, 2021, 2019, 2018],
            "rating" => &[Some("PG"), Some("TV-MA"), Some("R"), Some("PG-13")],
            "duration" => &[Some("90 min"), Some("3 Seasons"), Some("100 min"), None],
            "listed_in" => &[None::<&str>, Some("Crime TV Shows, Dramas"), Some("Comedies"), Some("Dramas")],
        )
        .unwrap()
    }

    fn str_at(df: &DataFrame, column: &str, idx: usize) -> Option<String> {
        df.column(column)
            .unwrap()
            .str()
            .unwrap()
            .get(idx)
            .map(str::to_owned)
    }

    #[test]
    fn test_missing_values_defaulted() {
        let cleaned = DataCleaner::clean(&sample_frame()).unwrap();

        for column in ["country", "director", "cast"] {
            assert_eq!(
                cleaned.column(column).unwrap().null_count(),
                0,
                "{column} still has nulls"
            );
        }
        assert_eq!(str_at(&cleaned, "country", 0).unwrap(), UNKNOWN);
        assert_eq!(str_at(&cleaned, "director", 1).unwrap(), UNKNOWN);
        assert_eq!(str_at(&cleaned, "cast", 0).unwrap(), UNKNOWN);
    }

    #[test]
    fn test_rows_missing_date_or_rating_dropped() {
        let cleaned = DataCleaner::clean(&sample_frame()).unwrap();

        // "Gamma" had no date_added
        assert_eq!(cleaned.height(), 3);
        assert_eq!(cleaned.column("rating").unwrap().null_count(), 0);
    }

    #[test]
    fn test_temporal_features_derived_together() {
        let cleaned = DataCleaner::clean(&sample_frame()).unwrap();
        let years = cleaned.column("year_added").unwrap().i32().unwrap().clone();
        let months = cleaned.column("month_added").unwrap().str().unwrap().clone();

        assert_eq!(years.get(0), Some(2021));
        assert_eq!(months.get(0), Some("March"));
        assert_eq!(years.get(1), Some(2021));
        assert_eq!(months.get(1), Some("September"));

        // "not a date" degrades to absent year and month, row survives
        assert_eq!(years.get(2), None);
        assert_eq!(months.get(2), None);
    }

    #[test]
    fn test_unparseable_date_clears_date_added() {
        let cleaned = DataCleaner::clean(&sample_frame()).unwrap();
        let dates = cleaned.column("date_added").unwrap().str().unwrap().clone();
        let years = cleaned.column("year_added").unwrap().i32().unwrap().clone();

        // "not a date" leaves no date fields behind at all
        assert_eq!(dates.get(2), None);
        // date_added and year_added are present or absent as one unit
        for i in 0..cleaned.height() {
            assert_eq!(dates.get(i).is_some(), years.get(i).is_some());
        }
    }

    #[test]
    fn test_duration_extraction() {
        let cleaned = DataCleaner::clean(&sample_frame()).unwrap();
        let durations = cleaned.column("duration_val").unwrap().i64().unwrap().clone();

        assert_eq!(durations.get(0), Some(90));
        assert_eq!(durations.get(1), Some(3));
        // absent duration defaults to 0
        assert_eq!(durations.get(2), Some(0));
    }

    #[test]
    fn test_primary_country_and_genre() {
        let cleaned = DataCleaner::clean(&sample_frame()).unwrap();

        assert_eq!(str_at(&cleaned, "primary_country", 0).unwrap(), UNKNOWN);
        assert_eq!(str_at(&cleaned, "primary_country", 1).unwrap(), "USA");
        assert_eq!(str_at(&cleaned, "primary_genre", 0).unwrap(), UNKNOWN);
        assert_eq!(
            str_at(&cleaned, "primary_genre", 1).unwrap(),
            "Crime TV Shows"
        );
        assert_eq!(str_at(&cleaned, "primary_genre", 2).unwrap(), "Dramas");
    }

    #[test]
    fn test_clean_reaches_fixed_point() {
        let once = DataCleaner::clean(&sample_frame()).unwrap();
        let twice = DataCleaner::clean(&once).unwrap();
        let thrice = DataCleaner::clean(&twice).unwrap();

        // The second pass drops the row whose date never parsed, nothing else
        assert_eq!(twice.height(), once.height() - 1);
        assert!(twice.equals_missing(&thrice));
    }

    #[test]
    fn test_non_string_duration_column_defaults_to_zero() {
        let df = df!(
            "director" => &["Jane Doe"],
            "cast" => &["Actor A"],
            "country" => &["Canada"],
            "date_added" => &["2020-01-15"],
            "rating" => &["PG"],
            "duration" => &[88i64],
            "listed_in" => &["Comedies"],
        )
        .unwrap();

        let cleaned = DataCleaner::clean(&df).unwrap();
        let durations = cleaned.column("duration_val").unwrap().i64().unwrap().clone();
        assert_eq!(durations.get(0), Some(0));
    }

    #[test]
    fn test_non_string_date_column_degrades_to_absent() {
        let df = df!(
            "director" => &["Jane Doe"],
            "cast" => &["Actor A"],
            "country" => &["Canada"],
            "date_added" => &[20200115i64],
            "rating" => &["PG"],
            "duration" => &["88 min"],
            "listed_in" => &["Comedies"],
        )
        .unwrap();

        let cleaned = DataCleaner::clean(&df).unwrap();
        assert_eq!(cleaned.column("date_added").unwrap().null_count(), 1);
        assert_eq!(cleaned.column("year_added").unwrap().null_count(), 1);
        assert_eq!(cleaned.column("month_added").unwrap().null_count(), 1);
    }
}
