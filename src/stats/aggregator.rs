//! Aggregation Module
//! Read-only counting and extraction helpers over the cleaned catalog table.

use polars::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Computes the per-chart aggregations consumed by the renderer.
pub struct Aggregator;

impl Aggregator {
    /// Count occurrences of each value in a column, most frequent first.
    /// Ties break by value so chart output stays deterministic.
    pub fn value_counts(
        df: &DataFrame,
        column: &str,
    ) -> Result<Vec<(String, usize)>, AggregateError> {
        let series = df.column(column)?.as_materialized_series().clone();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for i in 0..series.len() {
            if let Ok(val) = series.get(i) {
                if !val.is_null() {
                    let key = val.to_string().trim_matches('"').to_string();
                    *counts.entry(key).or_default() += 1;
                }
            }
        }

        let mut out: Vec<(String, usize)> = counts.into_iter().collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(out)
    }

    /// Count rows per integer value of a column (e.g. `year_added`), ascending.
    /// Null entries are skipped.
    pub fn year_counts(df: &DataFrame, column: &str) -> Result<Vec<(i32, usize)>, AggregateError> {
        let col = df.column(column)?.cast(&DataType::Int32)?;
        let ca = col.i32()?;
        let mut counts: HashMap<i32, usize> = HashMap::new();

        for i in 0..ca.len() {
            if let Some(year) = ca.get(i) {
                *counts.entry(year).or_default() += 1;
            }
        }

        let mut out: Vec<(i32, usize)> = counts.into_iter().collect();
        out.sort_by_key(|&(year, _)| year);
        Ok(out)
    }

    /// Count rows per (integer year, group value) pair, for heatmaps and
    /// stacked charts.
    pub fn year_group_counts(
        df: &DataFrame,
        year_col: &str,
        group_col: &str,
    ) -> Result<HashMap<(i32, String), usize>, AggregateError> {
        let years = df.column(year_col)?.cast(&DataType::Int32)?;
        let years_ca = years.i32()?;
        let groups = df.column(group_col)?.as_materialized_series().clone();

        let mut counts: HashMap<(i32, String), usize> = HashMap::new();
        for i in 0..years_ca.len() {
            if let (Some(year), Ok(group)) = (years_ca.get(i), groups.get(i)) {
                if !group.is_null() {
                    let key = (year, group.to_string().trim_matches('"').to_string());
                    *counts.entry(key).or_default() += 1;
                }
            }
        }

        Ok(counts)
    }

    /// Extract non-null numeric samples from a column, optionally keeping only
    /// rows where `filter` column equals the given value.
    pub fn numeric_values(
        df: &DataFrame,
        column: &str,
        filter: Option<(&str, &str)>,
    ) -> Result<Vec<f64>, AggregateError> {
        let df = match filter {
            Some((filter_col, filter_val)) => df
                .clone()
                .lazy()
                .filter(col(filter_col).eq(lit(filter_val)))
                .collect()?,
            None => df.clone(),
        };

        let values = df.column(column)?.cast(&DataType::Float64)?;
        let ca = values.f64()?;
        Ok((0..ca.len())
            .filter_map(|i| ca.get(i))
            .filter(|v| !v.is_nan())
            .collect())
    }

    /// Extract rows across several numeric columns plus a string hue column.
    /// Rows with a null in any requested column are skipped entirely.
    pub fn numeric_rows(
        df: &DataFrame,
        columns: &[&str],
        hue_col: &str,
    ) -> Result<Vec<(Vec<f64>, String)>, AggregateError> {
        let mut casts = Vec::with_capacity(columns.len());
        for name in columns {
            casts.push(df.column(name)?.cast(&DataType::Float64)?);
        }
        let mut cas = Vec::with_capacity(casts.len());
        for cast in &casts {
            cas.push(cast.f64()?);
        }
        let hues = df.column(hue_col)?.as_materialized_series().clone();

        let mut rows = Vec::new();
        'row: for i in 0..df.height() {
            let mut values = Vec::with_capacity(cas.len());
            for ca in &cas {
                match ca.get(i) {
                    Some(v) if !v.is_nan() => values.push(v),
                    _ => continue 'row,
                }
            }
            let Ok(hue) = hues.get(i) else { continue };
            if hue.is_null() {
                continue;
            }
            rows.push((values, hue.to_string().trim_matches('"').to_string()));
        }

        Ok(rows)
    }
}
