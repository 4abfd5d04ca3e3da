//! Static Chart Renderer
//! Renders the full statistical chart set for a cleaned catalog table as PNG
//! files using Plotters.
//!
//! Chart set:
//! 1. Line: titles added per year
//! 2. Bar: top 10 primary genres
//! 3. Histogram: movie duration distribution
//! 4. Scatter: release year vs year added, by type
//! 5. Box: release year by rating
//! 6. Stacked area: titles per year by type
//! 7. Pie: content type share
//! 8. Pair-plot grid: numeric features by type
//! 9. Heatmap: titles by year and month
//! 10. Stacked area: top ratings per year

use crate::charts::ChartStyle;
use crate::data::MONTH_NAMES;
use crate::stats::Aggregator;
use plotters::coord::Shift;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Series color palette, used when a chart needs more colors than the
/// style's named ones.
const PALETTE: [RGBColor; 10] = [
    RGBColor(231, 76, 60),  // Red
    RGBColor(46, 204, 113), // Green
    RGBColor(155, 89, 182), // Purple
    RGBColor(243, 156, 18), // Orange
    RGBColor(26, 188, 156), // Teal
    RGBColor(233, 30, 99),  // Pink
    RGBColor(0, 188, 212),  // Cyan
    RGBColor(255, 87, 34),  // Deep Orange
    RGBColor(121, 85, 72),  // Brown
    RGBColor(96, 125, 139), // Blue Grey
];

/// Renders the chart set to an output directory.
pub struct ChartRenderer {
    style: ChartStyle,
    out_dir: PathBuf,
}

impl ChartRenderer {
    pub fn new(style: ChartStyle, out_dir: PathBuf) -> Self {
        Self { style, out_dir }
    }

    fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
        RGBColor(r, g, b)
    }

    /// Resolve a chart file path, creating the output directory if absent.
    fn chart_path(&self, name: &str) -> crate::Result<PathBuf> {
        fs::create_dir_all(&self.out_dir)?;
        Ok(self.out_dir.join(name))
    }

    /// Render every chart in order, returning the written file paths.
    pub fn render_all(&self, df: &DataFrame) -> crate::Result<Vec<PathBuf>> {
        println!("Generating charts...");
        Ok(vec![
            self.line_titles_per_year(df)?,
            self.bar_top_genres(df)?,
            self.histogram_movie_durations(df)?,
            self.scatter_release_vs_added(df)?,
            self.box_release_year_by_rating(df)?,
            self.area_titles_by_type(df)?,
            self.pie_content_types(df)?,
            self.pair_plot(df)?,
            self.heatmap_monthly_additions(df)?,
            self.stacked_ratings_over_years(df)?,
        ])
    }

    /// 1. Line chart of titles added per year.
    pub fn line_titles_per_year(&self, df: &DataFrame) -> crate::Result<PathBuf> {
        // Drop future years that can only come from bad data
        let counts: Vec<(i32, usize)> = Aggregator::year_counts(df, "year_added")?
            .into_iter()
            .filter(|&(year, _)| year < 2025)
            .collect();
        anyhow::ensure!(!counts.is_empty(), "no year_added data to plot");

        let path = self.chart_path("1_line_plot_growth.png")?;
        // The backend borrows the path until the chart is presented
        {
            let root = BitMapBackend::new(&path, (self.style.width, self.style.height))
                .into_drawing_area();
            root.fill(&WHITE)?;

            let x_min = counts.first().map(|c| c.0).unwrap_or(0);
            let x_max = counts.last().map(|c| c.0).unwrap_or(1);
            let y_max = counts.iter().map(|c| c.1).max().unwrap_or(1) as f64 * 1.1;

            let mut chart = ChartBuilder::on(&root)
                .caption(
                    "Titles Added per Year",
                    ("sans-serif", self.style.caption_size as i32),
                )
                .margin(10)
                .x_label_area_size(50)
                .y_label_area_size(60)
                .build_cartesian_2d(x_min..x_max + 1, 0f64..y_max)?;

            chart
                .configure_mesh()
                .x_desc("Year")
                .y_desc("Count")
                .axis_desc_style(("sans-serif", self.style.label_size as i32))
                .draw()?;

            let accent = Self::rgb(self.style.accent_rgb);
            chart.draw_series(LineSeries::new(
                counts.iter().map(|&(year, n)| (year, n as f64)),
                accent.stroke_width(2),
            ))?;
            chart.draw_series(
                counts
                    .iter()
                    .map(|&(year, n)| Circle::new((year, n as f64), 4, accent.filled())),
            )?;

            root.present()?;
        }
        Ok(path)
    }

    /// 2. Horizontal bar chart of the top 10 primary genres.
    pub fn bar_top_genres(&self, df: &DataFrame) -> crate::Result<PathBuf> {
        let top: Vec<(String, usize)> = Aggregator::value_counts(df, "primary_genre")?
            .into_iter()
            .take(10)
            .collect();
        anyhow::ensure!(!top.is_empty(), "no primary_genre data to plot");

        let path = self.chart_path("2_bar_plot_genres.png")?;
        {
            let root = BitMapBackend::new(&path, (self.style.width, self.style.height))
                .into_drawing_area();
            root.fill(&WHITE)?;

            let n = top.len();
            let x_max = top[0].1 as f64 * 1.05;

            let mut chart = ChartBuilder::on(&root)
                .caption(
                    "Top 10 Primary Genres",
                    ("sans-serif", self.style.caption_size as i32),
                )
                .margin(10)
                .x_label_area_size(50)
                .y_label_area_size(30)
                .build_cartesian_2d(0f64..x_max, 0f64..n as f64)?;

            chart
                .configure_mesh()
                .x_desc("Count")
                .y_labels(0)
                .disable_y_mesh()
                .axis_desc_style(("sans-serif", self.style.label_size as i32))
                .draw()?;

            // Largest genre on top, label drawn inside the bar row
            for (i, (name, count)) in top.iter().enumerate() {
                let y = (n - 1 - i) as f64;
                let color = PALETTE[i % PALETTE.len()];
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(0.0, y + 0.1), (*count as f64, y + 0.9)],
                    color.mix(0.85).filled(),
                )))?;
                chart.draw_series(std::iter::once(Text::new(
                    format!("{name} ({count})"),
                    (x_max * 0.01, y + 0.35),
                    ("sans-serif", self.style.label_size as i32),
                )))?;
            }

            root.present()?;
        }
        Ok(path)
    }

    /// 3. Histogram of movie durations in minutes.
    pub fn histogram_movie_durations(&self, df: &DataFrame) -> crate::Result<PathBuf> {
        // duration_val is 0 for unparseable rows; those carry no minutes
        let values: Vec<f64> =
            Aggregator::numeric_values(df, "duration_val", Some(("type", "Movie")))?
                .into_iter()
                .filter(|v| *v > 0.0)
                .collect();
        anyhow::ensure!(!values.is_empty(), "no movie duration data to plot");

        let path = self.chart_path("3_histogram_duration.png")?;
        {
            let root = BitMapBackend::new(&path, (self.style.width, self.style.height))
                .into_drawing_area();
            root.fill(&WHITE)?;

            const BINS: usize = 30;
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values
                .iter()
                .cloned()
                .fold(f64::NEG_INFINITY, f64::max)
                .max(min + 1.0);
            let bin_width = (max - min) / BINS as f64;

            let mut counts = vec![0usize; BINS];
            for v in &values {
                let idx = (((v - min) / bin_width) as usize).min(BINS - 1);
                counts[idx] += 1;
            }
            let y_max = *counts.iter().max().unwrap_or(&1) as f64 * 1.1;

            let mut chart = ChartBuilder::on(&root)
                .caption(
                    "Distribution of Movie Durations",
                    ("sans-serif", self.style.caption_size as i32),
                )
                .margin(10)
                .x_label_area_size(50)
                .y_label_area_size(60)
                .build_cartesian_2d(min..max, 0f64..y_max)?;

            chart
                .configure_mesh()
                .x_desc("Duration (minutes)")
                .y_desc("Count")
                .axis_desc_style(("sans-serif", self.style.label_size as i32))
                .draw()?;

            let purple = RGBColor(148, 103, 189);
            chart.draw_series(
                counts
                    .iter()
                    .enumerate()
                    .filter(|(_, count)| **count > 0)
                    .map(|(i, &count)| {
                        let x0 = min + i as f64 * bin_width;
                        Rectangle::new(
                            [(x0, 0.0), (x0 + bin_width, count as f64)],
                            purple.mix(0.7).filled(),
                        )
                    }),
            )?;

            root.present()?;
        }
        Ok(path)
    }

    /// 4. Scatter of release year vs year added, colored by type.
    pub fn scatter_release_vs_added(&self, df: &DataFrame) -> crate::Result<PathBuf> {
        let rows = Aggregator::numeric_rows(df, &["release_year", "year_added"], "type")?;
        anyhow::ensure!(!rows.is_empty(), "no release/added year pairs to plot");

        let path = self.chart_path("4_scatter_plot_years.png")?;
        {
            let root = BitMapBackend::new(&path, (self.style.width, self.style.height))
                .into_drawing_area();
            root.fill(&WHITE)?;

            let mut x_lo = f64::INFINITY;
            let mut x_hi = f64::NEG_INFINITY;
            let mut y_lo = f64::INFINITY;
            let mut y_hi = f64::NEG_INFINITY;
            for (values, _) in &rows {
                x_lo = x_lo.min(values[0]);
                x_hi = x_hi.max(values[0]);
                y_lo = y_lo.min(values[1]);
                y_hi = y_hi.max(values[1]);
            }

            let mut chart = ChartBuilder::on(&root)
                .caption(
                    "Release Year vs Year Added",
                    ("sans-serif", self.style.caption_size as i32),
                )
                .margin(10)
                .x_label_area_size(50)
                .y_label_area_size(60)
                .build_cartesian_2d(x_lo - 1.0..x_hi + 1.0, y_lo - 1.0..y_hi + 1.0)?;

            chart
                .configure_mesh()
                .x_desc("Release Year")
                .y_desc("Year Added")
                .x_label_formatter(&|v| format!("{v:.0}"))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .axis_desc_style(("sans-serif", self.style.label_size as i32))
                .draw()?;

            let series = [
                ("Movie", Self::rgb(self.style.movie_rgb)),
                ("TV Show", Self::rgb(self.style.show_rgb)),
            ];
            for (type_name, color) in series {
                chart
                    .draw_series(
                        rows.iter()
                            .filter(|(_, hue)| hue == type_name)
                            .map(|(values, _)| {
                                Circle::new((values[0], values[1]), 3, color.mix(0.6).filled())
                            }),
                    )?
                    .label(type_name)
                    .legend(move |(x, y)| Circle::new((x + 5, y), 4, color.filled()));
            }

            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;

            root.present()?;
        }
        Ok(path)
    }

    /// 5. Box plot of release year by rating, most frequent ratings only.
    pub fn box_release_year_by_rating(&self, df: &DataFrame) -> crate::Result<PathBuf> {
        let ratings: Vec<String> = Aggregator::value_counts(df, "rating")?
            .into_iter()
            .take(10)
            .map(|(rating, _)| rating)
            .collect();

        let mut samples: Vec<(String, Vec<f64>)> = Vec::new();
        for rating in &ratings {
            let values =
                Aggregator::numeric_values(df, "release_year", Some(("rating", rating.as_str())))?;
            if !values.is_empty() {
                samples.push((rating.clone(), values));
            }
        }
        anyhow::ensure!(!samples.is_empty(), "no rating data to plot");

        let path = self.chart_path("5_box_plot_rating_year.png")?;
        {
            let root = BitMapBackend::new(&path, (self.style.width, self.style.height))
                .into_drawing_area();
            root.fill(&WHITE)?;

            let mut y_lo = f32::INFINITY;
            let mut y_hi = f32::NEG_INFINITY;
            for (_, values) in &samples {
                for &v in values {
                    y_lo = y_lo.min(v as f32);
                    y_hi = y_hi.max(v as f32);
                }
            }
            let pad = ((y_hi - y_lo) * 0.1).max(1.0);

            let names: Vec<String> = samples.iter().map(|(name, _)| name.clone()).collect();
            let mut chart = ChartBuilder::on(&root)
                .caption(
                    "Release Year by Rating",
                    ("sans-serif", self.style.caption_size as i32),
                )
                .margin(10)
                .x_label_area_size(50)
                .y_label_area_size(60)
                .build_cartesian_2d(
                    (0..samples.len() as i32).into_segmented(),
                    (y_lo - pad)..(y_hi + pad),
                )?;

            chart
                .configure_mesh()
                .x_desc("Rating")
                .y_desc("Release Year")
                .x_label_formatter(&|seg| match seg {
                    SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => names
                        .get(*i as usize)
                        .cloned()
                        .unwrap_or_default(),
                    _ => String::new(),
                })
                .y_label_formatter(&|v| format!("{v:.0}"))
                .axis_desc_style(("sans-serif", self.style.label_size as i32))
                .draw()?;

            for (i, (_, values)) in samples.iter().enumerate() {
                let quartiles = Quartiles::new(values);
                chart.draw_series(std::iter::once(
                    Boxplot::new_vertical(SegmentValue::CenterOf(i as i32), &quartiles)
                        .width(20)
                        .style(PALETTE[i % PALETTE.len()]),
                ))?;
            }

            root.present()?;
        }
        Ok(path)
    }

    /// 6. Stacked area of titles per year by content type (streaming era).
    pub fn area_titles_by_type(&self, df: &DataFrame) -> crate::Result<PathBuf> {
        let counts = Aggregator::year_group_counts(df, "year_added", "type")?;
        let years = Self::sorted_years(&counts, 2008);
        anyhow::ensure!(!years.is_empty(), "no year/type data to plot");

        let groups = vec!["Movie".to_string(), "TV Show".to_string()];
        let colors = vec![
            Self::rgb(self.style.movie_rgb),
            Self::rgb(self.style.show_rgb),
        ];

        let path = self.chart_path("6_area_plot_type_growth.png")?;
        self.draw_stacked_area(
            &path,
            "Titles Added Over Time by Type",
            &years,
            &groups,
            &colors,
            &counts,
        )?;
        Ok(path)
    }

    /// 7. Pie chart of content type share.
    pub fn pie_content_types(&self, df: &DataFrame) -> crate::Result<PathBuf> {
        let counts = Aggregator::value_counts(df, "type")?;
        anyhow::ensure!(!counts.is_empty(), "no type data to plot");

        let path = self.chart_path("7_pie_chart_type.png")?;
        {
            let side = self.style.height.min(self.style.width);
            let root = BitMapBackend::new(&path, (side, side)).into_drawing_area();
            root.fill(&WHITE)?;
            let root = root.titled(
                "Content Type Distribution",
                ("sans-serif", self.style.caption_size as i32),
            )?;

            let dims = root.dim_in_pixel();
            let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
            let radius = dims.0.min(dims.1) as f64 * 0.35;

            let sizes: Vec<f64> = counts.iter().map(|(_, n)| *n as f64).collect();
            let labels: Vec<String> = counts.iter().map(|(name, _)| name.clone()).collect();
            let colors: Vec<RGBColor> = counts
                .iter()
                .enumerate()
                .map(|(i, (name, _))| match name.as_str() {
                    "Movie" => Self::rgb(self.style.movie_rgb),
                    "TV Show" => Self::rgb(self.style.show_rgb),
                    _ => PALETTE[i % PALETTE.len()],
                })
                .collect();

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.start_angle(140.0);
            pie.label_style(
                ("sans-serif", self.style.label_size as i32 + 5)
                    .into_font()
                    .color(&BLACK),
            );
            pie.percentages(
                ("sans-serif", self.style.label_size as i32)
                    .into_font()
                    .color(&WHITE),
            );
            root.draw(&pie)?;

            root.present()?;
        }
        Ok(path)
    }

    /// 8. Pair-plot grid over the numeric features, colored by type.
    pub fn pair_plot(&self, df: &DataFrame) -> crate::Result<PathBuf> {
        const VARS: [&str; 3] = ["release_year", "year_added", "duration_val"];

        // Very old titles squash the axes; keep the modern catalog only
        let rows: Vec<(Vec<f64>, String)> = Aggregator::numeric_rows(df, &VARS, "type")?
            .into_iter()
            .filter(|(values, _)| values[0] > 1990.0)
            .collect();
        anyhow::ensure!(!rows.is_empty(), "no rows for pair plot");

        let path = self.chart_path("8_pair_plot.png")?;
        {
            let side = self.style.width.min(self.style.height).max(900);
            let root = BitMapBackend::new(&path, (side, side)).into_drawing_area();
            root.fill(&WHITE)?;
            let root = root.titled(
                "Pairwise Relationships by Type",
                ("sans-serif", self.style.caption_size as i32),
            )?;

            let mut lo = [f64::INFINITY; 3];
            let mut hi = [f64::NEG_INFINITY; 3];
            for (values, _) in &rows {
                for k in 0..3 {
                    lo[k] = lo[k].min(values[k]);
                    hi[k] = hi[k].max(values[k]);
                }
            }
            for k in 0..3 {
                let pad = ((hi[k] - lo[k]) * 0.05).max(1.0);
                lo[k] -= pad;
                hi[k] += pad;
            }

            let movie = Self::rgb(self.style.movie_rgb);
            let show = Self::rgb(self.style.show_rgb);
            let accent = Self::rgb(self.style.accent_rgb);

            let cells = root.split_evenly((3, 3));
            for (idx, cell) in cells.iter().enumerate() {
                let (r, c) = (idx / 3, idx % 3);
                if r == c {
                    let values: Vec<f64> = rows.iter().map(|(v, _)| v[r]).collect();
                    Self::draw_cell_hist(cell, VARS[r], &values, (lo[r], hi[r]), accent)?;
                } else {
                    Self::draw_cell_scatter(
                        cell,
                        VARS[c],
                        VARS[r],
                        &rows,
                        (c, r),
                        (lo[c], hi[c]),
                        (lo[r], hi[r]),
                        movie,
                        show,
                    )?;
                }
            }

            root.present()?;
        }
        Ok(path)
    }

    /// 9. Heatmap of titles added by year and month.
    pub fn heatmap_monthly_additions(&self, df: &DataFrame) -> crate::Result<PathBuf> {
        let counts = Aggregator::year_group_counts(df, "year_added", "month_added")?;
        let years = Self::sorted_years(&counts, 2010);
        anyhow::ensure!(!years.is_empty(), "no year/month data to plot");

        let max_count = counts
            .iter()
            .filter(|((year, _), _)| *year >= 2010)
            .map(|(_, n)| *n)
            .max()
            .unwrap_or(1) as f64;

        let path = self.chart_path("9_heatmap_activity.png")?;
        {
            let root = BitMapBackend::new(&path, (self.style.width, self.style.height))
                .into_drawing_area();
            root.fill(&WHITE)?;

            let y_lo = years[0] as f64;
            let y_hi = (*years.last().unwrap() + 1) as f64;

            let mut chart = ChartBuilder::on(&root)
                .caption(
                    "Titles Added by Month and Year",
                    ("sans-serif", self.style.caption_size as i32),
                )
                .margin(10)
                .x_label_area_size(50)
                .y_label_area_size(60)
                .build_cartesian_2d(0f64..12f64, y_lo..y_hi)?;

            chart
                .configure_mesh()
                .x_desc("Month Added")
                .y_desc("Year Added")
                .x_labels(13)
                .y_labels(years.len() + 1)
                .disable_x_mesh()
                .disable_y_mesh()
                .x_label_formatter(&|v| {
                    if v.fract() == 0.0 && (0.0..12.0).contains(v) {
                        MONTH_NAMES[*v as usize][..3].to_string()
                    } else {
                        String::new()
                    }
                })
                .y_label_formatter(&|v| {
                    if v.fract() == 0.0 {
                        format!("{v:.0}")
                    } else {
                        String::new()
                    }
                })
                .axis_desc_style(("sans-serif", self.style.label_size as i32))
                .draw()?;

            for &year in &years {
                for (month_idx, month) in MONTH_NAMES.iter().enumerate() {
                    let count = *counts.get(&(year, month.to_string())).unwrap_or(&0);
                    let ratio = count as f64 / max_count;
                    let x0 = month_idx as f64;
                    let y0 = year as f64;

                    chart.draw_series(std::iter::once(Rectangle::new(
                        [(x0 + 0.02, y0 + 0.02), (x0 + 0.98, y0 + 0.98)],
                        Self::heat_color(ratio).filled(),
                    )))?;

                    let text_color = if ratio > 0.6 { WHITE } else { BLACK };
                    chart.draw_series(std::iter::once(Text::new(
                        count.to_string(),
                        (x0 + 0.4, y0 + 0.55),
                        ("sans-serif", 12).into_font().color(&text_color),
                    )))?;
                }
            }

            root.present()?;
        }
        Ok(path)
    }

    /// 10. Stacked area of top-5 ratings (plus "Other") per year.
    pub fn stacked_ratings_over_years(&self, df: &DataFrame) -> crate::Result<PathBuf> {
        let top5: Vec<String> = Aggregator::value_counts(df, "rating")?
            .into_iter()
            .take(5)
            .map(|(rating, _)| rating)
            .collect();
        anyhow::ensure!(!top5.is_empty(), "no rating data to plot");

        let raw = Aggregator::year_group_counts(df, "year_added", "rating")?;
        let mut folded: HashMap<(i32, String), usize> = HashMap::new();
        for ((year, rating), n) in raw {
            let group = if top5.contains(&rating) {
                rating
            } else {
                "Other".to_string()
            };
            *folded.entry((year, group)).or_default() += n;
        }

        let years = Self::sorted_years(&folded, 2010);
        anyhow::ensure!(!years.is_empty(), "no year/rating data to plot");

        let mut groups = top5;
        groups.push("Other".to_string());
        let colors: Vec<RGBColor> = (0..groups.len())
            .map(|i| PALETTE[i % PALETTE.len()])
            .collect();

        let path = self.chart_path("10_stack_plot_ratings.png")?;
        self.draw_stacked_area(
            &path,
            "Rating Distribution Over Years",
            &years,
            &groups,
            &colors,
            &folded,
        )?;
        Ok(path)
    }

    /// Shared stacked-area drawing for charts 6 and 10.
    fn draw_stacked_area(
        &self,
        path: &std::path::Path,
        caption: &str,
        years: &[i32],
        groups: &[String],
        colors: &[RGBColor],
        table: &HashMap<(i32, String), usize>,
    ) -> crate::Result<()> {
        // Cumulative counts per group so areas can layer back-to-front
        let mut cumulative: Vec<Vec<f64>> = Vec::with_capacity(groups.len());
        let mut running = vec![0f64; years.len()];
        for group in groups {
            for (j, year) in years.iter().enumerate() {
                running[j] += *table.get(&(*year, group.clone())).unwrap_or(&0) as f64;
            }
            cumulative.push(running.clone());
        }
        let y_max = running.iter().cloned().fold(1.0, f64::max) * 1.1;

        let root =
            BitMapBackend::new(path, (self.style.width, self.style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let x_min = years[0];
        let x_max = *years.last().unwrap();
        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", self.style.caption_size as i32))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max + 1, 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Year Added")
            .y_desc("Count")
            .axis_desc_style(("sans-serif", self.style.label_size as i32))
            .draw()?;

        // Topmost layer first so each following series paints over it
        for idx in (0..groups.len()).rev() {
            let color = colors[idx % colors.len()];
            chart
                .draw_series(
                    AreaSeries::new(
                        years.iter().zip(&cumulative[idx]).map(|(y, v)| (*y, *v)),
                        0.0,
                        color.mix(0.5),
                    )
                    .border_style(color.stroke_width(1)),
                )?
                .label(groups[idx].clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    fn draw_cell_hist(
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        name: &str,
        values: &[f64],
        range: (f64, f64),
        color: RGBColor,
    ) -> crate::Result<()> {
        const BINS: usize = 20;
        let bin_width = (range.1 - range.0) / BINS as f64;
        let mut counts = vec![0usize; BINS];
        for v in values {
            let idx = (((v - range.0) / bin_width) as usize).min(BINS - 1);
            counts[idx] += 1;
        }
        let y_max = (*counts.iter().max().unwrap_or(&1)).max(1) as f64 * 1.1;

        let mut chart = ChartBuilder::on(area)
            .caption(name, ("sans-serif", 14))
            .margin(5)
            .x_label_area_size(25)
            .y_label_area_size(35)
            .build_cartesian_2d(range.0..range.1, 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_labels(4)
            .y_labels(4)
            .x_label_formatter(&|v| format!("{v:.0}"))
            .draw()?;

        chart.draw_series(
            counts
                .iter()
                .enumerate()
                .filter(|(_, count)| **count > 0)
                .map(|(i, &count)| {
                    let x0 = range.0 + i as f64 * bin_width;
                    Rectangle::new(
                        [(x0, 0.0), (x0 + bin_width, count as f64)],
                        color.mix(0.6).filled(),
                    )
                }),
        )?;
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell_scatter(
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        x_name: &str,
        y_name: &str,
        rows: &[(Vec<f64>, String)],
        (x_idx, y_idx): (usize, usize),
        x_range: (f64, f64),
        y_range: (f64, f64),
        movie: RGBColor,
        show: RGBColor,
    ) -> crate::Result<()> {
        let mut chart = ChartBuilder::on(area)
            .caption(format!("{y_name} vs {x_name}"), ("sans-serif", 14))
            .margin(5)
            .x_label_area_size(25)
            .y_label_area_size(35)
            .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

        chart
            .configure_mesh()
            .x_labels(4)
            .y_labels(4)
            .x_label_formatter(&|v| format!("{v:.0}"))
            .y_label_formatter(&|v| format!("{v:.0}"))
            .draw()?;

        for (type_name, color) in [("Movie", movie), ("TV Show", show)] {
            chart.draw_series(
                rows.iter()
                    .filter(|(_, hue)| hue == type_name)
                    .map(|(values, _)| {
                        Circle::new((values[x_idx], values[y_idx]), 2, color.mix(0.6).filled())
                    }),
            )?;
        }
        Ok(())
    }

    /// Distinct years at or after `from`, ascending.
    fn sorted_years(table: &HashMap<(i32, String), usize>, from: i32) -> Vec<i32> {
        let mut years: Vec<i32> = table
            .keys()
            .map(|(year, _)| *year)
            .filter(|year| *year >= from)
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// White-to-blue ramp for heatmap cells.
    fn heat_color(ratio: f64) -> RGBColor {
        let ratio = ratio.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * ratio) as u8;
        RGBColor(lerp(247, 8), lerp(251, 48), lerp(255, 107))
    }
}
