//! Chart Style Module
//! Explicit rendering configuration passed to the chart renderer.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Rendering configuration for the chart set.
///
/// Carried explicitly into `ChartRenderer` instead of living in
/// process-global state. An optional JSON file can override the defaults;
/// anything malformed or missing falls back silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    pub caption_size: u32,
    pub label_size: u32,
    /// Line/series accent color
    pub accent_rgb: (u8, u8, u8),
    /// Color for "Movie" series
    pub movie_rgb: (u8, u8, u8),
    /// Color for "TV Show" series
    pub show_rgb: (u8, u8, u8),
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            caption_size: 30,
            label_size: 15,
            accent_rgb: (31, 119, 180),
            movie_rgb: (231, 76, 60),
            show_rgb: (52, 152, 219),
        }
    }
}

impl ChartStyle {
    /// Load style overrides from a JSON file if present, else defaults.
    pub fn load_or_default(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let style = ChartStyle::load_or_default(Path::new("no/such/style.json"));
        assert_eq!(style.width, 1200);
        assert_eq!(style.height, 600);
    }

    #[test]
    fn test_overrides_applied() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"width\": 800, \"caption_size\": 20}}").unwrap();

        let style = ChartStyle::load_or_default(file.path());
        assert_eq!(style.width, 800);
        assert_eq!(style.caption_size, 20);
        // untouched fields keep their defaults
        assert_eq!(style.height, 600);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let style = ChartStyle::load_or_default(file.path());
        assert_eq!(style.width, 1200);
    }
}
