//! StreamLens - Streaming Catalog Analysis & Chart Generator
//!
//! Loads the catalog CSV, cleans it and derives analysis features, then
//! renders the full chart set as PNG files.

use std::path::Path;
use streamlens::charts::{ChartRenderer, ChartStyle};
use streamlens::data::{DataCleaner, DatasetLoader, LoaderError};

const DATA_PATH: &str = "data/netflix_titles.csv";
const STYLE_PATH: &str = "style.json";
const OUTPUT_DIR: &str = "plots";

fn main() -> streamlens::Result<()> {
    let mut loader = DatasetLoader::new();
    let df = match loader.load_csv(Path::new(DATA_PATH)) {
        Ok(df) => df.clone(),
        Err(LoaderError::FileNotFound(path)) => {
            println!("Error: dataset not found at {}", path.display());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let cleaned = DataCleaner::clean(&df)?;
    println!(
        "Cleaned table: {} rows, {} columns",
        cleaned.height(),
        cleaned.width()
    );

    let style = ChartStyle::load_or_default(Path::new(STYLE_PATH));
    let renderer = ChartRenderer::new(style, OUTPUT_DIR.into());
    let saved = renderer.render_all(&cleaned)?;
    println!("Success! {} charts saved to: {}", saved.len(), OUTPUT_DIR);

    Ok(())
}
