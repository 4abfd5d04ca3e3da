//! Integration tests for StreamLens

use std::io::Write;
use streamlens::charts::{ChartRenderer, ChartStyle};
use streamlens::data::{DataCleaner, DatasetLoader, UNKNOWN};
use tempfile::{tempdir, NamedTempFile};

/// Create a small but chart-complete catalog CSV.
fn create_test_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in"
    )
    .unwrap();

    let rows = [
        "s1,Movie,Alpha,Jane Doe,\"Actor A, Actor B\",\"United States, Canada\",\"September 25, 2019\",2018,PG-13,90 min,\"Dramas, Thrillers\"",
        "s2,Movie,Beta,John Roe,Actor C,India,\"January 3, 2020\",2019,PG,121 min,Comedies",
        "s3,TV Show,Gamma,,Actor D,United Kingdom,\"March 15, 2020\",2020,TV-MA,2 Seasons,\"Crime TV Shows, Dramas\"",
        "s4,Movie,Delta,Ann Lee,,France,\"July 9, 2021\",2021,R,105 min,Dramas",
        "s5,TV Show,Epsilon,Kim Park,Actor E,,\"November 30, 2021\",2021,TV-14,1 Season,Kids' TV",
        "s6,Movie,Zeta,Li Wei,Actor F,Japan,\"May 2, 2021\",1995,PG,98 min,\"Action & Adventure, Dramas\"",
        // dropped during cleaning: no date_added
        "s7,Movie,Eta,Sam Cho,Actor G,Spain,,2017,PG,80 min,Dramas",
        // dropped during cleaning: no rating
        "s8,Movie,Theta,Max Roy,Actor H,Italy,\"June 1, 2020\",2016,,95 min,Comedies",
    ];
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

#[test]
fn test_load_and_clean_pipeline() {
    let file = create_test_csv();

    let mut loader = DatasetLoader::new();
    let df = loader.load_csv(file.path()).unwrap().clone();
    assert_eq!(df.height(), 8);

    let cleaned = DataCleaner::clean(&df).unwrap();

    // Two rows lacked date_added/rating
    assert_eq!(cleaned.height(), 6);
    for column in ["country", "director", "cast"] {
        assert_eq!(cleaned.column(column).unwrap().null_count(), 0);
    }

    // Derived features
    let years = cleaned.column("year_added").unwrap().i32().unwrap().clone();
    assert_eq!(years.get(0), Some(2019));
    let durations = cleaned
        .column("duration_val")
        .unwrap()
        .i64()
        .unwrap()
        .clone();
    assert_eq!(durations.get(0), Some(90));
    assert_eq!(durations.get(2), Some(2));

    let countries = cleaned
        .column("primary_country")
        .unwrap()
        .str()
        .unwrap()
        .clone();
    assert_eq!(countries.get(0), Some("United States"));
    assert_eq!(countries.get(4), Some(UNKNOWN));
}

#[test]
fn test_render_all_writes_ten_charts() {
    let file = create_test_csv();
    let out_dir = tempdir().unwrap();

    let mut loader = DatasetLoader::new();
    let df = loader.load_csv(file.path()).unwrap().clone();
    let cleaned = DataCleaner::clean(&df).unwrap();

    let renderer = ChartRenderer::new(ChartStyle::default(), out_dir.path().join("plots"));
    let saved = renderer.render_all(&cleaned).unwrap();

    assert_eq!(saved.len(), 10);
    for path in &saved {
        assert!(path.exists(), "missing chart file {}", path.display());
        assert!(path.metadata().unwrap().len() > 0);
    }
}
