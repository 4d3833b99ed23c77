//! Integration tests for Travel Genie

use std::cell::Cell;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use travelgenie::{
    CatalogSource, CatalogStore, MatchResult, RecommendationPipeline, TravelGenieError,
    TrendOutcome,
};

const DESTINATIONS_CSV: &str = "\
destination,region,interest,cost,month,weather
Bali,Asia,Beach,900,June,Sunny and humid
Phuket,Asia,Beach,900,June,Hot
Kyoto,Asia,Culture,1800,April,Mild
Paris,Europe,Culture,1500,April,Cloudy
Santorini,Europe,Beach,2000,,Windy
Reykjavik,Europe,Adventure,call us,September,Cold
";

fn write_catalog(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("destinations.csv");
    std::fs::write(&path, contents).expect("Failed to write catalog fixture");
    path
}

/// Run the binary inside `dir` with the given stdin
fn run_genie(dir: &Path, catalog: &Path, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_travelgenie"))
        .current_dir(dir)
        .env("TRAVELGENIE_CATALOG__PATH", catalog)
        .env("TRAVELGENIE_DISPLAY__RESULT_DELAY_MS", "0")
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for command")
}

struct CountingFixture {
    text: &'static str,
    reads: Cell<usize>,
}

impl CatalogSource for CountingFixture {
    fn name(&self) -> String {
        "fixture".to_string()
    }

    fn read(&self) -> travelgenie::Result<String> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.text.to_string())
    }
}

#[test]
fn test_catalog_loaded_once_across_queries() {
    let store = CatalogStore::new(CountingFixture {
        text: DESTINATIONS_CSV,
        reads: Cell::new(0),
    });

    for budget in [500.0, 1000.0, 2000.0] {
        let catalog = store.load().unwrap();
        RecommendationPipeline::new(catalog).recommend("Asia", "Beach", budget);
    }

    assert_eq!(store.source().reads.get(), 1);
}

#[test]
fn test_pipeline_against_file_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), DESTINATIONS_CSV);
    let store = CatalogStore::from_path(&path);
    let catalog = store.load().unwrap();
    let pipeline = RecommendationPipeline::new(catalog);

    assert_eq!(pipeline.list_regions(), vec!["Asia", "Europe"]);
    assert_eq!(pipeline.list_interests(), vec!["Beach", "Culture", "Adventure"]);

    // Equal cost: Bali comes first in the file
    let result = pipeline.recommend("Asia", "Beach", 900.0);
    assert_eq!(result.record().map(|r| r.name.as_str()), Some("Bali"));

    assert!(pipeline.recommend("Europe", "Beach", 2000.0).is_found());
    assert_eq!(pipeline.recommend("Europe", "Beach", 1999.0), MatchResult::NotFound);
    assert_eq!(pipeline.recommend("Europe", "Adventure", 1e9), MatchResult::NotFound);

    let TrendOutcome::Available(trend) = pipeline.monthly_trend() else {
        panic!("catalog has a month column");
    };
    assert_eq!(trend.average("June"), Some(900.0));
    assert_eq!(trend.average("April"), Some(1650.0));
    assert_eq!(trend.average("Unknown"), Some(2000.0));
    assert_eq!(trend.average("September"), None);
    assert_eq!(catalog.unparsable_cost_rows(), 1);
}

#[test]
fn test_trend_unavailable_without_month_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), "destination,region,interest,cost\nBali,Asia,Beach,900\n");
    let store = CatalogStore::from_path(&path);
    let pipeline = RecommendationPipeline::new(store.load().unwrap());

    assert_eq!(pipeline.monthly_trend(), TrendOutcome::Unavailable);
}

#[test]
fn test_missing_catalog_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let store = CatalogStore::from_path(dir.path().join("absent.csv"));
    assert!(matches!(
        store.load(),
        Err(TravelGenieError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_cli_session_recommends_destination() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), DESTINATIONS_CSV);

    let output = run_genie(dir.path(), &path, "Asia\nBeach\n1000\nn\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("AI Travel Genie"));
    assert!(stdout.contains("Your top match: Bali"));
    assert!(stdout.contains("Monthly Cost Trend"));
}

#[test]
fn test_cli_session_no_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), DESTINATIONS_CSV);

    let output = run_genie(dir.path(), &path, "Europe\nCulture\n100\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No perfect match found"));
}

#[test]
fn test_cli_fails_without_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere.csv");

    let output = run_genie(dir.path(), &missing, "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not load the destination catalog"));
}
