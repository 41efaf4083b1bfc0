/// End-to-end pipeline tests: write a small dataset to disk, run the
/// full load → clean → aggregate → render sequence with the viewer
/// disabled, and check the chart artifacts land where configured.
use std::fs;

use realty_trends::{Config, Pipeline};
use tempfile::tempdir;

const HEADER: &str =
    "transaction date,house age,distance to MRT,convenience stores,latitude,longitude,price\n";

fn write_dataset(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("taiwan_real_estate2.csv");
    fs::write(&path, format!("{HEADER}{body}")).expect("write dataset");
    path
}

fn headless_config(data_path: std::path::PathBuf, output_dir: std::path::PathBuf) -> Config {
    Config {
        data_path,
        output_dir,
        show_charts: false,
        chart_width: 640,
        chart_height: 480,
    }
}

#[test]
fn pipeline_writes_both_chart_artifacts() {
    let tmp = tempdir().expect("tempdir");
    let data_path = write_dataset(
        tmp.path(),
        "2013.250,13.3,561.98,5,24.98,121.54,47.3\n\
         2013.250,5.6,390.57,7,24.97,121.54,40.5\n\
         2013.500,32.0,1454.28,0,24.95,121.50,22.1\n",
    );

    let config = headless_config(data_path, tmp.path().join("outputs"));
    let trend_chart = config.trend_chart_path();
    let scatter_chart = config.scatter_chart_path();

    let report = Pipeline::new(config)
        .run()
        .expect("pipeline failed")
        .expect("dataset should load");

    assert_eq!(report.rows_loaded, 3);
    assert_eq!(report.rows_dropped, 0);
    assert_eq!(report.records_analyzed, 3);
    assert_eq!(report.trend_points, 2);
    assert!(trend_chart.exists(), "trend chart not written");
    assert!(scatter_chart.exists(), "scatter chart not written");
}

#[test]
fn pipeline_creates_the_output_directory() {
    let tmp = tempdir().expect("tempdir");
    let data_path = write_dataset(tmp.path(), "2013.250,13.3,561.98,5,24.98,121.54,47.3\n");

    // Nested directory that does not exist yet.
    let output_dir = tmp.path().join("deep").join("outputs");
    let config = headless_config(data_path, output_dir.clone());

    Pipeline::new(config)
        .run()
        .expect("pipeline failed")
        .expect("dataset should load");

    assert!(output_dir.join("price_trends.png").exists());
}

#[test]
fn pipeline_drops_incomplete_rows_before_charting() {
    let tmp = tempdir().expect("tempdir");
    let data_path = write_dataset(
        tmp.path(),
        "2013.250,13.3,561.98,5,24.98,121.54,47.3\n\
         2013.250,,561.98,5,24.98,121.54,\n",
    );

    let config = headless_config(data_path, tmp.path().join("outputs"));
    let report = Pipeline::new(config)
        .run()
        .expect("pipeline failed")
        .expect("dataset should load");

    assert_eq!(report.rows_loaded, 2);
    assert_eq!(report.rows_dropped, 1);
    assert_eq!(report.records_analyzed, 1);
}

#[test]
fn pipeline_stops_quietly_on_missing_dataset() {
    let tmp = tempdir().expect("tempdir");
    let output_dir = tmp.path().join("outputs");
    let config = headless_config(tmp.path().join("missing.csv"), output_dir.clone());

    let result = Pipeline::new(config).run().expect("missing file is not an error");
    assert!(result.is_none());
    assert!(!output_dir.exists(), "no artifacts expected on load failure");
}
