use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::models::{RawRow, RawTable};

/// Load the real-estate dataset from a delimited file.
///
/// This is the error boundary of the pipeline: a missing or unparseable
/// file is reported as a status line on stdout and swallowed into `None`
/// so the caller can stop without generating any artifacts.
pub fn load(path: &Path) -> Option<RawTable> {
    match read_table(path) {
        Ok(table) => {
            println!("Data loaded successfully!");
            Some(table)
        }
        Err(LoadFailure::NotFound) => {
            println!(
                "Error: File {} not found. Please ensure the dataset is in the 'data' folder.",
                path.display()
            );
            None
        }
        Err(LoadFailure::Unreadable(msg)) => {
            println!("Error loading data: {}", msg);
            None
        }
    }
}

enum LoadFailure {
    NotFound,
    Unreadable(String),
}

fn read_table(path: &Path) -> std::result::Result<RawTable, LoadFailure> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadFailure::NotFound,
        _ => LoadFailure::Unreadable(e.to_string()),
    })?;

    parse_csv(file).map_err(|e| LoadFailure::Unreadable(e.to_string()))
}

/// Parse headed CSV into positional numeric cells. Empty fields become
/// `None`; non-numeric text is a parse failure.
fn parse_csv<R: std::io::Read>(reader: R) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize::<Vec<Option<f64>>>() {
        rows.push(RawRow::new(result?));
    }

    Ok(RawTable { rows })
}
