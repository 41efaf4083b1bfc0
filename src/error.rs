use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date encoding {encoded}: month {month} is out of range")]
    DateDecode { encoded: f64, month: i64 },

    #[error("Expected {expected} columns but row {row} has {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("No records left after preprocessing, nothing to chart")]
    EmptyTable,

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
