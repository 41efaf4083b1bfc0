use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A raw row as it comes off the CSV reader: positional numeric cells,
/// `None` where the source field is empty. The cells carry no meaning
/// until a [`ColumnMap`](crate::preprocess::ColumnMap) assigns them one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub cells: Vec<Option<f64>>,
}

impl RawRow {
    pub fn new(cells: Vec<Option<f64>>) -> Self {
        Self { cells }
    }
}

/// The parsed but uncleaned dataset.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One real-estate sale after preprocessing. Every field is present;
/// records are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_date: NaiveDate,
    pub house_age: f64,
    pub distance_to_mrt: f64,
    pub num_convenience_stores: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub price_per_unit_area: f64,
}
