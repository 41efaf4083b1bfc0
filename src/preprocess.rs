use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::{RawTable, TransactionRecord};

/// The seven canonical fields of a transaction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TransactionDate,
    HouseAge,
    DistanceToMrt,
    NumConvenienceStores,
    Latitude,
    Longitude,
    PricePerUnitArea,
}

/// Maps source column positions to canonical fields. The dataset carries
/// no usable header, so the assignment is positional; keeping it in an
/// explicit map makes the assumption visible instead of baked into
/// indexing code.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    order: Vec<Field>,
}

impl ColumnMap {
    pub fn new(order: Vec<Field>) -> Self {
        Self { order }
    }

    pub fn width(&self) -> usize {
        self.order.len()
    }

    fn position(&self, field: Field) -> usize {
        // The default map always contains all seven fields; a custom map
        // that omits one is a programming error.
        self.order
            .iter()
            .position(|f| *f == field)
            .expect("column map missing a canonical field")
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::new(vec![
            Field::TransactionDate,
            Field::HouseAge,
            Field::DistanceToMrt,
            Field::NumConvenienceStores,
            Field::Latitude,
            Field::Longitude,
            Field::PricePerUnitArea,
        ])
    }
}

/// The cleaned dataset together with how much cleaning removed.
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub records: Vec<TransactionRecord>,
    pub rows_dropped: usize,
}

/// Decode the dataset's fractional-year encoding into a calendar date.
///
/// The integer part is the year and the fractional part encodes the
/// month: `2013.250` is April 2013 (`0.25 * 12 + 1 = 4`), day fixed to
/// the 1st. A fractional part that decodes outside months 1-12 is
/// reported as an error rather than clamped.
pub fn decode_fractional_year(encoded: f64) -> Result<NaiveDate> {
    let year = encoded.floor() as i32;
    let month = (encoded.rem_euclid(1.0) * 12.0).floor() as i64 + 1;

    if !(1..=12).contains(&month) {
        return Err(Error::DateDecode { encoded, month });
    }

    NaiveDate::from_ymd_opt(year, month as u32, 1).ok_or(Error::DateDecode { encoded, month })
}

/// Clean a raw table: assign canonical fields by position, decode the
/// transaction date, and drop every row with a missing value.
pub fn clean(table: &RawTable, map: &ColumnMap) -> Result<CleanedTable> {
    let date_idx = map.position(Field::TransactionDate);
    let age_idx = map.position(Field::HouseAge);
    let mrt_idx = map.position(Field::DistanceToMrt);
    let stores_idx = map.position(Field::NumConvenienceStores);
    let lat_idx = map.position(Field::Latitude);
    let lon_idx = map.position(Field::Longitude);
    let price_idx = map.position(Field::PricePerUnitArea);

    let mut records = Vec::with_capacity(table.len());
    let mut rows_dropped = 0;

    for (row_idx, row) in table.rows.iter().enumerate() {
        if row.cells.len() != map.width() {
            return Err(Error::ColumnCount {
                row: row_idx,
                expected: map.width(),
                found: row.cells.len(),
            });
        }

        if row.cells.iter().any(|cell| cell.is_none()) {
            rows_dropped += 1;
            continue;
        }

        let cell = |idx: usize| row.cells[idx].unwrap_or_default();

        records.push(TransactionRecord {
            transaction_date: decode_fractional_year(cell(date_idx))?,
            house_age: cell(age_idx),
            distance_to_mrt: cell(mrt_idx),
            num_convenience_stores: cell(stores_idx).round() as u32,
            latitude: cell(lat_idx),
            longitude: cell(lon_idx),
            price_per_unit_area: cell(price_idx),
        });
    }

    if rows_dropped > 0 {
        tracing::debug!("Dropped {} rows with missing values", rows_dropped);
    }

    Ok(CleanedTable {
        records,
        rows_dropped,
    })
}
