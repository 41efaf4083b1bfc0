use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mean price per unit area for one distinct transaction date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mean_price: f64,
}
