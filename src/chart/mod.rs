pub mod scatter;
pub mod trend;

use std::fmt::Display;
use std::path::Path;

use crate::error::{Error, Result};

pub use scatter::render_scatter_chart;
pub use trend::render_trend_chart;

/// Open a rendered chart in the platform image viewer. Kept separate from
/// rendering so the pipeline can be exercised headless.
pub fn display(path: &Path) -> Result<()> {
    open::that(path).map_err(Error::Io)
}

pub(crate) fn chart_err<E: Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// Pad a numeric axis range so a flat series still renders with some
/// breathing room.
pub(crate) fn padded_range(min: f64, max: f64) -> std::ops::Range<f64> {
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (min - pad)..(max + pad)
}
