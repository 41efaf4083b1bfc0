use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one pipeline run, printed to the user after the charts
/// are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub rows_loaded: usize,
    pub rows_dropped: usize,
    pub records_analyzed: usize,
    pub trend_points: usize,
    pub trend_chart: PathBuf,
    pub scatter_chart: PathBuf,
    pub analysis_date: DateTime<Utc>,
}
