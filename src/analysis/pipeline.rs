use std::fs;

use chrono::Utc;

use crate::analysis::trends::mean_price_by_date;
use crate::chart::{display, render_scatter_chart, render_trend_chart};
use crate::config::Config;
use crate::error::Result;
use crate::loader;
use crate::models::PipelineReport;
use crate::preprocess::{clean, ColumnMap};

/// The whole analysis as one object: load, clean, aggregate, chart.
/// Each stage consumes the previous stage's output; nothing is shared
/// or retried.
pub struct Pipeline {
    config: Config,
    column_map: ColumnMap,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            column_map: ColumnMap::default(),
        }
    }

    /// Run the pipeline end to end. Returns `None` when the dataset could
    /// not be loaded; the loader has already reported why.
    pub fn run(&self) -> Result<Option<PipelineReport>> {
        // Step 1: Load the raw table
        tracing::info!("Loading dataset from {}", self.config.data_path.display());
        let Some(raw) = loader::load(&self.config.data_path) else {
            return Ok(None);
        };
        let rows_loaded = raw.len();
        tracing::info!("Loaded {} rows", rows_loaded);

        // Step 2: Clean
        let cleaned = clean(&raw, &self.column_map)?;
        tracing::info!(
            "Cleaned table: {} records kept, {} dropped",
            cleaned.records.len(),
            cleaned.rows_dropped
        );

        // Step 3: Aggregate price trends
        let trend = mean_price_by_date(&cleaned.records);
        tracing::info!("Aggregated {} distinct transaction dates", trend.len());

        // Step 4: Render charts
        fs::create_dir_all(&self.config.output_dir)?;
        let trend_path = self.config.trend_chart_path();
        let scatter_path = self.config.scatter_chart_path();
        let size = (self.config.chart_width, self.config.chart_height);

        render_trend_chart(&trend, &trend_path, size)?;
        tracing::info!("Wrote {}", trend_path.display());

        render_scatter_chart(&cleaned.records, &scatter_path, size)?;
        tracing::info!("Wrote {}", scatter_path.display());

        // Step 5: Optionally hand the artifacts to the image viewer
        if self.config.show_charts {
            display(&trend_path)?;
            display(&scatter_path)?;
        }

        Ok(Some(PipelineReport {
            rows_loaded,
            rows_dropped: cleaned.rows_dropped,
            records_analyzed: cleaned.records.len(),
            trend_points: trend.len(),
            trend_chart: trend_path,
            scatter_chart: scatter_path,
            analysis_date: Utc::now(),
        }))
    }
}
