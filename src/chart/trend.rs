use std::path::Path;

use chrono::Duration;
use plotters::prelude::*;

use crate::chart::{chart_err, padded_range};
use crate::error::{Error, Result};
use crate::models::TrendPoint;

/// Render the mean-price-over-time line chart and write it as a PNG.
///
/// Points must already be in ascending date order; `mean_price_by_date`
/// produces them that way.
pub fn render_trend_chart(points: &[TrendPoint], path: &Path, size: (u32, u32)) -> Result<()> {
    if points.is_empty() {
        return Err(Error::EmptyTable);
    }

    let min_date = points[0].date;
    let max_date = points[points.len() - 1].date;
    let min_price = points.iter().map(|p| p.mean_price).fold(f64::INFINITY, f64::min);
    let max_price = points
        .iter()
        .map(|p| p.mean_price)
        .fold(f64::NEG_INFINITY, f64::max);

    // A one-point series still needs a non-degenerate x range.
    let date_range = (min_date - Duration::days(15))..(max_date + Duration::days(15));

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Taiwan Real Estate Price Trends Over Time",
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(date_range, padded_range(min_price, max_price))
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Transaction Date")
        .y_desc("Average Price per Unit Area (10,000 NTD/Ping)")
        .x_label_formatter(&|d| d.format("%Y-%m").to_string())
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.date, p.mean_price)),
            &BLUE,
        ))
        .map_err(chart_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.date, p.mean_price), 4, BLUE.filled())),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_series_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trend.png");
        let err = render_trend_chart(&[], &path, (400, 300)).unwrap_err();
        assert!(matches!(err, Error::EmptyTable));
    }

    #[test]
    fn test_single_point_series_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trend.png");
        let points = vec![TrendPoint {
            date: NaiveDate::from_ymd_opt(2013, 4, 1).unwrap(),
            mean_price: 35.5,
        }];

        render_trend_chart(&points, &path, (400, 300)).unwrap();
        assert!(path.exists());
    }
}
