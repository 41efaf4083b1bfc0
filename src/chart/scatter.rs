use std::path::Path;

use plotters::prelude::*;

use crate::chart::{chart_err, padded_range};
use crate::error::{Error, Result};
use crate::models::TransactionRecord;

/// Render price per unit area against distance to the nearest MRT
/// station. Point color encodes the convenience-store count and point
/// size encodes house age.
pub fn render_scatter_chart(
    records: &[TransactionRecord],
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    if records.is_empty() {
        return Err(Error::EmptyTable);
    }

    let min_dist = records.iter().map(|r| r.distance_to_mrt).fold(f64::INFINITY, f64::min);
    let max_dist = records
        .iter()
        .map(|r| r.distance_to_mrt)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_price = records
        .iter()
        .map(|r| r.price_per_unit_area)
        .fold(f64::INFINITY, f64::min);
    let max_price = records
        .iter()
        .map(|r| r.price_per_unit_area)
        .fold(f64::NEG_INFINITY, f64::max);

    let max_stores = records
        .iter()
        .map(|r| r.num_convenience_stores)
        .max()
        .unwrap_or(0);
    let max_age = records.iter().map(|r| r.house_age).fold(0.0, f64::max);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Price vs Distance to MRT Station", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(
            padded_range(min_dist, max_dist),
            padded_range(min_price, max_price),
        )
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance to MRT (meters)")
        .y_desc("Price per Unit Area (10,000 NTD/Ping)")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(records.iter().map(|r| {
            let color = store_color(r.num_convenience_stores, max_stores);
            let radius = age_radius(r.house_age, max_age);
            Circle::new(
                (r.distance_to_mrt, r.price_per_unit_area),
                radius,
                color.filled(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

/// Cold blue for few nearby stores, warm red for many.
fn store_color(stores: u32, max_stores: u32) -> RGBColor {
    let t = if max_stores == 0 {
        0.0
    } else {
        stores as f64 / max_stores as f64
    };

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(43, 214), lerp(108, 69), lerp(176, 51))
}

fn age_radius(age: f64, max_age: f64) -> i32 {
    let t = if max_age > 0.0 { age / max_age } else { 0.0 };
    2 + (t * 6.0).round() as i32
}
