use std::collections::BTreeMap;

use crate::models::{TransactionRecord, TrendPoint};

/// Group records by transaction date and take the arithmetic mean of the
/// price per unit area for each group. The result is one point per
/// distinct date, ascending, which is what the line chart expects.
pub fn mean_price_by_date(records: &[TransactionRecord]) -> Vec<TrendPoint> {
    let mut groups: BTreeMap<_, (f64, usize)> = BTreeMap::new();

    for record in records {
        let entry = groups.entry(record.transaction_date).or_insert((0.0, 0));
        entry.0 += record.price_per_unit_area;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(date, (sum, count))| TrendPoint {
            date,
            mean_price: sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: NaiveDate, price: f64) -> TransactionRecord {
        TransactionRecord {
            transaction_date: date,
            house_age: 10.0,
            distance_to_mrt: 500.0,
            num_convenience_stores: 4,
            latitude: 24.98,
            longitude: 121.54,
            price_per_unit_area: price,
        }
    }

    #[test]
    fn test_same_date_prices_are_averaged() {
        let date = NaiveDate::from_ymd_opt(2013, 4, 1).unwrap();
        let points = mean_price_by_date(&[record(date, 30.5), record(date, 40.5)]);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, date);
        assert_eq!(points[0].mean_price, 35.5);
    }

    #[test]
    fn test_points_come_out_in_chronological_order() {
        let march = NaiveDate::from_ymd_opt(2013, 3, 1).unwrap();
        let january = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
        let august = NaiveDate::from_ymd_opt(2012, 8, 1).unwrap();

        let points =
            mean_price_by_date(&[record(march, 40.0), record(january, 30.0), record(august, 20.0)]);

        let dates: Vec<_> = points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![august, january, march]);
    }

    #[test]
    fn test_empty_input_yields_no_points() {
        assert!(mean_price_by_date(&[]).is_empty());
    }
}
