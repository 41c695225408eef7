//! Category and status statistics over the wheel collection.
//!
//! Computed fresh from the materialized collection on every call rather than
//! incrementally maintained, so the numbers can never drift from the records
//! they summarize.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::auth::Principal;
use crate::domain::wheel::{Wheel, WheelCategory, WheelStatus};
use crate::repository::WheelReader;
use crate::services::ServiceResult;

/// Count and listed-price sum for one bucket.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Bucket {
    pub count: usize,
    pub value: Decimal,
}

/// Aggregates over sold wheels, based on the recorded sale price.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SoldStats {
    pub count: usize,
    pub total_revenue: Decimal,
    pub average_price: Decimal,
}

/// Derived statistics over the current wheel collection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub by_category: HashMap<WheelCategory, Bucket>,
    pub by_status: HashMap<String, Bucket>,
    pub total_wheels: usize,
    pub total_value: Decimal,
    pub available_count: usize,
    pub sold: SoldStats,
}

/// Single pass over the collection.
///
/// Listed prices feed the category/status buckets and the available-stock
/// value; sale prices feed the revenue figures. The average sale price is 0
/// when nothing has been sold.
pub fn compute_stats(wheels: &[Wheel]) -> CategoryStats {
    let mut stats = CategoryStats {
        total_wheels: wheels.len(),
        ..CategoryStats::default()
    };
    for wheel in wheels {
        let price = wheel.price.get();
        let by_category = stats.by_category.entry(wheel.category).or_default();
        by_category.count += 1;
        by_category.value += price;
        let by_status = stats
            .by_status
            .entry(wheel.status.label().to_string())
            .or_default();
        by_status.count += 1;
        by_status.value += price;
        match &wheel.status {
            WheelStatus::Sold(sale) => {
                stats.sold.count += 1;
                stats.sold.total_revenue += sale.price.get();
            }
            WheelStatus::Available => {
                stats.available_count += 1;
                stats.total_value += price;
            }
            WheelStatus::Reserved | WheelStatus::Damaged => {}
        }
    }
    if stats.sold.count > 0 {
        stats.sold.average_price = stats.sold.total_revenue / Decimal::from(stats.sold.count);
    }
    stats
}

/// Load the wheel collection and compute its statistics.
pub fn category_stats<R: WheelReader>(
    _principal: &Principal,
    repo: &R,
) -> ServiceResult<CategoryStats> {
    Ok(compute_stats(&repo.list_wheels()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Price;
    use crate::domain::wheel::{NewWheel, Sale};
    use chrono::Utc;

    fn wheel(category: WheelCategory, price: &str, status: WheelStatus) -> Wheel {
        let mut wheel = Wheel::create(
            NewWheel {
                year: "2024".into(),
                make: "Subaru".into(),
                model: "Outback".into(),
                price: Price::parse(price, "price").unwrap(),
                category,
                ..NewWheel::default()
            },
            None,
        );
        wheel.status = status;
        wheel
    }

    fn sold(price: &str) -> WheelStatus {
        WheelStatus::Sold(Sale {
            price: Price::parse(price, "soldPrice").unwrap(),
            at: Utc::now(),
            to: None,
            notes: None,
        })
    }

    #[test]
    fn documented_three_wheel_scenario() {
        let wheels = vec![
            wheel(WheelCategory::Oem, "100", WheelStatus::Available),
            wheel(WheelCategory::Oem, "150", WheelStatus::Available),
            wheel(WheelCategory::Aftermarket, "200", sold("180")),
        ];
        let stats = compute_stats(&wheels);
        assert_eq!(stats.total_wheels, 3);
        assert_eq!(stats.by_category[&WheelCategory::Oem].count, 2);
        assert_eq!(stats.by_category[&WheelCategory::Oem].value, Decimal::from(250));
        assert_eq!(stats.by_category[&WheelCategory::Aftermarket].count, 1);
        assert_eq!(
            stats.by_category[&WheelCategory::Aftermarket].value,
            Decimal::from(200)
        );
        assert_eq!(stats.by_status["Available"].count, 2);
        assert_eq!(stats.by_status["Sold"].count, 1);
        assert_eq!(stats.total_value, Decimal::from(250));
        assert_eq!(stats.available_count, 2);
        assert_eq!(stats.sold.count, 1);
        assert_eq!(stats.sold.total_revenue, Decimal::from(180));
        assert_eq!(stats.sold.average_price, Decimal::from(180));
    }

    #[test]
    fn average_price_is_zero_when_nothing_sold() {
        let stats = compute_stats(&[wheel(WheelCategory::Oem, "100", WheelStatus::Reserved)]);
        assert_eq!(stats.sold.count, 0);
        assert_eq!(stats.sold.average_price, Decimal::ZERO);
        assert_eq!(stats.available_count, 0);
        assert_eq!(stats.total_value, Decimal::ZERO);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let wheels = vec![
            wheel(WheelCategory::Winter, "80", WheelStatus::Available),
            wheel(WheelCategory::Unknown, "60", sold("55")),
        ];
        assert_eq!(compute_stats(&wheels), compute_stats(&wheels));
    }
}
