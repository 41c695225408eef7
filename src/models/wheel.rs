//! On-disk wheel records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::image::ImageRef;
use crate::domain::types::{Price, TypeConstraintError};
use crate::domain::wheel::{Sale, Wheel, WheelCategory, WheelCondition, WheelStatus};

fn default_condition() -> String {
    WheelCondition::Good.as_str().to_string()
}

fn default_status() -> String {
    "Available".to_string()
}

fn default_category() -> String {
    WheelCategory::Unknown.as_str().to_string()
}

/// Flat persisted layout of a [`Wheel`], matching the legacy `wheels.json`
/// files: the status is a bare label with nullable sale columns beside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredWheel {
    pub id: Uuid,
    pub sku: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bolt_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oem_part: Option<String>,
    #[serde(default = "default_condition")]
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl TryFrom<StoredWheel> for Wheel {
    type Error = TypeConstraintError;

    fn try_from(stored: StoredWheel) -> Result<Self, Self::Error> {
        let status = match stored.status.as_str() {
            "Sold" => {
                let price = stored
                    .sold_price
                    .as_deref()
                    .ok_or(TypeConstraintError::MissingSaleField("soldPrice"))
                    .and_then(|p| Price::parse(p, "soldPrice"))?;
                let at = stored
                    .sold_at
                    .ok_or(TypeConstraintError::MissingSaleField("soldAt"))?;
                WheelStatus::Sold(Sale {
                    price,
                    at,
                    to: stored.sold_to,
                    notes: stored.sold_notes,
                })
            }
            other => WheelStatus::parse_unsold(other)?,
        };
        // Legacy rows may carry free-text categories; those fall back to the
        // UNKNOWN bucket rather than poisoning the whole collection.
        let category =
            WheelCategory::from_key(&stored.category).unwrap_or(WheelCategory::Unknown);
        let images = stored
            .images
            .iter()
            .map(|image| ImageRef::parse(image))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: stored.id.into(),
            sku: stored.sku,
            year: stored.year,
            make: stored.make,
            model: stored.model,
            trim: stored.trim,
            size: stored.size,
            bolt_pattern: stored.bolt_pattern,
            offset: stored.offset,
            oem_part: stored.oem_part,
            condition: WheelCondition::try_from(stored.condition.as_str())?,
            price: Price::lenient(stored.price.as_deref()),
            status,
            images,
            category,
            subcategory: stored.subcategory,
            notes: stored.notes,
            created_at: stored.created_at,
            created_by: stored.created_by,
            updated_at: stored.updated_at,
            updated_by: stored.updated_by,
        })
    }
}

impl From<Wheel> for StoredWheel {
    fn from(wheel: Wheel) -> Self {
        let (sold_at, sold_price, sold_to, sold_notes) = match &wheel.status {
            WheelStatus::Sold(sale) => (
                Some(sale.at),
                Some(sale.price.to_string()),
                sale.to.clone(),
                sale.notes.clone(),
            ),
            _ => (None, None, None, None),
        };
        Self {
            id: wheel.id.as_uuid(),
            sku: wheel.sku,
            year: wheel.year,
            make: wheel.make,
            model: wheel.model,
            trim: wheel.trim,
            size: wheel.size,
            bolt_pattern: wheel.bolt_pattern,
            offset: wheel.offset,
            oem_part: wheel.oem_part,
            condition: wheel.condition.as_str().to_string(),
            price: Some(wheel.price.to_string()),
            status: wheel.status.label().to_string(),
            images: wheel.images.iter().map(|i| i.as_str().to_string()).collect(),
            category: wheel.category.as_str().to_string(),
            subcategory: wheel.subcategory,
            notes: wheel.notes,
            sold_at,
            sold_price,
            sold_to,
            sold_notes,
            created_at: wheel.created_at,
            created_by: wheel.created_by,
            updated_at: wheel.updated_at,
            updated_by: wheel.updated_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wheel::NewWheel;

    #[test]
    fn sold_without_sale_payload_is_rejected() {
        let mut stored = StoredWheel::from(Wheel::create(
            NewWheel {
                year: "2024".into(),
                make: "Subaru".into(),
                model: "Outback".into(),
                ..NewWheel::default()
            },
            None,
        ));
        stored.status = "Sold".to_string();
        assert_eq!(
            Wheel::try_from(stored),
            Err(TypeConstraintError::MissingSaleField("soldPrice"))
        );
    }

    #[test]
    fn unknown_category_falls_back_to_unknown_bucket() {
        let mut stored = StoredWheel::from(Wheel::create(
            NewWheel {
                year: "2024".into(),
                make: "Subaru".into(),
                model: "Outback".into(),
                ..NewWheel::default()
            },
            None,
        ));
        stored.category = "alloy rims".to_string();
        let wheel = Wheel::try_from(stored).unwrap();
        assert_eq!(wheel.category, WheelCategory::Unknown);
    }

    #[test]
    fn legacy_row_with_missing_optionals_deserializes() {
        let raw = format!(
            r#"{{"id":"{}","sku":"SPP-X","createdAt":"2024-01-02T03:04:05Z"}}"#,
            Uuid::new_v4()
        );
        let stored: StoredWheel = serde_json::from_str(&raw).unwrap();
        let wheel = Wheel::try_from(stored).unwrap();
        assert_eq!(wheel.status, WheelStatus::Available);
        assert_eq!(wheel.condition, WheelCondition::Good);
        assert_eq!(wheel.category, WheelCategory::Unknown);
        assert_eq!(wheel.price, Price::ZERO);
        assert!(wheel.images.is_empty());
    }
}
