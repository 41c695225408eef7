//! The wheel entity and its lifecycle types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::image::ImageRef;
use crate::domain::sku;
use crate::domain::types::{Price, RecordId, TypeConstraintError};

/// Physical grade of a wheel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WheelCondition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

impl WheelCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl TryFrom<&str> for WheelCondition {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Excellent" => Ok(Self::Excellent),
            "Good" => Ok(Self::Good),
            "Fair" => Ok(Self::Fair),
            "Poor" => Ok(Self::Poor),
            other => Err(TypeConstraintError::UnknownCondition(other.to_string())),
        }
    }
}

/// Fixed category table. Labels, icons and colors are presentation metadata
/// and stay out of the core; only the key set is modeled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum WheelCategory {
    #[serde(rename = "OEM")]
    Oem,
    #[serde(rename = "AFTERMARKET")]
    Aftermarket,
    #[serde(rename = "WINTER")]
    Winter,
    #[serde(rename = "PERFORMANCE")]
    Performance,
    #[serde(rename = "STEEL")]
    Steel,
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl WheelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oem => "OEM",
            Self::Aftermarket => "AFTERMARKET",
            Self::Winter => "WINTER",
            Self::Performance => "PERFORMANCE",
            Self::Steel => "STEEL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Membership check against the fixed key set.
    pub fn from_key(key: &str) -> Result<Self, TypeConstraintError> {
        match key.trim() {
            "OEM" => Ok(Self::Oem),
            "AFTERMARKET" => Ok(Self::Aftermarket),
            "WINTER" => Ok(Self::Winter),
            "PERFORMANCE" => Ok(Self::Performance),
            "STEEL" => Ok(Self::Steel),
            "UNKNOWN" => Ok(Self::Unknown),
            other => Err(TypeConstraintError::UnknownCategory(other.to_string())),
        }
    }
}

/// Sale payload recorded when a wheel is marked sold.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub price: Price,
    pub at: DateTime<Utc>,
    pub to: Option<String>,
    pub notes: Option<String>,
}

/// Lifecycle state of a wheel.
///
/// `Sold` carries its sale payload, so a sold wheel without sale data is
/// unrepresentable. The only code path producing `Sold` is the mark-sold
/// operation; generic updates are limited to the other three states.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelStatus {
    Available,
    Reserved,
    Damaged,
    Sold(Sale),
}

impl WheelStatus {
    /// Status label as persisted and reported.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Damaged => "Damaged",
            Self::Sold(_) => "Sold",
        }
    }

    pub fn is_sold(&self) -> bool {
        matches!(self, Self::Sold(_))
    }

    /// Parse a non-sold status label, as accepted by generic updates.
    pub fn parse_unsold(value: &str) -> Result<Self, TypeConstraintError> {
        match value.trim() {
            "Available" => Ok(Self::Available),
            "Reserved" => Ok(Self::Reserved),
            "Damaged" => Ok(Self::Damaged),
            other => Err(TypeConstraintError::UnknownStatus(other.to_string())),
        }
    }
}

impl Default for WheelStatus {
    fn default() -> Self {
        Self::Available
    }
}

/// A wheel in stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    pub id: RecordId,
    pub sku: String,
    pub year: String,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
    pub size: Option<String>,
    pub bolt_pattern: Option<String>,
    pub offset: Option<String>,
    pub oem_part: Option<String>,
    pub condition: WheelCondition,
    pub price: Price,
    pub status: WheelStatus,
    pub images: Vec<ImageRef>,
    pub category: WheelCategory,
    pub subcategory: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

/// Information required to create a new [`Wheel`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewWheel {
    /// Caller-supplied SKU; generated when absent or empty.
    pub sku: Option<String>,
    pub year: String,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
    pub size: Option<String>,
    pub bolt_pattern: Option<String>,
    pub offset: Option<String>,
    pub oem_part: Option<String>,
    pub condition: WheelCondition,
    pub price: Price,
    pub status: WheelStatus,
    pub category: WheelCategory,
    pub subcategory: Option<String>,
    pub notes: Option<String>,
    pub images: Vec<ImageRef>,
}

/// Partial update over a [`Wheel`]. Fields left as `None` are retained;
/// `append_images` is additive, never a replacement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelPatch {
    pub sku: Option<String>,
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub size: Option<String>,
    pub bolt_pattern: Option<String>,
    pub offset: Option<String>,
    pub oem_part: Option<String>,
    pub condition: Option<WheelCondition>,
    pub price: Option<Price>,
    pub status: Option<WheelStatus>,
    pub category: Option<WheelCategory>,
    pub subcategory: Option<String>,
    pub notes: Option<String>,
    pub append_images: Vec<ImageRef>,
}

impl Wheel {
    /// Materialize a new record with store-assigned identity and audit stamp.
    pub fn create(new: NewWheel, created_by: Option<&str>) -> Self {
        let sku = match new.sku {
            Some(sku) if !sku.trim().is_empty() => sku.trim().to_string(),
            _ => sku::generate_sku(
                &new.year,
                &new.make,
                &new.model,
                new.size.as_deref().unwrap_or_default(),
                new.bolt_pattern.as_deref().unwrap_or_default(),
            ),
        };
        Self {
            id: RecordId::generate(),
            sku,
            year: new.year,
            make: new.make,
            model: new.model,
            trim: new.trim,
            size: new.size,
            bolt_pattern: new.bolt_pattern,
            offset: new.offset,
            oem_part: new.oem_part,
            condition: new.condition,
            price: new.price,
            status: new.status,
            images: new.images,
            category: new.category,
            subcategory: new.subcategory,
            notes: new.notes,
            created_at: Utc::now(),
            created_by: created_by.map(str::to_string),
            updated_at: None,
            updated_by: None,
        }
    }

    /// Shallow-merge a patch over this record. Supplied fields overwrite,
    /// absent fields are retained, images are appended.
    pub fn apply(&mut self, patch: WheelPatch) {
        if let Some(sku) = patch.sku {
            self.sku = sku;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(make) = patch.make {
            self.make = make;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(trim) = patch.trim {
            self.trim = Some(trim);
        }
        if let Some(size) = patch.size {
            self.size = Some(size);
        }
        if let Some(bolt_pattern) = patch.bolt_pattern {
            self.bolt_pattern = Some(bolt_pattern);
        }
        if let Some(offset) = patch.offset {
            self.offset = Some(offset);
        }
        if let Some(oem_part) = patch.oem_part {
            self.oem_part = Some(oem_part);
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(subcategory) = patch.subcategory {
            self.subcategory = Some(subcategory);
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        self.images.extend(patch.append_images);
    }

    /// Stamp update metadata.
    pub fn touch(&mut self, updated_by: Option<&str>) {
        self.updated_at = Some(Utc::now());
        self.updated_by = updated_by.map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_generates_sku_when_absent() {
        let wheel = Wheel::create(
            NewWheel {
                year: "2024".into(),
                make: "Subaru".into(),
                model: "Outback".into(),
                size: Some("18x7.5".into()),
                bolt_pattern: Some("5x114.3".into()),
                ..NewWheel::default()
            },
            Some("admin"),
        );
        assert!(wheel.sku.starts_with("SPP-2024SUBOUT-187.5-5114.3-"));
        assert_eq!(wheel.status, WheelStatus::Available);
        assert_eq!(wheel.created_by.as_deref(), Some("admin"));
        assert!(wheel.updated_at.is_none());
    }

    #[test]
    fn create_keeps_caller_supplied_sku() {
        let wheel = Wheel::create(
            NewWheel {
                sku: Some("CUSTOM-1".into()),
                year: "2020".into(),
                make: "Subaru".into(),
                model: "BRZ".into(),
                ..NewWheel::default()
            },
            None,
        );
        assert_eq!(wheel.sku, "CUSTOM-1");
    }

    #[test]
    fn apply_merges_and_appends_images() {
        let mut wheel = Wheel::create(
            NewWheel {
                year: "2020".into(),
                make: "Subaru".into(),
                model: "BRZ".into(),
                notes: Some("curb rash".into()),
                images: vec![ImageRef::parse("/uploads/a.jpg").unwrap()],
                ..NewWheel::default()
            },
            None,
        );
        wheel.apply(WheelPatch {
            price: Some(Price::parse("120", "price").unwrap()),
            append_images: vec![ImageRef::parse("/uploads/b.jpg").unwrap()],
            ..WheelPatch::default()
        });
        assert_eq!(wheel.price.to_string(), "120");
        assert_eq!(wheel.notes.as_deref(), Some("curb rash"));
        assert_eq!(wheel.images.len(), 2);
    }
}
