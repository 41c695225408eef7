//! Wheel input forms.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::types::Price;
use crate::domain::wheel::{
    NewWheel, Sale, WheelCategory, WheelCondition, WheelPatch, WheelStatus,
};
use crate::forms::{add_error, normalize};

fn parse_condition(
    raw: Option<&str>,
    errors: &mut ValidationErrors,
) -> Option<WheelCondition> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match WheelCondition::try_from(raw) {
        Ok(condition) => Some(condition),
        Err(e) => {
            add_error(errors, "condition", "condition", e.to_string());
            None
        }
    }
}

fn parse_category(raw: Option<&str>, errors: &mut ValidationErrors) -> Option<WheelCategory> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match WheelCategory::from_key(raw) {
        Ok(category) => Some(category),
        Err(e) => {
            add_error(errors, "category", "category", e.to_string());
            None
        }
    }
}

/// Parse a status label for a generic create/update. `Sold` is deliberately
/// not accepted here: the mark-sold operation is the only path that records
/// a sale.
fn parse_status(raw: Option<&str>, errors: &mut ValidationErrors) -> Option<WheelStatus> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if raw == "Sold" {
        add_error(
            errors,
            "status",
            "status",
            "wheels are sold via the mark-sold operation, not a status edit",
        );
        return None;
    }
    match WheelStatus::parse_unsold(raw) {
        Ok(status) => Some(status),
        Err(e) => {
            add_error(errors, "status", "status", e.to_string());
            None
        }
    }
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddWheelForm {
    pub sku: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "year is required"))]
    pub year: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "make is required"))]
    pub make: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    pub trim: Option<String>,
    pub size: Option<String>,
    pub bolt_pattern: Option<String>,
    pub offset: Option<String>,
    pub oem_part: Option<String>,
    pub condition: Option<String>,
    pub price: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    #[validate(length(max = 500, message = "notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

impl AddWheelForm {
    /// Validate and convert into a creation payload. Defaults are applied
    /// here: condition Good, status Available, category UNKNOWN, price zero,
    /// SKU generated downstream when absent.
    pub fn into_new_wheel(self) -> Result<NewWheel, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        let condition = parse_condition(self.condition.as_deref(), &mut errors);
        let category = parse_category(self.category.as_deref(), &mut errors);
        let status = parse_status(self.status.as_deref(), &mut errors);
        let price = match self.price.as_deref() {
            None => Price::ZERO,
            Some(raw) => Price::parse(raw, "price").unwrap_or_else(|e| {
                add_error(&mut errors, "price", "price", e.to_string());
                Price::ZERO
            }),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewWheel {
            sku: normalize(self.sku),
            year: self.year.trim().to_string(),
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            trim: normalize(self.trim),
            size: normalize(self.size),
            bolt_pattern: normalize(self.bolt_pattern),
            offset: normalize(self.offset),
            oem_part: normalize(self.oem_part),
            condition: condition.unwrap_or_default(),
            price,
            status: status.unwrap_or_default(),
            category: category.unwrap_or_default(),
            subcategory: normalize(self.subcategory),
            notes: normalize(self.notes),
            images: Vec::new(),
        })
    }
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWheelForm {
    pub sku: Option<String>,
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub size: Option<String>,
    pub bolt_pattern: Option<String>,
    pub offset: Option<String>,
    pub oem_part: Option<String>,
    pub condition: Option<String>,
    pub price: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    #[validate(length(max = 500, message = "notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

impl UpdateWheelForm {
    /// Validate and convert into a partial update. Absent fields are
    /// retained on the record; images are never touched by this form.
    pub fn into_patch(self) -> Result<WheelPatch, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        let condition = parse_condition(self.condition.as_deref(), &mut errors);
        let category = parse_category(self.category.as_deref(), &mut errors);
        let status = parse_status(self.status.as_deref(), &mut errors);
        let price = self.price.as_deref().map(|raw| {
            Price::parse(raw, "price").unwrap_or_else(|e| {
                add_error(&mut errors, "price", "price", e.to_string());
                Price::ZERO
            })
        });
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(WheelPatch {
            sku: normalize(self.sku),
            year: normalize(self.year),
            make: normalize(self.make),
            model: normalize(self.model),
            trim: normalize(self.trim),
            size: normalize(self.size),
            bolt_pattern: normalize(self.bolt_pattern),
            offset: normalize(self.offset),
            oem_part: normalize(self.oem_part),
            condition,
            price,
            status,
            category,
            subcategory: normalize(self.subcategory),
            notes: normalize(self.notes),
            append_images: Vec::new(),
        })
    }
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarkSoldForm {
    pub sold_price: Option<String>,
    pub sold_at: Option<DateTime<Utc>>,
    pub sold_to: Option<String>,
    #[validate(length(max = 500, message = "sold notes must be at most 500 characters"))]
    pub sold_notes: Option<String>,
}

impl MarkSoldForm {
    /// Validate and convert into a sale payload. The sale price is required
    /// and non-negative; the sale time defaults to now.
    pub fn into_sale(self) -> Result<Sale, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        let price = match self.sold_price.as_deref().map(str::trim) {
            None | Some("") => {
                add_error(
                    &mut errors,
                    "sold_price",
                    "required",
                    "sold price is required",
                );
                Price::ZERO
            }
            Some(raw) => Price::parse(raw, "soldPrice").unwrap_or_else(|e| {
                add_error(&mut errors, "sold_price", "sold_price", e.to_string());
                Price::ZERO
            }),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Sale {
            price,
            at: self.sold_at.unwrap_or_else(Utc::now),
            to: normalize(self.sold_to),
            notes: normalize(self.sold_notes),
        })
    }
}
