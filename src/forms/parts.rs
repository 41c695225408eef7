//! OEM part input forms.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::part::{NewOemPart, OemPartPatch};
use crate::domain::types::Price;
use crate::forms::{add_error, normalize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddOemPartForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "part number must be 1-50 characters"))]
    pub part_number: String,
    #[validate(length(max = 50, message = "OEM part number must be at most 50 characters"))]
    pub oem_part_number: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "part name must be 1-100 characters"))]
    pub part_name: String,
    #[validate(length(max = 50, message = "category must be at most 50 characters"))]
    pub category: Option<String>,
    pub quantity: Option<u32>,
    #[validate(length(max = 100, message = "location must be at most 100 characters"))]
    pub location: Option<String>,
    pub price: Option<String>,
    #[validate(length(max = 500, message = "notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

impl AddOemPartForm {
    /// Validate and convert into a creation payload, reporting every
    /// offending field.
    pub fn into_new_part(self) -> Result<NewOemPart, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        if self.quantity.is_none() {
            add_error(&mut errors, "quantity", "required", "quantity is required");
        }
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
        Ok(NewOemPart {
            part_number: self.part_number.trim().to_string(),
            oem_part_number: normalize(self.oem_part_number),
            part_name: self.part_name.trim().to_string(),
            category: normalize(self.category),
            quantity: self.quantity.unwrap_or_default(),
            location: normalize(self.location),
            price,
            notes: normalize(self.notes),
        })
    }
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOemPartForm {
    #[validate(length(min = 1, max = 50, message = "part number must be 1-50 characters"))]
    pub part_number: Option<String>,
    #[validate(length(max = 50, message = "OEM part number must be at most 50 characters"))]
    pub oem_part_number: Option<String>,
    #[validate(length(min = 1, max = 100, message = "part name must be 1-100 characters"))]
    pub part_name: Option<String>,
    #[validate(length(max = 50, message = "category must be at most 50 characters"))]
    pub category: Option<String>,
    pub quantity: Option<u32>,
    #[validate(length(max = 100, message = "location must be at most 100 characters"))]
    pub location: Option<String>,
    pub price: Option<String>,
    #[validate(length(max = 500, message = "notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

impl UpdateOemPartForm {
    /// Validate and convert into a partial update.
    pub fn into_patch(self) -> Result<OemPartPatch, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        let price = self.price.as_deref().map(|raw| {
            Price::parse(raw, "price").unwrap_or_else(|e| {
                add_error(&mut errors, "price", "price", e.to_string());
                Price::ZERO
            })
        });
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(OemPartPatch {
            part_number: self.part_number,
            oem_part_number: self.oem_part_number,
            part_name: self.part_name,
            category: self.category,
            quantity: self.quantity,
            location: self.location,
            price,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_every_offending_field_at_once() {
        let form = AddOemPartForm {
            part_number: String::new(),
            oem_part_number: None,
            part_name: String::new(),
            category: None,
            quantity: None,
            location: None,
            price: Some("-5".into()),
            notes: None,
        };
        let errors = form.into_new_part().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("part_number"));
        assert!(fields.contains_key("part_name"));
        assert!(fields.contains_key("quantity"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn valid_form_converts() {
        let form = AddOemPartForm {
            part_number: "20700AE01A".into(),
            oem_part_number: Some("20700AE01A".into()),
            part_name: "Strut mount".into(),
            category: Some("Suspension".into()),
            quantity: Some(4),
            location: None,
            price: Some("35.00".into()),
            notes: Some("  ".into()),
        };
        let part = form.into_new_part().unwrap();
        assert_eq!(part.quantity, 4);
        assert_eq!(part.price.to_string(), "35.00");
        assert_eq!(part.notes, None);
    }
}
