//! The OEM part entity.

use chrono::{DateTime, Utc};

use crate::domain::types::{Price, RecordId};

/// An OEM part on the shelf. Part numbers are not unique; duplicates are
/// legitimate (same part stocked in several locations).
#[derive(Debug, Clone, PartialEq)]
pub struct OemPart {
    pub id: RecordId,
    pub part_number: String,
    pub oem_part_number: Option<String>,
    pub part_name: String,
    pub category: Option<String>,
    pub quantity: u32,
    pub location: Option<String>,
    pub price: Price,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

/// Information required to create a new [`OemPart`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewOemPart {
    pub part_number: String,
    pub oem_part_number: Option<String>,
    pub part_name: String,
    pub category: Option<String>,
    pub quantity: u32,
    pub location: Option<String>,
    pub price: Price,
    pub notes: Option<String>,
}

/// Partial update over an [`OemPart`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OemPartPatch {
    pub part_number: Option<String>,
    pub oem_part_number: Option<String>,
    pub part_name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub location: Option<String>,
    pub price: Option<Price>,
    pub notes: Option<String>,
}

impl OemPart {
    /// Materialize a new record with store-assigned identity and audit stamp.
    pub fn create(new: NewOemPart, created_by: Option<&str>) -> Self {
        Self {
            id: RecordId::generate(),
            part_number: new.part_number,
            oem_part_number: new.oem_part_number,
            part_name: new.part_name,
            category: new.category,
            quantity: new.quantity,
            location: new.location,
            price: new.price,
            notes: new.notes,
            created_at: Utc::now(),
            created_by: created_by.map(str::to_string),
            updated_at: None,
            updated_by: None,
        }
    }

    /// Shallow-merge a patch over this record.
    pub fn apply(&mut self, patch: OemPartPatch) {
        if let Some(part_number) = patch.part_number {
            self.part_number = part_number;
        }
        if let Some(oem_part_number) = patch.oem_part_number {
            self.oem_part_number = Some(oem_part_number);
        }
        if let Some(part_name) = patch.part_name {
            self.part_name = part_name;
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }

    /// Stamp update metadata.
    pub fn touch(&mut self, updated_by: Option<&str>) {
        self.updated_at = Some(Utc::now());
        self.updated_by = updated_by.map(str::to_string);
    }
}
