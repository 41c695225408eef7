//! On-disk OEM part records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::part::OemPart;
use crate::domain::types::Price;

/// Persisted layout of an [`OemPart`], matching the legacy `oem-parts.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredOemPart {
    pub id: Uuid,
    #[serde(default)]
    pub part_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oem_part_number: Option<String>,
    #[serde(default)]
    pub part_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl From<StoredOemPart> for OemPart {
    fn from(stored: StoredOemPart) -> Self {
        Self {
            id: stored.id.into(),
            part_number: stored.part_number,
            oem_part_number: stored.oem_part_number,
            part_name: stored.part_name,
            category: stored.category,
            quantity: stored.quantity,
            location: stored.location,
            price: Price::lenient(stored.price.as_deref()),
            notes: stored.notes,
            created_at: stored.created_at,
            created_by: stored.created_by,
            updated_at: stored.updated_at,
            updated_by: stored.updated_by,
        }
    }
}

impl From<OemPart> for StoredOemPart {
    fn from(part: OemPart) -> Self {
        Self {
            id: part.id.as_uuid(),
            part_number: part.part_number,
            oem_part_number: part.oem_part_number,
            part_name: part.part_name,
            category: part.category,
            quantity: part.quantity,
            location: part.location,
            price: Some(part.price.to_string()),
            notes: part.notes,
            created_at: part.created_at,
            created_by: part.created_by,
            updated_at: part.updated_at,
            updated_by: part.updated_by,
        }
    }
}
