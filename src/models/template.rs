//! On-disk wheel template records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::template::WheelTemplate;

/// Persisted layout of a [`WheelTemplate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredWheelTemplate {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
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
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl From<StoredWheelTemplate> for WheelTemplate {
    fn from(stored: StoredWheelTemplate) -> Self {
        Self {
            id: stored.id.into(),
            name: stored.name,
            year: stored.year,
            make: stored.make,
            model: stored.model,
            trim: stored.trim,
            size: stored.size,
            bolt_pattern: stored.bolt_pattern,
            offset: stored.offset,
            oem_part: stored.oem_part,
            created_at: stored.created_at,
            created_by: stored.created_by,
            updated_at: stored.updated_at,
            updated_by: stored.updated_by,
        }
    }
}

impl From<WheelTemplate> for StoredWheelTemplate {
    fn from(template: WheelTemplate) -> Self {
        Self {
            id: template.id.as_uuid(),
            name: template.name,
            year: template.year,
            make: template.make,
            model: template.model,
            trim: template.trim,
            size: template.size,
            bolt_pattern: template.bolt_pattern,
            offset: template.offset,
            oem_part: template.oem_part,
            created_at: template.created_at,
            created_by: template.created_by,
            updated_at: template.updated_at,
            updated_by: template.updated_by,
        }
    }
}
