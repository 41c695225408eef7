//! Reusable wheel templates.
//!
//! A template is a copy-by-value prototype for new wheel forms; nothing links
//! it to the wheels created from it.

use chrono::{DateTime, Utc};

use crate::domain::types::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub struct WheelTemplate {
    pub id: RecordId,
    pub name: String,
    pub year: String,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
    pub size: Option<String>,
    pub bolt_pattern: Option<String>,
    pub offset: Option<String>,
    pub oem_part: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

/// Information required to create a new [`WheelTemplate`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewWheelTemplate {
    pub name: String,
    pub year: String,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
    pub size: Option<String>,
    pub bolt_pattern: Option<String>,
    pub offset: Option<String>,
    pub oem_part: Option<String>,
}

/// Partial update over a [`WheelTemplate`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelTemplatePatch {
    pub name: Option<String>,
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub size: Option<String>,
    pub bolt_pattern: Option<String>,
    pub offset: Option<String>,
    pub oem_part: Option<String>,
}

impl WheelTemplate {
    /// Materialize a new record with store-assigned identity and audit stamp.
    pub fn create(new: NewWheelTemplate, created_by: Option<&str>) -> Self {
        Self {
            id: RecordId::generate(),
            name: new.name,
            year: new.year,
            make: new.make,
            model: new.model,
            trim: new.trim,
            size: new.size,
            bolt_pattern: new.bolt_pattern,
            offset: new.offset,
            oem_part: new.oem_part,
            created_at: Utc::now(),
            created_by: created_by.map(str::to_string),
            updated_at: None,
            updated_by: None,
        }
    }

    /// Shallow-merge a patch over this record.
    pub fn apply(&mut self, patch: WheelTemplatePatch) {
        if let Some(name) = patch.name {
            self.name = name;
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
    }

    /// Stamp update metadata.
    pub fn touch(&mut self, updated_by: Option<&str>) {
        self.updated_at = Some(Utc::now());
        self.updated_by = updated_by.map(str::to_string);
    }
}
