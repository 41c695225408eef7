//! Wheel template input forms.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::template::{NewWheelTemplate, WheelTemplatePatch};
use crate::forms::normalize;

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddTemplateForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
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
}

impl AddTemplateForm {
    /// Validate and convert into a creation payload.
    pub fn into_new_template(self) -> Result<NewWheelTemplate, ValidationErrors> {
        self.validate()?;
        Ok(NewWheelTemplate {
            name: self.name.trim().to_string(),
            year: self.year.trim().to_string(),
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            trim: normalize(self.trim),
            size: normalize(self.size),
            bolt_pattern: normalize(self.bolt_pattern),
            offset: normalize(self.offset),
            oem_part: normalize(self.oem_part),
        })
    }
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateForm {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "year cannot be empty"))]
    pub year: Option<String>,
    #[validate(length(min = 1, message = "make cannot be empty"))]
    pub make: Option<String>,
    #[validate(length(min = 1, message = "model cannot be empty"))]
    pub model: Option<String>,
    pub trim: Option<String>,
    pub size: Option<String>,
    pub bolt_pattern: Option<String>,
    pub offset: Option<String>,
    pub oem_part: Option<String>,
}

impl UpdateTemplateForm {
    /// Validate and convert into a partial update.
    pub fn into_patch(self) -> Result<WheelTemplatePatch, ValidationErrors> {
        self.validate()?;
        Ok(WheelTemplatePatch {
            name: self.name,
            year: self.year,
            make: self.make,
            model: self.model,
            trim: normalize(self.trim),
            size: normalize(self.size),
            bolt_pattern: normalize(self.bolt_pattern),
            offset: normalize(self.offset),
            oem_part: normalize(self.oem_part),
        })
    }
}
