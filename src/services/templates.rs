//! Wheel template services.

use crate::domain::auth::Principal;
use crate::domain::template::WheelTemplate;
use crate::domain::types::RecordId;
use crate::forms::templates::{AddTemplateForm, UpdateTemplateForm};
use crate::repository::{TemplateReader, TemplateWriter};
use crate::services::{ServiceError, ServiceResult, require_admin};

fn parse_id(id: &str) -> ServiceResult<RecordId> {
    RecordId::parse(id).map_err(|_| ServiceError::NotFound)
}

/// List the full template collection.
pub fn list_templates<R: TemplateReader>(
    _principal: &Principal,
    repo: &R,
) -> ServiceResult<Vec<WheelTemplate>> {
    Ok(repo.list_templates()?)
}

/// Fetch one template by id.
pub fn get_template<R: TemplateReader>(
    id: &str,
    _principal: &Principal,
    repo: &R,
) -> ServiceResult<WheelTemplate> {
    repo.get_template_by_id(parse_id(id)?)?
        .ok_or(ServiceError::NotFound)
}

/// Create a template from a validated form.
pub fn create_template<R: TemplateWriter>(
    form: AddTemplateForm,
    principal: &Principal,
    repo: &R,
) -> ServiceResult<WheelTemplate> {
    require_admin(principal)?;
    let new = form.into_new_template()?;
    Ok(repo.create_template(new, Some(&principal.username))?)
}

/// Merge a partial update over a template.
pub fn update_template<R: TemplateWriter>(
    id: &str,
    form: UpdateTemplateForm,
    principal: &Principal,
    repo: &R,
) -> ServiceResult<WheelTemplate> {
    require_admin(principal)?;
    let id = parse_id(id)?;
    let patch = form.into_patch()?;
    Ok(repo.update_template(id, patch, Some(&principal.username))?)
}

/// Delete a template, returning the removed record as confirmation.
pub fn delete_template<R: TemplateWriter>(
    id: &str,
    principal: &Principal,
    repo: &R,
) -> ServiceResult<WheelTemplate> {
    require_admin(principal)?;
    Ok(repo.delete_template(parse_id(id)?)?)
}
