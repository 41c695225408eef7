//! OEM part services.

use crate::domain::auth::Principal;
use crate::domain::part::OemPart;
use crate::domain::types::RecordId;
use crate::forms::parts::{AddOemPartForm, UpdateOemPartForm};
use crate::repository::{OemPartReader, OemPartWriter};
use crate::services::{ServiceError, ServiceResult, require_admin};

fn parse_id(id: &str) -> ServiceResult<RecordId> {
    RecordId::parse(id).map_err(|_| ServiceError::NotFound)
}

/// List the full part collection.
pub fn list_parts<R: OemPartReader>(_principal: &Principal, repo: &R) -> ServiceResult<Vec<OemPart>> {
    Ok(repo.list_parts()?)
}

/// Fetch one part by id.
pub fn get_part<R: OemPartReader>(
    id: &str,
    _principal: &Principal,
    repo: &R,
) -> ServiceResult<OemPart> {
    repo.get_part_by_id(parse_id(id)?)?
        .ok_or(ServiceError::NotFound)
}

/// Create a part from a validated form.
pub fn create_part<R: OemPartWriter>(
    form: AddOemPartForm,
    principal: &Principal,
    repo: &R,
) -> ServiceResult<OemPart> {
    require_admin(principal)?;
    let new = form.into_new_part()?;
    Ok(repo.create_part(new, Some(&principal.username))?)
}

/// Merge a partial update over a part.
pub fn update_part<R: OemPartWriter>(
    id: &str,
    form: UpdateOemPartForm,
    principal: &Principal,
    repo: &R,
) -> ServiceResult<OemPart> {
    require_admin(principal)?;
    let id = parse_id(id)?;
    let patch = form.into_patch()?;
    Ok(repo.update_part(id, patch, Some(&principal.username))?)
}

/// Delete a part, returning the removed record as confirmation.
pub fn delete_part<R: OemPartWriter>(
    id: &str,
    principal: &Principal,
    repo: &R,
) -> ServiceResult<OemPart> {
    require_admin(principal)?;
    Ok(repo.delete_part(parse_id(id)?)?)
}
