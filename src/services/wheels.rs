//! Wheel lifecycle services.

use crate::domain::auth::Principal;
use crate::domain::image::ImageRef;
use crate::domain::types::RecordId;
use crate::domain::wheel::Wheel;
use crate::forms::wheels::{AddWheelForm, MarkSoldForm, UpdateWheelForm};
use crate::repository::{WheelReader, WheelWriter};
use crate::services::images::{ImageStore, ImageUpload};
use crate::services::{ServiceError, ServiceResult, require_admin};

fn parse_id(id: &str) -> ServiceResult<RecordId> {
    RecordId::parse(id).map_err(|_| ServiceError::NotFound)
}

/// List the full wheel collection.
pub fn list_wheels<R: WheelReader>(_principal: &Principal, repo: &R) -> ServiceResult<Vec<Wheel>> {
    Ok(repo.list_wheels()?)
}

/// Fetch one wheel by id.
pub fn get_wheel<R: WheelReader>(id: &str, _principal: &Principal, repo: &R) -> ServiceResult<Wheel> {
    repo.get_wheel_by_id(parse_id(id)?)?
        .ok_or(ServiceError::NotFound)
}

/// Create a wheel, storing any uploaded images first.
///
/// The SKU is generated when the form leaves it blank; condition, status and
/// category fall back to their documented defaults.
pub fn create_wheel<R: WheelWriter>(
    form: AddWheelForm,
    uploads: Vec<ImageUpload>,
    principal: &Principal,
    repo: &R,
    images: &ImageStore,
) -> ServiceResult<Wheel> {
    require_admin(principal)?;
    let mut new = form.into_new_wheel()?;
    let stored = images.store_all(&uploads)?;
    new.images = stored.clone();
    match repo.create_wheel(new, Some(&principal.username)) {
        Ok(wheel) => Ok(wheel),
        Err(e) => {
            // The record never made it to disk; drop the orphaned blobs.
            images.delete_all(&stored);
            Err(e.into())
        }
    }
}

/// Merge a partial update over a wheel. Newly uploaded images are appended
/// to the existing list, never replacing it.
pub fn update_wheel<R: WheelWriter>(
    id: &str,
    form: UpdateWheelForm,
    uploads: Vec<ImageUpload>,
    principal: &Principal,
    repo: &R,
    images: &ImageStore,
) -> ServiceResult<Wheel> {
    require_admin(principal)?;
    let id = parse_id(id)?;
    let mut patch = form.into_patch()?;
    let stored = images.store_all(&uploads)?;
    patch.append_images = stored.clone();
    match repo.update_wheel(id, patch, Some(&principal.username)) {
        Ok(wheel) => Ok(wheel),
        Err(e) => {
            images.delete_all(&stored);
            Err(e.into())
        }
    }
}

/// Delete a wheel and cascade to its image blobs.
///
/// Blob deletion is best effort: a blob that is already missing, or that
/// fails to unlink, never blocks the record deletion.
pub fn delete_wheel<R: WheelWriter>(
    id: &str,
    principal: &Principal,
    repo: &R,
    images: &ImageStore,
) -> ServiceResult<Wheel> {
    require_admin(principal)?;
    let wheel = repo.delete_wheel(parse_id(id)?)?;
    images.delete_all(&wheel.images);
    Ok(wheel)
}

/// Remove one image from a wheel and delete its blob.
pub fn detach_wheel_image<R: WheelWriter>(
    id: &str,
    image_ref: &str,
    principal: &Principal,
    repo: &R,
    images: &ImageStore,
) -> ServiceResult<Wheel> {
    require_admin(principal)?;
    let id = parse_id(id)?;
    let image = ImageRef::parse(image_ref).map_err(|_| ServiceError::InvalidPath)?;
    let wheel = repo.detach_wheel_image(id, &image, Some(&principal.username))?;
    if let Err(e) = images.delete(&image) {
        log::error!("failed to delete detached image blob {image}: {e}");
    }
    Ok(wheel)
}

/// Mark a wheel as sold.
///
/// This is the only path into the `Sold` state: the status flip and the sale
/// payload (price, time, buyer, notes) are persisted in a single update, so
/// a reader never sees one without the other.
pub fn mark_wheel_sold<R: WheelReader + WheelWriter>(
    id: &str,
    form: MarkSoldForm,
    principal: &Principal,
    repo: &R,
) -> ServiceResult<Wheel> {
    require_admin(principal)?;
    let id = parse_id(id)?;
    if repo.get_wheel_by_id(id)?.is_none() {
        return Err(ServiceError::NotFound);
    }
    let sale = form.into_sale()?;
    Ok(repo.mark_wheel_sold(id, sale, Some(&principal.username))?)
}
