//! Flat-file OEM part repository.

use crate::domain::part::{NewOemPart, OemPart, OemPartPatch};
use crate::domain::types::RecordId;
use crate::models::part::StoredOemPart;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::store::Slot;
use crate::repository::{JsonRepository, OemPartReader, OemPartWriter};

impl JsonRepository {
    fn with_parts<F>(&self, mutate: F) -> RepositoryResult<OemPart>
    where
        F: FnOnce(&mut Vec<OemPart>) -> RepositoryResult<OemPart>,
    {
        let store = self.store();
        let _guard = store.guard(Slot::OemParts);
        let stored: Vec<StoredOemPart> = store.load(Slot::OemParts)?;
        let mut parts: Vec<OemPart> = stored.into_iter().map(OemPart::from).collect();
        let result = mutate(&mut parts)?;
        let stored: Vec<StoredOemPart> = parts.into_iter().map(StoredOemPart::from).collect();
        store.save(Slot::OemParts, &stored)?;
        Ok(result)
    }
}

impl OemPartReader for JsonRepository {
    fn list_parts(&self) -> RepositoryResult<Vec<OemPart>> {
        let stored: Vec<StoredOemPart> = self.store().load(Slot::OemParts)?;
        Ok(stored.into_iter().map(OemPart::from).collect())
    }

    fn get_part_by_id(&self, id: RecordId) -> RepositoryResult<Option<OemPart>> {
        Ok(self.list_parts()?.into_iter().find(|p| p.id == id))
    }
}

impl OemPartWriter for JsonRepository {
    fn create_part(&self, new: NewOemPart, by: Option<&str>) -> RepositoryResult<OemPart> {
        self.with_parts(|parts| {
            let part = OemPart::create(new, by);
            parts.push(part.clone());
            Ok(part)
        })
    }

    fn update_part(
        &self,
        id: RecordId,
        patch: OemPartPatch,
        by: Option<&str>,
    ) -> RepositoryResult<OemPart> {
        self.with_parts(|parts| {
            let part = parts
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(RepositoryError::NotFound)?;
            part.apply(patch);
            part.touch(by);
            Ok(part.clone())
        })
    }

    fn delete_part(&self, id: RecordId) -> RepositoryResult<OemPart> {
        self.with_parts(|parts| {
            let position = parts
                .iter()
                .position(|p| p.id == id)
                .ok_or(RepositoryError::NotFound)?;
            Ok(parts.remove(position))
        })
    }
}
