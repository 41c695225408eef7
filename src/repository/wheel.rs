//! Flat-file wheel repository.

use crate::domain::image::ImageRef;
use crate::domain::types::RecordId;
use crate::domain::wheel::{NewWheel, Sale, Wheel, WheelPatch, WheelStatus};
use crate::models::wheel::StoredWheel;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::store::Slot;
use crate::repository::{JsonRepository, WheelReader, WheelWriter};

impl JsonRepository {
    /// Load the wheel slot and run `mutate` on the materialized collection
    /// under the slot lock, persisting the result. `mutate` returns the
    /// record to hand back to the caller.
    fn with_wheels<F>(&self, mutate: F) -> RepositoryResult<Wheel>
    where
        F: FnOnce(&mut Vec<Wheel>) -> RepositoryResult<Wheel>,
    {
        let store = self.store();
        let _guard = store.guard(Slot::Wheels);
        let stored: Vec<StoredWheel> = store.load(Slot::Wheels)?;
        let mut wheels = stored
            .into_iter()
            .map(Wheel::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let result = mutate(&mut wheels)?;
        let stored: Vec<StoredWheel> = wheels.into_iter().map(StoredWheel::from).collect();
        store.save(Slot::Wheels, &stored)?;
        Ok(result)
    }
}

impl WheelReader for JsonRepository {
    fn list_wheels(&self) -> RepositoryResult<Vec<Wheel>> {
        let stored: Vec<StoredWheel> = self.store().load(Slot::Wheels)?;
        stored
            .into_iter()
            .map(|s| Wheel::try_from(s).map_err(RepositoryError::from))
            .collect()
    }

    fn get_wheel_by_id(&self, id: RecordId) -> RepositoryResult<Option<Wheel>> {
        Ok(self.list_wheels()?.into_iter().find(|w| w.id == id))
    }
}

impl WheelWriter for JsonRepository {
    fn create_wheel(&self, new: NewWheel, by: Option<&str>) -> RepositoryResult<Wheel> {
        self.with_wheels(|wheels| {
            let wheel = Wheel::create(new, by);
            wheels.push(wheel.clone());
            Ok(wheel)
        })
    }

    fn update_wheel(
        &self,
        id: RecordId,
        patch: WheelPatch,
        by: Option<&str>,
    ) -> RepositoryResult<Wheel> {
        self.with_wheels(|wheels| {
            let wheel = wheels
                .iter_mut()
                .find(|w| w.id == id)
                .ok_or(RepositoryError::NotFound)?;
            wheel.apply(patch);
            wheel.touch(by);
            Ok(wheel.clone())
        })
    }

    fn delete_wheel(&self, id: RecordId) -> RepositoryResult<Wheel> {
        self.with_wheels(|wheels| {
            let position = wheels
                .iter()
                .position(|w| w.id == id)
                .ok_or(RepositoryError::NotFound)?;
            Ok(wheels.remove(position))
        })
    }

    fn mark_wheel_sold(
        &self,
        id: RecordId,
        sale: Sale,
        by: Option<&str>,
    ) -> RepositoryResult<Wheel> {
        self.with_wheels(|wheels| {
            let wheel = wheels
                .iter_mut()
                .find(|w| w.id == id)
                .ok_or(RepositoryError::NotFound)?;
            wheel.status = WheelStatus::Sold(sale);
            wheel.touch(by);
            Ok(wheel.clone())
        })
    }

    fn detach_wheel_image(
        &self,
        id: RecordId,
        image: &ImageRef,
        by: Option<&str>,
    ) -> RepositoryResult<Wheel> {
        self.with_wheels(|wheels| {
            let wheel = wheels
                .iter_mut()
                .find(|w| w.id == id)
                .ok_or(RepositoryError::NotFound)?;
            let position = wheel
                .images
                .iter()
                .position(|i| i == image)
                .ok_or(RepositoryError::NotFound)?;
            wheel.images.remove(position);
            wheel.touch(by);
            Ok(wheel.clone())
        })
    }
}
