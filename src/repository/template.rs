//! Flat-file wheel template repository.

use crate::domain::template::{NewWheelTemplate, WheelTemplate, WheelTemplatePatch};
use crate::domain::types::RecordId;
use crate::models::template::StoredWheelTemplate;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::store::Slot;
use crate::repository::{JsonRepository, TemplateReader, TemplateWriter};

impl JsonRepository {
    fn with_templates<F>(&self, mutate: F) -> RepositoryResult<WheelTemplate>
    where
        F: FnOnce(&mut Vec<WheelTemplate>) -> RepositoryResult<WheelTemplate>,
    {
        let store = self.store();
        let _guard = store.guard(Slot::Templates);
        let stored: Vec<StoredWheelTemplate> = store.load(Slot::Templates)?;
        let mut templates: Vec<WheelTemplate> =
            stored.into_iter().map(WheelTemplate::from).collect();
        let result = mutate(&mut templates)?;
        let stored: Vec<StoredWheelTemplate> = templates
            .into_iter()
            .map(StoredWheelTemplate::from)
            .collect();
        store.save(Slot::Templates, &stored)?;
        Ok(result)
    }
}

impl TemplateReader for JsonRepository {
    fn list_templates(&self) -> RepositoryResult<Vec<WheelTemplate>> {
        let stored: Vec<StoredWheelTemplate> = self.store().load(Slot::Templates)?;
        Ok(stored.into_iter().map(WheelTemplate::from).collect())
    }

    fn get_template_by_id(&self, id: RecordId) -> RepositoryResult<Option<WheelTemplate>> {
        Ok(self.list_templates()?.into_iter().find(|t| t.id == id))
    }
}

impl TemplateWriter for JsonRepository {
    fn create_template(
        &self,
        new: NewWheelTemplate,
        by: Option<&str>,
    ) -> RepositoryResult<WheelTemplate> {
        self.with_templates(|templates| {
            let template = WheelTemplate::create(new, by);
            templates.push(template.clone());
            Ok(template)
        })
    }

    fn update_template(
        &self,
        id: RecordId,
        patch: WheelTemplatePatch,
        by: Option<&str>,
    ) -> RepositoryResult<WheelTemplate> {
        self.with_templates(|templates| {
            let template = templates
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(RepositoryError::NotFound)?;
            template.apply(patch);
            template.touch(by);
            Ok(template.clone())
        })
    }

    fn delete_template(&self, id: RecordId) -> RepositoryResult<WheelTemplate> {
        self.with_templates(|templates| {
            let position = templates
                .iter()
                .position(|t| t.id == id)
                .ok_or(RepositoryError::NotFound)?;
            Ok(templates.remove(position))
        })
    }
}
