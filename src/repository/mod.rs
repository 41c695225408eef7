//! Repository traits and their flat-file implementation.
//!
//! Services are generic over the `*Reader`/`*Writer` traits; the only
//! shipped implementation is [`JsonRepository`], backed by one JSON array
//! file per entity slot.

use std::sync::Arc;

use crate::domain::image::ImageRef;
use crate::domain::part::{NewOemPart, OemPart, OemPartPatch};
use crate::domain::template::{NewWheelTemplate, WheelTemplate, WheelTemplatePatch};
use crate::domain::types::RecordId;
use crate::domain::user::{NewUser, User};
use crate::domain::wheel::{NewWheel, Sale, Wheel, WheelPatch};
use crate::models::config::StoreConfig;
use crate::repository::store::FileStore;

pub mod errors;
pub mod part;
pub mod store;
pub mod template;
pub mod user;
pub mod wheel;

pub use errors::{RepositoryError, RepositoryResult};

/// Read access to the OEM part collection.
pub trait OemPartReader {
    fn list_parts(&self) -> RepositoryResult<Vec<OemPart>>;
    fn get_part_by_id(&self, id: RecordId) -> RepositoryResult<Option<OemPart>>;
}

/// Write access to the OEM part collection.
pub trait OemPartWriter {
    fn create_part(&self, new: NewOemPart, by: Option<&str>) -> RepositoryResult<OemPart>;
    fn update_part(
        &self,
        id: RecordId,
        patch: OemPartPatch,
        by: Option<&str>,
    ) -> RepositoryResult<OemPart>;
    /// Remove a part, returning the removed record.
    fn delete_part(&self, id: RecordId) -> RepositoryResult<OemPart>;
}

/// Read access to the wheel collection.
pub trait WheelReader {
    fn list_wheels(&self) -> RepositoryResult<Vec<Wheel>>;
    fn get_wheel_by_id(&self, id: RecordId) -> RepositoryResult<Option<Wheel>>;
}

/// Write access to the wheel collection.
pub trait WheelWriter {
    fn create_wheel(&self, new: NewWheel, by: Option<&str>) -> RepositoryResult<Wheel>;
    fn update_wheel(
        &self,
        id: RecordId,
        patch: WheelPatch,
        by: Option<&str>,
    ) -> RepositoryResult<Wheel>;
    /// Remove a wheel, returning the removed record so the caller can cascade
    /// image blob deletion.
    fn delete_wheel(&self, id: RecordId) -> RepositoryResult<Wheel>;
    /// The single transition into the `Sold` state: flips the status and
    /// records the sale payload in one persisted update.
    fn mark_wheel_sold(&self, id: RecordId, sale: Sale, by: Option<&str>)
    -> RepositoryResult<Wheel>;
    /// Remove one image reference from a wheel. Fails with `NotFound` when
    /// the wheel or the reference is absent.
    fn detach_wheel_image(
        &self,
        id: RecordId,
        image: &ImageRef,
        by: Option<&str>,
    ) -> RepositoryResult<Wheel>;
}

/// Read access to the template collection.
pub trait TemplateReader {
    fn list_templates(&self) -> RepositoryResult<Vec<WheelTemplate>>;
    fn get_template_by_id(&self, id: RecordId) -> RepositoryResult<Option<WheelTemplate>>;
}

/// Write access to the template collection.
pub trait TemplateWriter {
    fn create_template(
        &self,
        new: NewWheelTemplate,
        by: Option<&str>,
    ) -> RepositoryResult<WheelTemplate>;
    fn update_template(
        &self,
        id: RecordId,
        patch: WheelTemplatePatch,
        by: Option<&str>,
    ) -> RepositoryResult<WheelTemplate>;
    fn delete_template(&self, id: RecordId) -> RepositoryResult<WheelTemplate>;
}

/// Read access to the user collection. Password hashes never leave the
/// repository.
pub trait UserReader {
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    /// Check credentials, returning the matching user on success and `None`
    /// for an unknown username or a wrong password alike.
    fn verify_password(&self, username: &str, password: &str) -> RepositoryResult<Option<User>>;
}

/// Write access to the user collection.
pub trait UserWriter {
    /// Create a user with a freshly hashed password. Duplicate usernames are
    /// rejected.
    fn create_user(&self, new: NewUser) -> RepositoryResult<User>;
}

/// Repository backed by flat JSON files.
///
/// The underlying store is shared behind an `Arc`, so the repository is cheap
/// to clone and can be passed around freely between handlers.
#[derive(Debug, Clone)]
pub struct JsonRepository {
    store: Arc<FileStore>,
}

impl JsonRepository {
    /// Open (and, if needed, initialize) the store described by `config`.
    pub fn open(config: &StoreConfig) -> std::io::Result<Self> {
        Ok(Self {
            store: Arc::new(FileStore::open(&config.data_dir)?),
        })
    }

    pub(crate) fn store(&self) -> &FileStore {
        &self.store
    }
}
