//! Image blob storage.
//!
//! Blobs live as flat files under the uploads root, named by a fresh UUID
//! plus the original extension. The byte transform (resizing, optimization)
//! is the consuming application's concern; this store only persists and
//! deletes blobs and enforces the containment of every path it touches.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::domain::image::ImageRef;
use crate::forms::add_error;
use crate::services::ServiceError;

/// Upload size cap, matching the legacy server's multer limit.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
/// Maximum number of images accepted in a single request.
pub const MAX_IMAGES_PER_REQUEST: usize = 10;

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Raw image bytes received from a caller, already extracted from whatever
/// transport carried them.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("only jpg, jpeg, png and webp images are accepted")]
    UnsupportedType,
    #[error("image exceeds the 10MB limit")]
    TooLarge,
    #[error("at most {MAX_IMAGES_PER_REQUEST} images per request")]
    TooMany,
    #[error("image reference escapes the uploads root")]
    InvalidRef,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ImageStoreError> for ServiceError {
    fn from(e: ImageStoreError) -> Self {
        match e {
            ImageStoreError::InvalidRef => Self::InvalidPath,
            ImageStoreError::UnsupportedType
            | ImageStoreError::TooLarge
            | ImageStoreError::TooMany => {
                let mut errors = validator::ValidationErrors::new();
                add_error(&mut errors, "images", "images", e.to_string());
                Self::Validation(errors)
            }
            ImageStoreError::Io(e) => {
                log::error!("image store failure: {e}");
                Self::Internal
            }
        }
    }
}

/// Blob store rooted at the uploads directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Open the store, creating the uploads directory if needed.
    pub fn open(root: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Persist one uploaded image and return its reference.
    pub fn store(&self, upload: &ImageUpload) -> Result<ImageRef, ImageStoreError> {
        if upload.bytes.len() > MAX_IMAGE_BYTES {
            return Err(ImageStoreError::TooLarge);
        }
        let extension = upload
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or(ImageStoreError::UnsupportedType)?;
        let file_name = format!("{}.{extension}", Uuid::new_v4());
        fs::write(self.root.join(&file_name), &upload.bytes)?;
        Ok(ImageRef::from_file_name(&file_name))
    }

    /// Persist a batch of uploads. On failure, blobs stored so far are
    /// removed again so a rejected request leaves nothing behind.
    pub fn store_all(&self, uploads: &[ImageUpload]) -> Result<Vec<ImageRef>, ImageStoreError> {
        if uploads.len() > MAX_IMAGES_PER_REQUEST {
            return Err(ImageStoreError::TooMany);
        }
        let mut stored = Vec::with_capacity(uploads.len());
        for upload in uploads {
            match self.store(upload) {
                Ok(image) => stored.push(image),
                Err(e) => {
                    self.delete_all(&stored);
                    return Err(e);
                }
            }
        }
        Ok(stored)
    }

    /// Delete one blob. A blob that is already gone is not an error; a
    /// reference escaping the uploads root always is.
    pub fn delete(&self, image: &ImageRef) -> Result<(), ImageStoreError> {
        match fs::remove_file(self.blob_path(image)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Best-effort deletion of a batch of blobs; failures are logged and do
    /// not stop the rest of the batch.
    pub fn delete_all(&self, images: &[ImageRef]) {
        for image in images {
            if let Err(e) = self.delete(image) {
                log::error!("failed to delete image blob {image}: {e}");
            }
        }
    }

    /// Resolve a reference to its path, re-checking containment even though
    /// [`ImageRef`] construction already rejects traversal.
    fn blob_path(&self, image: &ImageRef) -> Result<PathBuf, ImageStoreError> {
        let name = image.file_name();
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(ImageStoreError::InvalidRef);
        }
        Ok(self.root.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            bytes: vec![0u8; 16],
        }
    }

    #[test]
    fn store_and_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path()).unwrap();
        let image = store.store(&upload("wheel.JPG")).unwrap();
        assert!(dir.path().join(image.file_name()).exists());
        store.delete(&image).unwrap();
        assert!(!dir.path().join(image.file_name()).exists());
        // Deleting again is fine; the blob is simply gone.
        store.delete(&image).unwrap();
    }

    #[test]
    fn rejects_unsupported_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.store(&upload("malware.exe")),
            Err(ImageStoreError::UnsupportedType)
        ));
        assert!(matches!(
            store.store(&upload("noextension")),
            Err(ImageStoreError::UnsupportedType)
        ));
    }

    #[test]
    fn failed_batch_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path()).unwrap();
        let result = store.store_all(&[upload("ok.png"), upload("bad.gif")]);
        assert!(result.is_err());
        let leftover = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftover, 0);
    }
}
