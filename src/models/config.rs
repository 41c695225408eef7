use std::path::{Path, PathBuf};

/// Storage locations for the inventory service.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON array file per entity slot.
    pub data_dir: PathBuf,
    /// Directory holding uploaded image blobs.
    pub uploads_dir: PathBuf,
}

impl StoreConfig {
    /// Conventional layout under a single base directory: `data/` for the
    /// record slots and `uploads/` for image blobs.
    pub fn under(base: &Path) -> Self {
        Self {
            data_dir: base.join("data"),
            uploads_dir: base.join("uploads"),
        }
    }
}
