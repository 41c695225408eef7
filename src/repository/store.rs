//! Flat-file record store.
//!
//! Each entity type lives in one JSON array file (a slot). Every write
//! serializes the whole collection, so mutating operations on a slot must be
//! serialized; [`FileStore::guard`] returns the slot's mutex guard and
//! callers hold it across the full load-mutate-save sequence. Saves go
//! through a temp file and an atomic rename, so lock-free readers never
//! observe a half-written slot.

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Named persistent slot, one per entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    OemParts,
    Wheels,
    Templates,
    Users,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::OemParts, Slot::Wheels, Slot::Templates, Slot::Users];

    pub fn file_name(self) -> &'static str {
        match self {
            Slot::OemParts => "oem-parts.json",
            Slot::Wheels => "wheels.json",
            Slot::Templates => "templates.json",
            Slot::Users => "users.json",
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::OemParts => 0,
            Slot::Wheels => 1,
            Slot::Templates => 2,
            Slot::Users => 3,
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Errors surfaced by slot persistence.
///
/// A missing slot file is not an error: initialization seeds every slot with
/// `[]`, so an absent file reads as an empty collection. Existing but
/// unparsable content is reported as [`StoreError::Corrupted`] instead of
/// being conflated with emptiness.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("slot {slot} is corrupted: {source}")]
    Corrupted {
        slot: Slot,
        source: serde_json::Error,
    },
    #[error("failed to encode slot {slot}: {source}")]
    Encode {
        slot: Slot,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One JSON array file per slot under a data directory.
#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
    locks: [Mutex<()>; 4],
}

impl FileStore {
    /// Open a store rooted at `data_dir`, creating the directory and seeding
    /// every missing slot file with an empty array.
    pub fn open(data_dir: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(data_dir)?;
        for slot in Slot::ALL {
            let path = data_dir.join(slot.file_name());
            if !path.exists() {
                fs::write(&path, "[]")?;
            }
        }
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            locks: Default::default(),
        })
    }

    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.data_dir.join(slot.file_name())
    }

    /// Acquire the slot's write lock. A poisoned lock is recovered: the slot
    /// file itself cannot be torn by a panicked writer thanks to the atomic
    /// rename on save.
    pub fn guard(&self, slot: Slot) -> MutexGuard<'_, ()> {
        self.locks[slot.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the full collection from a slot. Absent file means empty;
    /// unparsable content is an error.
    pub fn load<T: DeserializeOwned>(&self, slot: Slot) -> Result<Vec<T>, StoreError> {
        let bytes = match fs::read(self.slot_path(slot)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupted { slot, source })
    }

    /// Replace the full collection in a slot.
    ///
    /// The array is written to a sibling temp file and renamed over the slot
    /// file, so concurrent readers see either the old or the new content.
    pub fn save<T: Serialize>(&self, slot: Slot, records: &[T]) -> Result<(), StoreError> {
        let tmp = NamedTempFile::new_in(&self.data_dir)?;
        serde_json::to_writer_pretty(tmp.as_file(), records)
            .map_err(|source| StoreError::Encode { slot, source })?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.slot_path(slot)).map_err(|e| e.error)?;
        Ok(())
    }
}
