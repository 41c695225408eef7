//! Helpers for integration tests.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use spp_inventory::domain::auth::Principal;
use spp_inventory::models::config::StoreConfig;
use spp_inventory::repository::JsonRepository;
use spp_inventory::services::images::ImageStore;
use tempfile::TempDir;

/// Temporary store used in integration tests.
pub struct TestEnv {
    _dir: TempDir,
    pub config: StoreConfig,
    pub repo: JsonRepository,
    pub images: ImageStore,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = StoreConfig::under(dir.path());
        let repo = JsonRepository::open(&config).expect("Failed to open repository");
        let images = ImageStore::open(&config.uploads_dir).expect("Failed to open image store");
        TestEnv {
            _dir: dir,
            config,
            repo,
            images,
        }
    }
}

pub fn admin() -> Principal {
    Principal::new("tester", "admin")
}

pub fn viewer() -> Principal {
    Principal::new("visitor", "viewer")
}
