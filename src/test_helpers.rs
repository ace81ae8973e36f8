//! Shared test utilities.
//!
//! Builders for catalog records and a ready-to-drive page controller, plus a
//! copy of `fixtures/content/` in a temp directory for tests that touch disk.

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::{Catalog, ImageRecord, SizeHint};
use crate::config::SiteConfig;
use crate::controller::PageController;

/// A record with predictable text derived from its id.
pub fn record(id: u32, size: SizeHint) -> ImageRecord {
    ImageRecord {
        id,
        url: format!("https://cdn.example.com/photos/{id}.jpg"),
        title: format!("Photo {id}"),
        description: format!("Description of photo {id}"),
        category: "test".to_string(),
        size,
    }
}

/// Build a catalog, panicking on invalid input.
pub fn catalog_of(records: Vec<ImageRecord>) -> Catalog {
    Catalog::new(records).unwrap_or_else(|e| panic!("invalid test catalog: {e}"))
}

/// Ids 1, 2, 3 with large / medium / small hints.
pub fn three_image_catalog() -> Catalog {
    catalog_of(vec![
        record(1, SizeHint::Large),
        record(2, SizeHint::Medium),
        record(3, SizeHint::Small),
    ])
}

pub fn three_image_controller() -> PageController {
    PageController::new(three_image_catalog(), &SiteConfig::default())
}

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}
