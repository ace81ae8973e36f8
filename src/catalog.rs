//! The image catalog: an ordered, immutable list of image records.
//!
//! Record order is significant. It is both the grid order and the lightbox
//! navigation order, so the catalog never sorts or deduplicates on its own;
//! it only rejects input that would make navigation ambiguous.
//!
//! ## Source
//!
//! The catalog lives in `catalog.toml` in the content directory:
//!
//! ```toml
//! [[images]]
//! id = 1
//! url = "https://cdn.example.com/photos/dawn.jpg"
//! title = "Dawn"
//! description = "First light over the ridge"
//! category = "nature"
//! size = "large"          # large | medium | small
//! ```
//!
//! When the file is absent the stock catalog is used. Images themselves are
//! never fetched: `url` points at an external host and is emitted verbatim.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Catalog has no images")]
    Empty,
    #[error("Duplicate image id {0}")]
    DuplicateId(u32),
    #[error("Image {0} has an empty url")]
    EmptyUrl(u32),
}

/// Layout hint controlling how many grid tracks a cell spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeHint {
    Large,
    Medium,
    Small,
}

impl SizeHint {
    pub const ALL: [SizeHint; 3] = [SizeHint::Large, SizeHint::Medium, SizeHint::Small];

    pub fn as_str(self) -> &'static str {
        match self {
            SizeHint::Large => "large",
            SizeHint::Medium => "medium",
            SizeHint::Small => "small",
        }
    }
}

/// A single photo in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageRecord {
    /// Stable unique identifier.
    pub id: u32,
    /// Where the external host serves the image.
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Display-only; the grid does not filter on it.
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_size")]
    pub size: SizeHint,
}

fn default_size() -> SizeHint {
    SizeHint::Small
}

/// On-disk shape of `catalog.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    images: Vec<ImageRecord>,
}

/// Ordered, validated sequence of [`ImageRecord`]s.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<ImageRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting empty input, duplicate ids and empty urls.
    pub fn new(records: Vec<ImageRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if record.url.trim().is_empty() {
                return Err(CatalogError::EmptyUrl(record.id));
            }
        }
        Ok(Self { records })
    }

    /// Load `catalog.toml` from `dir`, falling back to [`Catalog::stock`].
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let path = dir.join("catalog.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no catalog file, using stock catalog");
            return Ok(Self::stock());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.images)
    }

    /// The built-in catalog shipped with the binary.
    pub fn stock() -> Self {
        const URL: &str = "https://oejgkvftpbinliuopipr.supabase.co/storage/v1/object/public/assets/user_347995964/user-photo-1.jpg";
        let record = |id, title: &str, description: &str, category: &str, size| ImageRecord {
            id,
            url: URL.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            size,
        };
        Self {
            records: vec![
                record(
                    1,
                    "Фотография 1",
                    "Первое изображение из коллекции",
                    "general",
                    SizeHint::Large,
                ),
                record(
                    2,
                    "Фотография 2",
                    "Второе изображение из коллекции gallery",
                    "nature",
                    SizeHint::Medium,
                ),
                record(
                    3,
                    "Фотография 3",
                    "Третье изображение из коллекции",
                    "abstract",
                    SizeHint::Medium,
                ),
            ],
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&ImageRecord> {
        self.records.first()
    }

    /// Serialize for embedding into the page runtime.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }
}
