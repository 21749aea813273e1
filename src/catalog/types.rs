//! Catalog data model
//!
//! Items are immutable once loaded; the catalog is replaced wholesale on
//! reload and never edited in place.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported media kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Pdf,
}

impl MediaType {
    /// Every supported media type, in display order
    pub const ALL: [Self; 2] = [Self::Image, Self::Pdf];

    /// Image extensions recognized by the manifest generator (lowercase, no dot)
    pub const IMAGE_EXTENSIONS: &'static [&'static str] =
        &["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"];

    /// Classify a file extension (without the dot), case-insensitively
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        if ext == "pdf" {
            Some(Self::Pdf)
        } else if Self::IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Image)
        } else {
            None
        }
    }

    /// Wire name (`"image"` / `"pdf"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
        }
    }

    /// Badge text shown on grid entries
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Pdf => "PDF",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single asset in the catalog. Identity is `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Asset locator, relative to the manifest
    pub path: String,
    /// Display name
    pub name: String,
    /// Slash-separated category path, empty for root-level assets
    #[serde(default)]
    pub dir: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Lowercase extension including the dot (`".jpg"`)
    #[serde(default)]
    pub ext: String,
}

impl Item {
    /// Create an item, deriving `ext` from `path`
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        dir: impl Into<String>,
        media_type: MediaType,
    ) -> Self {
        let path = path.into();
        let ext = extension_of(&path);
        Self {
            path,
            name: name.into(),
            dir: dir.into(),
            media_type,
            ext,
        }
    }

    /// Fill in a missing extension and lowercase a present one
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.ext = if self.ext.is_empty() {
            extension_of(&self.path)
        } else if self.ext.starts_with('.') {
            self.ext.to_lowercase()
        } else {
            format!(".{}", self.ext.to_lowercase())
        };
        self
    }

    /// First segment of `dir`, or `None` for root-level items
    #[must_use]
    pub fn top_level_dir(&self) -> Option<&str> {
        self.dir.split('/').next().filter(|seg| !seg.is_empty())
    }
}

/// Lowercase extension of the last path segment, with its dot
fn extension_of(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rfind('.') {
        Some(pos) if pos > 0 => file[pos..].to_lowercase(),
        _ => String::new(),
    }
}

/// Ordered, session-owned item list
pub type Catalog = Vec<Item>;

/// Wire shape of `gallery.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub generated: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Manifest {
    /// Wrap a list of items, filling in `count`
    #[must_use]
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            generated: true,
            count: items.len(),
            items,
        }
    }

    /// Consume the manifest into a normalized catalog
    #[must_use]
    pub fn into_catalog(self) -> Catalog {
        self.items.into_iter().map(Item::normalized).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_extension() {
        assert_eq!(MediaType::from_extension("JPG"), Some(MediaType::Image));
        assert_eq!(MediaType::from_extension("webp"), Some(MediaType::Image));
        assert_eq!(MediaType::from_extension("PDF"), Some(MediaType::Pdf));
        assert_eq!(MediaType::from_extension("txt"), None);
    }

    #[test]
    fn test_item_new_derives_extension() {
        let item = Item::new("Trips/Japan/Fuji.JPG", "Fuji.JPG", "Trips/Japan", MediaType::Image);
        assert_eq!(item.ext, ".jpg");

        let item = Item::new("Docs/README", "README", "Docs", MediaType::Pdf);
        assert_eq!(item.ext, "");

        let item = Item::new("some.dir/.hidden", ".hidden", "some.dir", MediaType::Image);
        assert_eq!(item.ext, "");
    }

    #[test]
    fn test_normalized_extension() {
        let mut item = Item::new("a/b.png", "b.png", "a", MediaType::Image);
        item.ext = "PNG".to_string();
        assert_eq!(item.normalized().ext, ".png");
    }

    #[test]
    fn test_top_level_dir() {
        let item = Item::new("Trips/Japan/a.png", "a.png", "Trips/Japan", MediaType::Image);
        assert_eq!(item.top_level_dir(), Some("Trips"));

        let root = Item::new("a.png", "a.png", "", MediaType::Image);
        assert_eq!(root.top_level_dir(), None);
    }

    #[test]
    fn test_item_deserialize_wire_shape() {
        let json = r#"{"path":"Docs/x.pdf","name":"x.pdf","dir":"Docs","type":"pdf"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.media_type, MediaType::Pdf);
        assert_eq!(item.ext, "");
        assert_eq!(item.normalized().ext, ".pdf");
    }

    #[test]
    fn test_manifest_missing_items_is_empty() {
        let manifest: Manifest = serde_json::from_str(r#"{"generated": true}"#).unwrap();
        assert!(manifest.into_catalog().is_empty());
    }
}
