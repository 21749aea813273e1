//! Testing utilities for galleria
//!
//! Item constructors and a small sample catalog shared by unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, Item, MediaType};

/// Build an item from a slash path, deriving `name` and `dir`
pub fn item(path: &str, media_type: MediaType) -> Item {
    let (dir, name) = path.rsplit_once('/').unwrap_or(("", path));
    Item::new(path, name, dir, media_type)
}

/// Image item at `path`
pub fn image(path: &str) -> Item {
    item(path, MediaType::Image)
}

/// PDF item at `path`
pub fn pdf(path: &str) -> Item {
    item(path, MediaType::Pdf)
}

/// Two-item catalog: a Japan trip photo and a PDF under `Docs`
pub fn trips_and_docs() -> Catalog {
    vec![image("Trips/Japan/fuji.jpg"), pdf("Docs/manual.pdf")]
}

/// Mixed catalog with nested dirs, root-level items and a prefix sibling
pub fn sample_catalog() -> Catalog {
    vec![
        image("Trips/Japan/fuji.jpg"),
        image("Trips/Japan/kyoto.png"),
        pdf("Docs/manual.pdf"),
        image("Trips/Italy/rome.jpg"),
        pdf("TripsArchive/2019.pdf"),
        image("cover.webp"),
        pdf("Docs/Specs/api.pdf"),
    ]
}
