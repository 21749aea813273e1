//! Manifest generation from an asset directory
//!
//! Walks a directory tree and produces the `gallery.json` the loader reads.
//! Hidden entries, the `assets/` directory at the root and the site's own
//! files are skipped. Items are sorted by `(dir, name)`.

use super::error::GenerateError;
use super::loader::DEFAULT_MANIFEST;
use super::types::{Item, Manifest, MediaType};
use glob::Pattern as GlobPattern;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Site files that never become gallery items
const RESERVED_FILES: &[&str] = &[DEFAULT_MANIFEST, "index.html", "README.md"];

/// Root-level directory holding the site's own static files
const ASSETS_DIR: &str = "assets";

/// Options for a generator run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Glob patterns matched against root-relative paths (with `/`)
    pub exclude: Vec<String>,
}

/// Scan `root` and build a manifest
///
/// # Errors
///
/// Returns `GenerateError` if an exclude pattern is invalid or the tree
/// cannot be walked.
pub fn generate(root: &Path, options: &GenerateOptions) -> Result<Manifest, GenerateError> {
    let excludes = options
        .exclude
        .iter()
        .map(|p| GlobPattern::new(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut items = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(rel_path) = relative_slash_path(root, entry.path()) else {
            continue;
        };

        if rel_path.starts_with(&format!("{ASSETS_DIR}/")) || RESERVED_FILES.contains(&rel_path.as_str()) {
            continue;
        }

        if excludes.iter().any(|p| p.matches(&rel_path)) {
            tracing::debug!("Excluded {}", rel_path);
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let Some(media_type) = Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(MediaType::from_extension)
        else {
            continue;
        };

        let dir = rel_path
            .rsplit_once('/')
            .map(|(dir, _)| dir.to_string())
            .unwrap_or_default();

        items.push(Item::new(rel_path, name, dir, media_type));
    }

    items.sort_by(|a, b| (&a.dir, &a.name).cmp(&(&b.dir, &b.name)));
    tracing::info!("Collected {} items under {}", items.len(), root.display());

    Ok(Manifest::from_items(items))
}

/// Serialize `manifest` as pretty JSON to `output`
///
/// # Errors
///
/// Returns `GenerateError` if serialization or the write fails.
pub fn write_manifest(manifest: &Manifest, output: &Path) -> Result<(), GenerateError> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(output, json)?;
    Ok(())
}

/// Default output location for a root: `root/gallery.json`
#[must_use]
pub fn default_output(root: &Path) -> PathBuf {
    root.join(DEFAULT_MANIFEST)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}

/// Root-relative path joined with `/`, independent of the host separator
fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}
