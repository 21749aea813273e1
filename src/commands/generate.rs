//! Generate command - scan a media tree and write its manifest

use super::Result;
use crate::catalog::{self, GenerateOptions};
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Execute the generate command
///
/// With `to_stdout` the manifest JSON goes to `out`; otherwise it is written
/// to `output` (default `ROOT/gallery.json`) and a summary goes to `out`.
pub fn execute<W: Write>(
    root: &Path,
    output: Option<PathBuf>,
    exclude: Vec<String>,
    to_stdout: bool,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let manifest = catalog::generate(root, &GenerateOptions { exclude })?;

    if to_stdout {
        writeln!(out, "{}", serde_json::to_string_pretty(&manifest)?)?;
        return Ok(());
    }

    let path = output.unwrap_or_else(|| catalog::default_output(root));
    catalog::write_manifest(&manifest, &path)?;

    if !quiet {
        writeln!(
            out,
            "{} {} item(s) to {}",
            "Wrote".green(),
            manifest.count,
            path.display()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn media_tree() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Trips")).unwrap();
        fs::write(tmp.path().join("Trips/a.jpg"), b"").unwrap();
        fs::write(tmp.path().join("guide.pdf"), b"").unwrap();
        tmp
    }

    #[test]
    fn test_writes_default_output() {
        let tmp = media_tree();
        let mut out = Vec::new();
        execute(tmp.path(), None, Vec::new(), false, true, &mut out).unwrap();

        assert!(out.is_empty());
        let written = fs::read_to_string(tmp.path().join("gallery.json")).unwrap();
        let catalog = catalog::parse_manifest(&written).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_stdout_with_exclude() {
        let tmp = media_tree();
        let mut out = Vec::new();
        execute(
            tmp.path(),
            None,
            vec!["Trips/**".into()],
            true,
            false,
            &mut out,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["path"], "guide.pdf");
        assert!(!tmp.path().join("gallery.json").exists());
    }
}
