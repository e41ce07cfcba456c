pub mod catalog;
pub mod compile;
pub mod init;
pub mod select;

pub use catalog::{catalog, CatalogArgs};
pub use compile::{compile, CompileArgs};
pub use init::{init, InitArgs};
pub use select::{select, SelectArgs};

use crate::config::MANIFEST_SUFFIX;
use anyhow::{anyhow, Result};
use forwardkit_codegen::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect manifest files under `input`, or `input` itself if it is a file
pub(crate) fn find_manifests(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| is_manifest(p))
        .collect();
    files.sort();

    Ok(files)
}

pub(crate) fn is_manifest(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(MANIFEST_SUFFIX))
            .unwrap_or(false)
}

pub(crate) fn read_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    Manifest::from_json(&content).map_err(|e| anyhow!("{}: {}", path.display(), e))
}

/// File name with the manifest suffix removed: `button.refs.json` → `button`
pub(crate) fn manifest_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("manifest");
    name.strip_suffix(MANIFEST_SUFFIX).unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_stem() {
        assert_eq!(manifest_stem(Path::new("src/button.refs.json")), "button");
        assert_eq!(manifest_stem(Path::new("plain.json")), "plain.json");
    }

    #[test]
    fn test_find_manifests_filters_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("forms");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("b.refs.json"), "{}").unwrap();
        fs::write(nested.join("a.refs.json"), "{}").unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        let found = find_manifests(dir.path()).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| is_manifest(p)));
    }

    #[test]
    fn test_find_manifests_missing_path() {
        assert!(find_manifests(Path::new("/definitely/not/here")).is_err());
    }
}
