//! Resource tree access for configuration loading.
//!
//! Packaged applications keep their configuration inside a hierarchical
//! asset tree reachable through a host context. That collaborator is modeled
//! as the [`AssetSource`] trait, with [`DirAssets`] as the filesystem-backed
//! implementation used on desktop hosts and in tests.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::PathBuf;

/// Read access to a hierarchical resource tree.
///
/// Paths are relative, `/`-separated, with `""` naming the root. Listing a
/// path that is not a directory yields an empty list rather than an error, so
/// a recursive search can descend through entries without classifying them
/// first.
pub trait AssetSource {
    /// Entry names directly under `path`.
    fn list(&self, path: &str) -> io::Result<Vec<String>>;

    /// Open the entry at `path` as a byte stream.
    fn open(&self, path: &str) -> io::Result<Box<dyn Read>>;
}

/// Asset source rooted at a filesystem directory.
///
/// Listings are sorted by name so searches are deterministic across
/// platforms.
///
/// # Example
///
/// ```no_run
/// use android_logger::assets::{AssetSource, DirAssets};
///
/// let assets = DirAssets::new("app/src/main/assets");
/// let entries = assets.list("")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    /// Create an asset source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        if path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }
}

impl AssetSource for DirAssets {
    fn list(&self, path: &str) -> io::Result<Vec<String>> {
        let full = self.resolve(path);
        if !full.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(full)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read>> {
        let file = File::open(self.resolve(path))?;
        Ok(Box::new(file))
    }
}

/// Locate `file_name` anywhere in the asset tree.
///
/// Depth-first search: each directory's listing is checked for the name
/// before its entries are recursed in listing order, and the first match
/// wins. Returns the relative path of the match, or `None` when the tree
/// holds no such entry.
pub fn find_asset(assets: &dyn AssetSource, file_name: &str) -> io::Result<Option<String>> {
    find_in(assets, "", file_name)
}

fn find_in(assets: &dyn AssetSource, path: &str, file_name: &str) -> io::Result<Option<String>> {
    let entries = assets.list(path)?;

    if entries.iter().any(|entry| entry == file_name) {
        return Ok(Some(join(path, file_name)));
    }

    for entry in &entries {
        if let Some(found) = find_in(assets, &join(path, entry), file_name)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}/{name}")
    }
}
