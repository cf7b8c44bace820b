use crate::{Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub count: usize,
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Recursively collects every image under `dir`, in file name order.
/// Entries that cannot be read are skipped.
pub fn find_wallpapers(dir: &Path) -> Vec<PathBuf> {
    let wallpapers: Vec<PathBuf> = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir() && is_image_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    tracing::debug!(dir = %dir.display(), found = wallpapers.len(), "scanned for wallpapers");
    wallpapers
}

/// Lists the immediate subdirectories of `root` with their image counts,
/// sorted by name. An empty list means the root has no categories yet.
pub fn list_categories(root: &Path) -> Result<Vec<Category>> {
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound(root.to_path_buf()));
    }

    let entries = fs::read_dir(root).map_err(|source| Error::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut categories: Vec<Category> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_dir()))
        .map(|entry| Category {
            name: entry.file_name().to_string_lossy().into_owned(),
            count: find_wallpapers(&entry.path()).len(),
        })
        .collect();

    categories.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(categories)
}

pub fn resolve_category(root: &Path, name: &str) -> Result<PathBuf> {
    let path = root.join(name);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(Error::CategoryNotFound {
            category: name.to_string(),
            root: root.to_path_buf(),
        })
    }
}

pub fn pick_random<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    candidates
        .choose(rng)
        .ok_or(Error::NoWallpapersFound(None))
}

/// Directory of `path` relative to `root`, or `None` for files sitting
/// directly in the root.
pub fn category_of(root: &Path, path: &Path) -> Option<PathBuf> {
    let parent = path.strip_prefix(root).ok()?.parent()?;
    if parent.as_os_str().is_empty() {
        None
    } else {
        Some(parent.to_path_buf())
    }
}
