//! Source tree indexing
//!
//! Recursively collects every PNG under the source root into a map keyed
//! by base file name (extension stripped). The base name is the only
//! lookup key the resolver has, so a collision anywhere in the tree makes
//! the whole index ambiguous and is fatal.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::SyncError;
use crate::hash::sha256_file;
use crate::models::MasterImage;

/// Recursively index every `.png` (case-insensitive) under `root`.
pub fn index_sources(root: &Path) -> Result<HashMap<String, MasterImage>, SyncError> {
    let mut images = HashMap::new();
    index_into(root, &mut images)?;
    Ok(images)
}

fn index_into(dir: &Path, images: &mut HashMap<String, MasterImage>) -> Result<(), SyncError> {
    let entries = fs::read_dir(dir).map_err(|e| SyncError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| SyncError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| SyncError::io(entry.path(), e))?;
        let path = entry.path();
        if file_type.is_dir() {
            index_into(&path, images)?;
            continue;
        }
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            continue;
        }
        let Some(base_name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if let Some(existing) = images.get(base_name) {
            return Err(SyncError::DuplicateSource {
                first: existing.file_path.clone(),
                second: path,
            });
        }
        let content_hash = sha256_file(&path).map_err(|e| SyncError::io(path.clone(), e))?;
        images.insert(
            base_name.to_owned(),
            MasterImage { base_name: base_name.to_owned(), file_path: path, content_hash },
        );
    }
    Ok(())
}
