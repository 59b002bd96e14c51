//! Destination project scanning
//!
//! The destination root contains one folder per sprite, each holding a
//! `<sprite>.yy` descriptor and one PNG per frame. Anything else at the
//! top level is fatal.

use std::fs;
use std::path::Path;

use crate::descriptor::{self, DescriptorError};
use crate::document;
use crate::error::SyncError;
use crate::models::Sprite;
use crate::report::Report;

/// Collect every reimport-eligible sprite under `root`, sorted by name.
///
/// Sprites that declare multiple layers are excluded entirely (with a
/// suppressible warning), never partially processed.
pub fn collect_sprites(root: &Path, report: &mut Report) -> Result<Vec<Sprite>, SyncError> {
    let entries = fs::read_dir(root).map_err(|e| SyncError::io(root, e))?;
    let mut sprites = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SyncError::io(root, e))?;
        let file_type = entry.file_type().map_err(|e| SyncError::io(entry.path(), e))?;
        let path = entry.path();
        if !file_type.is_dir() {
            return Err(SyncError::NotADirectory { path });
        }
        let name = entry.file_name().to_string_lossy().into_owned();

        let descriptor_path = path.join(format!("{name}.yy"));
        let bytes = fs::read(&descriptor_path)
            .map_err(|e| SyncError::io(descriptor_path.clone(), e))?;
        let root_value = document::parse(&bytes)
            .map_err(|source| SyncError::Parse { path: descriptor_path.clone(), source })?;
        let frames = descriptor::extract_frames(&root_value, &path).map_err(|e| match e {
            DescriptorError::Shape(source) => SyncError::Shape { path: descriptor_path.clone(), source },
            DescriptorError::Io { path, source } => SyncError::Io { path, source },
        })?;

        if frames.iter().any(|frame| frame.uses_multiple_layers) {
            report.sprite_disqualified(&name);
            continue;
        }
        sprites.push(Sprite { name, frames });
    }
    sprites.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sprites)
}
