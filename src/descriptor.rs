//! Descriptor interpretation: frame and layer metadata from a parsed document
//!
//! A sprite descriptor is a mapping with at least `layers` (non-empty list
//! of mappings with a string `name`) and `frames` (non-empty list of
//! mappings with a string `name`). Everything else in the document is
//! ignored.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::document::Value;
use crate::hash::sha256_file;
use crate::models::Frame;

/// Structurally valid document missing or mis-typing a required field.
///
/// `path` is the logical location inside the document, e.g. `$.layers[0]`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path} {message}")]
pub struct ShapeError {
    pub path: String,
    pub message: String,
}

impl ShapeError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        ShapeError { path: path.into(), message: message.into() }
    }
}

/// Error from [`extract_frames`].
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The descriptor promised a frame file that could not be hashed.
    #[error("could not hash frame file '{}': {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
}

/// Extract the ordered frame list for one sprite from its parsed descriptor.
///
/// `frame_folder` is the sprite's directory; each frame's PNG is hashed
/// from there, and a file the descriptor names but that cannot be read is
/// fatal. Output order equals the `frames` array order.
pub fn extract_frames(root: &Value, frame_folder: &Path) -> Result<Vec<Frame>, DescriptorError> {
    let mapping = root
        .as_mapping()
        .ok_or_else(|| ShapeError::new("$", "is not an object"))?;
    let layers = mapping
        .get("layers")
        .and_then(Value::as_list)
        .filter(|layers| !layers.is_empty())
        .ok_or_else(|| ShapeError::new("$.layers", "is not a non-empty array"))?;
    let first_layer = layers[0]
        .as_mapping()
        .ok_or_else(|| ShapeError::new("$.layers[0]", "is not an object"))?;
    let layer_name = first_layer
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ShapeError::new("$.layers[0].name", "is not a non-empty string"))?;
    let frame_entries = mapping
        .get("frames")
        .and_then(Value::as_list)
        .filter(|frames| !frames.is_empty())
        .ok_or_else(|| ShapeError::new("$.frames", "is not a non-empty array"))?;

    // Only the layer count disqualifies; the flag is stamped on every frame.
    let uses_multiple_layers = layers.len() > 1;
    let layer_file_name = format!("{layer_name}.png");

    let mut frames = Vec::with_capacity(frame_entries.len());
    for (i, entry) in frame_entries.iter().enumerate() {
        let frame = entry
            .as_mapping()
            .ok_or_else(|| ShapeError::new(format!("$.frames[{i}]"), "is not an object"))?;
        let guid = frame
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                ShapeError::new(format!("$.frames[{i}].name"), "is not a non-empty string")
            })?;
        let file_name = format!("{guid}.png");
        let frame_path = frame_folder.join(&file_name);
        let content_hash = sha256_file(&frame_path)
            .map_err(|source| DescriptorError::Io { path: frame_path, source })?;
        frames.push(Frame {
            file_name,
            content_hash,
            guid: guid.to_owned(),
            layer_file_name: layer_file_name.clone(),
            uses_multiple_layers,
        });
    }
    Ok(frames)
}
