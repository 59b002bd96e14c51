//! Core data types shared across the reimport pipeline

use std::path::PathBuf;

/// A source-of-truth PNG discovered in the source tree.
///
/// Built once during indexing and never mutated. Keyed by `base_name` in
/// the source index; duplicate base names anywhere in the tree are fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterImage {
    /// File name without the `.png` extension.
    pub base_name: String,
    pub file_path: PathBuf,
    /// Lowercase hex SHA-256 of the full file content.
    pub content_hash: String,
}

/// A single animation frame of a destination sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// `<guid>.png`, the frame's PNG inside the sprite folder.
    pub file_name: String,
    pub content_hash: String,
    pub guid: String,
    /// `<layer name>.png`, the per-layer copy under `layers/<guid>/`.
    pub layer_file_name: String,
    /// True when the sprite declares more than one layer, which this tool
    /// does not support; the whole sprite is then excluded.
    pub uses_multiple_layers: bool,
}

/// A destination sprite folder with its ordered frames.
///
/// Frame order equals the descriptor's `frames` array order and is the
/// semantic animation index, 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub name: String,
    pub frames: Vec<Frame>,
}

/// Instruction to overwrite one destination frame with a master image.
///
/// Produced by the resolver, consumed by the copy step within the same run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReimportInstruction<'a> {
    pub source: &'a MasterImage,
    pub sprite: &'a Sprite,
    pub frame_index: usize,
}
