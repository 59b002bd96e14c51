//! Applying reimport instructions to the destination project
//!
//! Each instruction overwrites two files under the destination root: the
//! frame's PNG inside the sprite folder and its per-layer copy under
//! `layers/<guid>/`. A failed copy aborts the run; there is no rollback
//! of copies already performed.

use std::fs;
use std::path::Path;

use crate::error::SyncError;
use crate::models::ReimportInstruction;
use crate::report::Report;

/// Copy every instruction's master image over its two destination paths.
///
/// In dry-run mode nothing is written; the report still records what would
/// be copied and the summary counters come out identical to a real run.
pub fn apply(
    instructions: &[ReimportInstruction<'_>],
    dest_root: &Path,
    dry_run: bool,
    report: &mut Report,
) -> Result<(), SyncError> {
    let mut last_sprite: Option<&str> = None;
    for instruction in instructions {
        let sprite = instruction.sprite;
        let frame = &sprite.frames[instruction.frame_index];
        let from = instruction.source.file_path.as_path();
        let sprite_dir = dest_root.join(&sprite.name);
        let frame_target = sprite_dir.join(&frame.file_name);
        let layer_target = sprite_dir
            .join("layers")
            .join(&frame.guid)
            .join(&frame.layer_file_name);

        if dry_run {
            report.would_copy(from, &frame_target, &layer_target);
        } else {
            copy_over(from, &frame_target, report)?;
            copy_over(from, &layer_target, report)?;
        }

        report.frames_touched += 1;
        if last_sprite != Some(sprite.name.as_str()) {
            report.sprites_touched += 1;
            last_sprite = Some(&sprite.name);
        }
    }
    Ok(())
}

fn copy_over(from: &Path, to: &Path, report: &mut Report) -> Result<(), SyncError> {
    fs::copy(from, to).map_err(|e| SyncError::io(to, e))?;
    report.copied(from, to);
    Ok(())
}
