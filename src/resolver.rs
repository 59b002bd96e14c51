//! Frame matching and reimport resolution
//!
//! Source artists name their exports inconsistently: the frame index may be
//! zero- or one-based, padded to 1..=4 digits, with or without an
//! underscore before it. For each multi-frame sprite the resolver probes
//! all 16 first-frame variants against the source index, demands exactly
//! one match, and derives the scheme for the remaining frames from it.

use std::collections::HashMap;

use crate::error::SyncError;
use crate::models::{MasterImage, ReimportInstruction, Sprite};
use crate::report::Report;

const DIGIT_VARIANTS: usize = 4;
const OPTION_COUNT: usize = 4 * DIGIT_VARIANTS;

/// Naming scheme for a sprite's source images, derived from whichever
/// first-frame variant was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingScheme {
    /// Zero-padded digit width, 1..=4.
    pub width: usize,
    /// Whether an underscore separates name and index.
    pub underscore: bool,
    /// Whether the first frame is numbered 0 (else 1).
    pub zero_based: bool,
}

impl NamingScheme {
    /// Scheme encoded by probe-order position `i`: digit width descends
    /// fastest, then the separator flips, then the index base. Changing
    /// this order changes which scheme wins on coincidental matches.
    fn from_option_index(i: usize) -> Self {
        NamingScheme {
            width: DIGIT_VARIANTS - (i % DIGIT_VARIANTS),
            underscore: (i / DIGIT_VARIANTS) % 2 == 0,
            zero_based: i < 2 * DIGIT_VARIANTS,
        }
    }

    /// Expected source base name for 0-based animation frame `index`.
    pub fn source_key(&self, sprite_name: &str, index: usize) -> String {
        let separator = if self.underscore { "_" } else { "" };
        let bias = usize::from(!self.zero_based);
        format!("{sprite_name}{separator}{:0width$}", index + bias, width = self.width)
    }
}

/// Probe the 16 first-frame variants for `sprite` against the source index.
///
/// Returns `Ok(None)` when nothing matches (the sprite is skipped), the
/// derived scheme on exactly one match, and an ambiguity error naming both
/// conflicting files otherwise. One coincidence is tolerated: the one-based
/// counterpart of an already chosen zero-based variant at the same width
/// and separator (e.g. `walk_0000` alongside `walk_0001`).
fn detect_scheme(
    sprite: &Sprite,
    sources: &HashMap<String, MasterImage>,
) -> Result<Option<NamingScheme>, SyncError> {
    let mut chosen: Option<(usize, &MasterImage)> = None;
    for i in 0..OPTION_COUNT {
        let key = NamingScheme::from_option_index(i).source_key(&sprite.name, 0);
        let Some(image) = sources.get(&key) else { continue };
        match chosen {
            Some((first, first_image)) => {
                if first < 2 * DIGIT_VARIANTS
                    && i >= 2 * DIGIT_VARIANTS
                    && first == i - 2 * DIGIT_VARIANTS
                {
                    continue;
                }
                return Err(SyncError::AmbiguousNaming {
                    sprite: sprite.name.clone(),
                    first: first_image.file_path.clone(),
                    second: image.file_path.clone(),
                });
            }
            None => chosen = Some((i, image)),
        }
    }
    Ok(chosen.map(|(i, _)| NamingScheme::from_option_index(i)))
}

/// Determine every frame whose source image content differs from the
/// destination, in sprite order then frame order.
///
/// `sprites` must already be sorted by name; the instruction order follows
/// it. Frames without a source image are skipped without blocking their
/// siblings.
pub fn resolve<'a>(
    sources: &'a HashMap<String, MasterImage>,
    sprites: &'a [Sprite],
    report: &mut Report,
) -> Result<Vec<ReimportInstruction<'a>>, SyncError> {
    let mut instructions = Vec::new();
    for sprite in sprites {
        if sprite.frames.len() > 1 {
            let Some(scheme) = detect_scheme(sprite, sources)? else {
                report.sprite_source_missing(&sprite.name);
                continue;
            };
            for (i, frame) in sprite.frames.iter().enumerate() {
                let key = scheme.source_key(&sprite.name, i);
                match sources.get(&key) {
                    Some(image) if image.content_hash != frame.content_hash => {
                        instructions.push(ReimportInstruction {
                            source: image,
                            sprite,
                            frame_index: i,
                        });
                    }
                    Some(image) => {
                        report.frame_already_matches(i, &sprite.name, &image.file_path);
                    }
                    None => report.frame_source_missing(&key, i, &sprite.name),
                }
            }
        } else if sprite.frames.len() == 1 {
            // Single-frame sprites use the bare sprite name, no suffix.
            match sources.get(&sprite.name) {
                Some(image) if image.content_hash != sprite.frames[0].content_hash => {
                    instructions.push(ReimportInstruction { source: image, sprite, frame_index: 0 });
                }
                Some(image) => report.sprite_already_matches(&sprite.name, &image.file_path),
                None => report.single_frame_source_missing(&sprite.name),
            }
        }
    }
    Ok(instructions)
}
