//! Run report: suppressible diagnostics and summary counters
//!
//! Diagnostics accumulate here instead of going through ambient logging,
//! so the pipeline stages stay pure and testable. The CLI decides where
//! the accumulated lines end up.

use std::path::Path;

/// Which informational/warning categories to drop from the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFilter {
    /// Suppress "already matches" lines.
    pub quiet_matches: bool,
    /// Suppress missing-source warnings.
    pub quiet_misses: bool,
    /// Suppress disqualified-sprite warnings.
    pub quiet_disqualified: bool,
    /// Suppress per-copy lines.
    pub quiet_copies: bool,
}

/// Accumulated diagnostics and counters for one run.
#[derive(Debug, Default)]
pub struct Report {
    filter: LogFilter,
    lines: Vec<String>,
    pub frames_touched: usize,
    pub sprites_touched: usize,
}

impl Report {
    pub fn new(filter: LogFilter) -> Self {
        Report { filter, ..Default::default() }
    }

    /// All diagnostic lines accumulated so far, in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn frame_already_matches(&mut self, frame_index: usize, sprite: &str, image_path: &Path) {
        if !self.filter.quiet_matches {
            self.lines.push(format!(
                "Frame {frame_index} of sprite '{sprite}' already matches image '{}'.",
                image_path.display()
            ));
        }
    }

    pub fn sprite_already_matches(&mut self, sprite: &str, image_path: &Path) {
        if !self.filter.quiet_matches {
            self.lines.push(format!(
                "Sprite '{sprite}' already matches image '{}'.",
                image_path.display()
            ));
        }
    }

    pub fn frame_source_missing(&mut self, expected_name: &str, frame_index: usize, sprite: &str) {
        if !self.filter.quiet_misses {
            self.lines.push(format!(
                "WARN: Found no image named '{expected_name}.png' to reimport frame {frame_index} of sprite '{sprite}'."
            ));
        }
    }

    pub fn sprite_source_missing(&mut self, sprite: &str) {
        if !self.filter.quiet_misses {
            self.lines.push(format!(
                "WARN: Found no source image named '{sprite}_0.png' or similar. Skipping sprite '{sprite}'."
            ));
        }
    }

    pub fn single_frame_source_missing(&mut self, sprite: &str) {
        if !self.filter.quiet_misses {
            self.lines.push(format!("WARN: Found no source image named '{sprite}.png'."));
        }
    }

    pub fn sprite_disqualified(&mut self, sprite: &str) {
        if !self.filter.quiet_disqualified {
            self.lines.push(format!(
                "WARN: Not considering sprite '{sprite}' for reimport because it uses multiple layers, which this tool does not support."
            ));
        }
    }

    pub fn copied(&mut self, from: &Path, to: &Path) {
        if !self.filter.quiet_copies {
            self.lines.push(format!("Copied '{}' to '{}'.", from.display(), to.display()));
        }
    }

    pub fn would_copy(&mut self, from: &Path, frame_target: &Path, layer_target: &Path) {
        if !self.filter.quiet_copies {
            self.lines.push(format!(
                "Would copy '{}' over '{}' and '{}'.",
                from.display(),
                frame_target.display(),
                layer_target.display()
            ));
        }
    }

    /// Human-readable summary of the run, phrased for dry runs accordingly.
    pub fn summary(&self, dry_run: bool) -> String {
        if dry_run {
            format!(
                "Would have updated {} frames across {} sprites.",
                self.frames_touched, self.sprites_touched
            )
        } else {
            format!(
                "Updated {} frames across {} sprites.",
                self.frames_touched, self.sprites_touched
            )
        }
    }
}
