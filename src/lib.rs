//! spritesync - Library for re-importing edited master images into a
//! sprite project
//!
//! This library provides functionality to:
//! - Parse sprite descriptor documents (JSON with tolerated trailing commas)
//! - Index a source tree of master PNGs by base name and content hash
//! - Resolve which destination frames are stale and copy updates into place

pub mod cli;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod hash;
pub mod index;
pub mod models;
pub mod project;
pub mod reimport;
pub mod report;
pub mod resolver;
