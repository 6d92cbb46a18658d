// SPDX-License-Identifier: MPL-2.0
//! Media sequence: manifest parsing, image loading, and per-item actions.

pub mod actions;
pub mod item;
pub mod loader;
pub mod manifest;

pub use actions::{ShareOutcome, ShareRequest};
pub use item::{file_name_from_url, MediaItem, MediaKind};
pub use loader::{ImageState, ImageStore, LoadedImage};
pub use manifest::Manifest;
