// SPDX-License-Identifier: MPL-2.0
//! TOML media manifest.
//!
//! ```toml
//! title = "Chapter Highlights"
//!
//! [[media]]
//! url = "photos/kickoff.jpg"
//! caption = "Kick-off night"
//! featured = true
//!
//! [[media]]
//! url = "https://example.org/demo.mp4"
//! type = "video"
//! ```

use super::item::{is_remote, MediaItem};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Parsed manifest: an optional title and the ordered media sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub media: Vec<MediaItem>,
}

impl Manifest {
    /// Parses manifest text. Paths are left as written.
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| Error::Manifest(err.to_string()))
    }

    /// Rewrites relative local paths so they are rooted at `base_dir`.
    pub fn resolve_relative(&mut self, base_dir: &Path) {
        for item in &mut self.media {
            if is_remote(&item.url) {
                continue;
            }
            let path = Path::new(&item.url);
            if path.is_relative() {
                item.url = base_dir.join(path).to_string_lossy().into_owned();
            }
        }
    }

    /// Items for the carousel: the featured ones, or everything when none is featured.
    #[must_use]
    pub fn featured(&self) -> Vec<MediaItem> {
        let featured: Vec<_> = self.media.iter().filter(|m| m.featured).cloned().collect();
        if featured.is_empty() {
            self.media.clone()
        } else {
            featured
        }
    }

    /// Number of image and video items, in that order.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        let videos = self.media.iter().filter(|m| m.is_video()).count();
        (self.media.len() - videos, videos)
    }
}

/// Reads and parses the manifest at `path`, resolving relative item paths
/// against its directory.
pub async fn load(path: PathBuf) -> Result<Manifest> {
    let source = tokio::fs::read_to_string(&path).await.map_err(|err| {
        Error::Manifest(format!("{}: {}", path.display(), err))
    })?;
    let mut manifest = Manifest::parse(&source)?;

    if let Some(dir) = path.parent() {
        manifest.resolve_relative(dir);
    }

    log::info!(
        "loaded {} media item(s) from {}",
        manifest.media.len(),
        path.display()
    );
    Ok(manifest)
}
