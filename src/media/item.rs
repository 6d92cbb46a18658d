// SPDX-License-Identifier: MPL-2.0
//! A single entry of the media sequence.

use serde::{Deserialize, Serialize};

/// Represents the two kinds of media the gallery shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// One media entry as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// `http(s)://` URL or local file path.
    pub url: String,

    #[serde(rename = "type", default)]
    pub kind: MediaKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Featured items feed the carousel.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
}

impl MediaItem {
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::new(url, MediaKind::Image)
    }

    #[must_use]
    pub fn video(url: impl Into<String>) -> Self {
        Self::new(url, MediaKind::Video)
    }

    fn new(url: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            url: url.into(),
            kind,
            caption: None,
            date: None,
            location: None,
            featured: false,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// Whether the item must be fetched over HTTP.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        is_remote(&self.url)
    }

    /// Date and location joined for display, date first.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        let parts: Vec<&str> = [self.date.as_deref(), self.location.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        (!parts.is_empty()).then(|| parts.join(" • "))
    }

    /// Last path segment of the URL, or `"download"` when it is empty.
    #[must_use]
    pub fn file_name(&self) -> String {
        file_name_from_url(&self.url)
    }
}

pub(crate) fn is_remote(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Last path segment of `url`, ignoring any query or fragment.
///
/// Returns `"download"` when the URL ends with a separator.
#[must_use]
pub fn file_name_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    match path.rsplit(['/', '\\']).next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => "download".to_string(),
    }
}
