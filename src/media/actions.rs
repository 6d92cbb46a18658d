// SPDX-License-Identifier: MPL-2.0
//! Download and share actions for a single media item.
//!
//! Both are fire-and-forget from the caller's perspective: the returned
//! results are only used for logging and toasts.

use super::item::MediaItem;
use super::loader::fetch_bytes;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

const DEFAULT_SHARE_TITLE: &str = "Photo";
const DEFAULT_SHARE_TEXT: &str = "Check out this photo";

/// What gets handed to the share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    /// Builds a request, falling back to generic wording without a caption.
    #[must_use]
    pub fn for_item(item: &MediaItem) -> Self {
        Self {
            title: item
                .caption
                .clone()
                .unwrap_or_else(|| DEFAULT_SHARE_TITLE.to_string()),
            text: item
                .caption
                .clone()
                .unwrap_or_else(|| DEFAULT_SHARE_TEXT.to_string()),
            url: item.url.clone(),
        }
    }
}

/// How a share request was fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The external share command accepted it.
    Shared,
    /// No share target is configured; the caller copies the link instead.
    CopyLink,
}

/// Copies the bytes behind `url` into `destination`.
pub async fn save_to(url: &str, destination: &Path) -> Result<()> {
    let bytes = fetch_bytes(url).await?;
    tokio::fs::write(destination, bytes).await?;
    Ok(())
}

/// Asks for a destination and saves the media there.
///
/// Returns `Ok(None)` when the dialog is cancelled.
pub async fn download(url: String, file_name: String) -> Result<Option<PathBuf>> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_file_name(&file_name)
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let destination = handle.path().to_path_buf();
    save_to(&url, &destination).await?;
    Ok(Some(destination))
}

/// Splits a share command into program and leading arguments.
///
/// Splitting is on whitespace only; quotes are not interpreted, so no single
/// argument can contain a space.
fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Runs the configured share command as `command [args..] <title> <text> <url>`.
pub async fn share(command: Option<String>, request: ShareRequest) -> Result<ShareOutcome> {
    let Some((program, parts)) = command.as_deref().and_then(split_command) else {
        return Ok(ShareOutcome::CopyLink);
    };

    let status = tokio::process::Command::new(program)
        .args(parts)
        .arg(&request.title)
        .arg(&request.text)
        .arg(&request.url)
        .status()
        .await?;

    if status.success() {
        Ok(ShareOutcome::Shared)
    } else {
        Err(Error::Io(format!("share command exited with {status}")))
    }
}
