// SPDX-License-Identifier: MPL-2.0
//! Fetching and decoding images, plus the per-URL load state store.

use super::item::is_remote;
use crate::error::{Error, Result};
use iced::widget::image;
use std::collections::HashMap;
use std::time::Duration;

const USER_AGENT: &str = concat!("iced_showcase/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 5;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Load state of one image URL.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(LoadedImage),
    Failed(String),
}

/// Load states keyed by URL.
///
/// Independent of any navigation state: components only read it.
#[derive(Debug, Default)]
pub struct ImageStore {
    states: HashMap<String, ImageState>,
}

impl ImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as loading. Returns `false` if it was already requested.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.states.contains_key(url) {
            return false;
        }
        self.states.insert(url.to_string(), ImageState::Loading);
        true
    }

    /// Records the outcome of a load started with [`ImageStore::begin`].
    pub fn finish(&mut self, url: String, result: Result<LoadedImage>) {
        let state = match result {
            Ok(image) => ImageState::Loaded(image),
            Err(err) => {
                log::warn!("image unavailable: {url}: {err}");
                ImageState::Failed(err.to_string())
            }
        };
        self.states.insert(url, state);
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ImageState> {
        self.states.get(url)
    }

    /// Forgets every entry, e.g. when a new manifest replaces the gallery.
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(Error::from)
}

/// Reads the raw bytes behind `url`: HTTP for `http(s)://`, the filesystem otherwise.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    if is_remote(url) {
        let response = http_client()?.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    } else {
        Ok(tokio::fs::read(url).await?)
    }
}

/// Decodes encoded image bytes into an RGBA handle.
pub fn decode(bytes: &[u8]) -> Result<LoadedImage> {
    let rgba = image_rs::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        handle: image::Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

/// Fetches and decodes the image at `url`. Decoding runs on the blocking pool.
pub async fn load_image(url: String) -> Result<LoadedImage> {
    let bytes = fetch_bytes(&url).await?;
    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|err| Error::Decode(err.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([0, 255, 128, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        image_rs::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image_rs::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn decode_reports_dimensions() {
        let loaded = decode(&png_bytes(4, 3)).unwrap();
        assert_eq!((loaded.width, loaded.height), (4, 3));
    }

    #[test]
    fn decode_garbage_is_decode_error() {
        let err = decode(b"not an image").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn store_begins_once() {
        let mut store = ImageStore::new();
        assert!(store.begin("a.png"));
        assert!(!store.begin("a.png"));
        assert!(matches!(store.get("a.png"), Some(ImageState::Loading)));
    }

    #[test]
    fn store_records_failure_without_touching_other_urls() {
        let mut store = ImageStore::new();
        store.begin("a.png");
        store.begin("b.png");
        store.finish("a.png".into(), Err(Error::Io("missing".into())));

        assert!(matches!(store.get("a.png"), Some(ImageState::Failed(_))));
        assert!(matches!(store.get("b.png"), Some(ImageState::Loading)));

        store.clear();
        assert!(store.get("a.png").is_none());
    }

    #[tokio::test]
    async fn load_image_from_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        std::fs::write(&path, png_bytes(2, 2)).unwrap();

        let loaded = load_image(path.to_string_lossy().into_owned()).await.unwrap();
        assert_eq!((loaded.width, loaded.height), (2, 2));
    }

    #[tokio::test]
    async fn load_image_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");
        let result = load_image(path.to_string_lossy().into_owned()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
