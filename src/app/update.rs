// SPDX-License-Identifier: MPL-2.0
//! Message handlers that need more than a line of glue.
//!
//! Each handler mutates [`App`] and returns the follow-up [`Task`]: component
//! effects become window commands, async I/O or toasts here.

use super::{App, Message};
use crate::config;
use crate::error::Error;
use crate::media::{self, actions, loader, ImageStore, Manifest, MediaItem, ShareOutcome};
use crate::ui::carousel;
use crate::ui::counter::AnimatedCounter;
use crate::ui::lightbox;
use crate::ui::notifications::Notification;
use iced::keyboard::{Key, Modifiers};
use iced::{clipboard, window, Task};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub fn load_manifest(path: PathBuf) -> Task<Message> {
    log::debug!("loading manifest {}", path.display());
    Task::perform(media::manifest::load(path), Message::ManifestLoaded)
}

/// Installs a freshly loaded manifest and starts fetching every image in it.
pub fn handle_manifest_loaded(app: &mut App, result: Result<Manifest, Error>) -> Task<Message> {
    app.loading = false;

    let manifest = match result {
        Ok(manifest) => manifest,
        Err(err) => {
            log::warn!("manifest unavailable: {err}");
            let reason = app.i18n.tr(err.i18n_key());
            app.notifications.push(
                Notification::error("notification-manifest-error").with_arg("reason", reason),
            );
            return Task::none();
        }
    };

    let (photos, videos) = manifest.counts();
    let now = Instant::now();
    app.counters = [
        ("header-photos", photos),
        ("header-videos", videos),
        ("header-total", photos + videos),
    ]
    .into_iter()
    .map(|(label, value)| {
        let mut counter = AnimatedCounter::new(value as u64);
        counter.start(now);
        (label, counter)
    })
    .collect();

    app.title = manifest.title.clone();
    app.carousel = carousel::State::new(Arc::from(manifest.featured()), app.autoplay);
    app.gallery = Arc::from(manifest.media);
    app.lightbox = None;
    sync_backdrop(app);
    app.images.clear();

    let gallery = Arc::clone(&app.gallery);
    Task::batch(image_tasks(&mut app.images, &gallery))
}

/// One load task per distinct still image not yet requested.
fn image_tasks(images: &mut ImageStore, items: &[MediaItem]) -> Vec<Task<Message>> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| !item.is_video() && seen.insert(item.url.as_str()))
        .filter(|item| images.begin(&item.url))
        .map(|item| {
            let url = item.url.clone();
            Task::perform(loader::load_image(url.clone()), move |result| {
                Message::ImageLoaded { url, result }
            })
        })
        .collect()
}

pub fn open_lightbox(app: &mut App, items: Arc<[MediaItem]>, index: usize) {
    app.lightbox = lightbox::State::new(items, index, app.fullscreen);
    sync_backdrop(app);
}

/// The lightbox hides the header, so the backdrop only animates while it is
/// closed.
pub fn sync_backdrop(app: &mut App) {
    let covered = app.lightbox.is_some();
    let Some(particles) = app.particles.as_mut() else {
        return;
    };

    match (covered, particles.is_active()) {
        (true, true) => {
            log::debug!("lightbox open; tearing down particle backdrop");
            particles.teardown();
        }
        (false, false) => {
            log::debug!("lightbox closed; remounting particle backdrop");
            particles.remount();
        }
        _ => {}
    }
}

pub fn handle_carousel_message(app: &mut App, message: carousel::Message) -> Task<Message> {
    match app.carousel.handle(message) {
        carousel::Effect::None => {}
        carousel::Effect::Open(index) => {
            let items = Arc::clone(app.carousel.items());
            open_lightbox(app, items, index);
        }
        carousel::Effect::AutoPlayChanged(enabled) => {
            app.autoplay = *app.carousel.autoplay();
            persist_autoplay(enabled);
        }
    }
    Task::none()
}

/// Stores the auto-play toggle in `settings.toml`, keeping the other settings.
///
/// A settings file that failed to load is left untouched.
fn persist_autoplay(enabled: bool) {
    if cfg!(test) {
        return;
    }

    let (mut config, warning) = config::load();
    if warning.is_some() {
        log::warn!("not saving auto-play preference over an unreadable settings file");
        return;
    }
    config.carousel.autoplay = Some(enabled);
    if let Err(err) = config::save(&config) {
        log::warn!("failed to save settings: {err}");
    }
}

pub fn handle_lightbox_message(app: &mut App, message: lightbox::Message) -> Task<Message> {
    let Some(state) = app.lightbox.as_mut() else {
        return Task::none();
    };

    match state.handle(message) {
        lightbox::Effect::None => Task::none(),
        lightbox::Effect::RequestFullscreen(desired) => set_fullscreen(app.window_id, desired),
        lightbox::Effect::Download { url, file_name } => {
            log::debug!("download requested for {url}");
            Task::perform(actions::download(url, file_name), Message::Downloaded)
        }
        lightbox::Effect::Share(request) => {
            let url = request.url.clone();
            Task::perform(
                actions::share(app.share_command.clone(), request),
                move |result| Message::Shared { url, result },
            )
        }
        lightbox::Effect::Close => {
            app.lightbox = None;
            sync_backdrop(app);
            if app.fullscreen {
                set_fullscreen(app.window_id, false)
            } else {
                Task::none()
            }
        }
    }
}

/// Asks the window manager for a mode switch, then reports the mode the
/// platform actually applied.
///
/// Without a known window the request is dropped and nothing flips.
fn set_fullscreen(window_id: Option<window::Id>, desired: bool) -> Task<Message> {
    let Some(id) = window_id else {
        log::warn!("fullscreen request ignored: no window id yet");
        return Task::none();
    };

    log::debug!("switching window mode, fullscreen = {desired}");
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(id, mode).chain(query_mode(id))
}

/// Reads the current window mode so the fullscreen flag follows changes made
/// outside the app too.
pub fn query_mode(id: window::Id) -> Task<Message> {
    window::mode(id).map(mode_reported)
}

fn mode_reported(mode: window::Mode) -> Message {
    Message::FullscreenChanged(mode == window::Mode::Fullscreen)
}

pub fn handle_downloaded(app: &mut App, result: Result<Option<PathBuf>, Error>) -> Task<Message> {
    match result {
        Ok(Some(path)) => {
            log::info!("saved {}", path.display());
            app.notifications.push(
                Notification::success("notification-download-saved")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Ok(None) => log::debug!("download cancelled"),
        Err(err) => log::warn!("download failed: {err}"),
    }
    Task::none()
}

pub fn handle_shared(
    app: &mut App,
    url: String,
    result: Result<ShareOutcome, Error>,
) -> Task<Message> {
    match result {
        Ok(ShareOutcome::Shared) => {
            log::debug!("shared {url}");
            Task::none()
        }
        Ok(ShareOutcome::CopyLink) => {
            app.notifications
                .push(Notification::info("share-link-copied"));
            clipboard::write(url)
        }
        Err(err) => {
            log::warn!("share failed: {err}");
            Task::none()
        }
    }
}

/// Keys go to the lightbox while it is open, to the carousel otherwise.
pub fn handle_key_pressed(app: &mut App, key: &Key, modifiers: Modifiers) -> Task<Message> {
    if app.lightbox.is_some() {
        match lightbox::key_message(key, modifiers) {
            Some(msg) => handle_lightbox_message(app, msg),
            None => Task::none(),
        }
    } else {
        match carousel::key_message(key, modifiers) {
            Some(msg) => handle_carousel_message(app, msg),
            None => Task::none(),
        }
    }
}
