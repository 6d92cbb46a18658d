// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::effects::particles;
use crate::error::Error;
use crate::media::{LoadedImage, Manifest, ShareOutcome};
use crate::ui::carousel;
use crate::ui::lightbox;
use crate::ui::notifications;
use iced::keyboard::{Key, Modifiers};
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// wrapped so every change goes through a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Particles(particles::Message),
    Carousel(carousel::Message),
    Lightbox(lightbox::Message),
    Notification(notifications::NotificationMessage),
    /// A masonry cell was clicked; opens the lightbox over the whole gallery.
    OpenGallery(usize),
    ManifestLoaded(Result<Manifest, Error>),
    ImageLoaded {
        url: String,
        result: Result<LoadedImage, Error>,
    },
    /// Result of the save dialog and write. `None` means the user cancelled.
    Downloaded(Result<Option<PathBuf>, Error>),
    Shared {
        url: String,
        result: Result<ShareOutcome, Error>,
    },
    /// The platform reported the window mode; `true` means fullscreen.
    FullscreenChanged(bool),
    /// Any window event; the first one fixes the window used for mode switches.
    WindowSeen(window::Id),
    /// The window was resized, possibly by a mode change made elsewhere.
    WindowResized(window::Id),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    /// Drives toast expiry and the skeleton pulse.
    Tick(Instant),
    CounterTick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Manifest to show; takes precedence over `[gallery] manifest`.
    pub manifest: Option<PathBuf>,
    /// Disables the particle backdrop regardless of configuration.
    pub no_particles: bool,
}
