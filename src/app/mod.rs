// SPDX-License-Identifier: MPL-2.0
//! Application root: owns every component state and routes messages between
//! them.
//!
//! Components stay pure (`handle(Message) -> Effect`); this module is the only
//! place that turns effects into tasks, window commands and toasts.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::effects::particles;
use crate::i18n::fluent::I18n;
use crate::media::{ImageStore, MediaItem};
use crate::ui::carousel::{self, AutoPlay};
use crate::ui::counter::AnimatedCounter;
use crate::ui::lightbox;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Header statistics: i18n label key and its animated value.
type HeaderCounter = (&'static str, AnimatedCounter);

pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    columns: usize,
    share_command: Option<String>,
    autoplay: AutoPlay,
    particles: Option<particles::State>,
    title: Option<String>,
    gallery: Arc<[MediaItem]>,
    carousel: carousel::State,
    lightbox: Option<lightbox::State>,
    images: ImageStore,
    counters: Vec<HeaderCounter>,
    loading: bool,
    loading_started: Instant,
    pulse: f32,
    fullscreen: bool,
    window_id: Option<window::Id>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.gallery.len())
            .field("loading", &self.loading)
            .field("lightbox_open", &self.lightbox.is_some())
            .finish()
    }
}

/// Builds the main window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls `boot` through `Fn`; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: &config::Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let autoplay = AutoPlay::new(
            config.carousel.autoplay.unwrap_or(true),
            config.carousel.interval(),
        );

        let particles = (!flags.no_particles && config.effects.particles.unwrap_or(true))
            .then(|| particles::State::new(config.effects.particle_config()));

        let manifest_path = resolve_manifest_path(&flags, config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            columns: config.gallery.columns(),
            share_command: config.share.command.clone(),
            autoplay,
            particles,
            title: None,
            gallery: Arc::from(Vec::new()),
            carousel: carousel::State::new(Arc::from(Vec::new()), autoplay),
            lightbox: None,
            images: ImageStore::new(),
            counters: Vec::new(),
            loading: manifest_path.is_some(),
            loading_started: Instant::now(),
            pulse: 0.0,
            fullscreen: false,
            window_id: None,
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match manifest_path {
            Some(path) => update::load_manifest(path),
            None => {
                log::info!("no manifest to load; starting with an empty gallery");
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.title {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.loading,
                self.notifications.has_notifications(),
            ),
            subscription::create_counter_subscription(&self.counters),
        ];

        if let Some(particles) = &self.particles {
            subscriptions.push(particles.subscription().map(Message::Particles));
        }
        // Auto-play pauses while the lightbox covers the carousel.
        if self.lightbox.is_none() {
            subscriptions.push(self.carousel.subscription().map(Message::Carousel));
        }

        Subscription::batch(subscriptions)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Particles(msg) => {
                if let Some(particles) = self.particles.as_mut() {
                    particles.handle(msg);
                }
                Task::none()
            }
            Message::Carousel(msg) => update::handle_carousel_message(self, msg),
            Message::Lightbox(msg) => update::handle_lightbox_message(self, msg),
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::OpenGallery(index) => {
                let items = Arc::clone(&self.gallery);
                update::open_lightbox(self, items, index);
                Task::none()
            }
            Message::ManifestLoaded(result) => update::handle_manifest_loaded(self, result),
            Message::ImageLoaded { url, result } => {
                self.images.finish(url, result);
                Task::none()
            }
            Message::Downloaded(result) => update::handle_downloaded(self, result),
            Message::Shared { url, result } => update::handle_shared(self, url, result),
            Message::FullscreenChanged(fullscreen) => {
                self.fullscreen = fullscreen;
                if let Some(lightbox) = self.lightbox.as_mut() {
                    lightbox.handle(lightbox::Message::FullscreenChanged(fullscreen));
                }
                Task::none()
            }
            Message::WindowSeen(id) => {
                self.window_id.get_or_insert(id);
                Task::none()
            }
            Message::WindowResized(id) => {
                self.window_id.get_or_insert(id);
                update::query_mode(id)
            }
            Message::KeyPressed { key, modifiers } => {
                update::handle_key_pressed(self, &key, modifiers)
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                if self.loading {
                    self.pulse = crate::ui::skeleton::pulse_phase(
                        now.saturating_duration_since(self.loading_started),
                    );
                }
                Task::none()
            }
            Message::CounterTick(now) => {
                for (_, counter) in &mut self.counters {
                    counter.tick(now);
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            title: self.title.as_deref(),
            particles: self.particles.as_ref(),
            counters: &self.counters,
            carousel: &self.carousel,
            gallery: &self.gallery,
            lightbox: self.lightbox.as_ref(),
            images: &self.images,
            notifications: &self.notifications,
            columns: self.columns,
            loading: self.loading,
            pulse: self.pulse,
        })
    }

    /// Manifest currently displayed, if any.
    #[must_use]
    pub fn gallery(&self) -> &[MediaItem] {
        &self.gallery
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }
}

/// Path of the manifest the app would load for `flags` and `config`.
///
/// A manifest named on the command line or in the config is always returned,
/// so a missing file is reported. The default location is only used when a
/// file is actually there.
#[must_use]
pub fn resolve_manifest_path(flags: &Flags, config: &config::Config) -> Option<PathBuf> {
    resolve_manifest_path_with_default(flags, config, config::default_manifest_path())
}

fn resolve_manifest_path_with_default(
    flags: &Flags,
    config: &config::Config,
    default: Option<PathBuf>,
) -> Option<PathBuf> {
    flags
        .manifest
        .clone()
        .or_else(|| config.gallery.manifest.clone())
        .or_else(|| default.filter(|path| path.is_file()))
}
