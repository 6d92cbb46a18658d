// SPDX-License-Identifier: MPL-2.0
//! Full-window media viewer.
//!
//! The lightbox owns an index into a non-empty media sequence plus zoom, pan
//! and a mirror of the window's fullscreen mode. Navigation clamps at both
//! ends. Every successful index change starts the new item unzoomed and
//! centered. Fullscreen is requested through [`Effect::RequestFullscreen`]
//! and only reflected here once [`Message::FullscreenChanged`] arrives.
//!
//! The owner drops the state after [`Effect::Close`].

mod stage;
mod view;

pub use view::{view, ViewContext};

use crate::config::{MAX_ZOOM, MIN_ZOOM, PAN_LIMIT_PER_ZOOM, ZOOM_STEP};
use crate::media::{file_name_from_url, MediaItem, ShareRequest};
use crate::ui::state::{Direction, DragState};
use iced::keyboard::{self, key::Named, Key};
use iced::{Point, Vector};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Direction),
    /// Jump straight to an index; ignored when out of range.
    JumpTo(usize),
    ZoomIn,
    ZoomOut,
    PanStarted(Point),
    PanMoved(Point),
    PanEnded,
    ToggleFullscreen,
    /// The window's fullscreen mode changed.
    FullscreenChanged(bool),
    Download,
    Share,
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Ask the window to enter (`true`) or leave fullscreen.
    RequestFullscreen(bool),
    Download { url: String, file_name: String },
    Share(ShareRequest),
    Close,
}

#[derive(Debug, Clone)]
pub struct State {
    items: Arc<[MediaItem]>,
    index: usize,
    zoom: f32,
    pan: Vector,
    drag: DragState,
    fullscreen: bool,
}

impl State {
    /// Opens at `index` (clamped). Returns `None` for an empty sequence.
    #[must_use]
    pub fn new(items: Arc<[MediaItem]>, index: usize, fullscreen: bool) -> Option<Self> {
        let last = items.len().checked_sub(1)?;
        Some(Self {
            items,
            index: index.min(last),
            zoom: MIN_ZOOM,
            pan: Vector::ZERO,
            drag: DragState::default(),
            fullscreen,
        })
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Navigate(Direction::Previous) => {
                if let Some(index) = self.index.checked_sub(1) {
                    self.show(index);
                }
                Effect::None
            }
            Message::Navigate(Direction::Next) => {
                if self.index + 1 < self.items.len() {
                    self.show(self.index + 1);
                }
                Effect::None
            }
            Message::JumpTo(index) => {
                if index < self.items.len() && index != self.index {
                    self.show(index);
                }
                Effect::None
            }
            Message::ZoomIn => {
                if self.can_zoom() {
                    self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
                }
                Effect::None
            }
            Message::ZoomOut => {
                if self.can_zoom() {
                    self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
                    if self.zoom <= MIN_ZOOM {
                        self.reset_view();
                    } else {
                        self.pan = self.clamp_pan(self.pan);
                    }
                }
                Effect::None
            }
            Message::PanStarted(position) => {
                if self.can_pan() {
                    self.drag.start(position, self.pan);
                }
                Effect::None
            }
            Message::PanMoved(position) => {
                if self.can_pan() {
                    if let Some(offset) = self.drag.calculate_offset(position) {
                        self.pan = self.clamp_pan(offset);
                    }
                }
                Effect::None
            }
            Message::PanEnded => {
                self.drag.stop();
                Effect::None
            }
            Message::ToggleFullscreen => Effect::RequestFullscreen(!self.fullscreen),
            Message::FullscreenChanged(fullscreen) => {
                self.fullscreen = fullscreen;
                Effect::None
            }
            Message::Download => {
                let url = self.current().url.clone();
                Effect::Download {
                    file_name: file_name_from_url(&url),
                    url,
                }
            }
            Message::Share => Effect::Share(ShareRequest::for_item(self.current())),
            Message::Close => Effect::Close,
        }
    }

    fn show(&mut self, index: usize) {
        self.index = index;
        self.reset_view();
    }

    fn reset_view(&mut self) {
        self.zoom = MIN_ZOOM;
        self.pan = Vector::ZERO;
        self.drag.stop();
    }

    fn pan_limit(&self) -> f32 {
        PAN_LIMIT_PER_ZOOM * (self.zoom - MIN_ZOOM)
    }

    fn clamp_pan(&self, pan: Vector) -> Vector {
        let limit = self.pan_limit();
        Vector::new(pan.x.clamp(-limit, limit), pan.y.clamp(-limit, limit))
    }

    #[must_use]
    pub fn current(&self) -> &MediaItem {
        &self.items[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_dragging
    }

    /// Only images zoom.
    #[must_use]
    pub fn can_zoom(&self) -> bool {
        !self.current().is_video()
    }

    #[must_use]
    pub fn can_pan(&self) -> bool {
        self.can_zoom() && self.zoom > MIN_ZOOM
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.items.len()
    }
}

/// Maps a key press to a lightbox message.
///
/// Escape closes, arrows navigate, `+`/`=` and `-` zoom.
#[must_use]
pub fn key_message(key: &Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::Close),
        Key::Named(Named::ArrowLeft) => Some(Message::Navigate(Direction::Previous)),
        Key::Named(Named::ArrowRight) => Some(Message::Navigate(Direction::Next)),
        Key::Character("+" | "=") => Some(Message::ZoomIn),
        Key::Character("-") => Some(Message::ZoomOut),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn items(n: usize) -> Arc<[MediaItem]> {
        (0..n)
            .map(|i| MediaItem::image(format!("https://example.org/{i}.jpg")))
            .collect()
    }

    fn open(n: usize, index: usize) -> State {
        State::new(items(n), index, false).unwrap()
    }

    fn zoomed(state: &mut State, steps: usize) {
        for _ in 0..steps {
            state.handle(Message::ZoomIn);
        }
    }

    #[test]
    fn empty_sequence_cannot_open() {
        assert!(State::new(items(0), 0, false).is_none());
    }

    #[test]
    fn initial_index_is_clamped() {
        assert_eq!(open(3, 10).index(), 2);
    }

    #[test]
    fn navigate_clamps_at_both_ends() {
        let mut state = open(3, 0);
        state.handle(Message::Navigate(Direction::Previous));
        assert_eq!(state.index(), 0);

        state.handle(Message::Navigate(Direction::Next));
        state.handle(Message::Navigate(Direction::Next));
        state.handle(Message::Navigate(Direction::Next));
        assert_eq!(state.index(), 2);
        assert!(!state.has_next());
    }

    #[test]
    fn navigation_resets_zoom_and_pan() {
        let mut state = open(3, 1);
        zoomed(&mut state, 2);
        state.handle(Message::PanStarted(Point::new(0.0, 0.0)));
        state.handle(Message::PanMoved(Point::new(30.0, -20.0)));
        assert_eq!(state.pan(), Vector::new(30.0, -20.0));

        state.handle(Message::Navigate(Direction::Next));
        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.pan(), Vector::ZERO);
        assert!(!state.is_panning());
    }

    #[test]
    fn blocked_navigation_keeps_zoom() {
        let mut state = open(2, 1);
        zoomed(&mut state, 1);
        state.handle(Message::Navigate(Direction::Next));
        assert_eq!(state.zoom(), 1.5);
    }

    #[test]
    fn jump_to_ignores_out_of_range() {
        let mut state = open(4, 0);
        state.handle(Message::JumpTo(3));
        assert_eq!(state.index(), 3);
        state.handle(Message::JumpTo(4));
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn zoom_steps_within_bounds() {
        let mut state = open(1, 0);
        zoomed(&mut state, 10);
        assert_eq!(state.zoom(), 4.0);

        for _ in 0..10 {
            state.handle(Message::ZoomOut);
        }
        assert_eq!(state.zoom(), 1.0);
    }

    #[test]
    fn zoom_out_to_one_resets_pan() {
        let mut state = open(1, 0);
        zoomed(&mut state, 1);
        state.handle(Message::PanStarted(Point::ORIGIN));
        state.handle(Message::PanMoved(Point::new(40.0, 40.0)));
        assert_eq!(state.pan(), Vector::new(40.0, 40.0));

        state.handle(Message::ZoomOut);
        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.pan(), Vector::ZERO);
    }

    #[test]
    fn zoom_out_reclamps_pan() {
        let mut state = open(1, 0);
        zoomed(&mut state, 4); // 3.0, limit 200
        state.handle(Message::PanStarted(Point::ORIGIN));
        state.handle(Message::PanMoved(Point::new(180.0, -180.0)));
        state.handle(Message::PanEnded);

        state.handle(Message::ZoomOut); // 2.5, limit 150
        assert_abs_diff_eq!(state.pan().x, 150.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.pan().y, -150.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn pan_rejected_at_zoom_one() {
        let mut state = open(1, 0);
        state.handle(Message::PanStarted(Point::ORIGIN));
        state.handle(Message::PanMoved(Point::new(50.0, 50.0)));
        assert_eq!(state.pan(), Vector::ZERO);
        assert!(!state.is_panning());
    }

    #[test]
    fn pan_clamped_to_zoom_bound() {
        let mut state = open(1, 0);
        zoomed(&mut state, 2); // zoom 2.0, limit 100
        state.handle(Message::PanStarted(Point::new(10.0, 10.0)));
        state.handle(Message::PanMoved(Point::new(500.0, -500.0)));
        assert_eq!(state.pan(), Vector::new(100.0, -100.0));
    }

    #[test]
    fn video_cannot_zoom() {
        let media: Arc<[MediaItem]> = vec![MediaItem::video("clip.mp4")].into();
        let mut state = State::new(media, 0, false).unwrap();
        state.handle(Message::ZoomIn);
        assert_eq!(state.zoom(), 1.0);
        assert!(!state.can_zoom());
    }

    #[test]
    fn fullscreen_only_flips_on_notification() {
        let mut state = open(1, 0);
        assert_eq!(
            state.handle(Message::ToggleFullscreen),
            Effect::RequestFullscreen(true)
        );
        assert!(!state.is_fullscreen());

        state.handle(Message::FullscreenChanged(true));
        assert!(state.is_fullscreen());
        assert_eq!(
            state.handle(Message::ToggleFullscreen),
            Effect::RequestFullscreen(false)
        );
    }

    #[test]
    fn download_derives_file_name() {
        let mut state = open(2, 1);
        assert_eq!(
            state.handle(Message::Download),
            Effect::Download {
                url: "https://example.org/1.jpg".into(),
                file_name: "1.jpg".into(),
            }
        );
    }

    #[test]
    fn share_uses_fallback_wording() {
        let mut state = open(1, 0);
        let Effect::Share(request) = state.handle(Message::Share) else {
            panic!("expected share effect");
        };
        assert_eq!(request.title, "Photo");
        assert_eq!(request.text, "Check out this photo");
    }

    #[test]
    fn close_is_an_effect() {
        let mut state = open(1, 0);
        assert_eq!(state.handle(Message::Close), Effect::Close);
    }

    #[test]
    fn key_bindings() {
        let none = keyboard::Modifiers::empty();
        let key = |c: &str| -> Key { Key::Character(c.into()) };

        assert!(matches!(
            key_message(&Key::Named(Named::Escape), none),
            Some(Message::Close)
        ));
        assert!(matches!(
            key_message(&Key::Named(Named::ArrowLeft), none),
            Some(Message::Navigate(Direction::Previous))
        ));
        assert!(matches!(
            key_message(&Key::Named(Named::ArrowRight), none),
            Some(Message::Navigate(Direction::Next))
        ));
        assert!(matches!(key_message(&key("+"), none), Some(Message::ZoomIn)));
        assert!(matches!(key_message(&key("="), none), Some(Message::ZoomIn)));
        assert!(matches!(key_message(&key("-"), none), Some(Message::ZoomOut)));
        assert!(key_message(&key("x"), none).is_none());
        assert!(key_message(&key("="), keyboard::Modifiers::CTRL).is_none());
    }
}
