// SPDX-License-Identifier: MPL-2.0
//! Featured media carousel.
//!
//! Unlike the lightbox, navigation wraps around in both directions. A
//! horizontal drag past [`SWIPE_THRESHOLD`] changes slide; a press released
//! without moving opens the current slide in the lightbox.

mod view;

pub use view::{view, ViewContext};

use crate::config::{CLICK_SLOP, SWIPE_THRESHOLD};
use crate::media::MediaItem;
use crate::ui::state::{Direction, DragState};
use iced::keyboard::{self, key::Named, Key};
use iced::{time, Point, Subscription, Vector};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Owned handle for the auto-advance timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPlay {
    enabled: bool,
    interval: Duration,
}

impl AutoPlay {
    #[must_use]
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self { enabled, interval }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a timer should run for a carousel of `len` slides.
    #[must_use]
    pub fn is_active(&self, len: usize) -> bool {
        self.enabled && len > 1
    }

    pub fn subscription(&self, len: usize) -> Subscription<Instant> {
        if self.is_active(len) {
            time::every(self.interval)
        } else {
            Subscription::none()
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Direction),
    JumpTo(usize),
    /// Cursor position over the slide area.
    DragMoved(Point),
    DragStarted,
    DragEnded,
    /// The cursor left the slide area mid-drag.
    DragCancelled,
    AutoAdvance,
    ToggleAutoPlay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the lightbox over the carousel items at this index.
    Open(usize),
    /// The user switched auto-play on or off.
    AutoPlayChanged(bool),
}

#[derive(Debug, Clone)]
pub struct State {
    items: Arc<[MediaItem]>,
    index: usize,
    pointer: Option<Point>,
    drag: DragState,
    autoplay: AutoPlay,
}

impl State {
    #[must_use]
    pub fn new(items: Arc<[MediaItem]>, autoplay: AutoPlay) -> Self {
        Self {
            items,
            index: 0,
            pointer: None,
            drag: DragState::default(),
            autoplay,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Navigate(direction) => {
                self.step(direction);
                Effect::None
            }
            Message::JumpTo(index) => {
                if index < self.items.len() {
                    self.index = index;
                }
                Effect::None
            }
            Message::DragMoved(position) => {
                self.pointer = Some(position);
                Effect::None
            }
            Message::DragStarted => {
                if let Some(position) = self.pointer {
                    self.drag.start(position, Vector::ZERO);
                }
                Effect::None
            }
            Message::DragEnded => self.finish_drag(true),
            Message::DragCancelled => self.finish_drag(false),
            Message::AutoAdvance => {
                if self.autoplay.is_active(self.items.len()) {
                    self.step(Direction::Next);
                }
                Effect::None
            }
            Message::ToggleAutoPlay => {
                self.autoplay.toggle();
                Effect::AutoPlayChanged(self.autoplay.is_enabled())
            }
        }
    }

    fn finish_drag(&mut self, released: bool) -> Effect {
        let offset = self
            .pointer
            .and_then(|position| self.drag.delta(position))
            .map(|delta| delta.x);
        self.drag.stop();

        let Some(offset) = offset else {
            return Effect::None;
        };

        if offset > SWIPE_THRESHOLD {
            self.step(Direction::Previous);
        } else if offset < -SWIPE_THRESHOLD {
            self.step(Direction::Next);
        } else if released && offset.abs() < CLICK_SLOP && !self.items.is_empty() {
            return Effect::Open(self.index);
        }
        Effect::None
    }

    fn step(&mut self, direction: Direction) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = match direction {
            Direction::Previous => (self.index + len - 1) % len,
            Direction::Next => (self.index + 1) % len,
        };
    }

    /// Auto-advance ticks while enabled with more than one slide.
    pub fn subscription(&self) -> Subscription<Message> {
        self.autoplay
            .subscription(self.items.len())
            .map(|_| Message::AutoAdvance)
    }

    #[must_use]
    pub fn items(&self) -> &Arc<[MediaItem]> {
        &self.items
    }

    #[must_use]
    pub fn current(&self) -> Option<&MediaItem> {
        self.items.get(self.index)
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
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn autoplay(&self) -> &AutoPlay {
        &self.autoplay
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }
}

/// Arrow keys step the carousel while no lightbox is open.
#[must_use]
pub fn key_message(key: &Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Message::Navigate(Direction::Previous)),
        Key::Named(Named::ArrowRight) => Some(Message::Navigate(Direction::Next)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> State {
        let items: Arc<[MediaItem]> = (0..n)
            .map(|i| MediaItem::image(format!("{i}.jpg")))
            .collect();
        State::new(items, AutoPlay::new(true, Duration::from_secs(5)))
    }

    fn drag(state: &mut State, from: f32, to: f32) -> Effect {
        state.handle(Message::DragMoved(Point::new(from, 10.0)));
        state.handle(Message::DragStarted);
        state.handle(Message::DragMoved(Point::new(to, 12.0)));
        state.handle(Message::DragEnded)
    }

    #[test]
    fn three_steps_wrap_to_start() {
        let mut state = carousel(3);
        for _ in 0..3 {
            state.handle(Message::Navigate(Direction::Next));
        }
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut state = carousel(3);
        state.handle(Message::Navigate(Direction::Previous));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn navigation_on_empty_carousel_is_noop() {
        let mut state = carousel(0);
        state.handle(Message::Navigate(Direction::Next));
        assert_eq!(state.index(), 0);
        assert!(state.current().is_none());
    }

    #[test]
    fn jump_to_ignores_out_of_range() {
        let mut state = carousel(3);
        state.handle(Message::JumpTo(2));
        assert_eq!(state.index(), 2);
        state.handle(Message::JumpTo(3));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn drag_right_past_threshold_goes_back() {
        let mut state = carousel(3);
        assert_eq!(drag(&mut state, 100.0, 160.0), Effect::None);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn drag_left_past_threshold_goes_forward() {
        let mut state = carousel(3);
        drag(&mut state, 200.0, 140.0);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn short_drag_does_nothing() {
        let mut state = carousel(3);
        assert_eq!(drag(&mut state, 100.0, 130.0), Effect::None);
        assert_eq!(state.index(), 0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn exactly_threshold_does_not_navigate() {
        let mut state = carousel(3);
        drag(&mut state, 100.0, 150.0);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn click_opens_current_slide() {
        let mut state = carousel(3);
        state.handle(Message::Navigate(Direction::Next));
        assert_eq!(drag(&mut state, 100.0, 101.0), Effect::Open(1));
    }

    #[test]
    fn cancelled_click_does_not_open() {
        let mut state = carousel(3);
        state.handle(Message::DragMoved(Point::new(10.0, 10.0)));
        state.handle(Message::DragStarted);
        assert_eq!(state.handle(Message::DragCancelled), Effect::None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = carousel(3);
        state.handle(Message::DragMoved(Point::new(10.0, 10.0)));
        assert_eq!(state.handle(Message::DragEnded), Effect::None);
    }

    #[test]
    fn autoplay_advances_only_when_enabled() {
        let mut state = carousel(3);
        state.handle(Message::AutoAdvance);
        assert_eq!(state.index(), 1);

        assert_eq!(
            state.handle(Message::ToggleAutoPlay),
            Effect::AutoPlayChanged(false)
        );
        assert!(!state.autoplay().is_enabled());
        state.handle(Message::AutoAdvance);
        assert_eq!(state.index(), 1);

        assert_eq!(
            state.handle(Message::ToggleAutoPlay),
            Effect::AutoPlayChanged(true)
        );
    }

    #[test]
    fn autoplay_needs_more_than_one_slide() {
        let autoplay = AutoPlay::new(true, Duration::from_secs(5));
        assert!(!autoplay.is_active(0));
        assert!(!autoplay.is_active(1));
        assert!(autoplay.is_active(2));
        assert!(!AutoPlay::new(false, Duration::from_secs(5)).is_active(5));
    }

    #[test]
    fn arrow_keys_navigate() {
        let none = keyboard::Modifiers::empty();
        assert!(matches!(
            key_message(&Key::Named(Named::ArrowRight), none),
            Some(Message::Navigate(Direction::Next))
        ));
        assert!(key_message(&Key::Named(Named::Escape), none).is_none());
    }
}
