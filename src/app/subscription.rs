// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions.
//!
//! Each timer is returned only while something needs it; dropping it from
//! [`App::subscription`](super::App) is how it gets cancelled.

use super::{HeaderCounter, Message};
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const COUNTER_FRAME: Duration = Duration::from_millis(16);

/// Keyboard shortcuts, plus the id of the main window from the first
/// window or pointer event that names it. Resizes also re-read the window
/// mode.
///
/// Keys already captured by a widget (text inputs, focused buttons) are not
/// forwarded.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        // Fullscreen toggled by the window manager shows up as a resize.
        event::Event::Window(window::Event::Resized(_)) => {
            Some(Message::WindowResized(window_id))
        }
        event::Event::Window(window::Event::Opened { .. } | window::Event::Focused)
        | event::Event::Mouse(mouse::Event::CursorEntered) => Some(Message::WindowSeen(window_id)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => Some(Message::KeyPressed { key, modifiers }),
                event::Status::Captured => None,
            }
        }
        _ => None,
    })
}

/// Toast expiry and the skeleton pulse share one slow tick.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Frame-rate tick while any header counter is still counting up.
pub fn create_counter_subscription(counters: &[HeaderCounter]) -> Subscription<Message> {
    if counters.iter().any(|(_, counter)| counter.is_animating()) {
        time::every(COUNTER_FRAME).map(Message::CounterTick)
    } else {
        Subscription::none()
    }
}
