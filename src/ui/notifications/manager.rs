// SPDX-License-Identifier: MPL-2.0
//! Toast queue: at most [`MAX_VISIBLE`] on screen, the rest wait in order.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Expire toasts whose lifetime ended before this instant.
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    /// Waiting for a free slot, oldest first.
    queue: VecDeque<Notification>,
    next_id: u64,
}

impl Manager {
    /// Creates an empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a notification stamped with the current time and returns the
    /// id it was given.
    ///
    /// It is shown at once if fewer than [`MAX_VISIBLE`] toasts are up,
    /// otherwise it waits in the queue. Warnings and errors are also logged.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.push_at(notification, Instant::now())
    }

    /// Same as [`Manager::push`] with an explicit clock reading.
    pub fn push_at(&mut self, mut notification: Notification, now: Instant) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        notification.assign(id, now);

        match notification.severity() {
            Severity::Warning | Severity::Error => {
                log::warn!("toast {}: {}", id.0, notification.message_key());
            }
            Severity::Success | Severity::Info => {
                log::debug!("toast {}: {}", id.0, notification.message_key());
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
        id
    }

    /// Dismisses a notification, visible or queued, by its ID.
    ///
    /// Returns `true` if the id was known.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote(Instant::now());
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts and fills the freed slots from the queue.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote(now);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Returns the currently visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.reveal(now);
            self.visible.push_back(notification);
        }
    }
}
