// SPDX-License-Identifier: MPL-2.0
//! A single toast: severity, localized message key and its arguments.
//!
//! Identifiers are handed out by the [`Manager`](super::Manager) so two
//! showcase windows never share a counter.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub(super) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Leading glyph shown in the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }

    /// Errors stay until dismissed.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    lifetime: Option<Duration>,
    shown_at: Instant,
}

impl Notification {
    #[must_use]
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId(0),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            lifetime: severity.lifetime(),
            shown_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    #[must_use]
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    #[must_use]
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    #[must_use]
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument such as `("path", "/tmp/a.jpg")`.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Option<Duration>) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub(super) fn assign(&mut self, id: NotificationId, now: Instant) {
        self.id = id;
        self.shown_at = now;
    }

    /// Restarts the lifetime when a queued toast becomes visible.
    pub(super) fn reveal(&mut self, now: Instant) {
        self.shown_at = now;
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.lifetime
            .is_some_and(|lifetime| now.saturating_duration_since(self.shown_at) >= lifetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_never_expire() {
        let n = Notification::error("notification-manifest-error");
        let later = Instant::now() + Duration::from_secs(3600);
        assert!(!n.is_expired(later));
    }

    #[test]
    fn info_expires_after_three_seconds() {
        let mut n = Notification::info("share-link-copied");
        let start = Instant::now();
        n.assign(NotificationId(1), start);
        assert!(!n.is_expired(start + Duration::from_millis(2900)));
        assert!(n.is_expired(start + Duration::from_secs(3)));
    }

    #[test]
    fn custom_lifetime_overrides_severity() {
        let mut n = Notification::warning("notification-config-load-error")
            .with_lifetime(Some(Duration::from_secs(1)));
        let start = Instant::now();
        n.assign(NotificationId(2), start);
        assert!(n.is_expired(start + Duration::from_secs(1)));
    }

    #[test]
    fn arguments_keep_insertion_order() {
        let n = Notification::success("download-saved")
            .with_arg("path", "/tmp/a.jpg")
            .with_arg("name", "a.jpg");
        assert_eq!(n.message_args()[0].0, "path");
        assert_eq!(n.message_args()[1].1, "a.jpg");
    }

    #[test]
    fn severities_have_distinct_colors() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
