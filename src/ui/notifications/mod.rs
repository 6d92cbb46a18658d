// SPDX-License-Identifier: MPL-2.0
//! Transient toasts for downloads, shares and load failures.
//!
//! Components never push toasts themselves; the app turns effects and task
//! results into [`Notification`]s and hands them to the [`Manager`].

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
