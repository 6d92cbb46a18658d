// SPDX-License-Identifier: MPL-2.0
//! User interface components and shared styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, consumes its `Message` in `handle` and reports side effects
//! as an `Effect` for the application to run.
//!
//! # Components
//!
//! - [`carousel`] - Featured slides with wraparound, swipe and auto-play
//! - [`lightbox`] - Full-window viewer with zoom, pan, download and share
//! - [`masonry`] - Responsive round-robin gallery columns
//! - [`counter`] - Count-up statistics for the header
//! - [`skeleton`] - Pulsing placeholders while the manifest loads
//! - [`notifications`] - Toast queue for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable interaction state (drag tracking, directions)
//! - [`image_tile`] - Image/placeholder rendering for one media item
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod counter;
pub mod design_tokens;
pub mod image_tile;
pub mod lightbox;
pub mod masonry;
pub mod notifications;
pub mod skeleton;
pub mod state;
pub mod styles;
pub mod theming;
