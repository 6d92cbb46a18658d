// SPDX-License-Identifier: MPL-2.0
//! `iced_showcase` is an animated media showcase built with the Iced GUI
//! framework.
//!
//! A TOML manifest lists photos and videos. They are presented under a
//! particle-field header as a featured carousel and a masonry gallery, with a
//! lightbox for zooming, panning, downloading and sharing a single item.

pub mod app;
pub mod config;
pub mod effects;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
