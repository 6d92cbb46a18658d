// SPDX-License-Identifier: MPL-2.0
//! Small state primitives shared by the lightbox and the carousel.

pub mod drag;

pub use drag::DragState;

/// One step through a media sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}
