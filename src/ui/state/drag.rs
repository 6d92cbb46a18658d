// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a press-move-release gesture as a displacement from where it
//! started, added to whatever offset the dragged content had at that time.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the drag started
    pub start_position: Option<Point>,

    /// Content offset when the drag started
    pub start_offset: Option<Vector>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset: Vector) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Cursor displacement since the drag started.
    #[must_use]
    pub fn delta(&self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }
        Some(current_position - self.start_position?)
    }

    /// Content offset that follows the cursor: start offset plus displacement.
    #[must_use]
    pub fn calculate_offset(&self, current_position: Point) -> Option<Vector> {
        Some(self.start_offset? + self.delta(current_position)?)
    }
}
