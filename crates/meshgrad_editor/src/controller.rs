//! Pointer-to-lattice coordinate mapping and drag tracking
//!
//! The host view reports drag locations in container pixel space; the model
//! only ever stores normalized coordinates. [`clamp_to_unit`] and
//! [`to_screen`] are the two directions of that mapping, and
//! [`DragController`] routes continuous drag updates onto the document.

use meshgrad_core::{Point, Result, Size};

use crate::document::MeshDocument;

/// Map a raw container-space location to a normalized position in [0,1]×[0,1]
///
/// Locations outside the container are clamped, never rejected. A container
/// with a zero (or negative) dimension clamps that axis to 0 rather than
/// dividing by zero.
pub fn clamp_to_unit(raw: Point, container: Size) -> Point {
    let axis = |value: f32, extent: f32| -> f32 {
        if extent > 0.0 {
            (value / extent).clamp(0.0, 1.0)
        } else {
            0.0
        }
    };
    Point::new(axis(raw.x, container.width), axis(raw.y, container.height))
}

/// Map a normalized position back to container pixel space
pub fn to_screen(normalized: Point, container: Size) -> Point {
    Point::new(
        normalized.x * container.width,
        normalized.y * container.height,
    )
}

/// Per-point drag state: idle until a drag begins, dragging until it ends
///
/// Dragging ends implicitly when the input device stops sending updates;
/// [`DragController::end_drag`] only clears the active-point marker the view
/// uses for hit feedback.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<usize>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the point currently being dragged, if any
    pub fn active_point(&self) -> Option<usize> {
        self.active
    }

    /// Handle one drag-update event for the point at `index`
    ///
    /// Invoked on every update, not just on release: the location is clamped
    /// into the unit square and written straight into the lattice, so the
    /// next render reads the latest position.
    pub fn on_drag(
        &mut self,
        doc: &mut MeshDocument,
        index: usize,
        raw: Point,
        container: Size,
    ) -> Result<()> {
        self.active = Some(index);
        doc.drag_point(index, clamp_to_unit(raw, container))
    }

    /// Mark the active drag as finished
    pub fn end_drag(&mut self) {
        if let Some(index) = self.active.take() {
            tracing::trace!(index, "drag ended");
        }
    }
}
