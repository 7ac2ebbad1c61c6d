//! Render boundary
//!
//! The rasterizer is an external collaborator: it takes a grid width and
//! height plus the parallel point/color arrays and produces a surface. This
//! module only defines the seam it reads through; nothing here draws.

use meshgrad_core::{Color, Point};

use crate::document::MeshDocument;

/// One renderable snapshot of the mesh
///
/// `points.len() == colors.len() == width * height`, points row-major in
/// normalized space.
#[derive(Clone, Copy, Debug)]
pub struct MeshFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub points: &'a [Point],
    pub colors: &'a [Color],
}

/// Anything a mesh-gradient rasterizer can consume
pub trait RenderSource {
    fn frame(&self) -> MeshFrame<'_>;
}

impl RenderSource for MeshDocument {
    fn frame(&self) -> MeshFrame<'_> {
        let dims = self.dimensions();
        let frame = MeshFrame {
            width: dims.cols(),
            height: dims.rows(),
            points: self.grid().points(),
            colors: self.colors(),
        };
        debug_assert_eq!(frame.points.len(), dims.point_count());
        debug_assert_eq!(frame.colors.len(), dims.point_count());
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dimensions_and_lengths() {
        let doc = MeshDocument::with_seed(4, 3, 0);
        let frame = doc.frame();
        assert_eq!(frame.width, 3);
        assert_eq!(frame.height, 4);
        assert_eq!(frame.points.len(), 12);
        assert_eq!(frame.colors.len(), 12);
    }

    #[test]
    fn test_frame_tracks_mutations() {
        let mut doc = MeshDocument::with_seed(3, 3, 1);
        doc.drag_point(2, Point::new(0.9, 0.1)).unwrap();
        doc.add_column();

        let frame = doc.frame();
        assert_eq!(frame.width, 4);
        assert_eq!(frame.points.len(), frame.colors.len());
        // The resize rebuilt the lattice, so the dragged point is gone.
        assert_eq!(frame.points[2], Point::new(2.0 / 3.0, 0.0));
    }
}
