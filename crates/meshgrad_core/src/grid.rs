//! Control-point lattice
//!
//! [`MeshGrid`] owns the grid dimensions and the lattice: a row-major sequence
//! of normalized points, one per grid line intersection. The lattice is
//! replaced wholesale on every dimension change; individual point moves are
//! in-place overwrites that survive only until the next regeneration.

use crate::error::{MeshError, Result};
use crate::geometry::Point;

/// Minimum number of grid lines along either axis
pub const MIN_LINES: u32 = 2;

/// Which axis a resize applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridAxis {
    Rows,
    Columns,
}

/// Grid line counts, both floored at [`MIN_LINES`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDimensions {
    rows: u32,
    cols: u32,
}

impl GridDimensions {
    /// Create dimensions, silently flooring both counts at [`MIN_LINES`]
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows: rows.max(MIN_LINES),
            cols: cols.max(MIN_LINES),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of lattice points (rows × cols)
    pub fn point_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Flat row-major index of the point at (row, col)
    pub fn index_of(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Apply a signed delta to one axis, flooring the result at [`MIN_LINES`]
    ///
    /// Underflow is clamped, never an error.
    pub fn adjusted(self, axis: GridAxis, delta: i32) -> Self {
        let bump = |count: u32| -> u32 {
            count
                .saturating_add_signed(delta)
                .max(MIN_LINES)
        };
        match axis {
            GridAxis::Rows => Self {
                rows: bump(self.rows),
                ..self
            },
            GridAxis::Columns => Self {
                cols: bump(self.cols),
                ..self
            },
        }
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

/// The control-point lattice and its dimensions
#[derive(Clone, Debug)]
pub struct MeshGrid {
    dims: GridDimensions,
    points: Vec<Point>,
}

impl MeshGrid {
    /// Create a grid with a regular lattice, flooring both counts at [`MIN_LINES`]
    pub fn new(rows: u32, cols: u32) -> Self {
        let dims = GridDimensions::new(rows, cols);
        let mut grid = Self {
            dims,
            points: Vec::new(),
        };
        grid.regenerate();
        grid
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// Lattice in row-major order, `index = row * cols + col`
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Resize one axis by a signed delta and rebuild the regular lattice
    ///
    /// The entire lattice is regenerated: any point previously repositioned
    /// with [`MeshGrid::move_point`] snaps back to its grid position.
    pub fn resize(&mut self, axis: GridAxis, delta: i32) {
        self.dims = self.dims.adjusted(axis, delta);
        tracing::debug!(
            rows = self.dims.rows(),
            cols = self.dims.cols(),
            "grid resized"
        );
        self.regenerate();
    }

    /// Rebuild the regular lattice for the current dimensions
    ///
    /// Deterministic and idempotent: point (r, c) lands at
    /// `(c / (cols - 1), r / (rows - 1))`, with a coordinate of 0 along any
    /// axis that has a single grid line.
    pub fn regenerate(&mut self) {
        let rows = self.dims.rows();
        let cols = self.dims.cols();

        let row_spacing = if rows > 1 {
            1.0 / (rows - 1) as f32
        } else {
            0.0
        };
        let col_spacing = if cols > 1 {
            1.0 / (cols - 1) as f32
        } else {
            0.0
        };

        self.points.clear();
        self.points.reserve(self.dims.point_count());
        for row in 0..rows {
            let y = row as f32 * row_spacing;
            for col in 0..cols {
                let x = col as f32 * col_spacing;
                self.points.push(Point::new(x, y));
            }
        }
    }

    /// Overwrite a single lattice entry in place
    ///
    /// Leaves every other entry untouched and does not trigger regeneration.
    /// Indices are only valid against the current lattice; one held across a
    /// resize is a caller bug and is reported as
    /// [`MeshError::PointOutOfRange`].
    pub fn move_point(&mut self, index: usize, position: Point) -> Result<()> {
        let slot = self
            .points
            .get_mut(index)
            .ok_or(MeshError::PointOutOfRange {
                index,
                rows: self.dims.rows(),
                cols: self.dims.cols(),
            })?;
        *slot = position;
        tracing::trace!(index, x = position.x, y = position.y, "point moved");
        Ok(())
    }
}

impl Default for MeshGrid {
    fn default() -> Self {
        Self::new(3, 3)
    }
}
