//! Mesh Gradient Core
//!
//! This crate provides the data model for a 2D mesh gradient:
//!
//! - **MeshGrid**: the control-point lattice in normalized [0,1]×[0,1] space
//! - **ColorTable**: one color per lattice point, assigned in column bands
//! - **Geometry/Color primitives**: the types the render boundary consumes
//!
//! The lattice is row-major (`index = row * cols + col`) and is rebuilt from
//! scratch whenever the dimensions change; the color table is regenerated
//! independently on the same trigger, keeping the two parallel arrays equal
//! in length.
//!
//! # Example
//!
//! ```rust
//! use meshgrad_core::{ColorTable, GridAxis, MeshGrid, Point};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut grid = MeshGrid::new(3, 3);
//! let mut rng = StdRng::seed_from_u64(0);
//! let mut colors = ColorTable::generate(grid.dimensions(), &mut rng);
//!
//! // Drag the center point toward the top-left corner.
//! grid.move_point(4, Point::new(0.2, 0.2)).unwrap();
//!
//! // Adding a row rebuilds the lattice and the palette.
//! grid.resize(GridAxis::Rows, 1);
//! colors.regenerate(grid.dimensions(), &mut rng);
//! assert_eq!(grid.points().len(), colors.len());
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod palette;

pub use color::Color;
pub use error::{MeshError, Result};
pub use geometry::{Point, Size};
pub use grid::{GridAxis, GridDimensions, MeshGrid, MIN_LINES};
pub use palette::ColorTable;
