//! Color table parallel to the lattice
//!
//! One color per lattice point, grouped into bands: every point sharing a
//! column index gets the same color. The table is filled column-band-major
//! (outer loop over columns, inner loop over rows), which deliberately
//! differs from the lattice's row-major point order — the flat sequence a
//! row-major renderer reads therefore shows the bands running across rows.
//! This asymmetry is inherited behavior and is preserved, not fixed.

use rand::Rng;

use crate::color::Color;
use crate::grid::GridDimensions;

/// The per-point color table
#[derive(Clone, Debug)]
pub struct ColorTable {
    colors: Vec<Color>,
}

impl ColorTable {
    /// Startup palette for the default 3×3 grid: blue, green, red bands
    pub fn preview() -> Self {
        let mut colors = Vec::with_capacity(9);
        for band in [Color::BLUE, Color::GREEN, Color::RED] {
            colors.extend([band; 3]);
        }
        Self { colors }
    }

    /// Random band colors for the given dimensions
    pub fn generate<R: Rng + ?Sized>(dims: GridDimensions, rng: &mut R) -> Self {
        let mut table = Self { colors: Vec::new() };
        table.regenerate(dims, rng);
        table
    }

    /// Flat color sequence, same length as the lattice it was generated for
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Replace the whole table: one random color per band, repeated down
    /// the band's rows
    ///
    /// Fill order is column-band-major (outer columns, inner rows). No color
    /// from the previous table survives.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, dims: GridDimensions, rng: &mut R) {
        self.colors.clear();
        self.colors.reserve(dims.point_count());
        for _ in 0..dims.cols() {
            let band = Color::random(rng);
            for _ in 0..dims.rows() {
                self.colors.push(band);
            }
        }
        tracing::debug!(
            bands = dims.cols(),
            len = self.colors.len(),
            "color table regenerated"
        );
    }
}
