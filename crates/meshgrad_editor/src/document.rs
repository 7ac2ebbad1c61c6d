//! Owned editor document
//!
//! [`MeshDocument`] is the explicit model object the view layer holds: it
//! owns the lattice, the color table, and the palette RNG, applies every
//! mutating operation, and then notifies registered listeners so the host
//! can schedule a rebuild. There is no implicit reactivity; each mutation
//! ends in exactly one notification.

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

use meshgrad_core::{Color, ColorTable, GridAxis, GridDimensions, MeshGrid, Point, Result};

/// What a notification is reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentChange {
    /// Dimensions changed; lattice and palette were both rebuilt
    Resized(GridDimensions),
    /// One lattice point was overwritten
    PointMoved { index: usize },
    /// Palette was regenerated without a dimension change
    PaletteShuffled,
}

/// Callback invoked after each mutating operation
///
/// Uses Rc since the editor is single-threaded and cooperative with the host
/// UI event loop.
pub type ChangeListener = Rc<dyn Fn(DocumentChange)>;

/// Handle for removing a registered listener
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(usize);

/// The mesh-gradient document: lattice + palette + change notification
pub struct MeshDocument {
    grid: MeshGrid,
    colors: ColorTable,
    rng: StdRng,
    listeners: SmallVec<[(ListenerId, ChangeListener); 2]>,
    next_listener: usize,
}

impl MeshDocument {
    /// Document with the startup 3×3 grid and the blue/green/red preview palette
    pub fn new() -> Self {
        Self {
            grid: MeshGrid::new(3, 3),
            colors: ColorTable::preview(),
            rng: StdRng::from_entropy(),
            listeners: SmallVec::new(),
            next_listener: 0,
        }
    }

    /// Document with arbitrary dimensions and a seeded palette RNG
    ///
    /// The palette is generated immediately from the seed, so two documents
    /// built with the same arguments are identical.
    pub fn with_seed(rows: u32, cols: u32, seed: u64) -> Self {
        let grid = MeshGrid::new(rows, cols);
        let mut rng = StdRng::seed_from_u64(seed);
        let colors = ColorTable::generate(grid.dimensions(), &mut rng);
        Self {
            grid,
            colors,
            rng,
            listeners: SmallVec::new(),
            next_listener: 0,
        }
    }

    pub fn grid(&self) -> &MeshGrid {
        &self.grid
    }

    pub fn colors(&self) -> &[Color] {
        self.colors.colors()
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    /// Register a change listener; returns a handle for removal
    pub fn on_change(&mut self, listener: ChangeListener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a previously registered listener
    pub fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    pub fn add_row(&mut self) {
        self.resize(GridAxis::Rows, 1);
    }

    pub fn remove_row(&mut self) {
        self.resize(GridAxis::Rows, -1);
    }

    pub fn add_column(&mut self) {
        self.resize(GridAxis::Columns, 1);
    }

    pub fn remove_column(&mut self) {
        self.resize(GridAxis::Columns, -1);
    }

    /// Resize one axis, floored at two lines, rebuilding lattice and palette
    ///
    /// Any point previously repositioned by a drag snaps back to the regular
    /// grid: a resize is a wholesale reset, not an incremental edit.
    pub fn resize(&mut self, axis: GridAxis, delta: i32) {
        self.grid.resize(axis, delta);
        let dims = self.grid.dimensions();
        self.colors.regenerate(dims, &mut self.rng);
        debug_assert_eq!(self.grid.points().len(), self.colors.len());
        self.notify(DocumentChange::Resized(dims));
    }

    /// Overwrite one lattice point with an already-normalized position
    pub fn drag_point(&mut self, index: usize, position: Point) -> Result<()> {
        self.grid.move_point(index, position)?;
        self.notify(DocumentChange::PointMoved { index });
        Ok(())
    }

    /// Redraw the palette for the current dimensions
    pub fn shuffle_palette(&mut self) {
        self.colors.regenerate(self.grid.dimensions(), &mut self.rng);
        debug_assert_eq!(self.grid.points().len(), self.colors.len());
        self.notify(DocumentChange::PaletteShuffled);
    }

    fn notify(&self, change: DocumentChange) {
        for (_, listener) in &self.listeners {
            listener(change);
        }
    }
}

impl Default for MeshDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_new_matches_startup_state() {
        let doc = MeshDocument::new();
        assert_eq!(doc.dimensions(), GridDimensions::new(3, 3));
        assert_eq!(doc.grid().points().len(), 9);
        assert_eq!(doc.colors(), ColorTable::preview().colors());
    }

    #[test]
    fn test_arrays_stay_parallel_across_resizes() {
        let mut doc = MeshDocument::with_seed(3, 3, 11);
        doc.add_row();
        assert_eq!(doc.grid().points().len(), doc.colors().len());
        doc.add_column();
        assert_eq!(doc.grid().points().len(), doc.colors().len());
        doc.remove_row();
        assert_eq!(doc.grid().points().len(), doc.colors().len());
    }

    #[test]
    fn test_remove_floors_at_two() {
        let mut doc = MeshDocument::with_seed(2, 2, 0);
        doc.remove_row();
        doc.remove_column();
        assert_eq!(doc.dimensions(), GridDimensions::new(2, 2));
        assert_eq!(doc.colors().len(), 4);
    }

    #[test]
    fn test_resize_replaces_palette() {
        let mut doc = MeshDocument::with_seed(3, 3, 5);
        let before = doc.colors().to_vec();
        doc.add_column();
        assert_ne!(doc.colors(), &before[..]);
    }

    #[test]
    fn test_each_mutation_notifies_once() {
        let mut doc = MeshDocument::with_seed(3, 3, 7);
        let seen: Rc<RefCell<Vec<DocumentChange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        doc.on_change(Rc::new(move |change| sink.borrow_mut().push(change)));

        doc.add_row();
        doc.drag_point(0, Point::new(0.1, 0.2)).unwrap();
        doc.shuffle_palette();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], DocumentChange::Resized(GridDimensions::new(4, 3)));
        assert_eq!(seen[1], DocumentChange::PointMoved { index: 0 });
        assert_eq!(seen[2], DocumentChange::PaletteShuffled);
    }

    #[test]
    fn test_removed_listener_stops_firing() {
        let mut doc = MeshDocument::with_seed(3, 3, 7);
        let count = Rc::new(RefCell::new(0u32));
        let sink = count.clone();
        let id = doc.on_change(Rc::new(move |_| *sink.borrow_mut() += 1));

        doc.shuffle_palette();
        doc.remove_listener(id);
        doc.shuffle_palette();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_seeded_documents_are_identical() {
        let a = MeshDocument::with_seed(4, 5, 99);
        let b = MeshDocument::with_seed(4, 5, 99);
        assert_eq!(a.colors(), b.colors());
        assert_eq!(a.grid().points(), b.grid().points());
    }
}
