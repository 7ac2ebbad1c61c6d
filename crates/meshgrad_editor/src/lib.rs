//! Mesh Gradient Editor State
//!
//! Interaction and document layer on top of [`meshgrad_core`]:
//!
//! - **MeshDocument**: owned model object with explicit change notification
//! - **DragController**: routes continuous pointer updates onto the lattice
//! - **RenderSource**: the seam an external rasterizer reads frames through
//!
//! Everything here is single-threaded and synchronous, invoked by the host
//! view in direct response to input events; no operation blocks or spawns
//! work.
//!
//! # Example
//!
//! ```rust
//! use meshgrad_core::{Point, Size};
//! use meshgrad_editor::{DragController, MeshDocument, RenderSource};
//!
//! let mut doc = MeshDocument::with_seed(3, 3, 0);
//! let mut drag = DragController::new();
//! let container = Size::new(400.0, 400.0);
//!
//! // A drag update lands in the lattice immediately.
//! drag.on_drag(&mut doc, 4, Point::new(100.0, 100.0), container).unwrap();
//!
//! // The next frame the rasterizer pulls already sees it.
//! let frame = doc.frame();
//! assert_eq!(frame.points[4], Point::new(0.25, 0.25));
//! ```

pub mod controller;
pub mod document;
pub mod render;

pub use controller::{clamp_to_unit, to_screen, DragController};
pub use document::{ChangeListener, DocumentChange, ListenerId, MeshDocument};
pub use render::{MeshFrame, RenderSource};
