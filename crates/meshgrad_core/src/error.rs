//! Error types for meshgrad_core

use thiserror::Error;

/// Errors that can occur when mutating the mesh model
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// A point index derived from a stale lattice was used after a resize
    #[error("point index {index} out of range for a {rows}x{cols} lattice")]
    PointOutOfRange {
        index: usize,
        rows: u32,
        cols: u32,
    },
}

/// Result type for meshgrad operations
pub type Result<T> = std::result::Result<T, MeshError>;
