use thiserror::Error;

/// Top-level error type for meshbound.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshboundError {
    #[error(transparent)]
    Cell(#[from] CellError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors related to the shape of the input cell list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellError {
    #[error("unsupported cell arity {arity} (expected 3 or 4)")]
    UnsupportedArity { arity: usize },

    #[error("cell {cell} has {actual} vertices, expected {expected}")]
    InconsistentArity {
        cell: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors related to mesh connectivity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("non-manifold mesh: face {local_face} of cell {cell} occurs {count} times")]
    NonManifold {
        cell: usize,
        local_face: usize,
        count: usize,
    },
}

/// Convenience type alias for results using [`MeshboundError`].
pub type Result<T> = std::result::Result<T, MeshboundError>;
