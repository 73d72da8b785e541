mod boundary_facets;
mod face_occurrences;
mod on_boundary;
mod on_boundary_matrix;

pub use boundary_facets::BoundaryFacets;
pub use face_occurrences::FaceOccurrences;
pub use on_boundary::{BoundaryClassification, OnBoundary};
pub use on_boundary_matrix::OnBoundaryMatrix;

/// What to do with cells that are neither triangles nor tetrahedra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArityPolicy {
    /// Return empty outputs without doing any work.
    #[default]
    Ignore,
    /// Fail with [`CellError::UnsupportedArity`](crate::error::CellError::UnsupportedArity).
    Reject,
}

/// What to do with faces shared by more than two cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ManifoldPolicy {
    /// Fail with [`TopologyError::NonManifold`](crate::error::TopologyError::NonManifold)
    /// on the first offending face.
    #[default]
    Strict,
    /// Treat offending faces as not on the boundary and report them in
    /// [`BoundaryClassification::non_manifold`].
    Relaxed,
}

/// Parameters controlling boundary classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryParams {
    /// Handling of unsupported cell arities.
    pub arity: ArityPolicy,
    /// Handling of non-manifold faces.
    pub manifold: ManifoldPolicy,
}
