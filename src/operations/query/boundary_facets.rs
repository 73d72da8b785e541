use crate::error::Result;
use crate::math::VertexIndex;
use crate::topology::CellKind;

use super::{BoundaryParams, OnBoundary};

/// Collects the boundary faces of a triangle or tetrahedral mesh.
///
/// Each face keeps the vertex order of its owning cell's local face. For a
/// consistently oriented tetrahedral mesh the triangles are wound outward when
/// every cell has negative signed volume and inward when it is positive (see
/// [`LOCAL_TETRAHEDRON_FACES`](crate::topology::LOCAL_TETRAHEDRON_FACES)). A
/// consistently oriented triangle mesh yields its boundary loops' edges in
/// traversal direction. Faces are ordered by cell, then by local face.
pub struct BoundaryFacets<'a, I> {
    cells: &'a [Vec<I>],
    params: BoundaryParams,
}

impl<'a, I: VertexIndex> BoundaryFacets<'a, I> {
    /// Creates a new `BoundaryFacets` query with default parameters.
    #[must_use]
    pub fn new(cells: &'a [Vec<I>]) -> Self {
        Self {
            cells,
            params: BoundaryParams::default(),
        }
    }

    /// Sets custom classification parameters.
    #[must_use]
    pub fn with_params(mut self, params: BoundaryParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`OnBoundary::execute`].
    pub fn execute(&self) -> Result<Vec<Vec<I>>> {
        let classification = OnBoundary::new(self.cells)
            .with_params(self.params)
            .execute()?;

        let Some(kind) = self
            .cells
            .first()
            .and_then(|cell| CellKind::from_arity(cell.len()))
        else {
            return Ok(Vec::new());
        };

        let facets = self
            .cells
            .iter()
            .zip(&classification.face_boundary)
            .flat_map(|(cell, row)| {
                kind.local_faces(cell)
                    .into_iter()
                    .flatten()
                    .zip(row)
                    .filter_map(|(face, &on_boundary)| on_boundary.then_some(face))
            })
            .collect();

        Ok(facets)
    }
}
