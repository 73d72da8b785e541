use nalgebra::Scalar;

use crate::error::Result;
use crate::math::{BoolMatrix, BoolVector, CellMatrix, VertexIndex};

use super::{BoundaryParams, OnBoundary};

/// Matrix form of [`OnBoundary`].
///
/// Takes one cell per row (3 columns for triangles, 4 for tetrahedra) and
/// returns a per-cell boolean column plus a per-cell, per-local-face boolean
/// matrix of the same shape as the input. A matrix with no rows yields empty
/// outputs; a matrix with no columns is treated like any other unsupported
/// arity.
pub struct OnBoundaryMatrix<'a, I: Scalar> {
    cells: &'a CellMatrix<I>,
    params: BoundaryParams,
}

impl<'a, I: VertexIndex + Scalar> OnBoundaryMatrix<'a, I> {
    /// Creates a new `OnBoundaryMatrix` query with default parameters.
    #[must_use]
    pub fn new(cells: &'a CellMatrix<I>) -> Self {
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
    pub fn execute(&self) -> Result<(BoolVector, BoolMatrix)> {
        let rows: Vec<Vec<I>> = self
            .cells
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();

        let classification = OnBoundary::new(&rows).with_params(self.params).execute()?;

        let nrows = classification.cell_count();
        let ncols = classification.face_boundary.first().map_or(0, Vec::len);
        let flags = BoolMatrix::from_row_iterator(
            nrows,
            ncols,
            classification.face_boundary.iter().flatten().copied(),
        );

        Ok((BoolVector::from_vec(classification.any_boundary), flags))
    }
}
