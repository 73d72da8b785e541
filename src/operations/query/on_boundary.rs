use tracing::{debug, trace, warn};

use crate::error::{CellError, Result, TopologyError};
use crate::math::VertexIndex;
use crate::topology::CellKind;

use super::{ArityPolicy, BoundaryParams, FaceOccurrences, ManifoldPolicy};

/// Per-cell and per-face boundary flags of a mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryClassification {
    /// `true` for every cell with at least one face on the boundary.
    pub any_boundary: Vec<bool>,
    /// One row per cell, one column per local face; `true` for boundary faces.
    pub face_boundary: Vec<Vec<bool>>,
    /// `(cell, local_face)` pairs whose face is shared by more than two cells.
    /// Only filled under [`ManifoldPolicy::Relaxed`].
    pub non_manifold: Vec<(usize, usize)>,
}

impl BoundaryClassification {
    /// Returns `true` if no cell was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.any_boundary.is_empty()
    }

    /// Number of classified cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.any_boundary.len()
    }

    /// Total number of boundary faces over all cells.
    #[must_use]
    pub fn boundary_face_count(&self) -> usize {
        self.face_boundary
            .iter()
            .map(|row| row.iter().filter(|&&b| b).count())
            .sum()
    }

    /// Indices of the cells touching the boundary, in ascending order.
    #[must_use]
    pub fn boundary_cells(&self) -> Vec<usize> {
        self.any_boundary
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect()
    }
}

/// Determines which faces of a triangle or tetrahedral mesh lie on its boundary.
///
/// A face is on the boundary when no other cell shares it. For triangle cells
/// the faces are edges; for tetrahedra they are triangles. Face `j` of a cell
/// is the one opposite its vertex `j`, see
/// [`LOCAL_TRIANGLE_FACES`](crate::topology::LOCAL_TRIANGLE_FACES) and
/// [`LOCAL_TETRAHEDRON_FACES`](crate::topology::LOCAL_TETRAHEDRON_FACES).
///
/// An empty cell list yields an empty classification. Cells of any other arity
/// yield an empty classification as well, unless [`ArityPolicy::Reject`] is set.
pub struct OnBoundary<'a, I> {
    cells: &'a [Vec<I>],
    params: BoundaryParams,
}

impl<'a, I: VertexIndex> OnBoundary<'a, I> {
    /// Creates a new `OnBoundary` query with default parameters.
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
    /// Returns [`CellError::InconsistentArity`] if the cells do not all have the
    /// same number of vertices, [`CellError::UnsupportedArity`] for non-simplex
    /// cells under [`ArityPolicy::Reject`], and [`TopologyError::NonManifold`]
    /// for a face shared by more than two cells under [`ManifoldPolicy::Strict`].
    pub fn execute(&self) -> Result<BoundaryClassification> {
        let Some(first) = self.cells.first() else {
            return Ok(BoundaryClassification::default());
        };

        let Some(kind) = CellKind::from_arity(first.len()) else {
            return match self.params.arity {
                ArityPolicy::Ignore => {
                    warn!(arity = first.len(), "ignoring cells of unsupported arity");
                    Ok(BoundaryClassification::default())
                }
                ArityPolicy::Reject => Err(CellError::UnsupportedArity {
                    arity: first.len(),
                }
                .into()),
            };
        };

        if let Some((cell, c)) = self
            .cells
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != kind.arity())
        {
            return Err(CellError::InconsistentArity {
                cell,
                expected: kind.arity(),
                actual: c.len(),
            }
            .into());
        }

        let faces: Vec<Vec<I>> = self
            .cells
            .iter()
            .flat_map(|cell| kind.local_faces(cell).into_iter().flatten())
            .collect();
        trace!(?kind, faces = faces.len(), "enumerated local faces");

        let counts = FaceOccurrences::new(&faces).execute();
        let per_cell = kind.faces_per_cell();

        let mut result = BoundaryClassification {
            any_boundary: Vec::with_capacity(self.cells.len()),
            face_boundary: Vec::with_capacity(self.cells.len()),
            non_manifold: Vec::new(),
        };

        for (cell, cell_counts) in counts.chunks_exact(per_cell).enumerate() {
            let mut row = Vec::with_capacity(per_cell);
            for (local_face, &count) in cell_counts.iter().enumerate() {
                match (count, self.params.manifold) {
                    (1, _) => row.push(true),
                    (2, _) => row.push(false),
                    (_, ManifoldPolicy::Strict) => {
                        return Err(TopologyError::NonManifold {
                            cell,
                            local_face,
                            count,
                        }
                        .into());
                    }
                    (_, ManifoldPolicy::Relaxed) => {
                        result.non_manifold.push((cell, local_face));
                        row.push(false);
                    }
                }
            }
            result.any_boundary.push(row.contains(&true));
            result.face_boundary.push(row);
        }

        if !result.non_manifold.is_empty() {
            warn!(
                faces = result.non_manifold.len(),
                "non-manifold faces treated as interior"
            );
        }
        debug!(
            ?kind,
            cells = result.cell_count(),
            boundary_faces = result.boundary_face_count(),
            "classified mesh boundary"
        );

        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MeshboundError;

    fn classify(cells: &[Vec<u32>]) -> BoundaryClassification {
        OnBoundary::new(cells).execute().unwrap()
    }

    /// Octahedron surface: closed, every edge shared by two triangles.
    fn octahedron() -> Vec<Vec<u32>> {
        vec![
            vec![0, 2, 4],
            vec![2, 1, 4],
            vec![1, 3, 4],
            vec![3, 0, 4],
            vec![2, 0, 5],
            vec![1, 2, 5],
            vec![3, 1, 5],
            vec![0, 3, 5],
        ]
    }

    #[test]
    fn empty_input() {
        let result = classify(&[]);
        assert!(result.is_empty());
        assert!(result.face_boundary.is_empty());
    }

    #[test]
    fn single_triangle() {
        let result = classify(&[vec![0, 1, 2]]);
        assert_eq!(result.any_boundary, vec![true]);
        assert_eq!(result.face_boundary, vec![vec![true, true, true]]);
    }

    #[test]
    fn two_triangles_sharing_an_edge() {
        let result = classify(&[vec![0, 1, 2], vec![1, 2, 3]]);
        assert_eq!(result.any_boundary, vec![true, true]);
        // Edge (1,2) is face 0 of the first cell and face 2 of the second.
        assert_eq!(
            result.face_boundary,
            vec![vec![false, true, true], vec![true, true, false]]
        );
        assert_eq!(result.boundary_face_count(), 4);
    }

    #[test]
    fn closed_surface_has_no_boundary() {
        let result = classify(&octahedron());
        assert_eq!(result.cell_count(), 8);
        assert!(result.any_boundary.iter().all(|&b| !b));
        assert!(result.boundary_cells().is_empty());
    }

    #[test]
    fn open_surface_boundary_cells() {
        let mut cells = octahedron();
        cells.truncate(4);
        let result = classify(&cells);
        assert_eq!(result.boundary_cells(), vec![0, 1, 2, 3]);
        // The four-triangle pyramid fan is bounded by the square 0-2-1-3.
        assert_eq!(result.boundary_face_count(), 4);
        for row in &result.face_boundary {
            assert_eq!(row, &vec![false, false, true]);
        }
    }

    #[test]
    fn single_tetrahedron() {
        let result = OnBoundary::new(&[vec![0_i32, 1, 2, 3]]).execute().unwrap();
        assert_eq!(result.any_boundary, vec![true]);
        assert_eq!(result.face_boundary, vec![vec![true; 4]]);
    }

    #[test]
    fn two_tetrahedra_sharing_a_face() {
        let cells = vec![vec![0_usize, 1, 2, 3], vec![1, 2, 3, 4]];
        let result = OnBoundary::new(&cells).execute().unwrap();
        assert_eq!(
            result.face_boundary,
            vec![vec![false, true, true, true], vec![true, true, true, false]]
        );
        assert_eq!(result.any_boundary, vec![true, true]);
    }

    #[test]
    fn unsupported_arity_is_ignored_by_default() {
        let result = classify(&[vec![0, 1, 2, 3, 4]]);
        assert!(result.is_empty());
        assert!(result.face_boundary.is_empty());
    }

    #[test]
    fn unsupported_arity_can_be_rejected() {
        let params = BoundaryParams {
            arity: ArityPolicy::Reject,
            ..BoundaryParams::default()
        };
        let err = OnBoundary::new(&[vec![0_u32, 1]])
            .with_params(params)
            .execute()
            .unwrap_err();
        assert_eq!(
            err,
            MeshboundError::Cell(CellError::UnsupportedArity { arity: 2 })
        );
    }

    #[test]
    fn mixed_arity_is_an_error() {
        let err = OnBoundary::new(&[vec![0_u32, 1, 2], vec![0, 1, 2, 3]])
            .execute()
            .unwrap_err();
        assert_eq!(
            err,
            MeshboundError::Cell(CellError::InconsistentArity {
                cell: 1,
                expected: 3,
                actual: 4,
            })
        );
    }

    #[test]
    fn fin_edge_is_rejected_when_strict() {
        let cells = vec![vec![0_u32, 1, 2], vec![1, 0, 3], vec![0, 1, 4]];
        let err = OnBoundary::new(&cells).execute().unwrap_err();
        assert_eq!(
            err,
            MeshboundError::Topology(TopologyError::NonManifold {
                cell: 0,
                local_face: 2,
                count: 3,
            })
        );
    }

    #[test]
    fn fin_edge_is_reported_when_relaxed() {
        let cells = vec![vec![0_u32, 1, 2], vec![1, 0, 3], vec![0, 1, 4]];
        let params = BoundaryParams {
            manifold: ManifoldPolicy::Relaxed,
            ..BoundaryParams::default()
        };
        let result = OnBoundary::new(&cells).with_params(params).execute().unwrap();
        assert_eq!(result.non_manifold, vec![(0, 2), (1, 2), (2, 2)]);
        for row in &result.face_boundary {
            assert_eq!(row, &vec![true, true, false]);
        }
        assert_eq!(result.any_boundary, vec![true; 3]);
    }

    /// Three tetrahedra hinged on the triangle (0, 1, 2).
    fn tetrahedron_fan() -> Vec<Vec<u32>> {
        vec![vec![0, 1, 2, 3], vec![0, 1, 2, 4], vec![0, 1, 2, 5]]
    }

    #[test]
    fn shared_tetrahedron_face_is_rejected_when_strict() {
        let err = OnBoundary::new(&tetrahedron_fan()).execute().unwrap_err();
        assert_eq!(
            err,
            MeshboundError::Topology(TopologyError::NonManifold {
                cell: 0,
                local_face: 3,
                count: 3,
            })
        );
    }

    #[test]
    fn shared_tetrahedron_face_is_reported_when_relaxed() {
        let params = BoundaryParams {
            manifold: ManifoldPolicy::Relaxed,
            ..BoundaryParams::default()
        };
        let result = OnBoundary::new(&tetrahedron_fan())
            .with_params(params)
            .execute()
            .unwrap();
        assert_eq!(result.non_manifold, vec![(0, 3), (1, 3), (2, 3)]);
        for row in &result.face_boundary {
            assert_eq!(row, &vec![true, true, true, false]);
        }
        assert_eq!(result.boundary_face_count(), 9);
    }

    #[test]
    fn repeated_calls_agree() {
        let cells = octahedron();
        assert_eq!(classify(&cells[..5]), classify(&cells[..5]));
    }

    #[test]
    fn input_is_not_modified() {
        let cells = vec![vec![2_u32, 1, 0]];
        let before = cells.clone();
        let _ = classify(&cells);
        assert_eq!(cells, before);
    }
}
