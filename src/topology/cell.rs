use crate::math::VertexIndex;

/// Local faces of a triangle, as positions into the cell.
///
/// Face `j` is the edge opposite vertex `j`. Two consistently oriented
/// triangles sharing an edge emit it with opposite direction.
pub static LOCAL_TRIANGLE_FACES: [[usize; 2]; 3] = [[1, 2], [2, 0], [0, 1]];

/// Local faces of a tetrahedron, as positions into the cell.
///
/// Face `j` is the triangle opposite vertex `j`. With the right-hand rule, its
/// normal points towards vertex `j` when `det(v1 - v0, v2 - v0, v3 - v0) > 0`,
/// so the faces are outward-wound for cells of negative signed volume.
pub static LOCAL_TETRAHEDRON_FACES: [[usize; 3]; 4] =
    [[1, 3, 2], [0, 2, 3], [0, 3, 1], [0, 1, 2]];

/// The kind of cell making up a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// A triangle; its faces are edges.
    Triangle,
    /// A tetrahedron; its faces are triangles.
    Tetrahedron,
}

impl CellKind {
    /// Returns the cell kind with the given number of vertices, if supported.
    #[must_use]
    pub fn from_arity(arity: usize) -> Option<Self> {
        match arity {
            3 => Some(Self::Triangle),
            4 => Some(Self::Tetrahedron),
            _ => None,
        }
    }

    /// Number of vertices per cell.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Triangle => 3,
            Self::Tetrahedron => 4,
        }
    }

    /// Number of faces per cell. A simplex has one face opposite each vertex.
    #[must_use]
    pub const fn faces_per_cell(self) -> usize {
        self.arity()
    }

    /// Number of vertices per face.
    #[must_use]
    pub const fn face_arity(self) -> usize {
        self.arity() - 1
    }

    /// Returns the local vertex positions of face `local_face`, or `None` if
    /// the index is out of range.
    #[must_use]
    pub fn local_face(self, local_face: usize) -> Option<&'static [usize]> {
        match self {
            Self::Triangle => LOCAL_TRIANGLE_FACES.get(local_face).map(<[usize; 2]>::as_slice),
            Self::Tetrahedron => LOCAL_TETRAHEDRON_FACES
                .get(local_face)
                .map(<[usize; 3]>::as_slice),
        }
    }

    /// Enumerates the faces of `cell` in canonical local order.
    ///
    /// Returns `None` unless `cell` holds exactly [`arity`](Self::arity) vertices.
    pub fn local_faces<I: VertexIndex>(
        self,
        cell: &[I],
    ) -> Option<impl Iterator<Item = Vec<I>> + '_> {
        if cell.len() != self.arity() {
            return None;
        }
        Some(
            (0..self.faces_per_cell())
                .filter_map(move |j| self.local_face(j))
                .filter_map(move |positions| {
                    positions
                        .iter()
                        .map(|&p| cell.get(p).copied())
                        .collect::<Option<Vec<I>>>()
                }),
        )
    }
}
