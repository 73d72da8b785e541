use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::math::VertexIndex;
use crate::topology::FaceKey;

/// Counts, for every face in a list, how many faces in the list share its
/// vertex set.
///
/// Faces are compared as unordered index sets, so `[1, 2]` and `[2, 1]` are
/// the same face. Faces of different lengths never match.
pub struct FaceOccurrences<'a, I> {
    faces: &'a [Vec<I>],
}

impl<'a, I: VertexIndex> FaceOccurrences<'a, I> {
    /// Creates a new `FaceOccurrences` query over `faces`.
    #[must_use]
    pub fn new(faces: &'a [Vec<I>]) -> Self {
        Self { faces }
    }

    /// Executes the query, returning one count per input face, in input order.
    #[must_use]
    pub fn execute(&self) -> Vec<usize> {
        let keys: Vec<FaceKey<I>> = self.faces.iter().map(|f| FaceKey::new(f)).collect();

        let mut counts: FxHashMap<&FaceKey<I>, usize> =
            FxHashMap::with_capacity_and_hasher(keys.len(), FxBuildHasher);
        for key in &keys {
            *counts.entry(key).or_insert(0) += 1;
        }

        keys.iter()
            .map(|key| counts.get(key).copied().unwrap_or(0))
            .collect()
    }
}
