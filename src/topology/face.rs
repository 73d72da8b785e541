use crate::math::VertexIndex;

/// A face identified by its vertex set, independent of winding.
///
/// Two faces compare equal exactly when they reference the same vertices,
/// whatever order the owning cells list them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceKey<I>(Vec<I>);

impl<I: VertexIndex> FaceKey<I> {
    /// Builds the canonical key of `face` by sorting its indices.
    #[must_use]
    pub fn new(face: &[I]) -> Self {
        let mut vertices = face.to_vec();
        vertices.sort_unstable();
        Self(vertices)
    }

    /// The sorted vertex indices.
    #[must_use]
    pub fn vertices(&self) -> &[I] {
        &self.0
    }
}
