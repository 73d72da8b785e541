use std::fmt::Debug;
use std::hash::Hash;

/// Integer type usable as a vertex index.
///
/// Implemented for every primitive integer so callers can keep whatever index
/// width their mesh storage already uses.
pub trait VertexIndex: Copy + Ord + Hash + Debug {}

macro_rules! impl_vertex_index {
    ($($t:ty),*) => {
        $(impl VertexIndex for $t {})*
    };
}

impl_vertex_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Dynamically sized cell matrix, one row per cell.
pub type CellMatrix<I> = nalgebra::DMatrix<I>;

/// Per-cell boolean column.
pub type BoolVector = nalgebra::DVector<bool>;

/// Per-cell, per-local-face boolean matrix.
pub type BoolMatrix = nalgebra::DMatrix<bool>;
