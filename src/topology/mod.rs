pub mod cell;
pub mod face;

pub use cell::{CellKind, LOCAL_TETRAHEDRON_FACES, LOCAL_TRIANGLE_FACES};
pub use face::FaceKey;
