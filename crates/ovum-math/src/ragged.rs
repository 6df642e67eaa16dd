//! Lenient construction of 3-vectors from variable-length input.

use crate::Vector3;

/// Build a 3-vector from a ragged slice of components.
///
/// Missing trailing components are zero and anything past the third is
/// ignored. An empty slice yields `None` so the caller can substitute its
/// own default.
pub fn vec3_from_slice(components: &[f64]) -> Option<Vector3> {
    match *components {
        [] => None,
        [x] => Some(Vector3::new(x, 0.0, 0.0)),
        [x, y] => Some(Vector3::new(x, y, 0.0)),
        [x, y, z, ..] => Some(Vector3::new(x, y, z)),
    }
}
