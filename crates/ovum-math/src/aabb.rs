use crate::{Point3, Vector3};

/// Axis-aligned bounding box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    /// Box symmetric about `center` with the given half-extents per axis.
    ///
    /// Negative half-extents are folded to their absolute value.
    pub fn from_half_extents(center: Point3, half: Vector3) -> Self {
        let half = half.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }
}
