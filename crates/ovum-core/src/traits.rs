use crate::error::Result;
use crate::tolerance::Tolerance;

/// Report degenerate configurations of a geometric entity.
///
/// Validation only observes; it never mutates the entity or changes what
/// its evaluation methods return.
pub trait Validate {
    fn validate_with(&self, tolerance: Tolerance) -> Result<()>;

    fn validate(&self) -> Result<()> {
        self.validate_with(Tolerance::default())
    }
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> (Self::Point, Self::Point);
}
