//! ovum geometry: a parametric ellipse in 3D space and curve sampling.

pub mod curve;
pub mod tessellate;

pub use curve::{Curve, Ellipse, Profile};
pub use tessellate::{curve_to_polyline, sample};
