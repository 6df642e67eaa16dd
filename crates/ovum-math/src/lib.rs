pub mod aabb;
pub mod plane;
pub mod ragged;

pub use glam::{dvec3, DVec3};
pub use aabb::Aabb3;
pub use plane::Plane;
pub use ragged::vec3_from_slice;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
