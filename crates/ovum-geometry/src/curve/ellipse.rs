//! Ellipse curve.

use std::f64::consts::TAU;

use ovum_core::traits::{BoundingBox, Validate};
use ovum_core::{OvumError, Result, Tolerance};
use ovum_math::{dvec3, vec3_from_slice, Aabb3, Plane, Point3, Vector3};

use super::{Curve, Profile};

/// An ellipse in 3D space, oriented by a normal and a tangent.
///
/// The normal is the normal of the plane the ellipse lies in and decides
/// which side is the front face. The tangent spans that plane and acts as the
/// ellipse's up vector.
///
/// Evaluation uses the [`Profile`] bound at construction, in the ellipse's
/// local frame: neither `centre` nor the orientation vectors are applied to
/// evaluated points. Changing `major` or `minor` through their setters does
/// not affect evaluation until [`Ellipse::rebind_profile`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    radius: f64,
    eccentricity: f64,
    major: f64,
    minor: f64,
    centre: Point3,
    normal: Vector3,
    tangent: Vector3,
    profile: Profile,
}

impl Ellipse {
    pub const DEFAULT_CENTRE: Point3 = Point3::ZERO;
    pub const DEFAULT_NORMAL: Vector3 = Vector3::Y;
    pub const DEFAULT_TANGENT: Vector3 = Vector3::X;

    /// Create an ellipse from its radius, eccentricity, centre, tangent and
    /// normal, given component-wise.
    ///
    /// The major semi-axis is `r + e` and the minor semi-axis is `r`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        r: f64,
        e: f64,
        cx: f64,
        cy: f64,
        cz: f64,
        tx: f64,
        ty: f64,
        tz: f64,
        nx: f64,
        ny: f64,
        nz: f64,
    ) -> Self {
        Self::from_vectors(
            r,
            e,
            dvec3(cx, cy, cz),
            dvec3(tx, ty, tz),
            dvec3(nx, ny, nz),
        )
    }

    pub fn from_vectors(
        radius: f64,
        eccentricity: f64,
        centre: Point3,
        tangent: Vector3,
        normal: Vector3,
    ) -> Self {
        let major = radius + eccentricity;
        let minor = radius;
        tracing::trace!(radius, eccentricity, major, minor, "constructing ellipse");
        Self {
            radius,
            eccentricity,
            major,
            minor,
            centre,
            normal,
            tangent,
            profile: Profile::Axes { major, minor },
        }
    }

    /// Evaluate the curve point at `t`.
    pub fn eval(&self, t: f64) -> Point3 {
        self.eval_with_offset(t, 0.0)
    }

    /// Evaluate the curve point at `t + offset`.
    ///
    /// `t` is typically the time elapsed in an animation loop and `offset` a
    /// fixed phase shift, e.g. to spread several points along the same path.
    pub fn eval_with_offset(&self, t: f64, offset: f64) -> Point3 {
        self.profile.point(t + offset)
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Re-bind the coordinate functions to the current `major` and `minor`.
    pub fn rebind_profile(&mut self) {
        tracing::trace!(major = self.major, minor = self.minor, "rebinding ellipse profile");
        self.profile = Profile::Axes {
            major: self.major,
            minor: self.minor,
        };
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn reset_radius(&mut self) {
        self.set_radius(0.0);
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn set_eccentricity(&mut self, eccentricity: f64) {
        self.eccentricity = eccentricity;
    }

    pub fn reset_eccentricity(&mut self) {
        self.set_eccentricity(0.0);
    }

    pub fn major(&self) -> f64 {
        self.major
    }

    pub fn set_major(&mut self, major: f64) {
        self.major = major;
    }

    pub fn reset_major(&mut self) {
        self.set_major(0.0);
    }

    pub fn minor(&self) -> f64 {
        self.minor
    }

    pub fn set_minor(&mut self, minor: f64) {
        self.minor = minor;
    }

    pub fn reset_minor(&mut self) {
        self.set_minor(0.0);
    }

    pub fn centre(&self) -> Point3 {
        self.centre
    }

    pub fn set_centre(&mut self, x: f64, y: f64, z: f64) {
        self.centre = dvec3(x, y, z);
    }

    /// Set the centre from up to three components; see [`vec3_from_slice`].
    /// An empty slice resets to [`Ellipse::DEFAULT_CENTRE`].
    pub fn set_centre_from(&mut self, components: &[f64]) {
        self.centre = vec3_from_slice(components).unwrap_or(Self::DEFAULT_CENTRE);
    }

    pub fn reset_centre(&mut self) {
        self.centre = Self::DEFAULT_CENTRE;
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn set_normal(&mut self, x: f64, y: f64, z: f64) {
        self.normal = dvec3(x, y, z);
    }

    /// An empty slice resets to [`Ellipse::DEFAULT_NORMAL`].
    pub fn set_normal_from(&mut self, components: &[f64]) {
        self.normal = vec3_from_slice(components).unwrap_or(Self::DEFAULT_NORMAL);
    }

    pub fn reset_normal(&mut self) {
        self.normal = Self::DEFAULT_NORMAL;
    }

    pub fn tangent(&self) -> Vector3 {
        self.tangent
    }

    pub fn set_tangent(&mut self, x: f64, y: f64, z: f64) {
        self.tangent = dvec3(x, y, z);
    }

    /// An empty slice resets to [`Ellipse::DEFAULT_TANGENT`].
    pub fn set_tangent_from(&mut self, components: &[f64]) {
        self.tangent = vec3_from_slice(components).unwrap_or(Self::DEFAULT_TANGENT);
    }

    pub fn reset_tangent(&mut self) {
        self.tangent = Self::DEFAULT_TANGENT;
    }

    /// `tangent x normal`, the third in-plane-frame vector.
    pub fn binormal(&self) -> Vector3 {
        self.tangent.cross(self.normal)
    }

    /// Angle between the normal and the world Z axis, ignoring direction.
    /// NaN for a zero-length normal.
    pub fn normal_tilt(&self) -> f64 {
        (self.normal.z.abs() / self.normal.length()).acos()
    }

    /// Angle between the tangent and the world X axis, ignoring direction.
    /// NaN for a zero-length tangent.
    pub fn tangent_tilt(&self) -> f64 {
        (self.tangent.x.abs() / self.tangent.length()).acos()
    }

    /// The plane through `centre` facing along `normal`, if the normal has a
    /// direction.
    pub fn plane(&self) -> Option<Plane> {
        Plane::new(self.centre, self.normal)
    }

    /// Whether `eye` sees the front face. Always false for a zero-length or
    /// non-finite normal, since such an ellipse has no plane.
    pub fn is_front_facing(&self, eye: Point3) -> bool {
        self.plane().is_some_and(|plane| plane.is_in_front(eye))
    }
}

impl Default for Ellipse {
    /// An empty ellipse: all lengths zero, evaluating as the unit circle.
    fn default() -> Self {
        Self {
            radius: 0.0,
            eccentricity: 0.0,
            major: 0.0,
            minor: 0.0,
            centre: Self::DEFAULT_CENTRE,
            normal: Self::DEFAULT_NORMAL,
            tangent: Self::DEFAULT_TANGENT,
            profile: Profile::Unit,
        }
    }
}

/// `tangent_at` is the derivative of the curve at `t`, not the stored
/// up vector returned by [`Ellipse::tangent`].
impl Curve for Ellipse {
    fn point_at(&self, t: f64) -> Point3 {
        self.eval(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.profile.derivative(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

impl BoundingBox for Ellipse {
    type Point = Point3;

    /// Bounds of the evaluated points, in the local frame.
    fn bounding_box(&self) -> (Point3, Point3) {
        let (a, b) = self.profile.semi_axes();
        let aabb = Aabb3::from_half_extents(Point3::ZERO, dvec3(a, b, 0.0));
        (aabb.min, aabb.max)
    }
}

impl Validate for Ellipse {
    fn validate_with(&self, tolerance: Tolerance) -> Result<()> {
        let result = self.check(tolerance);
        if let Err(err) = &result {
            tracing::debug!(%err, "ellipse failed validation");
        }
        result
    }
}

impl Ellipse {
    fn check(&self, tolerance: Tolerance) -> Result<()> {
        let scalars = [
            ("radius", self.radius),
            ("eccentricity", self.eccentricity),
            ("major", self.major),
            ("minor", self.minor),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(OvumError::NonFinite(name));
            }
        }
        let vectors = [
            ("centre", self.centre),
            ("normal", self.normal),
            ("tangent", self.tangent),
        ];
        for (name, value) in vectors {
            if !value.is_finite() {
                return Err(OvumError::NonFinite(name));
            }
        }

        if self.radius < 0.0 {
            return Err(OvumError::Degenerate(format!(
                "negative radius {}",
                self.radius
            )));
        }
        if self.eccentricity < 0.0 {
            return Err(OvumError::Degenerate(format!(
                "negative eccentricity {} makes the minor axis the longer one",
                self.eccentricity
            )));
        }
        if self.minor < 0.0 {
            return Err(OvumError::Degenerate(format!(
                "negative minor axis {}",
                self.minor
            )));
        }
        if self.major < self.minor {
            return Err(OvumError::Degenerate(format!(
                "major axis {} shorter than minor axis {}",
                self.major, self.minor
            )));
        }

        if tolerance.is_zero(self.normal.length()) {
            return Err(OvumError::ZeroVector("normal"));
        }
        if tolerance.is_zero(self.tangent.length()) {
            return Err(OvumError::ZeroVector("tangent"));
        }
        Ok(())
    }
}
