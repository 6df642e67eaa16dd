/// Comparison thresholds for curve evaluation and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Distance threshold (model units). Vectors shorter than this count as zero.
    pub linear: f64,
    /// Angle threshold (radians).
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_ANGULAR: f64 = 1e-10;

    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    pub fn default_precision() -> Self {
        Self::new(Self::DEFAULT_LINEAR, Self::DEFAULT_ANGULAR)
    }

    /// Suitable for single-precision callers feeding `f32` data through.
    pub fn loose() -> Self {
        Self::new(1e-4, 1e-6)
    }

    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
