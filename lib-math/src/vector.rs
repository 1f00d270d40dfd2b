use core::ops::{Add, Div};

/// Three component vector, used both for raw accelerometer samples and for the unit direction
/// vectors derived from them.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector
{
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector
{
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// Returns a zero vector.
    ///
    pub const fn zero() -> Self {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Squared length of the vector, cheaper than `magnitude()` when only comparing against
    /// thresholds.
    ///
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculate the length/magnitude of the vector
    ///
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    /// Largest absolute component.
    ///
    fn max_abs(&self) -> f64 {
        libm::fmax(libm::fmax(libm::fabs(self.x), libm::fabs(self.y)), libm::fabs(self.z))
    }

    /// Scale the vector to unit length. A vector of length exactly zero has no direction, so it
    /// is returned unchanged instead of dividing by zero.
    ///
    /// The components are first divided by the largest one, so squaring them can neither
    /// overflow nor underflow for very large or very small inputs.
    ///
    pub fn normalize(&self) -> Vector {
        let scale = self.max_abs();
        if scale == 0.0 {
            return *self;
        }
        let scaled = self / scale;
        &scaled / scaled.magnitude()
    }

    /// Sum of the three components.
    ///
    pub fn component_sum(&self) -> f64 {
        self.x + self.y + self.z
    }

    /// True when every component lies strictly within `band` of zero.
    ///
    pub fn is_near_zero(&self, band: f64) -> bool {
        libm::fabs(self.x) < band && libm::fabs(self.y) < band && libm::fabs(self.z) < band
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f64) -> bool {
        libm::fabs(self.x - other.x) <= tol
            && libm::fabs(self.y - other.y) <= tol
            && libm::fabs(self.z - other.z) <= tol
    }
}

impl Add for Vector
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Div<f64> for &Vector
{
    type Output = Vector;

    fn div(self, other: f64) -> Self::Output {
        Vector {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}
