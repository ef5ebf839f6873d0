//! Value types storable in a field: scalars, vectors, and tensors.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// A per-element value a field can hold.
///
/// Implemented for `f64` (scalar), [`Vector`], and [`Tensor`]. The
/// `'static + Send + Sync` bounds let fields live in type-erased
/// registries and behind process-wide null sentinels.
pub trait FieldValue: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Number of scalar components per element.
    const COMPONENTS: usize;

    /// Human-readable type name (`"scalar"`, `"vector"`, `"tensor"`).
    const TYPE_NAME: &'static str;

    /// The additive identity.
    fn zero() -> Self;
}

impl FieldValue for f64 {
    const COMPONENTS: usize = 1;
    const TYPE_NAME: &'static str = "scalar";

    fn zero() -> Self {
        0.0
    }
}

/// A three-component vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector(pub [f64; 3]);

impl Vector {
    /// Construct from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    /// Euclidean magnitude.
    pub fn mag(&self) -> f64 {
        self.0.iter().map(|c| c * c).sum::<f64>().sqrt()
    }
}

impl FieldValue for Vector {
    const COMPONENTS: usize = 3;
    const TYPE_NAME: &'static str = "vector";

    fn zero() -> Self {
        Self([0.0; 3])
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let [a, b, c] = self.0;
        let [x, y, z] = rhs.0;
        Self([a + x, b + y, c + z])
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let [a, b, c] = self.0;
        let [x, y, z] = rhs.0;
        Self([a - x, b - y, c - z])
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0.map(|c| c * rhs))
    }
}

/// A full 3x3 tensor stored row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tensor(pub [f64; 9]);

impl Tensor {
    /// The identity tensor.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    /// Sum of the diagonal.
    pub fn trace(&self) -> f64 {
        self.0[0] + self.0[4] + self.0[8]
    }
}

impl FieldValue for Tensor {
    const COMPONENTS: usize = 9;
    const TYPE_NAME: &'static str = "tensor";

    fn zero() -> Self {
        Self([0.0; 9])
    }
}
