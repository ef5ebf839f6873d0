//! Physical dimension tags carried alongside field values.

use std::fmt;
use std::ops::{Div, Mul};

/// SI base-dimension exponents of a physical quantity.
///
/// Order: mass, length, time, temperature, moles, current, luminous
/// intensity. Multiplying quantities adds exponents; dividing subtracts.
///
/// # Examples
///
/// ```
/// use geofield_core::Dimensions;
///
/// let density = Dimensions::MASS / (Dimensions::LENGTH * Dimensions::LENGTH * Dimensions::LENGTH);
/// assert_eq!(density.to_string(), "[1 -3 0 0 0 0 0]");
/// assert!((density / density).is_dimensionless());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    exponents: [i8; Self::COUNT],
}

impl Dimensions {
    /// Number of SI base dimensions.
    pub const COUNT: usize = 7;

    /// A pure number.
    pub const DIMENSIONLESS: Self = Self::new([0, 0, 0, 0, 0, 0, 0]);
    /// Mass (kg).
    pub const MASS: Self = Self::new([1, 0, 0, 0, 0, 0, 0]);
    /// Length (m).
    pub const LENGTH: Self = Self::new([0, 1, 0, 0, 0, 0, 0]);
    /// Time (s).
    pub const TIME: Self = Self::new([0, 0, 1, 0, 0, 0, 0]);
    /// Temperature (K).
    pub const TEMPERATURE: Self = Self::new([0, 0, 0, 1, 0, 0, 0]);
    /// Amount of substance (mol).
    pub const MOLES: Self = Self::new([0, 0, 0, 0, 1, 0, 0]);
    /// Electric current (A).
    pub const CURRENT: Self = Self::new([0, 0, 0, 0, 0, 1, 0]);
    /// Luminous intensity (cd).
    pub const LUMINOUS_INTENSITY: Self = Self::new([0, 0, 0, 0, 0, 0, 1]);

    /// Velocity (m/s).
    pub const VELOCITY: Self = Self::new([0, 1, -1, 0, 0, 0, 0]);
    /// Pressure (kg/(m s^2)).
    pub const PRESSURE: Self = Self::new([1, -1, -2, 0, 0, 0, 0]);
    /// Molecular weight (kg/mol).
    pub const MOLECULAR_WEIGHT: Self = Self::new([1, 0, 0, 0, -1, 0, 0]);

    /// Build a dimension set from raw exponents.
    pub const fn new(exponents: [i8; Self::COUNT]) -> Self {
        Self { exponents }
    }

    /// Raw exponents in SI base order.
    pub fn exponents(&self) -> [i8; Self::COUNT] {
        self.exponents
    }

    /// Returns `true` if every exponent is zero.
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Raise to an integer power.
    ///
    /// # Panics
    ///
    /// Panics if a resulting exponent does not fit in `i8`.
    pub fn pow(self, n: i8) -> Self {
        let mut exponents = self.exponents;
        for e in &mut exponents {
            *e = e.checked_mul(n).expect("dimension exponent overflow");
        }
        Self { exponents }
    }
}

/// Adds exponents. Panics if a resulting exponent does not fit in `i8`.
impl Mul for Dimensions {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut exponents = self.exponents;
        for (e, r) in exponents.iter_mut().zip(rhs.exponents) {
            *e = e.checked_add(r).expect("dimension exponent overflow");
        }
        Self { exponents }
    }
}

/// Subtracts exponents. Panics if a resulting exponent does not fit in `i8`.
impl Div for Dimensions {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let mut exponents = self.exponents;
        for (e, r) in exponents.iter_mut().zip(rhs.exponents) {
            *e = e.checked_sub(r).expect("dimension exponent overflow");
        }
        Self { exponents }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.exponents.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}
