//! # Unit Types
//!
//! Type-safe wrappers for the SI engineering units used in anchor design.
//! They are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## Working Units
//!
//! Every formula in [`crate::calculations`] works in a single consistent set:
//! - Length: millimetres (mm). Lengths given in metres convert with [`MM_PER_M`].
//! - Stress and pressure: megapascals (MPa = N/mm²)
//! - Area: square millimetres (mm²)
//! - Force: newtons (N) internally, reported in kilonewtons (kN)
//!
//! ## Example
//!
//! ```rust
//! use anchor_core::units::{Kilonewtons, Meters, Millimeters, Newtons};
//!
//! let length: Millimeters = Meters(4.0).into();
//! assert_eq!(length.0, 4000.0);
//!
//! let force: Kilonewtons = Newtons(1500.0).into();
//! assert_eq!(force.0, 1.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Millimetres in one metre.
pub const MM_PER_M: f64 = 1000.0;

/// Newtons in one kilonewton.
pub const N_PER_KN: f64 = 1000.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * MM_PER_M)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / MM_PER_M)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / N_PER_KN)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * N_PER_KN)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress or pressure in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

impl SqMm {
    /// Area of a circle of the given diameter
    pub fn circle(diameter: Millimeters) -> Self {
        SqMm(std::f64::consts::PI * (diameter.0 / 2.0).powi(2))
    }
}

/// Stress acting over an area gives a force: MPa × mm² = N
impl Mul<SqMm> for MegaPascals {
    type Output = Newtons;
    fn mul(self, rhs: SqMm) -> Newtons {
        Newtons(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(MegaPascals);
impl_arithmetic!(SqMm);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let m = Meters(3.0);
        let mm: Millimeters = m.into();
        assert_eq!(mm.0, 3000.0);
    }

    #[test]
    fn test_newtons_to_kilonewtons() {
        let n = Newtons(169_030.0);
        let kn: Kilonewtons = n.into();
        assert_eq!(kn.0, 169.03);
    }

    #[test]
    fn test_circle_area() {
        let area = SqMm::circle(Millimeters(20.0));
        assert!((area.0 - 314.159).abs() < 0.001);
    }

    #[test]
    fn test_stress_times_area() {
        let force = MegaPascals(275.0) * SqMm(100.0);
        assert_eq!(force, Newtons(27_500.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(32.0);
        let b = Millimeters(30.0);
        assert_eq!((a + b).0, 62.0);
        assert_eq!((a - b).0, 2.0);
        assert_eq!((a * 1.2).value(), 38.4);
        assert_eq!((a / 2.0).0, 16.0);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(22.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "22.5");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
