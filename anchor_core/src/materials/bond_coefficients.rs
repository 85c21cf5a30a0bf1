//! Bond Coefficient Table (Bustamante & Doix)
//!
//! `alpha_d` widens the drilled diameter to the effective bond diameter
//! `Ds = alpha_d * Dd`, accounting for grout penetrating the surrounding
//! ground. Values are read straight from the table, never interpolated.

use super::{GroutMethod, SoilType};

/// `alpha_d` by grout method (rows) and soil code (columns).
pub const ALPHA_D: [[f64; 13]; 2] = [
    // Multiple high pressure injection
    [1.8, 1.6, 1.5, 1.4, 1.4, 1.4, 1.4, 1.4, 1.8, 1.8, 1.8, 1.8, 1.2],
    // Single low pressure injection
    [1.3, 1.2, 1.2, 1.1, 1.1, 1.1, 1.5, 1.1, 1.2, 1.1, 1.1, 1.1, 1.1],
];

/// Look up `alpha_d` for a grout method and soil.
///
/// ```rust
/// use anchor_core::materials::{bond_coefficient, GroutMethod, SoilType};
///
/// assert_eq!(bond_coefficient(GroutMethod::SingleLowPressure, SoilType::Clay), 1.2);
/// ```
pub fn bond_coefficient(method: GroutMethod, soil: SoilType) -> f64 {
    ALPHA_D[method.code()][soil.code()]
}
