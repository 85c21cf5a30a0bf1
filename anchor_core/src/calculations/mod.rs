//! # Anchor Calculations
//!
//! Follows the same pattern as every calculation in the crate:
//!
//! - [`AnchorConfiguration`] - Input parameters (JSON-serializable)
//! - [`CapacityResult`] - Calculation results (JSON-serializable)
//! - [`calculate`] - Pure calculation function returning `CalcResult<CapacityResult>`
//!
//! ## Available Calculations
//!
//! - [`configuration`] - Anchor geometry, grout and ground parameters
//! - [`capacity`] - Bustamante & Doix capacity check

pub mod capacity;
pub mod configuration;

// Re-export commonly used types
pub use capacity::{
    adherence_bond_strength, calculate, diameter_reduction_factor, grout_tensile_strength,
    unit_bond_resistance, CapacityResult, Mechanism, Verdict,
};
pub use configuration::{AnchorConfiguration, GroundParameters};
