//! # Ground and Grout Definitions
//!
//! Enumerations and lookup data describing the ground an anchor is bonded
//! into and how its grout was placed.
//!
//! - **Soil**: 13 Bustamante & Doix categories, gravel through fractured rock
//! - **Grout method**: multiple high pressure or single low pressure injection
//! - **Bond coefficients**: the constant `alpha_d` table
//!
//! ## Example
//!
//! ```rust
//! use anchor_core::materials::{bond_coefficient, GroutMethod, SoilBand, SoilType};
//!
//! let soil = SoilType::from_str_flexible("clay").unwrap();
//! assert_eq!(soil.band(), SoilBand::MarlLimestone);
//!
//! let alpha_d = bond_coefficient(GroutMethod::MultipleHighPressure, soil);
//! assert_eq!(alpha_d, 1.8);
//! ```

pub mod bond_coefficients;
pub mod grout;
pub mod soil;

pub use bond_coefficients::{bond_coefficient, ALPHA_D};
pub use grout::GroutMethod;
pub use soil::{SoilBand, SoilType};
