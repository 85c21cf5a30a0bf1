//! # anchor_core - Grouted Ground Anchor Capacity Engine
//!
//! `anchor_core` checks the geotechnical capacity of a grouted ground anchor
//! (a steel bar bonded into a drilled, grout-filled hole) using the
//! Bustamante & Doix correlations. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `calculate` is a pure function of a configuration
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Fail Fast**: Invalid values are rejected when they are set
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use anchor_core::calculations::{calculate, AnchorConfiguration, Mechanism};
//! use anchor_core::materials::{GroutMethod, SoilType};
//!
//! let anchor = AnchorConfiguration::new(30.0, 32.0, 4000.0, 275.0)
//!     .unwrap()
//!     .with_soil(SoilType::Clay)
//!     .with_grout(Some(55.0), Some(55.0), Some(GroutMethod::SingleLowPressure))
//!     .unwrap()
//!     .with_design_load(100.0)
//!     .unwrap();
//!
//! let result = calculate(&anchor).unwrap();
//! assert_eq!(result.governing_mechanism, Mechanism::SteelTension);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Anchor configuration and capacity calculation
//! - [`materials`] - Soil categories, grout methods and the `alpha_d` table
//! - [`report`] - Plain-text result summary
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, AnchorConfiguration, CapacityResult, Verdict};
pub use errors::{CalcError, CalcResult};
