//! # Anchor Capacity Calculation
//!
//! Geotechnical capacity of a grouted anchor by the Bustamante & Doix method.
//! Three independent mechanisms are checked and the weakest one governs:
//!
//! - **Soil-grout bond**: `R_sg = π · Ds · L · q_s`
//! - **Steel tension**: `R_st = fy · As / 1.15`
//! - **Steel-grout bond**: `R_gb = π · d · t_d · L`
//!
//! ## Assumptions
//!
//! - Lengths in mm, stresses and pressures in MPa, forces reported in kN
//! - `q_s` and `f_ctk` are empirical regressions, used exactly as published
//!
//! ## Example
//!
//! ```rust
//! use anchor_core::calculations::{calculate, AnchorConfiguration, Verdict};
//! use anchor_core::materials::{GroutMethod, SoilType};
//!
//! let anchor = AnchorConfiguration::new(30.0, 45.0, 3000.0, 275.0)
//!     .unwrap()
//!     .with_soil(SoilType::Silt)
//!     .with_grout(Some(40.0), Some(0.5), Some(GroutMethod::SingleLowPressure))
//!     .unwrap()
//!     .with_design_load(20.0)
//!     .unwrap();
//!
//! let result = calculate(&anchor).unwrap();
//! println!("Soil-grout: {:.2} kN", result.soil_grout_kn);
//! assert_eq!(result.verdict, Verdict::Verified);
//! ```

use std::f64::consts::PI;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::configuration::{AnchorConfiguration, MIN_PRACTICAL_CLEARANCE_MM};
use crate::errors::CalcResult;
use crate::materials::{bond_coefficient, GroutMethod, SoilBand};
use crate::units::{Kilonewtons, MegaPascals, Millimeters, Newtons, SqMm};

/// Partial safety factor applied to steel yield
pub const STEEL_PARTIAL_FACTOR: f64 = 1.15;

/// Grout strength (MPa) from which the logarithmic `f_ctk` law applies
pub const HIGH_STRENGTH_GROUT_MPA: f64 = 50.0;

/// Bar diameter (mm) up to which no bond reduction is applied
pub const BOND_REDUCTION_DIAMETER_MM: f64 = 32.0;

/// Pressure (MPa) splitting the fine-grained soil regressions
pub const FINE_GRAINED_PRESSURE_SPLIT_MPA: f64 = 1.0;

/// Resistance mechanism of a grouted anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mechanism {
    SoilGroutBond,
    SteelTension,
    SteelGroutBond,
}

impl Mechanism {
    pub fn display_name(self) -> &'static str {
        match self {
            Mechanism::SoilGroutBond => "Soil-grout bond",
            Mechanism::SteelTension => "Steel tension",
            Mechanism::SteelGroutBond => "Steel-grout bond",
        }
    }
}

impl std::fmt::Display for Mechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outcome of checking the design load against the capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Design load is below the governing capacity
    Verified,
    /// Design load reaches or exceeds the governing capacity
    NotVerified,
    /// Steel tension is weaker than both bond mechanisms.
    /// A design warning, not an input error.
    HierarchyViolation,
}

impl Verdict {
    pub fn description(self) -> &'static str {
        match self {
            Verdict::Verified => "Verified: design load below governing capacity",
            Verdict::NotVerified => "Not verified: design load reaches governing capacity",
            Verdict::HierarchyViolation => "Hierarchy violation: steel is weaker than both bond interfaces",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Results from an anchor capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "soil_grout_kn": 1364.26,
///   "steel_tension_kn": 169.03,
///   "steel_grout_kn": 4842.72,
///   "governing_kn": 169.03,
///   "governing_mechanism": "SteelTension",
///   "verdict": "HierarchyViolation",
///   "design_load_kn": 100.0,
///   "alpha_d": 1.2,
///   "bond_diameter_mm": 38.4,
///   "steel_area_mm2": 706.86,
///   "grout_tensile_mpa": 8.56,
///   "unit_bond_mpa": 2.8272,
///   "eta": 1.0,
///   "adherence_bond_mpa": 12.85
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    /// Slip resistance at the soil-grout interface (kN)
    pub soil_grout_kn: f64,

    /// Tension resistance of the steel bar (kN)
    pub steel_tension_kn: f64,

    /// Slip resistance at the steel-grout interface (kN)
    pub steel_grout_kn: f64,

    /// Minimum of the three resistances (kN)
    pub governing_kn: f64,

    pub governing_mechanism: Mechanism,

    pub verdict: Verdict,

    /// Design load the verdict was checked against (kN)
    pub design_load_kn: f64,

    /// Bond coefficient from the Bustamante & Doix table
    pub alpha_d: f64,

    /// Corrected bond diameter Ds = alpha_d · Dd (mm)
    pub bond_diameter_mm: f64,

    /// Steel section area As (mm²)
    pub steel_area_mm2: f64,

    /// Characteristic grout tensile strength f_ctk (MPa)
    pub grout_tensile_mpa: f64,

    /// Unit soil-grout bond resistance q_s (MPa)
    pub unit_bond_mpa: f64,

    /// Bar diameter reduction factor η
    pub eta: f64,

    /// Steel-grout adherence strength t_d (MPa)
    pub adherence_bond_mpa: f64,
}

impl CapacityResult {
    /// Check if the anchor passes outright
    pub fn passes(&self) -> bool {
        self.verdict == Verdict::Verified
    }

    /// Design load over governing capacity
    pub fn utilization(&self) -> f64 {
        self.design_load_kn / self.governing_kn
    }

    /// The three resistances in mechanism order
    pub fn resistances(&self) -> [(Mechanism, f64); 3] {
        [
            (Mechanism::SoilGroutBond, self.soil_grout_kn),
            (Mechanism::SteelTension, self.steel_tension_kn),
            (Mechanism::SteelGroutBond, self.steel_grout_kn),
        ]
    }
}

/// Characteristic tensile strength of the grout, f_ctk (MPa).
///
/// Below 50 MPa: `0.7 · fck^(2/3)`. From 50 MPa: `2.12 · ln(1 + (fck + 0.8))`.
pub fn grout_tensile_strength(grout_strength_mpa: f64) -> f64 {
    if grout_strength_mpa < HIGH_STRENGTH_GROUT_MPA {
        0.7 * grout_strength_mpa.powf(2.0 / 3.0)
    } else {
        2.12 * (1.0 + (grout_strength_mpa + 0.8)).ln()
    }
}

/// Unit soil-grout bond resistance q_s (MPa) for an injection pressure (MPa).
///
/// ```rust
/// use anchor_core::calculations::unit_bond_resistance;
/// use anchor_core::materials::{GroutMethod, SoilBand};
///
/// let q_s = unit_bond_resistance(SoilBand::MarlLimestone, GroutMethod::SingleLowPressure, 55.0);
/// assert!((q_s - 2.8272).abs() < 1e-9);
/// ```
pub fn unit_bond_resistance(band: SoilBand, method: GroutMethod, pressure_mpa: f64) -> f64 {
    let p = pressure_mpa;
    match (band, method) {
        (SoilBand::Incoherent, GroutMethod::MultipleHighPressure) => 1.0188 * p + 0.0541,
        (SoilBand::Incoherent, GroutMethod::SingleLowPressure) => 1.0099 * p + 0.0041,
        (SoilBand::FineGrained, GroutMethod::MultipleHighPressure) => {
            if p < FINE_GRAINED_PRESSURE_SPLIT_MPA {
                -0.1307 * p.powi(2) + 0.302 * p + 0.0117
            } else {
                0.08 * p + 0.103
            }
        }
        (SoilBand::FineGrained, GroutMethod::SingleLowPressure) => {
            if p < FINE_GRAINED_PRESSURE_SPLIT_MPA {
                -0.0693 * p.powi(2) + 0.17 * p - 0.0007
            } else {
                0.0552 * p + 0.0448
            }
        }
        (SoilBand::MarlLimestone, GroutMethod::MultipleHighPressure) => 0.07 * p + 0.14,
        (SoilBand::MarlLimestone, GroutMethod::SingleLowPressure) => 0.0493 * p + 0.1157,
        (SoilBand::FracturedRock, GroutMethod::MultipleHighPressure) => 0.1227 * p + 0.066,
        (SoilBand::FracturedRock, GroutMethod::SingleLowPressure) => 0.0973 * p + 0.064,
    }
}

/// Bond reduction factor η for large bars: 1 up to 32 mm, then `(132 - d) / 100`.
pub fn diameter_reduction_factor(anchor_diameter_mm: f64) -> f64 {
    if anchor_diameter_mm <= BOND_REDUCTION_DIAMETER_MM {
        1.0
    } else {
        (132.0 - anchor_diameter_mm) / 100.0
    }
}

/// Design adherence strength between steel and grout, t_d = 2.25 · η · f_ctk / 1.5 (MPa)
pub fn adherence_bond_strength(eta: f64, grout_tensile_mpa: f64) -> f64 {
    2.25 * eta * grout_tensile_mpa / 1.5
}

/// Calculate the capacity of a grouted anchor.
///
/// Pure function of the configuration: identical input gives an identical result.
///
/// # Returns
///
/// * `Ok(CapacityResult)` - All three resistances, the governing one and the verdict
/// * `Err(CalcError)` - Invalid values, or soil/grout not yet set
pub fn calculate(config: &AnchorConfiguration) -> CalcResult<CapacityResult> {
    config.validate()?;
    let ground = config.ground_parameters()?;

    if config.has_tight_clearance() {
        warn!(
            "hole clearance {:.1} mm is below the practical {:.0} mm for grout injection",
            config.hole_clearance_mm(),
            MIN_PRACTICAL_CLEARANCE_MM
        );
    }

    let anchor_diameter = Millimeters(config.anchor_diameter_mm);
    let length = Millimeters(config.length_mm);

    let alpha_d = bond_coefficient(ground.method, ground.soil);
    let bond_diameter = Millimeters(config.hole_diameter_mm) * alpha_d;
    let steel_area = SqMm::circle(anchor_diameter);

    let f_ctk = grout_tensile_strength(ground.grout_strength_mpa);
    let q_s = unit_bond_resistance(ground.soil.band(), ground.method, ground.injection_pressure_mpa);
    let eta = diameter_reduction_factor(anchor_diameter.value());
    let t_d = adherence_bond_strength(eta, f_ctk);

    debug!(
        "alpha_d={} Ds={:.3}mm As={:.3}mm2 f_ctk={:.4}MPa q_s={:.4}MPa eta={} t_d={:.4}MPa",
        alpha_d,
        bond_diameter.value(),
        steel_area.value(),
        f_ctk,
        q_s,
        eta,
        t_d
    );

    let soil_grout: Kilonewtons = Newtons(PI * bond_diameter.value() * length.value() * q_s).into();
    let steel_tension: Kilonewtons = (MegaPascals(config.steel_yield_mpa) * steel_area / STEEL_PARTIAL_FACTOR).into();
    let steel_grout: Kilonewtons = Newtons(PI * anchor_diameter.value() * t_d * length.value()).into();

    let (soil_grout_kn, steel_tension_kn, steel_grout_kn) = (soil_grout.value(), steel_tension.value(), steel_grout.value());
    let (governing_mechanism, governing_kn) = governing(soil_grout_kn, steel_tension_kn, steel_grout_kn);

    let verdict = if steel_tension_kn < soil_grout_kn.min(steel_grout_kn) {
        warn!(
            "steel tension {:.2} kN is weaker than both bond resistances ({:.2} / {:.2} kN)",
            steel_tension_kn, soil_grout_kn, steel_grout_kn
        );
        Verdict::HierarchyViolation
    } else if config.design_load_kn < governing_kn {
        Verdict::Verified
    } else {
        Verdict::NotVerified
    };

    debug!(
        "R_sg={:.3}kN R_st={:.3}kN R_gb={:.3}kN governs={:?} verdict={:?}",
        soil_grout_kn, steel_tension_kn, steel_grout_kn, governing_mechanism, verdict
    );

    Ok(CapacityResult {
        soil_grout_kn,
        steel_tension_kn,
        steel_grout_kn,
        governing_kn,
        governing_mechanism,
        verdict,
        design_load_kn: config.design_load_kn,
        alpha_d,
        bond_diameter_mm: bond_diameter.value(),
        steel_area_mm2: steel_area.value(),
        grout_tensile_mpa: f_ctk,
        unit_bond_mpa: q_s,
        eta,
        adherence_bond_mpa: t_d,
    })
}

/// Weakest mechanism; ties resolve in mechanism order.
fn governing(soil_grout_kn: f64, steel_tension_kn: f64, steel_grout_kn: f64) -> (Mechanism, f64) {
    let mut weakest = (Mechanism::SoilGroutBond, soil_grout_kn);
    for candidate in [
        (Mechanism::SteelTension, steel_tension_kn),
        (Mechanism::SteelGroutBond, steel_grout_kn),
    ] {
        if candidate.1 < weakest.1 {
            weakest = candidate;
        }
    }
    weakest
}
