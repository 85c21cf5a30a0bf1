//! # Anchor Configuration
//!
//! Geometry, steel, grout and ground parameters of one grouted anchor.
//!
//! ## Units
//!
//! All lengths are millimetres, including the bonded length `length_mm`.
//! The capacity formulas divide N by 1000 to report kN, which is only
//! correct when every length is in mm. Lengths known in metres go through
//! [`AnchorConfiguration::with_length_m`], which multiplies by
//! [`MM_PER_M`] (1000).
//!
//! ## Example
//!
//! ```rust
//! use anchor_core::calculations::AnchorConfiguration;
//! use anchor_core::materials::{GroutMethod, SoilType};
//!
//! let mut anchor = AnchorConfiguration::new(30.0, 45.0, 4000.0, 500.0).unwrap();
//! anchor.set_soil(SoilType::Clay);
//! anchor.set_grout(Some(35.0), Some(2.0), Some(GroutMethod::SingleLowPressure)).unwrap();
//! anchor.set_design_load(150.0).unwrap();
//!
//! assert!(anchor.missing_fields().is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{bond_coefficient, GroutMethod, SoilType};
use crate::units::{Meters, Millimeters, MM_PER_M};

/// Bar diameter at which the reduction factor `(132 - d) / 100` reaches zero.
pub const MAX_ANCHOR_DIAMETER_MM: f64 = 132.0;

/// Hole-to-bar clearance below which grout injection becomes impractical.
pub const MIN_PRACTICAL_CLEARANCE_MM: f64 = 10.0;

/// Input parameters for one grouted ground anchor.
///
/// Soil and grout start unset; calculating before they are set fails with
/// [`CalcError::IncompleteConfiguration`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "anchor_diameter_mm": 30.0,
///   "hole_diameter_mm": 45.0,
///   "length_mm": 4000.0,
///   "steel_yield_mpa": 500.0,
///   "grout_strength_mpa": 35.0,
///   "injection_pressure_mpa": 2.0,
///   "grout_method": "SingleLowPressure",
///   "soil_type": "Clay",
///   "design_load_kn": 150.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorConfiguration {
    /// Steel bar diameter in mm
    pub anchor_diameter_mm: f64,

    /// Drilled hole diameter in mm, must exceed the bar diameter
    pub hole_diameter_mm: f64,

    /// Bonded (grouted) length in mm
    pub length_mm: f64,

    /// Characteristic yield strength of the bar in MPa
    pub steel_yield_mpa: f64,

    /// Characteristic compressive strength of the grout in MPa
    #[serde(default)]
    pub grout_strength_mpa: Option<f64>,

    /// Injection pressure in MPa (Menard limit pressure proxy)
    #[serde(default)]
    pub injection_pressure_mpa: Option<f64>,

    #[serde(default)]
    pub grout_method: Option<GroutMethod>,

    #[serde(default)]
    pub soil_type: Option<SoilType>,

    /// Design (demand) load in kN; zero checks capacity only
    #[serde(default)]
    pub design_load_kn: f64,
}

impl Default for AnchorConfiguration {
    /// 20 mm bar in a 22 mm hole, 3 m long, 275 MPa steel.
    fn default() -> Self {
        AnchorConfiguration {
            anchor_diameter_mm: 20.0,
            hole_diameter_mm: 22.0,
            length_mm: 3.0 * MM_PER_M,
            steel_yield_mpa: 275.0,
            grout_strength_mpa: None,
            injection_pressure_mpa: None,
            grout_method: None,
            soil_type: None,
            design_load_kn: 0.0,
        }
    }
}

impl AnchorConfiguration {
    /// Create a configuration from the anchor geometry and steel grade.
    ///
    /// # Arguments
    ///
    /// * `anchor_diameter_mm` - Bar diameter (mm), below 132 mm
    /// * `hole_diameter_mm` - Drilled diameter (mm), larger than the bar
    /// * `length_mm` - Bonded length (mm)
    /// * `steel_yield_mpa` - Steel yield strength (MPa)
    pub fn new(
        anchor_diameter_mm: f64,
        hole_diameter_mm: f64,
        length_mm: f64,
        steel_yield_mpa: f64,
    ) -> CalcResult<Self> {
        let config = AnchorConfiguration {
            anchor_diameter_mm,
            hole_diameter_mm,
            length_mm,
            steel_yield_mpa,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the bonded length with one given in metres.
    ///
    /// ```rust
    /// use anchor_core::calculations::AnchorConfiguration;
    ///
    /// let anchor = AnchorConfiguration::default().with_length_m(4.0).unwrap();
    /// assert_eq!(anchor.length_mm, 4000.0);
    /// ```
    pub fn with_length_m(mut self, length_m: f64) -> CalcResult<Self> {
        let length: Millimeters = Meters(length_m).into();
        check_positive("length_mm", length.value())?;
        self.length_mm = length.value();
        Ok(self)
    }

    /// Builder form of [`set_soil`](Self::set_soil)
    pub fn with_soil(mut self, soil: SoilType) -> Self {
        self.set_soil(soil);
        self
    }

    /// Builder form of [`set_grout`](Self::set_grout)
    pub fn with_grout(
        mut self,
        strength_mpa: Option<f64>,
        pressure_mpa: Option<f64>,
        method: Option<GroutMethod>,
    ) -> CalcResult<Self> {
        self.set_grout(strength_mpa, pressure_mpa, method)?;
        Ok(self)
    }

    /// Builder form of [`set_design_load`](Self::set_design_load)
    pub fn with_design_load(mut self, load_kn: f64) -> CalcResult<Self> {
        self.set_design_load(load_kn)?;
        Ok(self)
    }

    /// Set the soil the anchor is grouted in.
    pub fn set_soil(&mut self, soil: SoilType) {
        self.soil_type = Some(soil);
    }

    /// Set the soil from its 0-12 code.
    ///
    /// Fails with [`CalcError::InvalidSoilType`] outside that range and leaves
    /// the previous soil in place.
    pub fn set_soil_code(&mut self, code: i64) -> CalcResult<()> {
        let soil = SoilType::from_code(code)?;
        self.set_soil(soil);
        Ok(())
    }

    /// Update grout properties. `None` keeps the current value.
    ///
    /// Values are checked before anything is written, so a rejected call
    /// leaves the configuration untouched.
    pub fn set_grout(
        &mut self,
        strength_mpa: Option<f64>,
        pressure_mpa: Option<f64>,
        method: Option<GroutMethod>,
    ) -> CalcResult<()> {
        if let Some(strength) = strength_mpa {
            check_positive("grout_strength_mpa", strength)?;
        }
        if let Some(pressure) = pressure_mpa {
            check_non_negative("injection_pressure_mpa", pressure)?;
        }

        if strength_mpa.is_some() {
            self.grout_strength_mpa = strength_mpa;
        }
        if pressure_mpa.is_some() {
            self.injection_pressure_mpa = pressure_mpa;
        }
        if method.is_some() {
            self.grout_method = method;
        }
        Ok(())
    }

    /// Set the injection method from its code (0 = multiple high pressure,
    /// 1 = single low pressure).
    pub fn set_grout_method_code(&mut self, code: i64) -> CalcResult<()> {
        let method = GroutMethod::from_code(code)?;
        self.grout_method = Some(method);
        Ok(())
    }

    /// Set the design load in kN. Negative loads fail with [`CalcError::InvalidLoad`].
    pub fn set_design_load(&mut self, load_kn: f64) -> CalcResult<()> {
        check_load(load_kn)?;
        self.design_load_kn = load_kn;
        Ok(())
    }

    /// Validate every value currently held.
    ///
    /// Unset soil or grout is not an error here; see [`missing_fields`](Self::missing_fields).
    pub fn validate(&self) -> CalcResult<()> {
        check_positive("anchor_diameter_mm", self.anchor_diameter_mm)?;
        if self.anchor_diameter_mm >= MAX_ANCHOR_DIAMETER_MM {
            return Err(CalcError::invalid_input(
                "anchor_diameter_mm",
                self.anchor_diameter_mm.to_string(),
                "Diameter reduction factor is zero or negative at 132 mm and above",
            ));
        }
        check_positive("hole_diameter_mm", self.hole_diameter_mm)?;
        if self.hole_diameter_mm <= self.anchor_diameter_mm {
            return Err(CalcError::invalid_input(
                "hole_diameter_mm",
                self.hole_diameter_mm.to_string(),
                format!("Hole must be larger than the {} mm bar", self.anchor_diameter_mm),
            ));
        }
        check_positive("length_mm", self.length_mm)?;
        check_positive("steel_yield_mpa", self.steel_yield_mpa)?;
        if let Some(strength) = self.grout_strength_mpa {
            check_positive("grout_strength_mpa", strength)?;
        }
        if let Some(pressure) = self.injection_pressure_mpa {
            check_non_negative("injection_pressure_mpa", pressure)?;
        }
        check_load(self.design_load_kn)?;
        Ok(())
    }

    /// Hole diameter minus bar diameter (mm).
    pub fn hole_clearance_mm(&self) -> f64 {
        self.hole_diameter_mm - self.anchor_diameter_mm
    }

    /// True when the clearance is below the practical minimum for grout injection.
    pub fn has_tight_clearance(&self) -> bool {
        self.hole_clearance_mm() < MIN_PRACTICAL_CLEARANCE_MM
    }

    /// Names of the fields that must be set before calculating.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.soil_type.is_none() {
            missing.push("soil_type".to_string());
        }
        if self.grout_method.is_none() {
            missing.push("grout_method".to_string());
        }
        if self.grout_strength_mpa.is_none() {
            missing.push("grout_strength_mpa".to_string());
        }
        if self.injection_pressure_mpa.is_none() {
            missing.push("injection_pressure_mpa".to_string());
        }
        missing
    }

    /// Soil and grout values, or [`CalcError::IncompleteConfiguration`].
    pub fn ground_parameters(&self) -> CalcResult<GroundParameters> {
        match (
            self.soil_type,
            self.grout_method,
            self.grout_strength_mpa,
            self.injection_pressure_mpa,
        ) {
            (Some(soil), Some(method), Some(grout_strength_mpa), Some(injection_pressure_mpa)) => {
                Ok(GroundParameters {
                    soil,
                    method,
                    grout_strength_mpa,
                    injection_pressure_mpa,
                })
            }
            _ => Err(CalcError::incomplete(self.missing_fields())),
        }
    }

    /// Bond coefficient `alpha_d` for the configured method and soil.
    pub fn bond_coefficient(&self) -> CalcResult<f64> {
        match (self.grout_method, self.soil_type) {
            (Some(method), Some(soil)) => Ok(bond_coefficient(method, soil)),
            _ => {
                let missing = self
                    .missing_fields()
                    .into_iter()
                    .filter(|field| field == "soil_type" || field == "grout_method")
                    .collect();
                Err(CalcError::incomplete(missing))
            }
        }
    }

    /// Governing (minimum) resistance in kN.
    ///
    /// Shorthand for `calculate(self)?.governing_kn`.
    pub fn calculate_worst_resistance(&self) -> CalcResult<f64> {
        Ok(super::capacity::calculate(self)?.governing_kn)
    }
}

/// Fully resolved soil and grout values of a configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundParameters {
    pub soil: SoilType,
    pub method: GroutMethod,
    pub grout_strength_mpa: f64,
    pub injection_pressure_mpa: f64,
}

fn check_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"));
    }
    Ok(())
}

fn check_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Cannot be negative"));
    }
    Ok(())
}

fn check_load(load_kn: f64) -> CalcResult<()> {
    if !load_kn.is_finite() {
        return Err(CalcError::invalid_load(load_kn, "Load must be a finite number"));
    }
    if load_kn < 0.0 {
        return Err(CalcError::invalid_load(load_kn, "Load cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_anchor() -> AnchorConfiguration {
        AnchorConfiguration::new(30.0, 45.0, 4000.0, 500.0)
            .unwrap()
            .with_soil(SoilType::Clay)
            .with_grout(Some(35.0), Some(2.0), Some(GroutMethod::SingleLowPressure))
            .unwrap()
    }

    #[test]
    fn test_default_design() {
        let anchor = AnchorConfiguration::default();
        assert_eq!(anchor.anchor_diameter_mm, 20.0);
        assert_eq!(anchor.hole_diameter_mm, 22.0);
        assert_eq!(anchor.length_mm, 3000.0);
        assert_eq!(anchor.steel_yield_mpa, 275.0);
        assert_eq!(anchor.design_load_kn, 0.0);
        assert!(anchor.validate().is_ok());
    }

    #[test]
    fn test_hole_must_exceed_bar() {
        assert!(AnchorConfiguration::new(30.0, 30.0, 4000.0, 500.0).is_err());
        assert!(AnchorConfiguration::new(30.0, 28.0, 4000.0, 500.0).is_err());
        assert!(AnchorConfiguration::new(30.0, 31.0, 4000.0, 500.0).is_ok());
    }

    #[test]
    fn test_rejects_non_physical_geometry() {
        assert!(AnchorConfiguration::new(0.0, 22.0, 3000.0, 275.0).is_err());
        assert!(AnchorConfiguration::new(20.0, 22.0, -1.0, 275.0).is_err());
        assert!(AnchorConfiguration::new(20.0, 22.0, 3000.0, f64::NAN).is_err());
        assert!(AnchorConfiguration::new(132.0, 160.0, 3000.0, 275.0).is_err());
        assert!(AnchorConfiguration::new(131.0, 160.0, 3000.0, 275.0).is_ok());
    }

    #[test]
    fn test_length_in_meters() {
        let anchor = AnchorConfiguration::default().with_length_m(4.5).unwrap();
        assert_eq!(anchor.length_mm, 4500.0);
        assert!(AnchorConfiguration::default().with_length_m(0.0).is_err());
    }

    #[test]
    fn test_set_soil_code() {
        let mut anchor = AnchorConfiguration::default();
        anchor.set_soil_code(12).unwrap();
        assert_eq!(anchor.soil_type, Some(SoilType::FracturedRock));

        let err = anchor.set_soil_code(13).unwrap_err();
        assert_eq!(err, CalcError::invalid_soil_type("13"));
        assert!(anchor.set_soil_code(-1).is_err());
        assert_eq!(anchor.soil_type, Some(SoilType::FracturedRock));
    }

    #[test]
    fn test_set_grout_partial_update() {
        let mut anchor = complete_anchor();
        anchor.set_grout(None, Some(4.0), None).unwrap();
        assert_eq!(anchor.grout_strength_mpa, Some(35.0));
        assert_eq!(anchor.injection_pressure_mpa, Some(4.0));
        assert_eq!(anchor.grout_method, Some(GroutMethod::SingleLowPressure));
    }

    #[test]
    fn test_method_code_zero_is_an_update() {
        let mut anchor = complete_anchor();
        anchor.set_grout_method_code(0).unwrap();
        assert_eq!(anchor.grout_method, Some(GroutMethod::MultipleHighPressure));
        assert_eq!(
            anchor.set_grout_method_code(2),
            Err(CalcError::invalid_grout_method("2"))
        );
        assert_eq!(anchor.grout_method, Some(GroutMethod::MultipleHighPressure));
    }

    #[test]
    fn test_rejected_grout_leaves_state() {
        let mut anchor = complete_anchor();
        let before = anchor.clone();
        assert!(anchor.set_grout(Some(40.0), Some(-1.0), None).is_err());
        assert_eq!(anchor, before);
    }

    #[test]
    fn test_design_load() {
        let mut anchor = AnchorConfiguration::default();
        anchor.set_design_load(100.0).unwrap();
        assert_eq!(anchor.design_load_kn, 100.0);

        let err = anchor.set_design_load(-5.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_LOAD");
        assert_eq!(anchor.design_load_kn, 100.0);
        assert!(anchor.set_design_load(f64::INFINITY).is_err());
    }

    #[test]
    fn test_missing_fields() {
        let anchor = AnchorConfiguration::default();
        assert_eq!(
            anchor.missing_fields(),
            vec!["soil_type", "grout_method", "grout_strength_mpa", "injection_pressure_mpa"]
        );
        assert!(complete_anchor().missing_fields().is_empty());
    }

    #[test]
    fn test_bond_coefficient_requires_soil_and_method() {
        let anchor = AnchorConfiguration::default().with_soil(SoilType::Clay);
        assert_eq!(
            anchor.bond_coefficient(),
            Err(CalcError::incomplete(vec!["grout_method".to_string()]))
        );
        assert_eq!(complete_anchor().bond_coefficient().unwrap(), 1.2);
    }

    #[test]
    fn test_hole_clearance() {
        let anchor = AnchorConfiguration::default();
        assert_eq!(anchor.hole_clearance_mm(), 2.0);
        assert!(anchor.has_tight_clearance());
        assert!(!complete_anchor().has_tight_clearance());
    }

    #[test]
    fn test_bond_coefficient_missing_matches_missing_fields() {
        let anchor = AnchorConfiguration::default();
        assert_eq!(
            anchor.bond_coefficient(),
            Err(CalcError::incomplete(vec![
                "soil_type".to_string(),
                "grout_method".to_string()
            ]))
        );

        let anchor = AnchorConfiguration::default()
            .with_grout(None, None, Some(GroutMethod::MultipleHighPressure))
            .unwrap();
        assert_eq!(
            anchor.bond_coefficient(),
            Err(CalcError::incomplete(vec!["soil_type".to_string()]))
        );
    }

    #[test]
    fn test_serialization() {
        let anchor = complete_anchor();
        let json = serde_json::to_string_pretty(&anchor).unwrap();
        assert!(json.contains("\"soil_type\": \"Clay\""));
        let roundtrip: AnchorConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(anchor, roundtrip);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "anchor_diameter_mm": 20.0,
            "hole_diameter_mm": 32.0,
            "length_mm": 3000.0,
            "steel_yield_mpa": 275.0
        }"#;
        let anchor: AnchorConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(anchor.soil_type, None);
        assert_eq!(anchor.design_load_kn, 0.0);
        assert_eq!(anchor.missing_fields().len(), 4);
    }
}
