//! # Text Report
//!
//! Human-readable summary of a capacity check. Resistances are printed in kN
//! with two decimals.

use std::fmt::Write;

use crate::calculations::{AnchorConfiguration, CapacityResult};

const RULE: &str = "═══════════════════════════════════════";

/// Render the input echo, the three resistances and the verdict.
///
/// ```rust
/// use anchor_core::calculations::{calculate, AnchorConfiguration};
/// use anchor_core::materials::{GroutMethod, SoilType};
/// use anchor_core::report::render_summary;
///
/// let anchor = AnchorConfiguration::default()
///     .with_soil(SoilType::Clay)
///     .with_grout(Some(55.0), Some(55.0), Some(GroutMethod::SingleLowPressure))
///     .unwrap();
/// let result = calculate(&anchor).unwrap();
///
/// let report = render_summary(&anchor, &result);
/// assert!(report.contains("Steel resistance: 75.13 kN"));
/// ```
#[must_use]
pub fn render_summary(config: &AnchorConfiguration, result: &CapacityResult) -> String {
    let mut out = String::new();
    write_summary(&mut out, config, result).expect("writing to string cannot fail");
    out
}

fn write_summary(out: &mut String, config: &AnchorConfiguration, result: &CapacityResult) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "  ANCHOR CAPACITY RESULTS")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "Input:")?;
    writeln!(
        out,
        "  Bar:      {:.0} mm in {:.0} mm hole, L = {:.2} m",
        config.anchor_diameter_mm,
        config.hole_diameter_mm,
        config.length_mm / crate::units::MM_PER_M
    )?;
    writeln!(out, "  Steel:    fy = {:.0} MPa", config.steel_yield_mpa)?;
    if let (Some(strength), Some(pressure), Some(method)) = (
        config.grout_strength_mpa,
        config.injection_pressure_mpa,
        config.grout_method,
    ) {
        writeln!(out, "  Grout:    fck = {strength:.1} MPa, p = {pressure:.2} MPa, {method}")?;
    }
    if let Some(soil) = config.soil_type {
        writeln!(out, "  Soil:     {} ({})", soil, soil.code())?;
    }
    writeln!(out, "  Load:     {:.2} kN", result.design_load_kn)?;
    writeln!(out)?;
    writeln!(out, "Intermediate values:")?;
    writeln!(
        out,
        "  alpha_d = {:.2}, Ds = {:.2} mm, As = {:.2} mm²",
        result.alpha_d, result.bond_diameter_mm, result.steel_area_mm2
    )?;
    writeln!(
        out,
        "  f_ctk = {:.3} MPa, q_s = {:.4} MPa, η = {:.2}, t_d = {:.3} MPa",
        result.grout_tensile_mpa, result.unit_bond_mpa, result.eta, result.adherence_bond_mpa
    )?;
    writeln!(out)?;
    writeln!(out, "Resistances:")?;
    writeln!(out, "  Soil-grout resistance: {:.2} kN", result.soil_grout_kn)?;
    writeln!(out, "  Steel resistance: {:.2} kN", result.steel_tension_kn)?;
    writeln!(out, "  Steel-grout resistance: {:.2} kN", result.steel_grout_kn)?;
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "  GOVERNING: {:.2} kN ({})",
        result.governing_kn, result.governing_mechanism
    )?;
    writeln!(out, "  {}", result.verdict)?;
    writeln!(out, "{RULE}")?;
    Ok(())
}
