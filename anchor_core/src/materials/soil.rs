//! Host Soil Categories (Bustamante & Doix)
//!
//! The 13 soil categories are ordered from coarse granular soils to rock.
//! The order matters: the unit bond resistance regressions are selected by
//! code range, see [`SoilBand`].

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Soil in which the anchor is grouted.
///
/// Serialized by variant name; [`SoilType::code`] gives the 0-12 index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Gravel,
    SandyGravel,
    GravellySand,
    CoarseSand,
    MediumSand,
    FineSand,
    SiltySand,
    Silt,
    Clay,
    Marl,
    MarlyLimestone,
    FracturedLimestone,
    FracturedRock,
}

/// Soil groups sharing one pair of `q_s` regressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilBand {
    /// Codes 0-5: gravels and sands
    Incoherent,
    /// Codes 6-7: silty sand and silt
    FineGrained,
    /// Codes 8-9: clay and marl
    MarlLimestone,
    /// Codes 10-12: limestone and rock
    FracturedRock,
}

impl SoilType {
    /// All soil types in code order, for UI selection and table iteration
    pub const ALL: [SoilType; 13] = [
        SoilType::Gravel,
        SoilType::SandyGravel,
        SoilType::GravellySand,
        SoilType::CoarseSand,
        SoilType::MediumSand,
        SoilType::FineSand,
        SoilType::SiltySand,
        SoilType::Silt,
        SoilType::Clay,
        SoilType::Marl,
        SoilType::MarlyLimestone,
        SoilType::FracturedLimestone,
        SoilType::FracturedRock,
    ];

    /// Numeric code 0-12, also the column index into the bond coefficient table
    pub fn code(self) -> usize {
        self as usize
    }

    /// Look up a soil by its numeric code.
    ///
    /// ```rust
    /// use anchor_core::materials::SoilType;
    ///
    /// assert_eq!(SoilType::from_code(8).unwrap(), SoilType::Clay);
    /// assert!(SoilType::from_code(13).is_err());
    /// assert!(SoilType::from_code(-1).is_err());
    /// ```
    pub fn from_code(code: i64) -> CalcResult<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| CalcError::invalid_soil_type(code.to_string()))
    }

    /// Parse from a code ("8") or a common name ("clay", "Fine sand", "fractured-rock")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code);
        }
        match trimmed.to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "GRAVEL" => Ok(SoilType::Gravel),
            "SANDYGRAVEL" => Ok(SoilType::SandyGravel),
            "GRAVELLYSAND" | "GRAVELYSAND" => Ok(SoilType::GravellySand),
            "COARSESAND" => Ok(SoilType::CoarseSand),
            "MEDIUMSAND" => Ok(SoilType::MediumSand),
            "FINESAND" => Ok(SoilType::FineSand),
            "SILTYSAND" => Ok(SoilType::SiltySand),
            "SILT" => Ok(SoilType::Silt),
            "CLAY" => Ok(SoilType::Clay),
            "MARL" => Ok(SoilType::Marl),
            "MARLYLIMESTONE" => Ok(SoilType::MarlyLimestone),
            "FRACTUREDLIMESTONE" | "ALTEREDLIMESTONE" | "ALTEREDORFRACTUREDLIMESTONE" => {
                Ok(SoilType::FracturedLimestone)
            }
            "FRACTUREDROCK" | "ALTEREDROCK" | "ALTEREDORFRACTUREDROCK" => Ok(SoilType::FracturedRock),
            _ => Err(CalcError::invalid_soil_type(s)),
        }
    }

    /// Regression band for this soil
    pub fn band(self) -> SoilBand {
        match self.code() {
            0..=5 => SoilBand::Incoherent,
            6..=7 => SoilBand::FineGrained,
            8..=9 => SoilBand::MarlLimestone,
            _ => SoilBand::FracturedRock,
        }
    }

    /// Get display name
    pub fn display_name(self) -> &'static str {
        match self {
            SoilType::Gravel => "Gravel",
            SoilType::SandyGravel => "Sandy gravel",
            SoilType::GravellySand => "Gravelly sand",
            SoilType::CoarseSand => "Coarse sand",
            SoilType::MediumSand => "Medium sand",
            SoilType::FineSand => "Fine sand",
            SoilType::SiltySand => "Silty sand",
            SoilType::Silt => "Silt",
            SoilType::Clay => "Clay",
            SoilType::Marl => "Marl",
            SoilType::MarlyLimestone => "Marly limestone",
            SoilType::FracturedLimestone => "Altered or fractured limestone",
            SoilType::FracturedRock => "Altered or fractured rock",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_declaration_order() {
        for (idx, soil) in SoilType::ALL.iter().enumerate() {
            assert_eq!(soil.code(), idx);
            assert_eq!(SoilType::from_code(idx as i64).unwrap(), *soil);
        }
    }

    #[test]
    fn test_out_of_range_codes() {
        for code in [-1, 13, 100, i64::MIN, i64::MAX] {
            assert_eq!(
                SoilType::from_code(code),
                Err(CalcError::invalid_soil_type(code.to_string()))
            );
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(SoilType::FineSand.band(), SoilBand::Incoherent);
        assert_eq!(SoilType::SiltySand.band(), SoilBand::FineGrained);
        assert_eq!(SoilType::Silt.band(), SoilBand::FineGrained);
        assert_eq!(SoilType::Clay.band(), SoilBand::MarlLimestone);
        assert_eq!(SoilType::Marl.band(), SoilBand::MarlLimestone);
        assert_eq!(SoilType::MarlyLimestone.band(), SoilBand::FracturedRock);
        assert_eq!(SoilType::FracturedRock.band(), SoilBand::FracturedRock);
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(SoilType::from_str_flexible("clay").unwrap(), SoilType::Clay);
        assert_eq!(SoilType::from_str_flexible(" 8 ").unwrap(), SoilType::Clay);
        assert_eq!(SoilType::from_str_flexible("Fine sand").unwrap(), SoilType::FineSand);
        assert_eq!(
            SoilType::from_str_flexible("altered-or-fractured-rock").unwrap(),
            SoilType::FracturedRock
        );
        assert!(SoilType::from_str_flexible("peat").is_err());
        assert!(SoilType::from_str_flexible("13").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SoilType::MarlyLimestone).unwrap();
        assert_eq!(json, "\"MarlyLimestone\"");
        let roundtrip: SoilType = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, SoilType::MarlyLimestone);
    }
}
