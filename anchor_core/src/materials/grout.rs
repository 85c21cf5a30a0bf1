//! Grout injection methods

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// How the grout was injected into the borehole.
///
/// Also the row index into the bond coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroutMethod {
    /// Repeated, selective high-pressure injection (IRS), code 0
    MultipleHighPressure,
    /// Single global low-pressure injection (IGU), code 1
    SingleLowPressure,
}

impl GroutMethod {
    pub const ALL: [GroutMethod; 2] = [GroutMethod::MultipleHighPressure, GroutMethod::SingleLowPressure];

    pub fn code(self) -> usize {
        self as usize
    }

    /// Look up a method by its numeric code.
    ///
    /// ```rust
    /// use anchor_core::materials::GroutMethod;
    ///
    /// assert_eq!(GroutMethod::from_code(0).unwrap(), GroutMethod::MultipleHighPressure);
    /// assert!(GroutMethod::from_code(2).is_err());
    /// ```
    pub fn from_code(code: i64) -> CalcResult<Self> {
        match code {
            0 => Ok(GroutMethod::MultipleHighPressure),
            1 => Ok(GroutMethod::SingleLowPressure),
            _ => Err(CalcError::invalid_grout_method(code.to_string())),
        }
    }

    /// Parse from a code ("0") or a name ("high", "single-low-pressure", "IGU")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code);
        }
        match trimmed.to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "MULTIPLEHIGHPRESSURE" | "MULTIPLE" | "HIGH" | "HIGHPRESSURE" | "IRS" => {
                Ok(GroutMethod::MultipleHighPressure)
            }
            "SINGLELOWPRESSURE" | "SINGLE" | "LOW" | "LOWPRESSURE" | "IGU" => Ok(GroutMethod::SingleLowPressure),
            _ => Err(CalcError::invalid_grout_method(s)),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GroutMethod::MultipleHighPressure => "Multiple high pressure injection",
            GroutMethod::SingleLowPressure => "Single low pressure injection",
        }
    }
}

impl std::fmt::Display for GroutMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(GroutMethod::MultipleHighPressure.code(), 0);
        assert_eq!(GroutMethod::SingleLowPressure.code(), 1);
        assert_eq!(GroutMethod::from_code(1).unwrap(), GroutMethod::SingleLowPressure);
        assert_eq!(
            GroutMethod::from_code(-1),
            Err(CalcError::invalid_grout_method("-1"))
        );
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(GroutMethod::from_str_flexible("IGU").unwrap(), GroutMethod::SingleLowPressure);
        assert_eq!(
            GroutMethod::from_str_flexible("multiple-high-pressure").unwrap(),
            GroutMethod::MultipleHighPressure
        );
        assert!(GroutMethod::from_str_flexible("gravity").is_err());
    }
}
