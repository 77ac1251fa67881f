//! Saaty scale value object for pairwise judgments (odd values 1 to 9).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Relative importance of one item over another.
///
/// Only the odd anchors are exposed; the engine itself accepts any
/// positive real and its reciprocal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SaatyScale {
    #[default]
    Equal = 1,
    Moderate = 3,
    Strong = 5,
    VeryStrong = 7,
    Extreme = 9,
}

impl SaatyScale {
    /// All exposed scale values in ascending order.
    pub const ALL: [SaatyScale; 5] = [
        SaatyScale::Equal,
        SaatyScale::Moderate,
        SaatyScale::Strong,
        SaatyScale::VeryStrong,
        SaatyScale::Extreme,
    ];

    /// Creates a SaatyScale from an integer, returning error if not an exposed value.
    pub fn try_from_value(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(SaatyScale::Equal),
            3 => Ok(SaatyScale::Moderate),
            5 => Ok(SaatyScale::Strong),
            7 => Ok(SaatyScale::VeryStrong),
            9 => Ok(SaatyScale::Extreme),
            2 | 4 | 6 | 8 => Err(ValidationError::invalid_format(
                "saaty_scale",
                format!("intermediate value {} is not offered", value),
            )),
            _ => Err(ValidationError::out_of_range(
                "saaty_scale",
                1,
                9,
                value as i32,
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the judgment magnitude as a real.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.value())
    }

    /// Returns the magnitude for the opposite direction (1/v).
    pub fn reciprocal(&self) -> f64 {
        1.0 / self.as_f64()
    }

    /// Magnitude of "first vs second": v when the first item is favored, else 1/v.
    pub fn directed(&self, favors_first: bool) -> f64 {
        if favors_first {
            self.as_f64()
        } else {
            self.reciprocal()
        }
    }

    /// Returns the verbal label.
    pub fn label(&self) -> &'static str {
        match self {
            SaatyScale::Equal => "Equal importance",
            SaatyScale::Moderate => "Moderately more important",
            SaatyScale::Strong => "Strongly more important",
            SaatyScale::VeryStrong => "Very strongly more important",
            SaatyScale::Extreme => "Extremely more important",
        }
    }
}

impl fmt::Display for SaatyScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Formats a raw judgment magnitude the way the comparison table shows it:
/// `1`, `5`, or `1/5` for reciprocals.
pub fn describe_judgment(value: f64) -> String {
    if value >= 1.0 {
        format!("{}", value)
    } else {
        format!("1/{}", 1.0 / value)
    }
}
