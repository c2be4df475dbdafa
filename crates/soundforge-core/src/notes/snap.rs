//! Quantize grid subdivisions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EditError;

/// Snap grid, expressed as a note value in 4/4
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapValue {
    #[serde(rename = "1/4")]
    Quarter,
    #[serde(rename = "1/8")]
    Eighth,
    #[default]
    #[serde(rename = "1/16")]
    Sixteenth,
    #[serde(rename = "1/32")]
    ThirtySecond,
}

impl SnapValue {
    pub const ALL: [SnapValue; 4] = [
        SnapValue::Quarter,
        SnapValue::Eighth,
        SnapValue::Sixteenth,
        SnapValue::ThirtySecond,
    ];

    /// Grid spacing in beats
    pub fn beats(&self) -> f64 {
        match self {
            SnapValue::Quarter => 1.0,
            SnapValue::Eighth => 0.5,
            SnapValue::Sixteenth => 0.25,
            SnapValue::ThirtySecond => 0.125,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SnapValue::Quarter => "1/4",
            SnapValue::Eighth => "1/8",
            SnapValue::Sixteenth => "1/16",
            SnapValue::ThirtySecond => "1/32",
        }
    }
}

impl fmt::Display for SnapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SnapValue {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnapValue::ALL
            .into_iter()
            .find(|v| v.label() == s.trim())
            .ok_or_else(|| EditError::InvalidSnap(s.to_string()))
    }
}
