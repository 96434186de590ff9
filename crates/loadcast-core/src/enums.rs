//! Closed enumerations for the discrete building parameters and the derived
//! efficiency classification.
//!
//! Each discrete parameter maps one-to-one to the numeric value the fitted
//! regression models were trained on. The `from_value` constructors validate
//! membership at the boundary; nothing here coerces.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OverallHeight
// ---------------------------------------------------------------------------

/// Overall building height in metres. The training data contains exactly two
/// storey configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverallHeight {
    /// Single storey, 3.5 m.
    Low,
    /// Two storeys, 7.0 m.
    High,
}

impl OverallHeight {
    /// Numeric value fed to the feature vector.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Low => 3.5,
            Self::High => 7.0,
        }
    }

    /// Parse from the raw wire value. Membership is exact.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_value(value: f64) -> Option<Self> {
        if value == 3.5 {
            Some(Self::Low)
        } else if value == 7.0 {
            Some(Self::High)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for OverallHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Compass orientation of the building, as the dataset's integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Integer code used in the feature vector (2 through 5).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::North => 2,
            Self::East => 3,
            Self::South => 4,
            Self::West => 5,
        }
    }

    /// Parse from the raw wire value. Membership is exact.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_value(value: f64) -> Option<Self> {
        [Self::North, Self::East, Self::South, Self::West]
            .into_iter()
            .find(|o| f64::from(o.code()) == value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GlazingArea
// ---------------------------------------------------------------------------

/// Glazed fraction of the facade area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlazingArea {
    None,
    Small,
    Medium,
    Large,
}

impl GlazingArea {
    /// Facade fraction fed to the feature vector.
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Small => 0.1,
            Self::Medium => 0.25,
            Self::Large => 0.4,
        }
    }

    /// Parse from the raw wire value. Membership is exact.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_value(value: f64) -> Option<Self> {
        [Self::None, Self::Small, Self::Medium, Self::Large]
            .into_iter()
            .find(|g| g.fraction() == value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for GlazingArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GlazingAreaDistribution
// ---------------------------------------------------------------------------

/// Which facade(s) carry the glazed area, as the dataset's integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlazingAreaDistribution {
    None,
    North,
    East,
    South,
    West,
    Uniform,
}

impl GlazingAreaDistribution {
    /// Integer code used in the feature vector (0 through 5).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::North => 1,
            Self::East => 2,
            Self::South => 3,
            Self::West => 4,
            Self::Uniform => 5,
        }
    }

    /// Parse from the raw wire value. Membership is exact.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_value(value: f64) -> Option<Self> {
        [
            Self::None,
            Self::North,
            Self::East,
            Self::South,
            Self::West,
            Self::Uniform,
        ]
        .into_iter()
        .find(|d| f64::from(d.code()) == value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
            Self::Uniform => "uniform",
        }
    }
}

impl fmt::Display for GlazingAreaDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Efficiency
// ---------------------------------------------------------------------------

/// Derived energy-efficiency category.
///
/// Serialized with capitalized variant names ("Low", "Moderate", "High"),
/// matching the wire format consumed by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Efficiency {
    Low,
    Moderate,
    High,
}

impl Efficiency {
    /// Classify predicted loads with the fixed thresholds.
    ///
    /// Ordered decision list, first match wins; comparisons are strict, so a
    /// heating load of exactly 30.0 does not trip the Low clause.
    #[must_use]
    pub fn classify(heating: f64, cooling: f64) -> Self {
        if heating > 30.0 || cooling > 35.0 {
            Self::Low
        } else if heating > 20.0 || cooling > 25.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Advisory text paired one-to-one with the category.
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Low => "Needs significant improvement",
            Self::Moderate => "Acceptable, but can be improved",
            Self::High => "Optimal performance achieved",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
