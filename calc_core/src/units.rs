//! # Unit Types
//!
//! Lightweight newtype wrappers for the physical units the health and
//! motion calculators deal with, plus the side-band context enums
//! ([`UnitSystem`], [`DistanceUnit`], [`AngleUnit`], [`Currency`]) that change
//! how inputs are interpreted or results are formatted, never the formulas.
//!
//! Formulas always run in metric. Imperial inputs are converted at the
//! boundary.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Inches, Centimeters, Pounds, Kilograms};
//!
//! let height: Centimeters = Inches(70.0).into();
//! assert!((height.0 - 177.8).abs() < 1e-9);
//!
//! let weight: Kilograms = Pounds(154.0).into();
//! assert!((weight.0 - 69.853).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound (exact, international avoirdupois pound)
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Centimeters per inch (exact)
pub const CM_PER_IN: f64 = 2.54;

/// Kilometers per statute mile (exact)
pub const KM_PER_MILE: f64 = 1.609_344;

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * KG_PER_LB)
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / KG_PER_LB)
    }
}

// ============================================================================
// Body Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_IN)
    }
}

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / CM_PER_IN)
    }
}

// ============================================================================
// Distance Units
// ============================================================================

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// Distance in statute miles
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Miles(pub f64);

impl From<Miles> for Kilometers {
    fn from(mi: Miles) -> Self {
        Kilometers(mi.0 * KM_PER_MILE)
    }
}

impl From<Kilometers> for Miles {
    fn from(km: Kilometers) -> Self {
        Miles(km.0 / KM_PER_MILE)
    }
}

// ============================================================================
// Context Selections
// ============================================================================

/// Measurement system used for body weight and length inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    /// Convert a weight in this system to kilograms
    pub fn weight_to_kg(self, weight: f64) -> Kilograms {
        match self {
            UnitSystem::Metric => Kilograms(weight),
            UnitSystem::Imperial => Pounds(weight).into(),
        }
    }

    /// Convert a body length in this system to centimeters
    pub fn length_to_cm(self, length: f64) -> Centimeters {
        match self {
            UnitSystem::Metric => Centimeters(length),
            UnitSystem::Imperial => Inches(length).into(),
        }
    }

    /// Parse from a user-facing name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" | "kg" => Some(UnitSystem::Metric),
            "imperial" | "us" | "lb" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

/// Unit for running/riding distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Mi,
}

impl DistanceUnit {
    /// The other unit
    pub fn other(self) -> Self {
        match self {
            DistanceUnit::Km => DistanceUnit::Mi,
            DistanceUnit::Mi => DistanceUnit::Km,
        }
    }

    /// Convert a distance expressed in this unit into `target`
    pub fn convert(self, distance: f64, target: DistanceUnit) -> f64 {
        match (self, target) {
            (DistanceUnit::Km, DistanceUnit::Mi) => Miles::from(Kilometers(distance)).0,
            (DistanceUnit::Mi, DistanceUnit::Km) => Kilometers::from(Miles(distance)).0,
            _ => distance,
        }
    }

    /// Parse from a user-facing name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Some(DistanceUnit::Km),
            "mi" | "mile" | "miles" => Some(DistanceUnit::Mi),
            _ => None,
        }
    }
}

/// Angle interpretation for trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Convert an angle in this unit to radians
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_radians(),
        }
    }

    /// Convert an angle in radians to this unit
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }

    /// Parse from a user-facing name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rad" | "radian" | "radians" => Some(AngleUnit::Radians),
            "deg" | "degree" | "degrees" => Some(AngleUnit::Degrees),
            _ => None,
        }
    }
}

/// Display currency for monetary results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Cad,
    Aud,
}

impl Currency {
    /// All supported currencies
    pub const ALL: [Currency; 7] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Inr,
        Currency::Jpy,
        Currency::Cad,
        Currency::Aud,
    ];

    /// ISO 4217 code
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
        }
    }

    /// Display symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
            Currency::Jpy => "¥",
            Currency::Cad => "CA$",
            Currency::Aud => "A$",
        }
    }

    /// Minor-unit digits shown when formatting
    pub fn display_decimals(self) -> usize {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// Parse an ISO code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim().to_ascii_uppercase();
        Currency::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
