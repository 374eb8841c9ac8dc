//! Materials and their cost multipliers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Multiplier applied to the base cost for steel parts.
const STEEL_MULTIPLIER: f64 = 1.2;

/// Neutral multiplier for every other material.
const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Part material selected by the customer.
///
/// The known set matches the shop's catalog. Unrecognized names are
/// **not** rejected: they parse to [`Material::Other`] and price at
/// the neutral 1.0 multiplier. This leniency is deliberate and kept
/// visible in the type rather than hidden behind a silent default.
///
/// # Example
///
/// ```
/// use cost_model::Material;
///
/// assert_eq!(Material::parse("Steel"), Material::Steel);
/// assert_eq!(Material::parse("ALUMINUM"), Material::Aluminum);
///
/// let exotic = Material::parse("titanium");
/// assert!(matches!(exotic, Material::Other(_)));
/// assert!((exotic.multiplier() - 1.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Material {
    /// Steel, 1.2x base cost.
    Steel,
    /// Aluminum, neutral multiplier.
    Aluminum,
    /// Brass, neutral multiplier.
    Brass,
    /// Copper, neutral multiplier.
    Copper,
    /// Unrecognized material name, neutral multiplier.
    Other(String),
}

impl Material {
    /// Parse a material name, case-insensitively.
    ///
    /// Never fails: unknown names become [`Material::Other`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "steel" => Self::Steel,
            "aluminum" => Self::Aluminum,
            "brass" => Self::Brass,
            "copper" => Self::Copper,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Cost multiplier for this material.
    ///
    /// The table is fixed at compile time and read-only, so concurrent
    /// lookups need no synchronization.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Steel => STEEL_MULTIPLIER,
            Self::Aluminum | Self::Brass | Self::Copper | Self::Other(_) => NEUTRAL_MULTIPLIER,
        }
    }

    /// Wire name of this material.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Steel => "steel",
            Self::Aluminum => "aluminum",
            Self::Brass => "brass",
            Self::Copper => "copper",
            Self::Other(name) => name,
        }
    }
}

impl Serialize for Material {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Material {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}
