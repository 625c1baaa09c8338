use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Chemical elements with tabulated van der Waals radii.
///
/// The set covers the elements the radius table knows about; everything else
/// maps to [`Element::Unknown`], which carries a generic fallback radius.
/// Keeping this a closed enum (rather than an open string key) lets the
/// radius-profile cache be a fixed table indexed by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Element {
    Hydrogen,
    Lithium,
    Sodium,
    Potassium,
    Carbon,
    Nitrogen,
    Oxygen,
    Fluorine,
    Phosphorus,
    Sulfur,
    Chlorine,
    Bromine,
    Selenium,
    Zinc,
    Copper,
    Nickel,
    /// Fallback for elements without a tabulated radius.
    #[default]
    Unknown,
}

/// Case-normalized element symbols. Two-letter symbols are stored uppercase
/// because structure files commonly carry them that way (e.g. "CL", "ZN").
static ELEMENT_SYMBOLS: Map<&'static str, Element> = phf_map! {
    "H" => Element::Hydrogen,
    "LI" => Element::Lithium,
    "NA" => Element::Sodium,
    "K" => Element::Potassium,
    "C" => Element::Carbon,
    "N" => Element::Nitrogen,
    "O" => Element::Oxygen,
    "F" => Element::Fluorine,
    "P" => Element::Phosphorus,
    "S" => Element::Sulfur,
    "CL" => Element::Chlorine,
    "BR" => Element::Bromine,
    "SE" => Element::Selenium,
    "ZN" => Element::Zinc,
    "CU" => Element::Copper,
    "NI" => Element::Nickel,
};

impl Element {
    /// Number of variants, including [`Element::Unknown`]. Used to size the
    /// per-element radius profile table.
    pub const COUNT: usize = 17;

    /// All variants in discriminant order.
    pub const ALL: [Element; Self::COUNT] = [
        Element::Hydrogen,
        Element::Lithium,
        Element::Sodium,
        Element::Potassium,
        Element::Carbon,
        Element::Nitrogen,
        Element::Oxygen,
        Element::Fluorine,
        Element::Phosphorus,
        Element::Sulfur,
        Element::Chlorine,
        Element::Bromine,
        Element::Selenium,
        Element::Zinc,
        Element::Copper,
        Element::Nickel,
        Element::Unknown,
    ];

    /// Parses an element symbol, case-insensitively.
    ///
    /// Unknown or empty symbols fall back to [`Element::Unknown`] rather than
    /// failing; an unrecognized element still contributes a sphere of the
    /// default radius to the surface.
    pub fn from_symbol(symbol: &str) -> Self {
        ELEMENT_SYMBOLS
            .get(symbol.trim().to_ascii_uppercase().as_str())
            .copied()
            .unwrap_or(Element::Unknown)
    }

    /// Van der Waals radius in Angstroms.
    pub fn vdw_radius(self) -> f64 {
        match self {
            Element::Hydrogen => 1.2,
            Element::Lithium => 1.82,
            Element::Sodium => 2.27,
            Element::Potassium => 2.75,
            Element::Carbon => 1.7,
            Element::Nitrogen => 1.55,
            Element::Oxygen => 1.52,
            Element::Fluorine => 1.47,
            Element::Phosphorus => 1.80,
            Element::Sulfur => 1.80,
            Element::Chlorine => 1.75,
            Element::Bromine => 1.85,
            Element::Selenium => 1.90,
            Element::Zinc => 1.39,
            Element::Copper => 1.4,
            Element::Nickel => 1.63,
            Element::Unknown => 2.0,
        }
    }
}

impl FromStr for Element {
    type Err = ();

    /// Infallible in practice; provided so `"C".parse::<Element>()` works.
    /// Unrecognized symbols yield [`Element::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Element::from_symbol(s))
    }
}
