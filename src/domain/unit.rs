//! Measurement units and conversion into family base quantities.
//!
//! Every unit belongs to exactly one [`UnitFamily`]. Quantities are
//! normalized by multiplying with the unit's factor into the smallest unit of
//! its family (gram, milliliter, or a single item). Conversions between
//! families are refused instead of producing a meaningless number.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::errors::{PantryError, Result};

/// What a unit measures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    Mass,
    Volume,
    Count,
}

impl UnitFamily {
    /// The canonical unit quantities of this family are normalized into.
    pub fn base_unit(self) -> Unit {
        match self {
            UnitFamily::Mass => Unit::Gram,
            UnitFamily::Volume => Unit::Milliliter,
            UnitFamily::Count => Unit::Count,
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UnitFamily::Mass => "mass",
            UnitFamily::Volume => "volume",
            UnitFamily::Count => "count",
        };
        f.write_str(label)
    }
}

/// Supported measurement units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    #[serde(rename = "g", alias = "gram", alias = "grams")]
    Gram,
    #[serde(rename = "kg", alias = "kilogram", alias = "kilograms")]
    Kilogram,
    #[serde(rename = "ml", alias = "milliliter", alias = "milliliters")]
    Milliliter,
    #[serde(rename = "l", alias = "liter", alias = "liters", alias = "litros")]
    Liter,
    #[serde(
        rename = "unit",
        alias = "units",
        alias = "unidades",
        alias = "un",
        alias = "count"
    )]
    Count,
}

impl Unit {
    pub const ALL: [Unit; 5] = [
        Unit::Gram,
        Unit::Kilogram,
        Unit::Milliliter,
        Unit::Liter,
        Unit::Count,
    ];

    pub fn family(self) -> UnitFamily {
        match self {
            Unit::Gram | Unit::Kilogram => UnitFamily::Mass,
            Unit::Milliliter | Unit::Liter => UnitFamily::Volume,
            Unit::Count => UnitFamily::Count,
        }
    }

    /// Factor that converts one of this unit into the family base unit.
    pub fn multiplier(self) -> f64 {
        match self {
            Unit::Gram | Unit::Milliliter | Unit::Count => 1.0,
            Unit::Kilogram | Unit::Liter => 1000.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Count => "unit",
        }
    }

    /// Expresses `quantity` of this unit in the family base unit.
    pub fn normalize(self, quantity: f64) -> f64 {
        quantity * self.multiplier()
    }

    /// Expresses a base-unit quantity in this unit.
    pub fn denormalize(self, base_quantity: f64) -> f64 {
        base_quantity / self.multiplier()
    }

    pub fn is_compatible_with(self, other: Unit) -> bool {
        self.family() == other.family()
    }

    /// Converts `quantity` of this unit into `target`, refusing to cross families.
    pub fn convert(self, quantity: f64, target: Unit) -> Result<f64> {
        if !self.is_compatible_with(target) {
            return Err(PantryError::UnitFamilyMismatch {
                from: self,
                to: target,
            });
        }
        Ok(target.denormalize(self.normalize(quantity)))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = PantryError;

    fn from_str(value: &str) -> Result<Self> {
        let unit = match value.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Unit::Gram,
            "kg" | "kilogram" | "kilograms" => Unit::Kilogram,
            "ml" | "milliliter" | "milliliters" => Unit::Milliliter,
            "l" | "liter" | "liters" | "litros" => Unit::Liter,
            "unit" | "units" | "unidades" | "un" | "count" => Unit::Count,
            _ => return Err(PantryError::UnknownUnit(value.to_string())),
        };
        Ok(unit)
    }
}
