//! Food records, their per-portion nutrition, and stock classification.

use std::{
    fmt,
    ops::{Add, AddAssign, Mul},
};

use serde::{Deserialize, Serialize};

use super::{common::NamedEntity, unit::Unit};

/// Macro-nutrient and energy totals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Nutrients {
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Nutrients {
    pub fn new(calories: f64, proteins: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            proteins,
            carbs,
            fats,
        }
    }
}

impl Add for Nutrients {
    type Output = Nutrients;

    fn add(self, rhs: Nutrients) -> Nutrients {
        Nutrients {
            calories: self.calories + rhs.calories,
            proteins: self.proteins + rhs.proteins,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Nutrients) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Nutrients {
    type Output = Nutrients;

    fn mul(self, factor: f64) -> Nutrients {
        Nutrients {
            calories: self.calories * factor,
            proteins: self.proteins * factor,
            carbs: self.carbs * factor,
            fats: self.fats * factor,
        }
    }
}

/// A stocked food item. Quantities are expressed in the food's native `unit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    pub name: String,
    pub unit: Unit,
    pub quantity_in_stock: f64,
    pub quantity_per_portion: f64,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
    /// Critical threshold; 0 disables the check.
    #[serde(default)]
    pub min_stock: f64,
    #[serde(default)]
    pub ideal_stock: f64,
}

impl Food {
    pub fn new(name: impl Into<String>, unit: Unit, quantity_per_portion: f64) -> Self {
        Self {
            name: name.into(),
            unit,
            quantity_in_stock: 0.0,
            quantity_per_portion,
            calories: 0.0,
            proteins: 0.0,
            carbs: 0.0,
            fats: 0.0,
            min_stock: 0.0,
            ideal_stock: 0.0,
        }
    }

    pub fn with_nutrients(mut self, per_portion: Nutrients) -> Self {
        self.calories = per_portion.calories;
        self.proteins = per_portion.proteins;
        self.carbs = per_portion.carbs;
        self.fats = per_portion.fats;
        self
    }

    pub fn with_stock(mut self, quantity_in_stock: f64, min_stock: f64, ideal_stock: f64) -> Self {
        self.quantity_in_stock = quantity_in_stock;
        self.min_stock = min_stock;
        self.ideal_stock = ideal_stock;
        self
    }

    pub fn nutrients_per_portion(&self) -> Nutrients {
        Nutrients::new(self.calories, self.proteins, self.carbs, self.fats)
    }

    /// Portion size in the base unit of the food's family.
    pub fn portion_base_quantity(&self) -> f64 {
        self.unit.normalize(self.quantity_per_portion)
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.quantity_in_stock, self.min_stock, self.ideal_stock)
    }

    /// Quantity still missing to reach the ideal stock, never negative.
    pub fn restock_quantity(&self) -> f64 {
        (self.ideal_stock - self.quantity_in_stock).max(0.0)
    }
}

impl NamedEntity for Food {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Stock health classification of a food.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Critical,
    Attention,
    Adequate,
}

impl StockStatus {
    pub fn classify(quantity_in_stock: f64, min_stock: f64, ideal_stock: f64) -> Self {
        if min_stock > 0.0 && quantity_in_stock < min_stock {
            StockStatus::Critical
        } else if quantity_in_stock < ideal_stock {
            StockStatus::Attention
        } else {
            StockStatus::Adequate
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StockStatus::Critical => "Critical",
            StockStatus::Attention => "Attention",
            StockStatus::Adequate => "Adequate",
        };
        f.write_str(label)
    }
}
