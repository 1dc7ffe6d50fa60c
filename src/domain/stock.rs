//! Stock movement records: purchases (entries) and consumption or waste (exits).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{common::record_date, unit::Unit};

/// A purchase. `cost` is the total paid for `quantity`, not a unit price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockEntry {
    pub food_name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub cost: f64,
    #[serde(with = "record_date")]
    pub date: NaiveDate,
    pub supplier: String,
}

impl StockEntry {
    pub fn new(
        food_name: impl Into<String>,
        quantity: f64,
        unit: Unit,
        cost: f64,
        date: NaiveDate,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            food_name: food_name.into(),
            quantity,
            unit,
            cost,
            date,
            supplier: supplier.into(),
        }
    }

    pub fn base_quantity(&self) -> f64 {
        self.unit.normalize(self.quantity)
    }
}

/// Stock leaving the pantry for consumption or waste.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockExit {
    pub food_name: String,
    pub quantity: f64,
    pub unit: Unit,
    #[serde(with = "record_date")]
    pub date: NaiveDate,
    pub reason: String,
}

impl StockExit {
    pub fn new(
        food_name: impl Into<String>,
        quantity: f64,
        unit: Unit,
        date: NaiveDate,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            food_name: food_name.into(),
            quantity,
            unit,
            date,
            reason: reason.into(),
        }
    }

    pub fn base_quantity(&self) -> f64 {
        self.unit.normalize(self.quantity)
    }
}
