//! Stock health classification and depletion estimates.

use std::{collections::HashMap, fmt, ptr};

use serde::{Deserialize, Serialize};

use crate::domain::{Food, FoodIndex, Meal, StockStatus, Unit};

use super::{resolve_item, SkipReason, SkippedItem};

/// How long the current stock lasts at the estimated daily consumption.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Depletion {
    Days(f64),
    /// No measured consumption, so the stock never runs out.
    Unbounded,
}

impl Depletion {
    pub fn estimate(quantity_in_stock: f64, daily_consumption: f64) -> Self {
        if daily_consumption > 0.0 {
            Depletion::Days(quantity_in_stock / daily_consumption)
        } else {
            Depletion::Unbounded
        }
    }

    pub fn days(&self) -> Option<f64> {
        match self {
            Depletion::Days(days) => Some(*days),
            Depletion::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Depletion::Unbounded)
    }
}

impl fmt::Display for Depletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depletion::Days(days) => write!(f, "{days:.1} days"),
            Depletion::Unbounded => f.write_str("unbounded"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockHealth {
    pub food_name: String,
    pub unit: Unit,
    pub quantity_in_stock: f64,
    pub min_stock: f64,
    pub ideal_stock: f64,
    pub status: StockStatus,
    /// Consumption per day in the food's native unit, one occurrence of each meal per day.
    pub daily_consumption: f64,
    pub depletion: Depletion,
    pub restock_quantity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StockReport {
    pub items: Vec<StockHealth>,
    /// Meal items whose unit family does not match their food.
    pub skipped: Vec<SkippedItem>,
}

impl StockReport {
    pub fn item(&self, food_name: &str) -> Option<&StockHealth> {
        self.items.iter().find(|item| item.food_name == food_name)
    }

    pub fn count(&self, status: StockStatus) -> usize {
        self.items.iter().filter(|item| item.status == status).count()
    }
}

pub struct StockService;

impl StockService {
    /// Health of every food with stock on hand. Foods at zero stock are left out.
    pub fn report(foods: &[Food], meals: &[Meal]) -> StockReport {
        let index = FoodIndex::new(foods);
        let mut consumption: HashMap<&str, f64> = HashMap::new();
        let mut skipped = Vec::new();

        for meal in meals {
            for item in &meal.items {
                match resolve_item(&index, item) {
                    Ok(food) => {
                        *consumption.entry(food.name.as_str()).or_default() += item.base_quantity();
                    }
                    Err(reason @ SkipReason::UnitFamilyMismatch { .. }) => {
                        skipped.push(SkippedItem::new(meal, item, reason));
                    }
                    Err(_) => {}
                }
            }
        }

        let items = foods
            .iter()
            .filter(|food| food.quantity_in_stock > 0.0)
            .filter(|food| {
                index
                    .get(&food.name)
                    .is_some_and(|indexed| ptr::eq(indexed, *food))
            })
            .map(|food| {
                let base = consumption.get(food.name.as_str()).copied().unwrap_or(0.0);
                Self::health(food, food.unit.denormalize(base))
            })
            .collect();

        StockReport { items, skipped }
    }

    /// Daily consumption of `food` across `meals`, in the food's native unit.
    pub fn daily_consumption(food: &Food, meals: &[Meal]) -> f64 {
        let base: f64 = meals
            .iter()
            .flat_map(|meal| meal.items.iter())
            .filter(|item| item.food_name == food.name && item.unit.is_compatible_with(food.unit))
            .map(|item| item.base_quantity())
            .sum();
        food.unit.denormalize(base)
    }

    fn health(food: &Food, daily_consumption: f64) -> StockHealth {
        StockHealth {
            food_name: food.name.clone(),
            unit: food.unit,
            quantity_in_stock: food.quantity_in_stock,
            min_stock: food.min_stock,
            ideal_stock: food.ideal_stock,
            status: food.stock_status(),
            daily_consumption,
            depletion: Depletion::estimate(food.quantity_in_stock, daily_consumption),
            restock_quantity: food.restock_quantity(),
        }
    }
}
