//! Stateless report services. Each takes snapshot slices and returns plain data.

pub mod financial_service;
pub mod movement_service;
pub mod nutrition_service;
pub mod projection;
pub mod report_service;
pub mod stock_service;
pub mod valuation_service;

pub use financial_service::{CostLine, FinancialReport, FinancialService, MealCost};
pub use movement_service::{Movement, MovementKind, MovementService, SupplierSpend};
pub use nutrition_service::{MealNutrition, NutritionLine, NutritionReport, NutritionService};
pub use projection::{MealProjection, Projectable, Projection};
pub use report_service::{InventoryReport, ReportService};
pub use stock_service::{Depletion, StockHealth, StockReport, StockService};
pub use valuation_service::{CostValuationService, FoodValuation, Valuations};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Food, FoodIndex, Meal, MealItem, Unit};

/// Why a meal item was left out of a total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    MissingFood,
    NoCostData,
    UnitFamilyMismatch { item_unit: Unit, food_unit: Unit },
    DegeneratePortion,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingFood => f.write_str("food not found"),
            SkipReason::NoCostData => f.write_str("no purchase history"),
            SkipReason::UnitFamilyMismatch {
                item_unit,
                food_unit,
            } => write!(
                f,
                "unit {item_unit} ({}) does not match food unit {food_unit} ({})",
                item_unit.family(),
                food_unit.family()
            ),
            SkipReason::DegeneratePortion => f.write_str("food portion size is not positive"),
        }
    }
}

/// A meal item excluded from a report, kept so callers can surface it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedItem {
    pub meal_name: String,
    pub food_name: String,
    pub reason: SkipReason,
}

impl SkippedItem {
    pub(crate) fn new(meal: &Meal, item: &MealItem, reason: SkipReason) -> Self {
        debug!(
            meal = %meal.name,
            food = %item.food_name,
            %reason,
            "meal item excluded from totals"
        );
        Self {
            meal_name: meal.name.clone(),
            food_name: item.food_name.clone(),
            reason,
        }
    }
}

/// Resolves the food a meal item refers to, checking the units agree.
pub(crate) fn resolve_item<'a>(
    index: &FoodIndex<'a>,
    item: &MealItem,
) -> Result<&'a Food, SkipReason> {
    let food = index.get(&item.food_name).ok_or(SkipReason::MissingFood)?;
    if !item.unit.is_compatible_with(food.unit) {
        return Err(SkipReason::UnitFamilyMismatch {
            item_unit: item.unit,
            food_unit: food.unit,
        });
    }
    Ok(food)
}

#[cfg(test)]
mod tests;
