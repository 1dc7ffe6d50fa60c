//! Per-meal acquisition cost, priced with historical unit costs.

use serde::{Deserialize, Serialize};

use crate::domain::{Food, FoodIndex, Meal, StockEntry, Unit};

use super::{
    projection::Projection,
    resolve_item,
    valuation_service::{CostValuationService, Valuations},
    SkipReason, SkippedItem,
};

/// Cost of one meal item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostLine {
    pub food_name: String,
    /// Item quantity expressed in the food's native unit.
    pub quantity: f64,
    pub unit: Unit,
    /// Currency per base unit of the food's family.
    pub unit_cost: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealCost {
    pub meal_name: String,
    pub lines: Vec<CostLine>,
    pub total: f64,
    pub skipped: Vec<SkippedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialReport {
    pub meals: Vec<MealCost>,
    pub daily_total: f64,
    pub projections: Vec<Projection<f64>>,
}

impl FinancialReport {
    pub fn meal(&self, name: &str) -> Option<&MealCost> {
        self.meals.iter().find(|meal| meal.meal_name == name)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkippedItem> {
        self.meals.iter().flat_map(|meal| meal.skipped.iter())
    }
}

pub struct FinancialService;

impl FinancialService {
    /// Prices every item of `meal`. Items without a unit cost are skipped.
    pub fn meal_cost(meal: &Meal, index: &FoodIndex<'_>, valuations: &Valuations) -> MealCost {
        let mut lines = Vec::with_capacity(meal.items.len());
        let mut skipped = Vec::new();
        let mut total = 0.0;

        for item in &meal.items {
            let food = match resolve_item(index, item) {
                Ok(food) => food,
                Err(reason) => {
                    skipped.push(SkippedItem::new(meal, item, reason));
                    continue;
                }
            };
            let Some(unit_cost) = valuations.unit_cost(&food.name) else {
                skipped.push(SkippedItem::new(meal, item, SkipReason::NoCostData));
                continue;
            };

            let item_base = item.base_quantity();
            let cost = unit_cost * item_base;
            total += cost;
            lines.push(CostLine {
                food_name: food.name.clone(),
                quantity: food.unit.denormalize(item_base),
                unit: food.unit,
                unit_cost,
                cost,
            });
        }

        MealCost {
            meal_name: meal.name.clone(),
            lines,
            total,
            skipped,
        }
    }

    pub fn report(meals: &[Meal], foods: &[Food], entries: &[StockEntry]) -> FinancialReport {
        let valuations = CostValuationService::valuate(foods, entries);
        Self::report_with_valuations(meals, foods, &valuations)
    }

    /// Same as [`FinancialService::report`] but reuses an existing valuation run.
    pub fn report_with_valuations(
        meals: &[Meal],
        foods: &[Food],
        valuations: &Valuations,
    ) -> FinancialReport {
        let index = FoodIndex::new(foods);
        let meals: Vec<MealCost> = meals
            .iter()
            .map(|meal| Self::meal_cost(meal, &index, valuations))
            .collect();

        let daily: Vec<(&str, f64)> = meals
            .iter()
            .map(|meal| (meal.meal_name.as_str(), meal.total))
            .collect();
        let projections = Projection::for_all_horizons(&daily);
        let daily_total = daily.iter().map(|(_, total)| total).sum();

        FinancialReport {
            meals,
            daily_total,
            projections,
        }
    }
}
