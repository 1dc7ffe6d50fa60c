//! Historical unit-cost valuation from purchase records.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Food, StockEntry, UnitFamily};

/// Purchase-history valuation of one food.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodValuation {
    pub food_name: String,
    /// Family the unit cost is expressed in (currency per base unit).
    pub family: UnitFamily,
    pub total_cost: f64,
    pub total_base_quantity: f64,
    pub entries_used: usize,
    pub entries_excluded: usize,
    pub unit_cost: Option<f64>,
}

/// Unit costs keyed by food name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Valuations {
    by_food: BTreeMap<String, FoodValuation>,
}

impl Valuations {
    pub fn get(&self, food_name: &str) -> Option<&FoodValuation> {
        self.by_food.get(food_name)
    }

    /// Currency per base unit, or `None` when the food has no qualifying purchases.
    pub fn unit_cost(&self, food_name: &str) -> Option<f64> {
        self.get(food_name).and_then(|valuation| valuation.unit_cost)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodValuation> {
        self.by_food.values()
    }

    /// The plain `food name -> unit cost | absent` mapping.
    pub fn unit_costs(&self) -> BTreeMap<String, Option<f64>> {
        self.by_food
            .iter()
            .map(|(name, valuation)| (name.clone(), valuation.unit_cost))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_food.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_food.is_empty()
    }
}

/// Derives unit costs as total money spent over total base quantity bought.
pub struct CostValuationService;

impl CostValuationService {
    /// Values every food in `foods` against the full purchase history.
    pub fn valuate(foods: &[Food], entries: &[StockEntry]) -> Valuations {
        let mut by_name: HashMap<&str, Vec<&StockEntry>> = HashMap::new();
        for entry in entries {
            by_name.entry(entry.food_name.as_str()).or_default().push(entry);
        }

        let by_food = foods
            .iter()
            .map(|food| {
                let history = by_name
                    .get(food.name.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                (food.name.clone(), Self::valuate_history(food, history))
            })
            .collect();
        Valuations { by_food }
    }

    /// Unit cost of a single food, scanning `entries` for its purchases.
    pub fn unit_cost_for(food: &Food, entries: &[StockEntry]) -> Option<f64> {
        let history: Vec<&StockEntry> = entries
            .iter()
            .filter(|entry| entry.food_name == food.name)
            .collect();
        Self::valuate_history(food, &history).unit_cost
    }

    fn valuate_history(food: &Food, history: &[&StockEntry]) -> FoodValuation {
        let family = food.unit.family();
        let mut total_cost = 0.0;
        let mut total_base_quantity = 0.0;
        let mut entries_used = 0;
        let mut entries_excluded = 0;

        for entry in history {
            if entry.unit.family() != family {
                warn!(
                    food = %food.name,
                    entry_unit = %entry.unit,
                    food_unit = %food.unit,
                    "purchase recorded in another unit family; excluded from valuation"
                );
                entries_excluded += 1;
                continue;
            }
            let base_quantity = entry.base_quantity();
            if base_quantity <= 0.0 {
                warn!(
                    food = %food.name,
                    quantity = entry.quantity,
                    "purchase with non-positive quantity excluded from valuation"
                );
                entries_excluded += 1;
                continue;
            }
            total_cost += entry.cost;
            total_base_quantity += base_quantity;
            entries_used += 1;
        }

        let unit_cost = (entries_used > 0).then(|| total_cost / total_base_quantity);
        FoodValuation {
            food_name: food.name.clone(),
            family,
            total_cost,
            total_base_quantity,
            entries_used,
            entries_excluded,
            unit_cost,
        }
    }
}
