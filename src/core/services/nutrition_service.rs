//! Per-meal nutrition totals from recipe compositions, and their projections.

use serde::{Deserialize, Serialize};

use crate::domain::{Food, FoodIndex, Meal, Nutrients, Unit};

use super::{projection::Projection, resolve_item, SkipReason, SkippedItem};

/// Contribution of one meal item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionLine {
    pub food_name: String,
    /// Item quantity expressed in the food's native unit.
    pub quantity: f64,
    pub unit: Unit,
    pub portions: f64,
    pub nutrients: Nutrients,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealNutrition {
    pub meal_name: String,
    pub lines: Vec<NutritionLine>,
    pub total: Nutrients,
    pub skipped: Vec<SkippedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionReport {
    pub meals: Vec<MealNutrition>,
    pub daily_total: Nutrients,
    pub projections: Vec<Projection<Nutrients>>,
}

impl NutritionReport {
    pub fn meal(&self, name: &str) -> Option<&MealNutrition> {
        self.meals.iter().find(|meal| meal.meal_name == name)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkippedItem> {
        self.meals.iter().flat_map(|meal| meal.skipped.iter())
    }
}

pub struct NutritionService;

impl NutritionService {
    /// Sums the nutrition of every resolvable item of `meal`.
    pub fn meal_nutrition(meal: &Meal, index: &FoodIndex<'_>) -> MealNutrition {
        let mut lines = Vec::with_capacity(meal.items.len());
        let mut skipped = Vec::new();
        let mut total = Nutrients::default();

        for item in &meal.items {
            let food = match resolve_item(index, item) {
                Ok(food) => food,
                Err(reason) => {
                    skipped.push(SkippedItem::new(meal, item, reason));
                    continue;
                }
            };
            let Some(portion_base) = positive_portion(food) else {
                skipped.push(SkippedItem::new(meal, item, SkipReason::DegeneratePortion));
                continue;
            };

            let item_base = item.base_quantity();
            let portions = item_base / portion_base;
            let nutrients = food.nutrients_per_portion() * portions;
            total += nutrients;
            lines.push(NutritionLine {
                food_name: food.name.clone(),
                quantity: food.unit.denormalize(item_base),
                unit: food.unit,
                portions,
                nutrients,
            });
        }

        MealNutrition {
            meal_name: meal.name.clone(),
            lines,
            total,
            skipped,
        }
    }

    /// Nutrition of every meal plus daily, weekly, and monthly projections.
    pub fn report(meals: &[Meal], foods: &[Food]) -> NutritionReport {
        let index = FoodIndex::new(foods);
        let meals: Vec<MealNutrition> = meals
            .iter()
            .map(|meal| Self::meal_nutrition(meal, &index))
            .collect();

        let daily: Vec<(&str, Nutrients)> = meals
            .iter()
            .map(|meal| (meal.meal_name.as_str(), meal.total))
            .collect();
        let projections = Projection::for_all_horizons(&daily);
        let daily_total = daily
            .iter()
            .fold(Nutrients::default(), |acc, (_, total)| acc + *total);

        NutritionReport {
            meals,
            daily_total,
            projections,
        }
    }
}

fn positive_portion(food: &Food) -> Option<f64> {
    let portion = food.portion_base_quantity();
    (portion > 0.0).then_some(portion)
}
