//! Standard meals and their ordered recipe compositions.

use serde::{Deserialize, Serialize};

use super::{common::NamedEntity, unit::Unit};

/// One ingredient line of a meal. `food_name` may dangle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealItem {
    pub food_name: String,
    pub quantity: f64,
    pub unit: Unit,
}

impl MealItem {
    pub fn new(food_name: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        Self {
            food_name: food_name.into(),
            quantity,
            unit,
        }
    }

    pub fn base_quantity(&self) -> f64 {
        self.unit.normalize(self.quantity)
    }
}

/// A meal assumed to be eaten once per day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub name: String,
    #[serde(rename = "foods", alias = "items", default)]
    pub items: Vec<MealItem>,
}

impl Meal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, food_name: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        self.items.push(MealItem::new(food_name, quantity, unit));
        self
    }

    pub fn references(&self, food_name: &str) -> bool {
        self.items.iter().any(|item| item.food_name == food_name)
    }
}

impl NamedEntity for Meal {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_is_stored_under_foods() {
        let meal = Meal::new("Lunch").with_item("Rice", 300.0, Unit::Gram);
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["foods"][0]["food_name"], "Rice");
        assert!(meal.references("Rice"));
        assert!(!meal.references("Beans"));
    }
}
