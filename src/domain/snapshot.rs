//! A coherent, read-only view of every record collection at one point in time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{
    food::Food,
    meal::Meal,
    stock::{StockEntry, StockExit},
    supplier::Supplier,
};

/// All five record collections, read together.
///
/// Reports never mutate a snapshot; a report run that needs several
/// collections must receive them from the same snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub foods: Vec<Food>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub stock_entries: Vec<StockEntry>,
    #[serde(default)]
    pub stock_exits: Vec<StockExit>,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl InventorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn food_index(&self) -> FoodIndex<'_> {
        FoodIndex::new(&self.foods)
    }

    pub fn food(&self, name: &str) -> Option<&Food> {
        self.foods.iter().rev().find(|food| food.name == name)
    }

    pub fn supplier(&self, name: &str) -> Option<&Supplier> {
        self.suppliers.iter().rev().find(|supplier| supplier.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
            && self.suppliers.is_empty()
            && self.stock_entries.is_empty()
            && self.stock_exits.is_empty()
            && self.meals.is_empty()
    }
}

/// Name lookup over a food slice. On duplicate names the last record wins.
#[derive(Debug, Clone)]
pub struct FoodIndex<'a> {
    by_name: HashMap<&'a str, &'a Food>,
}

impl<'a> FoodIndex<'a> {
    pub fn new(foods: &'a [Food]) -> Self {
        let by_name = foods.iter().map(|food| (food.name.as_str(), food)).collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a Food> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::unit::Unit;

    #[test]
    fn duplicate_names_resolve_to_last_record() {
        let mut snapshot = InventorySnapshot::new();
        snapshot.foods.push(Food::new("Milk", Unit::Liter, 0.2));
        snapshot.foods.push(Food::new("Milk", Unit::Milliliter, 200.0));
        let index = snapshot.food_index();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("Milk").map(|f| f.unit), Some(Unit::Milliliter));
        assert_eq!(snapshot.food("Milk").map(|f| f.unit), Some(Unit::Milliliter));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let snapshot: InventorySnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.food_index().get("anything").is_none());
    }
}
