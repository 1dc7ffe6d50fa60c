//! Dangling-reference and sanity checks over a snapshot.

use std::collections::{HashMap, HashSet};

use strsim::levenshtein;
use tracing::warn;

use crate::domain::{InventorySnapshot, NamedEntity};

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Closest candidate to `input` within a small edit distance.
pub fn closest_name<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let lowered = input.to_lowercase();
    candidates
        .into_iter()
        .map(|candidate| (levenshtein(&candidate.to_lowercase(), &lowered), candidate))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

/// Human-readable problems found in `snapshot`. Reports still run on such
/// snapshots; these only explain why some items were left out.
pub fn snapshot_warnings(snapshot: &InventorySnapshot) -> Vec<String> {
    let index = snapshot.food_index();
    let supplier_names: HashSet<&str> =
        snapshot.suppliers.iter().map(|s| s.name.as_str()).collect();
    let mut warnings = Vec::new();

    for (kind, name, count) in duplicate_names("food", &snapshot.foods)
        .into_iter()
        .chain(duplicate_names("supplier", &snapshot.suppliers))
        .chain(duplicate_names("meal", &snapshot.meals))
    {
        warnings.push(format!(
            "{kind} `{name}` is defined {count} times; the last record is used"
        ));
    }

    for food in &snapshot.foods {
        if food.quantity_per_portion <= 0.0 {
            warnings.push(format!(
                "food `{}` has a non-positive portion size {}",
                food.name, food.quantity_per_portion
            ));
        }
        if food.quantity_in_stock < 0.0 {
            warnings.push(format!(
                "food `{}` has negative stock {}",
                food.name, food.quantity_in_stock
            ));
        }
    }

    for meal in &snapshot.meals {
        for item in &meal.items {
            match index.get(&item.food_name) {
                None => warnings.push(unknown_food(
                    &format!("meal `{}`", meal.name),
                    &item.food_name,
                    snapshot,
                )),
                Some(food) if !item.unit.is_compatible_with(food.unit) => {
                    warnings.push(format!(
                        "meal `{}` uses `{}` in {} ({}) but the food is measured in {} ({})",
                        meal.name,
                        item.food_name,
                        item.unit,
                        item.unit.family(),
                        food.unit,
                        food.unit.family()
                    ));
                }
                Some(_) => {}
            }
        }
    }

    for entry in &snapshot.stock_entries {
        if !index.contains(&entry.food_name) {
            warnings.push(unknown_food(
                &format!("stock entry of {}", entry.date),
                &entry.food_name,
                snapshot,
            ));
        }
        if !supplier_names.contains(entry.supplier.as_str()) {
            warnings.push(format!(
                "stock entry of {} references unknown supplier `{}`",
                entry.date, entry.supplier
            ));
        }
    }

    for exit in &snapshot.stock_exits {
        if !index.contains(&exit.food_name) {
            warnings.push(unknown_food(
                &format!("stock exit of {}", exit.date),
                &exit.food_name,
                snapshot,
            ));
        }
    }

    for warning in &warnings {
        warn!("{warning}");
    }
    warnings
}

/// Names occurring more than once in `records`, sorted, with their counts.
fn duplicate_names<'a, T: NamedEntity>(
    kind: &'static str,
    records: &'a [T],
) -> Vec<(&'static str, &'a str, usize)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *seen.entry(record.name()).or_default() += 1;
    }
    let mut duplicates: Vec<_> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, count)| (kind, name, count))
        .collect();
    duplicates.sort();
    duplicates
}

fn unknown_food(owner: &str, name: &str, snapshot: &InventorySnapshot) -> String {
    let candidates = snapshot.foods.iter().map(|food| food.name.as_str());
    match closest_name(name, candidates) {
        Some(suggestion) => {
            format!("{owner} references unknown food `{name}` (did you mean `{suggestion}`?)")
        }
        None => format!("{owner} references unknown food `{name}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Food, Meal, StockEntry, StockExit, Supplier, Unit};
    use chrono::NaiveDate;

    fn snapshot() -> InventorySnapshot {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut snapshot = InventorySnapshot::new();
        snapshot.foods = vec![
            Food::new("Tomato", Unit::Gram, 80.0).with_stock(300.0, 0.0, 0.0),
            Food::new("Milk", Unit::Liter, 0.2).with_stock(1.0, 0.0, 0.0),
        ];
        snapshot.suppliers = vec![Supplier::new("Market", "grocery", "Centro")];
        snapshot.meals = vec![Meal::new("Salad")
            .with_item("Tomatos", 100.0, Unit::Gram)
            .with_item("Milk", 50.0, Unit::Gram)];
        snapshot.stock_entries =
            vec![StockEntry::new("Milk", 1.0, Unit::Liter, 4.0, date, "Bakery")];
        snapshot.stock_exits = vec![StockExit::new("Cheese", 1.0, Unit::Count, date, "expired")];
        snapshot
    }

    #[test]
    fn clean_snapshot_has_no_warnings() {
        let mut clean = snapshot();
        clean.meals.clear();
        clean.stock_entries.clear();
        clean.stock_exits.clear();
        assert!(snapshot_warnings(&clean).is_empty());
    }

    #[test]
    fn dangling_references_are_reported_with_suggestions() {
        let warnings = snapshot_warnings(&snapshot());
        assert!(warnings
            .iter()
            .any(|w| w.contains("`Tomatos`") && w.contains("did you mean `Tomato`")));
        assert!(warnings.iter().any(|w| w.contains("unknown supplier `Bakery`")));
        assert!(warnings
            .iter()
            .any(|w| w.contains("stock exit") && w.contains("`Cheese`")));
        assert!(warnings.iter().any(|w| w.contains("`Milk` in g (mass)")));
    }

    #[test]
    fn duplicates_and_bad_portions_are_reported() {
        let mut snapshot = snapshot();
        snapshot.foods.push(Food::new("Milk", Unit::Milliliter, 0.0).with_stock(-1.0, 0.0, 0.0));
        let warnings = snapshot_warnings(&snapshot);
        assert!(warnings.iter().any(|w| w.contains("`Milk` is defined 2 times")));
        assert!(warnings.iter().any(|w| w.contains("non-positive portion")));
        assert!(warnings.iter().any(|w| w.contains("negative stock")));
    }

    #[test]
    fn duplicate_suppliers_and_meals_are_reported() {
        let mut snapshot = snapshot();
        snapshot.suppliers.push(Supplier::new("Market", "grocery", "Norte"));
        snapshot.meals.push(Meal::new("Salad"));
        let warnings = snapshot_warnings(&snapshot);
        assert!(warnings
            .iter()
            .any(|w| w == "supplier `Market` is defined 2 times; the last record is used"));
        assert!(warnings
            .iter()
            .any(|w| w == "meal `Salad` is defined 2 times; the last record is used"));
        assert!(!warnings.iter().any(|w| w.starts_with("food `")));
    }

    #[test]
    fn suggestions_ignore_distant_names() {
        assert_eq!(closest_name("Rice", ["Rices", "Beans"]), Some("Rices"));
        assert_eq!(closest_name("Rice", ["Watermelon"]), None);
        assert_eq!(closest_name("rice", ["Rice"]), Some("Rice"));
    }
}
