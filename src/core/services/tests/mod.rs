mod financial_service_tests;

use chrono::NaiveDate;

use crate::domain::{
    Food, InventorySnapshot, Meal, Nutrients, StockEntry, StockExit, Supplier, Unit,
};

pub(super) fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

pub(super) fn purchase(food: &str, quantity: f64, unit: Unit, cost: f64) -> StockEntry {
    StockEntry::new(food, quantity, unit, cost, date(1), "Feira")
}

pub(super) fn sample_snapshot() -> InventorySnapshot {
    let mut snapshot = InventorySnapshot::new();
    snapshot.foods = vec![
        Food::new("Rice", Unit::Gram, 100.0)
            .with_nutrients(Nutrients::new(130.0, 2.7, 28.0, 0.3))
            .with_stock(2500.0, 500.0, 3000.0),
        Food::new("Beans", Unit::Kilogram, 0.08)
            .with_nutrients(Nutrients::new(76.0, 4.8, 13.6, 0.5))
            .with_stock(0.4, 0.5, 2.0),
        Food::new("Oil", Unit::Gram, 15.0)
            .with_nutrients(Nutrients::new(135.0, 0.0, 0.0, 15.0))
            .with_stock(500.0, 0.0, 1000.0),
        Food::new("Milk", Unit::Liter, 0.2)
            .with_nutrients(Nutrients::new(122.0, 8.0, 12.0, 4.8))
            .with_stock(0.0, 1.0, 4.0),
    ];
    snapshot.suppliers = vec![Supplier::new("Feira", "market", "Centro")];
    snapshot.stock_entries = vec![
        purchase("Rice", 1.0, Unit::Kilogram, 5.0),
        purchase("Rice", 2.0, Unit::Kilogram, 8.0),
        purchase("Beans", 500.0, Unit::Gram, 4.5),
        purchase("Milk", 1.0, Unit::Liter, 4.2),
    ];
    snapshot.stock_exits = vec![StockExit::new("Milk", 1.0, Unit::Liter, date(3), "expired")];
    snapshot.meals = vec![
        Meal::new("Lunch")
            .with_item("Rice", 300.0, Unit::Gram)
            .with_item("Beans", 160.0, Unit::Gram),
        Meal::new("Breakfast")
            .with_item("Milk", 200.0, Unit::Milliliter)
            .with_item("Bread", 2.0, Unit::Count),
    ];
    snapshot
}
