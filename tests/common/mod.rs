#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use pantry_core::domain::{
    Food, InventorySnapshot, Meal, Nutrients, StockEntry, StockExit, Supplier, Unit,
};
use serde::Serialize;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A unique application home directory for one test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// A home directory whose `data/` folder holds `snapshot`.
pub fn home_with_snapshot(snapshot: &InventorySnapshot) -> PathBuf {
    let home = temp_home();
    write_snapshot(&home.join("data"), snapshot);
    home
}

pub fn write_collection<T: Serialize>(dir: &Path, file: &str, records: &[T]) {
    fs::create_dir_all(dir).expect("create data dir");
    let json = serde_json::to_string_pretty(records).expect("serialize records");
    fs::write(dir.join(file), json).expect("write collection");
}

pub fn write_snapshot(dir: &Path, snapshot: &InventorySnapshot) {
    write_collection(dir, "foods.json", &snapshot.foods);
    write_collection(dir, "suppliers.json", &snapshot.suppliers);
    write_collection(dir, "stock_entries.json", &snapshot.stock_entries);
    write_collection(dir, "stock_exits.json", &snapshot.stock_exits);
    write_collection(dir, "meals.json", &snapshot.meals);
}

pub fn date(day: u32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid date")
}

/// Rice, oil and a dangling "Bread" reference, matching the worked examples.
pub fn sample_snapshot() -> InventorySnapshot {
    let mut snapshot = InventorySnapshot::new();
    snapshot.foods = vec![
        Food::new("Rice", Unit::Gram, 100.0)
            .with_nutrients(Nutrients::new(130.0, 2.7, 28.0, 0.3))
            .with_stock(3000.0, 500.0, 5000.0),
        Food::new("Oil", Unit::Gram, 15.0)
            .with_nutrients(Nutrients::new(135.0, 0.0, 0.0, 15.0))
            .with_stock(500.0, 0.0, 1000.0),
        Food::new("Milk", Unit::Liter, 0.2)
            .with_nutrients(Nutrients::new(122.0, 8.0, 12.0, 4.8))
            .with_stock(0.5, 1.0, 3.0),
    ];
    snapshot.suppliers = vec![
        Supplier::new("Feira", "market", "Centro"),
        Supplier::new("Laticinios", "dairy", "Zona Sul"),
    ];
    snapshot.stock_entries = vec![
        StockEntry::new("Rice", 1.0, Unit::Kilogram, 5.0, date(2, 3), "Feira"),
        StockEntry::new("Rice", 2.0, Unit::Kilogram, 8.0, date(9, 3), "Feira"),
        StockEntry::new("Milk", 2.0, Unit::Liter, 9.0, date(5, 3), "Laticinios"),
    ];
    snapshot.stock_exits = vec![StockExit::new("Milk", 0.5, Unit::Liter, date(7, 3), "expired")];
    snapshot.meals = vec![
        Meal::new("Lunch").with_item("Rice", 300.0, Unit::Gram),
        Meal::new("Breakfast")
            .with_item("Milk", 250.0, Unit::Milliliter)
            .with_item("Bread", 2.0, Unit::Count),
    ];
    snapshot
}
