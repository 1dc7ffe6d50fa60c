mod common;

use common::{home_with_snapshot, sample_snapshot};
use pantry_core::{
    core::services::{
        CostValuationService, Depletion, FinancialService, NutritionService, ReportService,
        SkipReason, StockService,
    },
    domain::{Horizon, StockEntry, StockStatus, Unit},
    storage::{JsonSnapshotStore, SnapshotSource},
};

fn stored_snapshot() -> pantry_core::domain::InventorySnapshot {
    let home = home_with_snapshot(&sample_snapshot());
    JsonSnapshotStore::new(home.join("data"))
        .load_snapshot()
        .expect("load stored snapshot")
}

#[test]
fn stored_snapshot_round_trips_through_the_store() {
    assert_eq!(stored_snapshot(), sample_snapshot());
}

#[test]
fn rice_lunch_has_three_portions_and_390_calories() {
    let snapshot = stored_snapshot();
    let report = NutritionService::report(&snapshot.meals, &snapshot.foods);
    let lunch = report.meal("Lunch").expect("lunch");
    assert_eq!(lunch.lines[0].portions, 3.0);
    assert_eq!(lunch.total.calories, 390.0);
}

#[test]
fn rice_unit_cost_is_weighted_by_quantity() {
    let snapshot = stored_snapshot();
    let valuations = CostValuationService::valuate(&snapshot.foods, &snapshot.stock_entries);
    assert_eq!(valuations.unit_cost("Rice"), Some(13.0 / 3000.0));
    assert_eq!(valuations.unit_cost("Oil"), None);
    assert_eq!(valuations.unit_cost("Milk"), Some(9.0 / 2000.0));
}

#[test]
fn splitting_an_entry_does_not_move_the_unit_cost() {
    let snapshot = stored_snapshot();
    let mut split = snapshot.stock_entries.clone();
    let second = split.remove(1);
    split.push(StockEntry::new("Rice", 0.5, Unit::Kilogram, 2.0, second.date, "Feira"));
    split.push(StockEntry::new("Rice", 1500.0, Unit::Gram, 6.0, second.date, "Feira"));

    let whole = CostValuationService::valuate(&snapshot.foods, &snapshot.stock_entries);
    let parts = CostValuationService::valuate(&snapshot.foods, &split);
    let a = whole.unit_cost("Rice").unwrap();
    let b = parts.unit_cost("Rice").unwrap();
    assert!(((a - b) / a).abs() < 1e-12);
}

#[test]
fn oil_without_consumption_is_attention_and_unbounded() {
    let snapshot = stored_snapshot();
    let report = StockService::report(&snapshot.foods, &snapshot.meals);
    let oil = report.item("Oil").expect("oil");
    assert_eq!(oil.status, StockStatus::Attention);
    assert_eq!(oil.daily_consumption, 0.0);
    assert_eq!(oil.depletion, Depletion::Unbounded);

    let milk = report.item("Milk").expect("milk");
    assert_eq!(milk.status, StockStatus::Critical);
    assert_eq!(milk.daily_consumption, 0.25);
    assert_eq!(milk.depletion, Depletion::Days(2.0));
}

#[test]
fn dangling_bread_is_excluded_everywhere() {
    let snapshot = stored_snapshot();
    let nutrition = NutritionService::report(&snapshot.meals, &snapshot.foods);
    let financial =
        FinancialService::report(&snapshot.meals, &snapshot.foods, &snapshot.stock_entries);

    let breakfast = nutrition.meal("Breakfast").unwrap();
    assert_eq!(breakfast.lines.len(), 1);
    assert_eq!(breakfast.skipped[0].reason, SkipReason::MissingFood);
    assert!((breakfast.total.calories - 122.0 * 1.25).abs() < 1e-9);

    let cost = financial.meal("Breakfast").unwrap();
    assert!((cost.total - 250.0 * 9.0 / 2000.0).abs() < 1e-12);
}

#[test]
fn full_run_is_idempotent_and_projects_linearly() {
    let snapshot = stored_snapshot();
    let first = ReportService::run(&snapshot);
    let second = ReportService::run(&snapshot);
    assert_eq!(first, second);

    for projection in &first.financial.projections {
        let days = f64::from(projection.horizon.days());
        for meal in &first.financial.meals {
            assert_eq!(projection.value_for(&meal.meal_name), Some(meal.total * days));
        }
    }
    let month = first
        .nutrition
        .projections
        .iter()
        .find(|p| p.horizon == Horizon::Month)
        .unwrap();
    assert_eq!(month.value_for("Lunch").unwrap().calories, 390.0 * 30.0);
    assert!(first.warnings.iter().any(|w| w.contains("`Bread`")));
}
