use crate::core::services::{
    CostValuationService, FinancialService, NutritionService, SkipReason,
};
use crate::domain::{Food, Meal, Nutrients, Unit};

use super::{purchase, sample_snapshot};

#[test]
fn lunch_cost_uses_weighted_rice_price() {
    let snapshot = sample_snapshot();
    let report =
        FinancialService::report(&snapshot.meals, &snapshot.foods, &snapshot.stock_entries);
    let lunch = report.meal("Lunch").unwrap();
    let rice = lunch.lines.iter().find(|l| l.food_name == "Rice").unwrap();
    assert!((rice.cost - 300.0 * 13.0 / 3000.0).abs() < 1e-12);
    let beans = lunch.lines.iter().find(|l| l.food_name == "Beans").unwrap();
    assert!((beans.cost - 160.0 * 4.5 / 500.0).abs() < 1e-12);
}

#[test]
fn missing_cost_only_affects_financial_totals() {
    let foods = vec![
        Food::new("Rice", Unit::Gram, 100.0).with_nutrients(Nutrients::new(130.0, 2.7, 28.0, 0.3)),
        Food::new("Oil", Unit::Gram, 15.0).with_nutrients(Nutrients::new(135.0, 0.0, 0.0, 15.0)),
    ];
    let entries = vec![purchase("Rice", 1.0, Unit::Kilogram, 6.0)];
    let meals = vec![Meal::new("Lunch")
        .with_item("Rice", 100.0, Unit::Gram)
        .with_item("Oil", 15.0, Unit::Gram)];

    let financial = FinancialService::report(&meals, &foods, &entries);
    assert!((financial.daily_total - 0.6).abs() < 1e-12);
    assert_eq!(
        financial.skipped().map(|s| s.reason).collect::<Vec<_>>(),
        vec![SkipReason::NoCostData]
    );

    let nutrition = NutritionService::report(&meals, &foods);
    assert_eq!(nutrition.daily_total.calories, 130.0 + 135.0);
    assert_eq!(nutrition.skipped().count(), 0);
}

#[test]
fn shared_valuation_matches_direct_report() {
    let snapshot = sample_snapshot();
    let valuations = CostValuationService::valuate(&snapshot.foods, &snapshot.stock_entries);
    let direct =
        FinancialService::report(&snapshot.meals, &snapshot.foods, &snapshot.stock_entries);
    let shared =
        FinancialService::report_with_valuations(&snapshot.meals, &snapshot.foods, &valuations);
    assert_eq!(direct, shared);
}

#[test]
fn cross_family_items_are_left_out_of_costs() {
    let foods = vec![Food::new("Rice", Unit::Gram, 100.0)];
    let entries = vec![purchase("Rice", 2.0, Unit::Kilogram, 10.0)];
    let meals = vec![Meal::new("Lunch")
        .with_item("Rice", 200.0, Unit::Gram)
        .with_item("Rice", 0.5, Unit::Liter)];

    let report = FinancialService::report(&meals, &foods, &entries);
    assert!((report.daily_total - 1.0).abs() < 1e-12);
    assert_eq!(report.meal("Lunch").unwrap().lines.len(), 1);

    let skipped: Vec<_> = report.skipped().collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].food_name, "Rice");
    assert_eq!(
        skipped[0].reason,
        SkipReason::UnitFamilyMismatch {
            item_unit: Unit::Liter,
            food_unit: Unit::Gram,
        }
    );
}
