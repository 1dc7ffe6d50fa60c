//! A complete report run over one snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{domain::InventorySnapshot, storage::snapshot_warnings};

use super::{
    financial_service::{FinancialReport, FinancialService},
    nutrition_service::{NutritionReport, NutritionService},
    stock_service::{StockReport, StockService},
    valuation_service::{CostValuationService, Valuations},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryReport {
    pub valuations: Valuations,
    pub nutrition: NutritionReport,
    pub financial: FinancialReport,
    pub stock: StockReport,
    pub warnings: Vec<String>,
}

pub struct ReportService;

impl ReportService {
    /// Runs every report against `snapshot`, valuating purchases once.
    pub fn run(snapshot: &InventorySnapshot) -> InventoryReport {
        let valuations = CostValuationService::valuate(&snapshot.foods, &snapshot.stock_entries);
        let nutrition = NutritionService::report(&snapshot.meals, &snapshot.foods);
        let financial =
            FinancialService::report_with_valuations(&snapshot.meals, &snapshot.foods, &valuations);
        let stock = StockService::report(&snapshot.foods, &snapshot.meals);
        let warnings = snapshot_warnings(snapshot);
        debug!(
            foods = snapshot.foods.len(),
            meals = snapshot.meals.len(),
            warnings = warnings.len(),
            "report run complete"
        );
        InventoryReport {
            valuations,
            nutrition,
            financial,
            stock,
            warnings,
        }
    }
}
