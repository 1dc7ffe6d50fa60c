//! Text rendering of engine results.

use crate::{
    core::services::{
        FinancialReport, Movement, MovementKind, NutritionReport, SkippedItem, StockReport,
        SupplierSpend, Valuations,
    },
    domain::{common::record_date, Nutrients, StockStatus},
};

use super::{
    format::NumberFormat,
    style::{Tone, UiStyle},
    table::{Table, TableColumn, TableRenderer},
};

pub struct View<'a> {
    pub format: &'a NumberFormat,
    pub style: &'a UiStyle,
}

impl View<'_> {
    pub fn nutrition(&self, report: &NutritionReport) -> String {
        let mut meals = Table::new(Some("Nutrition per meal"), nutrient_columns("Meal"));
        for meal in &report.meals {
            meals.add_row(self.nutrient_cells(&meal.meal_name, &meal.total));
        }
        meals.add_row(self.nutrient_cells("Daily total", &report.daily_total));

        let mut projections = Table::new(Some("Projections"), nutrient_columns("Horizon"));
        for projection in &report.projections {
            projections.add_row(
                self.nutrient_cells(&projection.horizon.to_string(), &projection.total),
            );
        }

        let mut out = TableRenderer::render(&meals, self.style);
        out.push('\n');
        out.push_str(&TableRenderer::render(&projections, self.style));
        out.push_str(&self.skipped(report.skipped()));
        out
    }

    pub fn financial(&self, report: &FinancialReport) -> String {
        let mut meals = Table::new(
            Some("Cost per meal"),
            vec![TableColumn::left("Meal"), TableColumn::right("Cost")],
        );
        for meal in &report.meals {
            meals.add_row(vec![meal.meal_name.clone(), self.format.money(meal.total)]);
        }
        meals.add_row(vec!["Daily total".to_string(), self.format.money(report.daily_total)]);

        let mut projections = Table::new(
            Some("Projections"),
            vec![TableColumn::left("Horizon"), TableColumn::right("Cost")],
        );
        for projection in &report.projections {
            projections.add_row(vec![
                projection.horizon.to_string(),
                self.format.money(projection.total),
            ]);
        }

        let mut out = TableRenderer::render(&meals, self.style);
        out.push('\n');
        out.push_str(&TableRenderer::render(&projections, self.style));
        out.push_str(&self.skipped(report.skipped()));
        out
    }

    pub fn stock(&self, report: &StockReport) -> String {
        let mut table = Table::new(
            Some("Stock health"),
            vec![
                TableColumn::left("Food"),
                TableColumn::right("In stock"),
                TableColumn::right("Min"),
                TableColumn::right("Ideal"),
                TableColumn::left("Status"),
                TableColumn::right("Daily use"),
                TableColumn::right("Lasts"),
                TableColumn::right("Restock"),
            ],
        );
        for item in &report.items {
            table.add_toned_row(
                vec![
                    item.food_name.clone(),
                    self.format.quantity(item.quantity_in_stock, item.unit),
                    self.format.plain(item.min_stock),
                    self.format.plain(item.ideal_stock),
                    item.status.to_string(),
                    self.format.quantity(item.daily_consumption, item.unit),
                    self.format.depletion(&item.depletion),
                    self.format.quantity(item.restock_quantity, item.unit),
                ],
                Tone::from(item.status),
            );
        }
        let mut out = TableRenderer::render(&table, self.style);
        out.push_str(&format!(
            "{} critical, {} attention, {} adequate\n",
            report.count(StockStatus::Critical),
            report.count(StockStatus::Attention),
            report.count(StockStatus::Adequate)
        ));
        out.push_str(&self.skipped(report.skipped.iter()));
        out
    }

    pub fn valuations(&self, valuations: &Valuations) -> String {
        let mut table = Table::new(
            Some("Unit costs"),
            vec![
                TableColumn::left("Food"),
                TableColumn::right("Unit cost"),
                TableColumn::right("Spent"),
                TableColumn::right("Purchases"),
                TableColumn::right("Excluded"),
            ],
        );
        for valuation in valuations.iter() {
            let unit_cost = match valuation.unit_cost {
                Some(cost) => self.format.unit_cost(cost, valuation.family.base_unit()),
                None => "no data".to_string(),
            };
            table.add_row(vec![
                valuation.food_name.clone(),
                unit_cost,
                self.format.money(valuation.total_cost),
                valuation.entries_used.to_string(),
                valuation.entries_excluded.to_string(),
            ]);
        }
        TableRenderer::render(&table, self.style)
    }

    pub fn movements(&self, movements: &[Movement]) -> String {
        if movements.is_empty() {
            return "No stock movements recorded.\n".into();
        }
        let mut table = Table::new(
            Some("Stock movements"),
            vec![
                TableColumn::left("Date"),
                TableColumn::left("Kind"),
                TableColumn::left("Food"),
                TableColumn::right("Quantity"),
                TableColumn::right("Cost"),
                TableColumn::left("Supplier / reason"),
            ],
        );
        for movement in movements {
            let kind = match movement.kind {
                MovementKind::Entry => "entry",
                MovementKind::Exit => "exit",
            };
            table.add_row(vec![
                movement.date.format(record_date::FORMAT).to_string(),
                kind.to_string(),
                movement.food_name.clone(),
                self.format.quantity(movement.quantity, movement.unit),
                movement
                    .cost
                    .map(|cost| self.format.money(cost))
                    .unwrap_or_default(),
                movement.counterparty.clone(),
            ]);
        }
        TableRenderer::render(&table, self.style)
    }

    pub fn suppliers(&self, spend: &[SupplierSpend]) -> String {
        let mut table = Table::new(
            Some("Supplier spend"),
            vec![
                TableColumn::left("Supplier"),
                TableColumn::left("Category"),
                TableColumn::left("Location"),
                TableColumn::right("Purchases"),
                TableColumn::right("Total"),
            ],
        );
        for supplier in spend {
            let tone = if supplier.category.is_none() {
                Some(Tone::Warn)
            } else {
                None
            };
            let cells = vec![
                supplier.supplier_name.clone(),
                supplier.category.clone().unwrap_or_else(|| "unregistered".into()),
                supplier.location.clone().unwrap_or_default(),
                supplier.purchases.to_string(),
                self.format.money(supplier.total_cost),
            ];
            match tone {
                Some(tone) => table.add_toned_row(cells, tone),
                None => table.add_row(cells),
            }
        }
        TableRenderer::render(&table, self.style)
    }

    pub fn warnings(&self, warnings: &[String]) -> String {
        if warnings.is_empty() {
            return "No problems found.\n".into();
        }
        let mut out = self.style.header(&format!("{} problem(s) found", warnings.len()));
        out.push('\n');
        for warning in warnings {
            out.push_str(&self.style.tone(&format!("- {warning}"), Tone::Warn));
            out.push('\n');
        }
        out
    }

    fn nutrient_cells(&self, label: &str, nutrients: &Nutrients) -> Vec<String> {
        vec![
            label.to_string(),
            self.format.plain(nutrients.calories),
            self.format.plain(nutrients.proteins),
            self.format.plain(nutrients.carbs),
            self.format.plain(nutrients.fats),
        ]
    }

    fn skipped<'s>(&self, skipped: impl Iterator<Item = &'s SkippedItem>) -> String {
        let mut out = String::new();
        for item in skipped {
            let line = format!(
                "skipped {} in {}: {}",
                item.food_name, item.meal_name, item.reason
            );
            out.push_str(&self.style.tone(&line, Tone::Warn));
            out.push('\n');
        }
        out
    }
}

fn nutrient_columns(first: &str) -> Vec<TableColumn> {
    vec![
        TableColumn::left(first),
        TableColumn::right("Calories (kcal)"),
        TableColumn::right("Proteins (g)"),
        TableColumn::right("Carbs (g)"),
        TableColumn::right("Fats (g)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{NutritionService, StockService};
    use crate::domain::{Food, Meal, Unit};

    fn view_parts() -> (NumberFormat, UiStyle) {
        (NumberFormat::default(), UiStyle::plain())
    }

    #[test]
    fn nutrition_view_lists_meals_and_horizons() {
        let foods = vec![Food::new("Rice", Unit::Gram, 100.0)
            .with_nutrients(Nutrients::new(130.0, 2.7, 28.0, 0.3))];
        let meals = vec![Meal::new("Lunch")
            .with_item("Rice", 300.0, Unit::Gram)
            .with_item("Ghost", 1.0, Unit::Gram)];
        let report = NutritionService::report(&meals, &foods);
        let (format, style) = view_parts();
        let text = View { format: &format, style: &style }.nutrition(&report);
        assert!(text.contains("Lunch"));
        assert!(text.contains("390,0"));
        assert!(text.contains("Monthly (30 days)"));
        assert!(text.contains("11.700,0"));
        assert!(text.contains("skipped Ghost in Lunch: food not found"));
    }

    #[test]
    fn stock_view_summarizes_statuses() {
        let foods = vec![Food::new("Oil", Unit::Gram, 15.0).with_stock(500.0, 0.0, 1000.0)];
        let report = StockService::report(&foods, &[]);
        let (format, style) = view_parts();
        let text = View { format: &format, style: &style }.stock(&report);
        assert!(text.contains("Attention"));
        assert!(text.contains("unbounded"));
        assert!(text.contains("0 critical, 1 attention, 0 adequate"));
    }

    #[test]
    fn empty_warning_list_reads_cleanly() {
        let (format, style) = view_parts();
        let view = View { format: &format, style: &style };
        assert_eq!(view.warnings(&[]), "No problems found.\n");
        assert!(view.warnings(&["x".into()]).contains("- x"));
    }
}
