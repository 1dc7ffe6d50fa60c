use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    cli::context::ShellContext,
    core::{
        errors::CliError,
        services::{
            CostValuationService, FinancialService, MovementService, NutritionService,
            ReportService, StockService,
        },
    },
    domain::DateWindow,
    storage::snapshot_warnings,
};

use super::{CommandArgs, CommandDefinition, CommandResult};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "nutrition",
            "Nutrition per meal with daily, weekly and monthly projections",
            "nutrition [--data-dir DIR] [--json]",
            cmd_nutrition,
        ),
        CommandDefinition::new(
            "financial",
            "Meal costs from historical purchase prices, with projections",
            "financial [--data-dir DIR] [--json]",
            cmd_financial,
        ),
        CommandDefinition::new(
            "stock",
            "Stock status, daily consumption and depletion estimates",
            "stock [--data-dir DIR] [--json]",
            cmd_stock,
        ),
        CommandDefinition::new(
            "valuation",
            "Weighted unit cost of every food",
            "valuation [--data-dir DIR] [--json]",
            cmd_valuation,
        ),
        CommandDefinition::new(
            "movements",
            "Stock entries and exits in date order",
            "movements [--from DATE] [--to DATE] [--data-dir DIR] [--json]",
            cmd_movements,
        ),
        CommandDefinition::new(
            "suppliers",
            "Purchase totals per supplier",
            "suppliers [--data-dir DIR] [--json]",
            cmd_suppliers,
        ),
        CommandDefinition::new(
            "check",
            "List dangling references and suspicious records",
            "check [--data-dir DIR] [--json]",
            cmd_check,
        ),
        CommandDefinition::new(
            "report",
            "Every report from one snapshot, as JSON",
            "report [--data-dir DIR]",
            cmd_report,
        ),
    ]
}

fn render<T: Serialize>(
    args: &CommandArgs,
    value: &T,
    text: impl FnOnce() -> String,
) -> CommandResult {
    if args.json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text())
    }
}

fn cmd_nutrition(context: &ShellContext, args: &CommandArgs) -> CommandResult {
    let snapshot = context.load_snapshot(args)?;
    let report = NutritionService::report(&snapshot.meals, &snapshot.foods);
    render(args, &report, || context.view().nutrition(&report))
}

fn cmd_financial(context: &ShellContext, args: &CommandArgs) -> CommandResult {
    let snapshot = context.load_snapshot(args)?;
    let report =
        FinancialService::report(&snapshot.meals, &snapshot.foods, &snapshot.stock_entries);
    render(args, &report, || context.view().financial(&report))
}

fn cmd_stock(context: &ShellContext, args: &CommandArgs) -> CommandResult {
    let snapshot = context.load_snapshot(args)?;
    let report = StockService::report(&snapshot.foods, &snapshot.meals);
    render(args, &report, || context.view().stock(&report))
}

fn cmd_valuation(context: &ShellContext, args: &CommandArgs) -> CommandResult {
    let snapshot = context.load_snapshot(args)?;
    let valuations = CostValuationService::valuate(&snapshot.foods, &snapshot.stock_entries);
    if args.json {
        return Ok(serde_json::to_string_pretty(&valuations.unit_costs())?);
    }
    Ok(context.view().valuations(&valuations))
}

fn cmd_movements(context: &ShellContext, args: &CommandArgs) -> CommandResult {
    let window = movement_window(args.from, args.to)?;
    let snapshot = context.load_snapshot(args)?;
    let movements =
        MovementService::history(&snapshot.stock_entries, &snapshot.stock_exits, window);
    render(args, &movements, || context.view().movements(&movements))
}

fn cmd_suppliers(context: &ShellContext, args: &CommandArgs) -> CommandResult {
    let snapshot = context.load_snapshot(args)?;
    let spend = MovementService::supplier_spend(&snapshot.suppliers, &snapshot.stock_entries);
    render(args, &spend, || context.view().suppliers(&spend))
}

fn cmd_check(context: &ShellContext, args: &CommandArgs) -> CommandResult {
    let snapshot = context.load_snapshot(args)?;
    let warnings = snapshot_warnings(&snapshot);
    render(args, &warnings, || context.view().warnings(&warnings))
}

fn cmd_report(context: &ShellContext, args: &CommandArgs) -> CommandResult {
    let snapshot = context.load_snapshot(args)?;
    Ok(serde_json::to_string_pretty(&ReportService::run(&snapshot))?)
}

/// `--to` is inclusive on the command line; the window end is the following day.
fn movement_window(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Option<DateWindow>, CliError> {
    if from.is_none() && to.is_none() {
        return Ok(None);
    }
    let start = from.unwrap_or(NaiveDate::MIN);
    let end = match to {
        Some(to) => to
            .succ_opt()
            .ok_or_else(|| CliError::Input(format!("`--to {to}` is out of range")))?,
        None => NaiveDate::MAX,
    };
    Ok(Some(DateWindow::new(start, end)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn movement_window_includes_the_to_date() {
        let window = movement_window(Some(day(3)), Some(day(3))).unwrap().unwrap();
        assert!(window.contains(day(3)));
        assert!(!window.contains(day(4)));
    }

    #[test]
    fn open_ended_windows() {
        assert_eq!(movement_window(None, None).unwrap(), None);
        let after = movement_window(Some(day(10)), None).unwrap().unwrap();
        assert!(after.contains(day(30)));
        assert!(!after.contains(day(9)));
        let before = movement_window(None, Some(day(10))).unwrap().unwrap();
        assert!(before.contains(day(1)));
    }

    #[test]
    fn reversed_window_is_rejected() {
        assert!(movement_window(Some(day(10)), Some(day(2))).is_err());
    }
}
