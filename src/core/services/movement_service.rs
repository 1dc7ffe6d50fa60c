//! Stock movement history and per-supplier purchase totals.

use std::{cmp::Ordering, collections::HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DateWindow, StockEntry, StockExit, Supplier, Unit};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Entry,
    Exit,
}

/// One row of the movement history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub date: NaiveDate,
    pub food_name: String,
    pub kind: MovementKind,
    pub quantity: f64,
    pub unit: Unit,
    /// Total paid, entries only.
    pub cost: Option<f64>,
    /// Supplier for entries, reason for exits.
    pub counterparty: String,
}

impl From<&StockEntry> for Movement {
    fn from(entry: &StockEntry) -> Self {
        Self {
            date: entry.date,
            food_name: entry.food_name.clone(),
            kind: MovementKind::Entry,
            quantity: entry.quantity,
            unit: entry.unit,
            cost: Some(entry.cost),
            counterparty: entry.supplier.clone(),
        }
    }
}

impl From<&StockExit> for Movement {
    fn from(exit: &StockExit) -> Self {
        Self {
            date: exit.date,
            food_name: exit.food_name.clone(),
            kind: MovementKind::Exit,
            quantity: exit.quantity,
            unit: exit.unit,
            cost: None,
            counterparty: exit.reason.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierSpend {
    pub supplier_name: String,
    /// `None` when the supplier is not registered.
    pub category: Option<String>,
    pub location: Option<String>,
    pub purchases: usize,
    pub total_cost: f64,
}

pub struct MovementService;

impl MovementService {
    /// Entries and exits in date order, entries first within a day.
    pub fn history(
        entries: &[StockEntry],
        exits: &[StockExit],
        window: Option<DateWindow>,
    ) -> Vec<Movement> {
        let in_window = |date: NaiveDate| window.map_or(true, |w| w.contains(date));
        let mut movements: Vec<Movement> = entries
            .iter()
            .filter(|entry| in_window(entry.date))
            .map(Movement::from)
            .chain(
                exits
                    .iter()
                    .filter(|exit| in_window(exit.date))
                    .map(Movement::from),
            )
            .collect();
        movements.sort_by(|a, b| a.date.cmp(&b.date).then(a.kind.cmp(&b.kind)));
        movements
    }

    /// Purchase totals per supplier, highest spend first.
    pub fn supplier_spend(suppliers: &[Supplier], entries: &[StockEntry]) -> Vec<SupplierSpend> {
        let mut by_name: HashMap<&str, (usize, f64)> = HashMap::new();
        for entry in entries {
            let totals = by_name.entry(entry.supplier.as_str()).or_default();
            totals.0 += 1;
            totals.1 += entry.cost;
        }

        let mut spend: Vec<SupplierSpend> = by_name
            .into_iter()
            .map(|(name, (purchases, total_cost))| {
                let known = suppliers.iter().rev().find(|s| s.name == name);
                SupplierSpend {
                    supplier_name: name.to_string(),
                    category: known.map(|s| s.category.clone()),
                    location: known.map(|s| s.location.clone()),
                    purchases,
                    total_cost,
                }
            })
            .collect();
        spend.sort_by(|a, b| {
            b.total_cost
                .partial_cmp(&a.total_cost)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.supplier_name.cmp(&b.supplier_name))
        });
        spend
    }
}
