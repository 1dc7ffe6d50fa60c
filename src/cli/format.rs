//! Locale-aware number rendering. Values are rounded here and nowhere else.

use crate::{config::Config, core::services::Depletion, domain::Unit};

#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub quantity_precision: u8,
    pub money_precision: u8,
    pub currency_symbol: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for NumberFormat {
    fn from(config: &Config) -> Self {
        Self {
            decimal_separator: config.decimal_separator,
            grouping_separator: config.grouping_separator,
            quantity_precision: config.quantity_precision,
            money_precision: config.money_precision,
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

impl NumberFormat {
    pub fn number(&self, value: f64, precision: u8) -> String {
        let mut body = format!("{:.*}", precision as usize, value);
        if body.starts_with('-') && body[1..].chars().all(|c| c == '0' || c == '.') {
            body.remove(0);
        }
        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
            None => (body, None),
        };
        let grouped = match int_part.strip_prefix('-') {
            Some(digits) => format!("-{}", group_digits(digits, self.grouping_separator)),
            None => group_digits(&int_part, self.grouping_separator),
        };
        match frac_part {
            Some(frac) => format!("{grouped}{}{frac}", self.decimal_separator),
            None => grouped,
        }
    }

    pub fn money(&self, amount: f64) -> String {
        let body = self.number(amount.abs(), self.money_precision);
        if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
            format!("-{} {body}", self.currency_symbol)
        } else {
            format!("{} {body}", self.currency_symbol)
        }
    }

    /// Unit cost in currency per base unit; keeps extra digits since these are tiny.
    pub fn unit_cost(&self, cost: f64, unit: Unit) -> String {
        let precision = self.money_precision.saturating_add(4);
        format!(
            "{} {}/{}",
            self.currency_symbol,
            self.number(cost, precision),
            unit.family().base_unit()
        )
    }

    pub fn quantity(&self, value: f64, unit: Unit) -> String {
        format!("{} {unit}", self.number(value, self.quantity_precision))
    }

    pub fn plain(&self, value: f64) -> String {
        self.number(value, self.quantity_precision)
    }

    pub fn depletion(&self, depletion: &Depletion) -> String {
        match depletion {
            Depletion::Days(days) => format!("{} days", self.number(*days, 1)),
            Depletion::Unbounded => "unbounded".into(),
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}
