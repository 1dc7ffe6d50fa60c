//! Shared traits, projection horizons, and date helpers for inventory records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::errors::{PantryError, Result};

/// Provides read-only access to the name an entity is referenced by.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Fixed periods over which daily totals are extrapolated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    Day,
    Week,
    Month,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::Day, Horizon::Week, Horizon::Month];

    pub fn days(self) -> u32 {
        match self {
            Horizon::Day => 1,
            Horizon::Week => 7,
            Horizon::Month => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Horizon::Day => "Daily",
            Horizon::Week => "Weekly",
            Horizon::Month => "Monthly",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} days)", self.label(), self.days())
    }
}

/// Half-open date range used to filter stock movements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(PantryError::InvalidInput(
                "window end must be after start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

/// Parses a record date written either as `dd/mm/yyyy` or ISO `yyyy-mm-dd`.
pub fn parse_record_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, record_date::FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, record_date::ISO_FORMAT))
        .map_err(|_| PantryError::InvalidInput(format!("unrecognized date `{value}`")))
}

/// Serde adapter for record dates, written in the day-first format of the data files.
pub mod record_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d/%m/%Y";
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_record_date(&raw).map_err(de::Error::custom)
    }
}
