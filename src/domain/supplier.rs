//! Supplier records referenced by purchase entries.

use serde::{Deserialize, Serialize};

use super::common::NamedEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplier {
    pub name: String,
    /// Kind of business, e.g. market or bakery.
    #[serde(rename = "type", alias = "category")]
    pub category: String,
    pub location: String,
}

impl Supplier {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            location: location.into(),
        }
    }
}

impl NamedEntity for Supplier {
    fn name(&self) -> &str {
        &self.name
    }
}
