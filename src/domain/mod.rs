//! Inventory record types shared by the store, the report engine, and the CLI.

pub mod common;
pub mod food;
pub mod meal;
pub mod snapshot;
pub mod stock;
pub mod supplier;
pub mod unit;

pub use common::{DateWindow, Horizon, NamedEntity};
pub use food::{Food, Nutrients, StockStatus};
pub use meal::{Meal, MealItem};
pub use snapshot::{FoodIndex, InventorySnapshot};
pub use stock::{StockEntry, StockExit};
pub use supplier::Supplier;
pub use unit::{Unit, UnitFamily};
