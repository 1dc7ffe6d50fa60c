pub mod integrity;
pub mod json_backend;

use crate::{core::errors::PantryError, domain::InventorySnapshot};

pub type Result<T> = std::result::Result<T, PantryError>;

/// Supplies one coherent snapshot of every record collection.
pub trait SnapshotSource: Send + Sync {
    fn load_snapshot(&self) -> Result<InventorySnapshot>;
}

impl SnapshotSource for InventorySnapshot {
    fn load_snapshot(&self) -> Result<InventorySnapshot> {
        Ok(self.clone())
    }
}

pub use integrity::{closest_name, snapshot_warnings};
pub use json_backend::{JsonSnapshotStore, DATA_FILES};
