use serde::de::DeserializeOwned;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{
    core::{errors::PantryError, utils::PathResolver},
    domain::InventorySnapshot,
};

use super::{Result, SnapshotSource};

pub const FOODS_FILE: &str = "foods.json";
pub const SUPPLIERS_FILE: &str = "suppliers.json";
pub const STOCK_ENTRIES_FILE: &str = "stock_entries.json";
pub const STOCK_EXITS_FILE: &str = "stock_exits.json";
pub const MEALS_FILE: &str = "meals.json";

/// Every collection file, in load order.
pub const DATA_FILES: [&str; 5] = [
    FOODS_FILE,
    SUPPLIERS_FILE,
    STOCK_ENTRIES_FILE,
    STOCK_EXITS_FILE,
    MEALS_FILE,
];

/// Read-only store over a directory of JSON collection files.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    data_dir: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Store rooted at `<base>/data`, where `base` defaults to the application directory.
    pub fn in_base(base: Option<PathBuf>) -> Self {
        let base = PathResolver::resolve_base(base);
        Self::new(PathResolver::data_dir_in(&base))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    fn read_collection<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.file_path(file_name);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "collection file missing; treating as empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(PantryError::StorageError(format!(
                    "failed to read `{}`: {err}",
                    path.display()
                )))
            }
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&data).map_err(|err| {
            PantryError::StorageError(format!("failed to parse `{}`: {err}", path.display()))
        })
    }
}

impl SnapshotSource for JsonSnapshotStore {
    fn load_snapshot(&self) -> Result<InventorySnapshot> {
        let snapshot = InventorySnapshot {
            foods: self.read_collection(FOODS_FILE)?,
            suppliers: self.read_collection(SUPPLIERS_FILE)?,
            stock_entries: self.read_collection(STOCK_ENTRIES_FILE)?,
            stock_exits: self.read_collection(STOCK_EXITS_FILE)?,
            meals: self.read_collection(MEALS_FILE)?,
        };
        info!(
            data_dir = %self.data_dir.display(),
            foods = snapshot.foods.len(),
            suppliers = snapshot.suppliers.len(),
            entries = snapshot.stock_entries.len(),
            exits = snapshot.stock_exits.len(),
            meals = snapshot.meals.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }
}
