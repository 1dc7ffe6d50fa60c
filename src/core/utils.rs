use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use super::errors::Result;

const DEFAULT_DIR_NAME: &str = ".pantry_core";
const HOME_ENV: &str = "PANTRY_CORE_HOME";
const DATA_DIR: &str = "data";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Resolves the on-disk locations used by the store and configuration.
pub struct PathResolver;

impl PathResolver {
    /// Application base directory: `$PANTRY_CORE_HOME` or `~/.pantry_core`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn resolve_base(custom: Option<PathBuf>) -> PathBuf {
        custom.unwrap_or_else(Self::base_dir)
    }

    /// Directory holding the five record collections.
    pub fn data_dir_in(base: &Path) -> PathBuf {
        base.join(DATA_DIR)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn paths_are_nested_under_base() {
        let base = PathBuf::from("/tmp/pantry");
        assert_eq!(PathResolver::data_dir_in(&base), base.join("data"));
        assert_eq!(
            PathResolver::config_file_in(&base),
            base.join("config").join("config.json")
        );
    }

    #[test]
    fn explicit_base_wins_over_environment() {
        let custom = PathBuf::from("/srv/pantry");
        assert_eq!(PathResolver::resolve_base(Some(custom.clone())), custom);
    }

    #[test]
    fn ensure_dir_creates_missing_directories() {
        let temp = TempDir::new().expect("temp dir");
        let nested = temp.path().join("a").join("b");
        ensure_dir(&nested).expect("create nested dir");
        assert!(nested.is_dir());
        ensure_dir(&nested).expect("existing dir is fine");
    }
}
