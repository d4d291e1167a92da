//! Balance-tables loader.

use std::path::Path;

use battle_core::config::BalanceTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for balance tables from TOML files.
pub struct BalanceLoader;

impl BalanceLoader {
    /// Load balance tables from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BalanceTables> {
        Self::from_toml(&read_file(path)?)
    }

    /// Parse balance tables from a TOML string.
    pub fn from_toml(content: &str) -> LoadResult<BalanceTables> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse balance TOML: {}", e))
    }
}
