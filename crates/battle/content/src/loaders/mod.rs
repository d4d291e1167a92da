//! Content loaders for reading balance data from files.
//!
//! Loaders convert RON/TOML files into the structures the engine consumes.
//! Shipped defaults always exist; files only override.

pub mod balance;
pub mod catalog;

pub use balance::BalanceLoader;
pub use catalog::CatalogLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
