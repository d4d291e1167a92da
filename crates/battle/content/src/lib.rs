//! Shipped battle content: the standard status-effect catalog, the built-in
//! creature and attack roster, and file loaders for overriding balance data.
//!
//! `battle-core` owns the traits and behavior; this crate owns the numbers.

pub mod catalog;
pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::StandardCatalog;
pub use roster::{CreatureTemplate, Roster, SpawnError};
