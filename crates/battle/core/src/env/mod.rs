//! Injected collaborators of the battle engine.
//!
//! The engine reads three things from its environment: the status-effect
//! catalog, the balance tables, and the RNG oracle. All three are injected
//! as read-only references through [`BattleEnv`] — the engine holds no
//! global or static state.

pub mod catalog;
pub mod rng;

pub use catalog::{ActCheck, StatMultipliers, StatusCatalog, StatusDefinition, TickDamage};
pub use rng::{PcgRng, RngOracle, compute_seed, roll, sub_seed};

use crate::config::BalanceTables;

/// Read-only environment threaded through every engine call.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    pub catalog: &'a dyn StatusCatalog,
    pub tables: &'a BalanceTables,
    pub rng: &'a dyn RngOracle,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        catalog: &'a dyn StatusCatalog,
        tables: &'a BalanceTables,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            catalog,
            tables,
            rng,
        }
    }
}
