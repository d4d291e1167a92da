//! Deterministic battle resolution engine shared across clients.
//!
//! `battle-core` defines the canonical combat rules (stat derivation,
//! pre-turn status processing, attack resolution, win detection) and exposes
//! pure APIs that can be reused by the session runtime and offline tools.
//! Every function receives state and returns new state; callers own all I/O,
//! timers, and persistence.
pub mod combat;
pub mod config;
pub mod element;
pub mod env;
pub mod events;
pub mod state;

pub use combat::{
    AttackResolution, PreTurn, Winner, check_winner, process_pre_turn, resolve_attack,
};
pub use config::{BalanceTables, BattleConfig};
pub use element::{Effectiveness, Element};
pub use env::{
    ActCheck, BattleEnv, PcgRng, RngOracle, StatMultipliers, StatusCatalog, StatusDefinition,
    TickDamage, compute_seed, sub_seed,
};
pub use events::BattleEvent;
pub use state::{
    Archetype, Attack, AttackCategory, AttackId, EffectTarget, EquipError, Fighter, FighterId,
    SecondaryEffect, SpecialDamage, StatBlock, StatKind, StatusApplication, StatusEffectId,
    StatusInstance,
};
