//! Combat resolution pipeline.
//!
//! Pure functions, invoked by the surrounding turn loop in a fixed order
//! per side per turn:
//!
//! 1. [`process_pre_turn`] — status ticks, aging, move eligibility
//! 2. [`resolve_attack`] — if the fighter can move
//! 3. [`check_winner`] — once both sides have acted
//!
//! Every function receives state and returns new state; inputs are never
//! mutated in place.

pub mod pre_turn;
pub mod resolve;
pub mod winner;

pub use pre_turn::{PreTurn, process_pre_turn};
pub use resolve::{AttackResolution, resolve_attack};
pub use winner::{Winner, check_winner};
