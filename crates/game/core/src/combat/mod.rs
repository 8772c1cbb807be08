//! Combat resolution system.
//!
//! Pure functions and records for resolving attacks between two rosters.
//!
//! # Core Functions
//!
//! - `tick_roster`: advance one side's attack timers and resolve due attacks
//! - `calculate_damage`: attack minus armor, floored at [`MIN_DAMAGE`]
//! - `apply_damage`: health reduction (clamped to 0)

pub mod damage;
pub mod event;
pub mod tick;

pub use damage::{MIN_DAMAGE, apply_damage, calculate_damage};
pub use event::{CombatEvent, CombatObserver};
pub use tick::tick_roster;
