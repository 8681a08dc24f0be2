//! Map and combat engine.
//!
//! Implements the rules of a single map-play session:
//! - Map cells (floor, barriers, thorns, items, enemies, the hero)
//! - Map text parsing and hero movement
//! - Hero progress (stats, inventory, facing)
//! - Pickup and combat resolution
//! - Grid invariant checks

mod combat;
mod element;
mod hero;
mod invariants;
mod map;

pub use combat::{
    CombatReport, CombatRng, DEFENCE_BONUS_DIVISOR, ENEMY_MIN_HIT, HERO_MIN_HIT, ReseedPolicy,
    Resolution, THORN_DAMAGE, fight, resolve,
};
pub use element::{Direction, Facing, MapCell, Stats};
pub use hero::{
    CHUCK_NAME, CUSTOM_HERO_NAME, HeroProgress, SWORD_DAMAGE, WHISKY_HEALTH,
};
pub use invariants::check_invariants;
pub use map::{MAX_CELLS, MapGrid, candidate_index};
