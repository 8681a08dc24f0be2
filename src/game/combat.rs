//! Encounter resolution: pickups, hazards and the combat loop.
//!
//! A combat is a sequence of exchanges. Each round the enemy strikes first
//! for `damage + 2 * roll(damage) - hero defence`, then the hero strikes
//! back for `damage + roll(damage) - enemy defence`. A hit that would not
//! hurt is raised to a floor, so every round costs both sides health and
//! the loop always ends.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::game::{HeroProgress, MapCell, Stats};

/// Health lost when stepping on a thorn.
pub const THORN_DAMAGE: i32 = 20;

/// Floor for an enemy hit that would not hurt the hero.
pub const ENEMY_MIN_HIT: i32 = 20;

/// Floor for a hero hit that would not hurt the enemy.
pub const HERO_MIN_HIT: i32 = ENEMY_MIN_HIT - 10;

/// A defeated enemy grants `enemy damage / DEFENCE_BONUS_DIVISOR` defence.
pub const DEFENCE_BONUS_DIVISOR: i32 = 5;

/// How the combat random stream is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReseedPolicy {
    /// One stream for the whole session.
    #[default]
    Continuous,
    /// Restart the stream from `seed + combat index` before every combat.
    PerCombat,
}

/// Random source for combat rolls.
#[derive(Debug, Clone)]
pub struct CombatRng {
    rng: ChaCha8Rng,
    seed: u64,
    policy: ReseedPolicy,
    combats: u64,
}

impl CombatRng {
    /// Create a new RNG with the given seed and reseeding policy.
    #[must_use]
    pub fn new(seed: u64, policy: ReseedPolicy) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            policy,
            combats: 0,
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the reseeding policy.
    #[must_use]
    pub const fn policy(&self) -> ReseedPolicy {
        self.policy
    }

    /// Number of combats started so far.
    #[must_use]
    pub const fn combats(&self) -> u64 {
        self.combats
    }

    /// Mark the start of a combat, reseeding if the policy asks for it.
    pub fn begin_combat(&mut self) {
        if self.policy == ReseedPolicy::PerCombat {
            self.rng = ChaCha8Rng::seed_from_u64(self.seed.wrapping_add(self.combats));
        }
        self.combats += 1;
    }

    /// Uniform integer in `[0, n)`. Returns 0 if `n <= 0`.
    pub fn uniform(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

/// Summary of one combat loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatReport {
    /// Number of exchanges fought.
    pub rounds: u32,
    /// Hero health when the loop ended (may be negative).
    pub hero_health: i32,
    /// Enemy health when the loop ended (may be negative).
    pub enemy_health: i32,
    /// Defence the hero gained from the kill (0 if the hero lost).
    pub defence_gained: i32,
}

impl CombatReport {
    /// Check if the hero won the fight.
    ///
    /// A hero left at exactly 0 health is still alive.
    #[must_use]
    pub const fn enemy_defeated(&self) -> bool {
        self.hero_health >= 0 && self.enemy_health <= 0
    }
}

/// Outcome of the hero trying to enter a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Whether the hero may step onto the cell.
    pub allowed: bool,
    /// What the cell holds after the encounter.
    pub cell_after: MapCell,
    /// Combat summary when the cell held an enemy.
    pub combat: Option<CombatReport>,
}

impl Resolution {
    const fn walk(cell_after: MapCell) -> Self {
        Self {
            allowed: true,
            cell_after,
            combat: None,
        }
    }

    const fn blocked(cell_after: MapCell) -> Self {
        Self {
            allowed: false,
            cell_after,
            combat: None,
        }
    }

    /// Check if the encounter killed an enemy.
    #[must_use]
    pub fn enemy_defeated(&self) -> bool {
        self.combat
            .as_ref()
            .is_some_and(CombatReport::enemy_defeated)
    }
}

/// Resolve the hero trying to occupy `target`.
///
/// The hero's stats and inventory are updated in place. The caller applies
/// `cell_after` to the grid, moves the hero when `allowed`, and counts a
/// kill when [`Resolution::enemy_defeated`] holds.
pub fn resolve(hero: &mut HeroProgress, target: MapCell, rng: &mut CombatRng) -> Resolution {
    match target {
        MapCell::Empty => Resolution::walk(MapCell::Empty),
        MapCell::Sword => {
            hero.swords += 1;
            Resolution::walk(MapCell::Empty)
        }
        MapCell::Whisky => {
            hero.whisky += 1;
            Resolution::walk(MapCell::Empty)
        }
        MapCell::Thorn => {
            hero.stats.health = hero.stats.health.saturating_sub(THORN_DAMAGE);
            Resolution::walk(MapCell::Empty)
        }
        MapCell::Enemy(enemy) => {
            let report = fight(&mut hero.stats, enemy, rng);
            let cell_after = if report.enemy_defeated() {
                MapCell::Empty
            } else {
                target
            };
            Resolution {
                allowed: false,
                cell_after,
                combat: Some(report),
            }
        }
        MapCell::Barrier | MapCell::Hero => Resolution::blocked(target),
    }
}

/// Run the combat loop between the hero and one enemy.
///
/// The hero's health is overwritten with the loop result; defence grows by
/// the kill bonus if the hero survives.
pub fn fight(hero: &mut Stats, enemy: Stats, rng: &mut CombatRng) -> CombatReport {
    rng.begin_combat();

    let mut hero_health = i64::from(hero.health);
    let mut enemy_health = i64::from(enemy.health);
    let mut rounds = 0u32;

    while hero_health > 0 && enemy_health > 0 {
        rounds += 1;

        let enemy_hit = i64::from(enemy.damage) + 2 * i64::from(rng.uniform(enemy.damage))
            - i64::from(hero.defence);
        hero_health -= floor_hit(enemy_hit, ENEMY_MIN_HIT);

        let hero_hit = i64::from(hero.damage) + i64::from(rng.uniform(hero.damage))
            - i64::from(enemy.defence);
        enemy_health -= floor_hit(hero_hit, HERO_MIN_HIT);
    }

    hero.health = saturate(hero_health);

    let defence_gained = if hero_health >= 0 && enemy_health <= 0 {
        enemy.damage / DEFENCE_BONUS_DIVISOR
    } else {
        0
    };
    hero.defence = hero.defence.saturating_add(defence_gained);

    let report = CombatReport {
        rounds,
        hero_health: hero.health,
        enemy_health: saturate(enemy_health),
        defence_gained,
    };
    debug!(
        rounds,
        hero_health = report.hero_health,
        enemy_health = report.enemy_health,
        "combat finished"
    );
    report
}

/// Raise a hit that would not hurt to `floor`.
fn floor_hit(hit: i64, floor: i32) -> i64 {
    if hit <= 0 { i64::from(floor) } else { hit }
}

#[allow(clippy::cast_possible_truncation)]
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
