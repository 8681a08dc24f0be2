//! Hero state for one map-play session.

use crate::game::{Facing, Stats};

/// Health restored by one whisky charge.
pub const WHISKY_HEALTH: i32 = 50;

/// Damage gained from one sword charge.
pub const SWORD_DAMAGE: i32 = 20;

/// Name of the preset hero.
pub const CHUCK_NAME: &str = "Chuck Norris";

/// Name given to heroes built in the creation screen.
pub const CUSTOM_HERO_NAME: &str = "The Best Hero ever";

/// The hero of the current session.
///
/// Created when a session starts, mutated by moves, pickups and combat,
/// and dropped when the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroProgress {
    /// Display name.
    pub name: String,
    /// Current combat attributes.
    pub stats: Stats,
    /// Direction of the last movement key.
    pub facing: Facing,
    /// Unused whisky charges.
    pub whisky: u32,
    /// Unused sword charges.
    pub swords: u32,
}

impl HeroProgress {
    /// Create a hero with an empty inventory.
    #[must_use]
    pub fn new(name: impl Into<String>, stats: Stats) -> Self {
        Self {
            name: name.into(),
            stats,
            facing: Facing::default(),
            whisky: 0,
            swords: 0,
        }
    }

    /// The preset hero.
    #[must_use]
    pub fn chuck() -> Self {
        Self::new(CHUCK_NAME, Stats::new(10_000, 10_000, 10_000))
    }

    /// A hero with stats chosen in the creation screen.
    #[must_use]
    pub fn custom(stats: Stats) -> Self {
        Self::new(CUSTOM_HERO_NAME, stats)
    }

    /// Check whether the hero's health has dropped below zero.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.stats.health < 0
    }

    /// Drink one whisky charge for +50 health.
    ///
    /// Returns `false` if there was nothing to drink.
    pub fn drink_whisky(&mut self) -> bool {
        if self.whisky == 0 {
            return false;
        }
        self.whisky -= 1;
        self.stats.health = self.stats.health.saturating_add(WHISKY_HEALTH);
        true
    }

    /// Equip one sword charge for +20 damage.
    ///
    /// Returns `false` if there was no sword to equip.
    pub fn equip_sword(&mut self) -> bool {
        if self.swords == 0 {
            return false;
        }
        self.swords -= 1;
        self.stats.damage = self.stats.damage.saturating_add(SWORD_DAMAGE);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chuck_preset() {
        let chuck = HeroProgress::chuck();
        assert_eq!(chuck.name, "Chuck Norris");
        assert_eq!(chuck.stats, Stats::new(10_000, 10_000, 10_000));
        assert_eq!(chuck.facing, Facing::Down);
        assert_eq!((chuck.whisky, chuck.swords), (0, 0));
    }

    #[test]
    fn test_drink_whisky() {
        let mut hero = HeroProgress::custom(Stats::new(60, 50, 50));
        assert!(!hero.drink_whisky());
        assert_eq!(hero.stats.health, 60);

        hero.whisky = 2;
        assert!(hero.drink_whisky());
        assert_eq!(hero.stats.health, 110);
        assert_eq!(hero.whisky, 1);
    }

    #[test]
    fn test_equip_sword() {
        let mut hero = HeroProgress::custom(Stats::new(60, 50, 50));
        assert!(!hero.equip_sword());

        hero.swords = 1;
        assert!(hero.equip_sword());
        assert_eq!(hero.stats.damage, 70);
        assert_eq!(hero.swords, 0);
        assert!(!hero.equip_sword());
    }

    #[test]
    fn test_is_dead() {
        let mut hero = HeroProgress::custom(Stats::new(1, 50, 50));
        assert!(!hero.is_dead());
        hero.stats.health = 0;
        assert!(!hero.is_dead());
        hero.whisky = 1;
        assert!(hero.drink_whisky());
        assert_eq!(hero.stats.health, 50);
        hero.stats.health = -15;
        assert!(hero.is_dead());
    }
}
