#![no_main]

use arbitrary::Arbitrary;
use herocrawl::game::{
    CombatRng, HeroProgress, MapCell, MapGrid, ReseedPolicy, Stats, check_invariants, resolve,
};
use libfuzzer_sys::fuzz_target;

/// Structured input for combat fuzzing.
#[derive(Arbitrary, Debug)]
struct CombatInput {
    /// Hero health, damage, defence.
    hero: (i32, i32, i32),
    /// Enemy health, damage, defence.
    enemy: (i32, i32, i32),
    /// Combat RNG seed.
    seed: u64,
    /// Reseed before every combat.
    per_combat: bool,
}

fuzz_target!(|input: CombatInput| {
    // Cap inputs to keep fights short; enemies must be positive to be placed.
    let cap = |v: i32, min: i32| v.clamp(min, 100_000);
    let hero = Stats::new(cap(input.hero.0, 1), cap(input.hero.1, 0), cap(input.hero.2, 0));
    let enemy = Stats::new(
        cap(input.enemy.0, 1),
        cap(input.enemy.1, 1),
        cap(input.enemy.2, 1),
    );

    let text = format!(
        "[1,2]\n\"hero\" [0,0]\n\"enemy\" [0,1] ({},{},{})\n",
        enemy.health, enemy.damage, enemy.defence
    );
    let mut grid = MapGrid::parse(&text).expect("generated map must parse");

    let violations_before = check_invariants(&grid);
    assert!(
        violations_before.is_empty(),
        "Invariants violated before combat: {violations_before:?}"
    );

    let policy = if input.per_combat {
        ReseedPolicy::PerCombat
    } else {
        ReseedPolicy::Continuous
    };
    let mut rng = CombatRng::new(input.seed, policy);
    let mut progress = HeroProgress::custom(hero);

    let resolution = resolve(&mut progress, MapCell::Enemy(enemy), &mut rng);
    let report = resolution.combat.expect("enemy encounter must fight");

    // Combat never lets the hero through and never heals.
    assert!(!resolution.allowed);
    assert!(progress.stats.health < hero.health);
    assert!(report.hero_health <= 0 || report.enemy_health <= 0);

    if resolution.enemy_defeated() {
        assert_eq!(resolution.cell_after, MapCell::Empty);
        assert!(grid.clear_cell(1));
        grid.decrement_enemy_count();
    } else {
        assert_eq!(resolution.cell_after, MapCell::Enemy(enemy));
        assert_eq!(progress.stats.defence, hero.defence);
    }

    let violations_after = check_invariants(&grid);
    assert!(
        violations_after.is_empty(),
        "Invariants violated after combat: {violations_after:?}"
    );
});
