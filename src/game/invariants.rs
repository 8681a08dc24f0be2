//! Grid invariants - sanity checks that detect engine bugs.
//!
//! A grid produced by [`MapGrid::parse`] and mutated only through the
//! engine's operations must always pass these checks. A violation means a
//! bug, not bad map text.

use crate::error::InvariantViolation;
use crate::game::{MapCell, MapGrid};

/// Check all grid invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(grid: &MapGrid) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let expected = grid.height() * grid.width();
    if grid.cell_count() != expected {
        violations.push(InvariantViolation::new(format!(
            "Grid has {} cells, expected {}x{} = {expected}",
            grid.cell_count(),
            grid.height(),
            grid.width()
        )));
    }

    let mut heroes = 0usize;
    let mut enemies = 0u32;

    for (index, cell) in grid.occupied() {
        match cell {
            MapCell::Hero => heroes += 1,
            MapCell::Enemy(stats) => {
                enemies += 1;
                if !stats.is_positive() {
                    violations.push(InvariantViolation::new(format!(
                        "Enemy at {index} has non-positive stats {stats:?}"
                    )));
                }
            }
            _ => {}
        }
    }

    if heroes != 1 {
        violations.push(InvariantViolation::new(format!(
            "Grid has {heroes} hero cells, expected exactly 1"
        )));
    }

    match grid.get(grid.hero_index()) {
        Some(MapCell::Hero) => {}
        Some(other) => violations.push(InvariantViolation::new(format!(
            "Hero index {} points at {other:?}",
            grid.hero_index()
        ))),
        None => violations.push(InvariantViolation::new(format!(
            "Hero index {} is outside a grid of {} cells",
            grid.hero_index(),
            grid.cell_count()
        ))),
    }

    if grid.remaining_enemies() != enemies {
        violations.push(InvariantViolation::new(format!(
            "Enemy counter is {} but {enemies} enemies are on the map",
            grid.remaining_enemies()
        )));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "[3,3]\n\"hero\" [1,1]\n\"enemy\" [0,0] (5,5,5)\n\"enemy\" [2,2] (5,5,5)\n";

    #[test]
    fn test_parsed_grid_passes() {
        let grid = MapGrid::parse(MAP).unwrap();
        let violations = check_invariants(&grid);
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn test_moves_keep_invariants() {
        let mut grid = MapGrid::parse(MAP).unwrap();
        grid.move_hero(1);
        grid.move_hero(2);
        assert!(check_invariants(&grid).is_empty());
    }

    #[test]
    fn test_enemy_counter_drift_detected() {
        let mut grid = MapGrid::parse(MAP).unwrap();
        grid.decrement_enemy_count();

        let violations = check_invariants(&grid);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Enemy counter"));
    }

    #[test]
    fn test_cleared_enemy_without_count_detected() {
        let mut grid = MapGrid::parse(MAP).unwrap();
        assert!(grid.clear_cell(0));

        let violations = check_invariants(&grid);
        assert!(violations.iter().any(|v| v.message.contains("Enemy counter")));

        grid.decrement_enemy_count();
        assert!(check_invariants(&grid).is_empty());
    }
}
