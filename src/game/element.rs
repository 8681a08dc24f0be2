//! Map cell taxonomy and combat attributes.

/// Combat attributes shared by the hero and enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Hit points. The owner is defeated once this reaches zero or below.
    pub health: i32,
    /// Base damage dealt per combat round.
    pub damage: i32,
    /// Damage absorbed per combat round.
    pub defence: i32,
}

impl Stats {
    /// Create a new stat block.
    #[must_use]
    pub const fn new(health: i32, damage: i32, defence: i32) -> Self {
        Self {
            health,
            damage,
            defence,
        }
    }

    /// Check that every attribute is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.health > 0 && self.damage > 0 && self.defence > 0
    }
}

/// A movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// Which way the hero glyph points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// `^`
    Up,
    /// `v`
    #[default]
    Down,
    /// `<`
    Left,
    /// `>`
    Right,
}

impl Facing {
    /// Glyph used to draw the hero.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Facing::Up => '^',
            Facing::Down => 'v',
            Facing::Left => '<',
            Facing::Right => '>',
        }
    }
}

impl From<Direction> for Facing {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Facing::Up,
            Direction::Down => Facing::Down,
            Direction::Left => Facing::Left,
            Direction::Right => Facing::Right,
        }
    }
}

/// Content of one map cell.
///
/// The hero's stats are not stored here; the cell only marks where the
/// hero stands. Stats live in [`HeroProgress`](crate::game::HeroProgress).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapCell {
    /// Free floor.
    #[default]
    Empty,
    /// Impassable wall.
    Barrier,
    /// Hurts the hero for 20 health when stepped on.
    Thorn,
    /// Pickup: one whisky charge (+50 health when used).
    Whisky,
    /// Pickup: one sword charge (+20 damage when used).
    Sword,
    /// A hostile combatant.
    Enemy(Stats),
    /// The hero's position.
    Hero,
}

impl MapCell {
    /// Glyph used to draw this cell. The hero is drawn as `v`; callers that
    /// know the facing should use [`Facing::symbol`] instead.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            MapCell::Empty => '.',
            MapCell::Barrier => '#',
            MapCell::Thorn => '!',
            MapCell::Whisky => 'w',
            MapCell::Sword => 's',
            MapCell::Enemy(_) => 'e',
            MapCell::Hero => Facing::Down.symbol(),
        }
    }

    /// Name used for this cell in map text, `None` for empty cells.
    #[must_use]
    pub const fn type_name(&self) -> Option<&'static str> {
        match self {
            MapCell::Empty => None,
            MapCell::Barrier => Some("barrier"),
            MapCell::Thorn => Some("thorn"),
            MapCell::Whisky => Some("whisky"),
            MapCell::Sword => Some("sword"),
            MapCell::Enemy(_) => Some("enemy"),
            MapCell::Hero => Some("hero"),
        }
    }

    /// Check if this cell holds nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, MapCell::Empty)
    }

    /// Check if this cell is an enemy.
    #[must_use]
    pub const fn is_enemy(&self) -> bool {
        matches!(self, MapCell::Enemy(_))
    }
}
