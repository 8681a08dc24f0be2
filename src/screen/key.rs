//! Logical key symbols.

use crate::game::Direction;

/// A key press as seen by the game.
///
/// The host input layer maps physical keys onto these symbols; printable
/// keys arrive as [`Key::Char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Confirm.
    Enter,
    /// Back / cancel.
    Escape,
    /// Any printable character.
    Char(char),
}

impl Key {
    /// Movement direction of this key on the map: arrows or `w`/`a`/`s`/`d`.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Key::Up | Key::Char('w') => Some(Direction::Up),
            Key::Down | Key::Char('s') => Some(Direction::Down),
            Key::Left | Key::Char('a') => Some(Direction::Left),
            Key::Right | Key::Char('d') => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(Key::Up.direction(), Some(Direction::Up));
        assert_eq!(Key::Char('w').direction(), Some(Direction::Up));
        assert_eq!(Key::Char('a').direction(), Some(Direction::Left));
        assert_eq!(Key::Char('s').direction(), Some(Direction::Down));
        assert_eq!(Key::Right.direction(), Some(Direction::Right));
        assert_eq!(Key::Char('W').direction(), None);
        assert_eq!(Key::Enter.direction(), None);
    }
}
