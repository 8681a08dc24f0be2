//! Error types for map parsing and the game state machine.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to parse a map description.
///
/// Line numbers are 1-based and refer to the line of the map text that
/// triggered the failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapFormatError {
    /// The first line has no `[height,width]` header.
    #[error("missing '[', ',' or ']' in the map size header")]
    MissingSizeHeader,
    /// A number could not be parsed.
    #[error("line {line}: `{text}` is not a valid number")]
    InvalidNumber {
        /// Line of the map text.
        line: usize,
        /// The offending text.
        text: String,
    },
    /// Height or width is negative.
    #[error("map size [{height},{width}] is negative")]
    NegativeSize {
        /// Declared height.
        height: i64,
        /// Declared width.
        width: i64,
    },
    /// The declared grid has more cells than the engine accepts.
    #[error("map size [{height},{width}] exceeds {max} cells")]
    TooLarge {
        /// Declared height.
        height: i64,
        /// Declared width.
        width: i64,
        /// Maximum accepted cell count.
        max: usize,
    },
    /// An object line opens a quoted type but never closes it.
    #[error("line {line}: missing '\"' around the object type")]
    MissingTypeQuote {
        /// Line of the map text.
        line: usize,
    },
    /// An object line has no `[h,w]` position.
    #[error("line {line}: missing '[', ',' or ']' in the object position")]
    MissingPosition {
        /// Line of the map text.
        line: usize,
    },
    /// An enemy line has no `(health,damage,defence)` triple.
    #[error("line {line}: missing '(', ',' or ')' in the enemy stats")]
    MissingEnemyStats {
        /// Line of the map text.
        line: usize,
    },
    /// A position lies outside the grid.
    #[error("line {line}: position [{row},{col}] is out of the map bounds")]
    OutOfBounds {
        /// Line of the map text.
        line: usize,
        /// Row of the position.
        row: i64,
        /// Column of the position.
        col: i64,
    },
    /// A position is already taken by another object.
    #[error("line {line}: position [{row},{col}] is already occupied")]
    Occupied {
        /// Line of the map text.
        line: usize,
        /// Row of the position.
        row: i64,
        /// Column of the position.
        col: i64,
    },
    /// An enemy has a health, damage or defence value `<= 0`.
    #[error("line {line}: enemies can't have characteristics <= 0")]
    NonPositiveEnemyStats {
        /// Line of the map text.
        line: usize,
    },
    /// The quoted type is not one of the known objects.
    #[error("line {line}: unknown object type \"{name}\"")]
    UnknownObject {
        /// Line of the map text.
        line: usize,
        /// The quoted type name.
        name: String,
    },
    /// A second `hero` entry appeared.
    #[error("line {line}: there can be only one hero")]
    MultipleHeroes {
        /// Line of the map text.
        line: usize,
    },
    /// The map has no `hero` entry at all.
    #[error("the map has no hero")]
    MissingHero,
}

/// A broken internal invariant.
///
/// These never come from user input; seeing one means the engine has a bug
/// or a state was entered out of order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    /// Create a violation with the given description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Any failure raised while handling a key.
///
/// The controller turns every `GameError` into the Error screen; none of
/// them escape to the host loop.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The map text is malformed.
    #[error("Map error: {0}")]
    MapFormat(#[from] MapFormatError),
    /// The map text could not be read.
    #[error("Can't read map file {}: {source}", path.display())]
    MapUnavailable {
        /// Path of the map file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// An internal invariant does not hold.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Result type for state handlers.
pub type GameResult<T> = Result<T, GameError>;
