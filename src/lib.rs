// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Herocrawl: a turn-based text adventure core.
//!
//! This crate provides the game logic behind a small dungeon crawler:
//! - A screen state machine driven one logical key at a time
//! - A grid map parsed from a line-oriented text format
//! - Pickups, thorns and a randomized combat loop with seeded RNG
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Host (terminal renderer, keys)    │
//! ├─────────────────────────────────────┤
//! │         GameController              │
//! ├─────────────────────────────────────┤
//! │   ScreenState (menus, map play)     │
//! ├─────────────────────────────────────┤
//! │   MapGrid + CombatResolver          │
//! └─────────────────────────────────────┘
//! ```

pub mod controller;
pub mod error;
pub mod game;
pub mod screen;

pub use error::{GameError, GameResult, InvariantViolation, MapFormatError};

// Re-export key types at crate root for convenience
pub use controller::{FsTextSource, GameConfig, GameController, MemoryTextSource, TextSource};
pub use game::{CombatRng, HeroProgress, MapCell, MapGrid, ReseedPolicy, Stats};
pub use screen::{GameCondition, Key, ScreenData, ScreenState};
