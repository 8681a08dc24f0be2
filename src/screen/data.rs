//! Screen data handed to the renderer.
//!
//! Every variant borrows from the active screen state; the renderer reads
//! it and never mutates it.

use crate::game::{HeroProgress, MapCell, MapGrid};
use crate::screen::Skill;

/// Default camera width in cells.
pub const VIEWPORT_WIDTH: usize = 40;

/// Default camera height in cells.
pub const VIEWPORT_HEIGHT: usize = 20;

/// What the renderer should draw.
#[derive(Debug, Clone, Copy)]
pub enum ScreenData<'a> {
    /// A list of items with one highlighted.
    Menu(MenuView<'a>),
    /// Plain text.
    Message(MessageView<'a>),
    /// The live map with the hero's stats.
    Map(MapView<'a>),
    /// Skill allocation for a new hero.
    HeroCreation(HeroCreationView<'a>),
}

/// A menu to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView<'a> {
    /// Item labels in display order.
    pub items: &'a [&'static str],
    /// Index of the highlighted item.
    pub selected: usize,
}

/// A text message to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageView<'a> {
    /// Text, possibly spanning several lines.
    pub text: &'a str,
}

/// The hero creation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCreationView<'a> {
    /// Skills with their current values.
    pub skills: &'a [Skill],
    /// Index of the highlighted skill.
    pub selected: usize,
    /// Points left to spend.
    pub remaining_points: i32,
}

/// Cell the camera centres on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraAnchor {
    /// Row of the anchor.
    pub row: usize,
    /// Column of the anchor.
    pub col: usize,
}

/// The live map.
#[derive(Debug, Clone, Copy)]
pub struct MapView<'a> {
    /// The grid being played.
    pub grid: &'a MapGrid,
    /// The hero and its stats.
    pub hero: &'a HeroProgress,
    /// Hero position; the camera centres here.
    pub anchor: CameraAnchor,
}

impl<'a> MapView<'a> {
    /// Build the view of a grid and its hero.
    #[must_use]
    pub fn new(grid: &'a MapGrid, hero: &'a HeroProgress) -> Self {
        let (row, col) = grid.position(grid.hero_index());
        Self {
            grid,
            hero,
            anchor: CameraAnchor { row, col },
        }
    }

    /// Glyph at `index`, drawing the hero with its facing.
    #[must_use]
    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.grid.get(index).map(|cell| match cell {
            MapCell::Hero => self.hero.facing.symbol(),
            other => other.symbol(),
        })
    }

    /// Enemies still on the map.
    #[must_use]
    pub const fn remaining_enemies(&self) -> u32 {
        self.grid.remaining_enemies()
    }

    /// Top-left `(row, col)` of a `view_width` x `view_height` window
    /// centred on the hero and pushed back inside the grid at the edges.
    #[must_use]
    pub fn viewport_origin(&self, view_width: usize, view_height: usize) -> (usize, usize) {
        let col = clamp_origin(self.anchor.col, view_width, self.grid.width());
        let row = clamp_origin(self.anchor.row, view_height, self.grid.height());
        (row, col)
    }
}

/// Start of a window of `window` cells centred on `center` in `0..extent`.
fn clamp_origin(center: usize, window: usize, extent: usize) -> usize {
    let start = center.saturating_sub(window / 2);
    if start + window > extent {
        extent.saturating_sub(window)
    } else {
        start
    }
}
