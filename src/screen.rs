//! Screen state machine.
//!
//! Each game condition has a screen that consumes keys, returns the next
//! condition and renders into a [`ScreenData`] value:
//! - Main menu, heroes menu and about page
//! - Hero creation
//! - Map play with quest and legend overlays
//! - Error and exit pages

mod create_hero;
mod data;
mod key;
mod menu;
mod play;
mod state;

pub use create_hero::{CreateHeroDraft, MIN_SKILL, SKILL_POINTS, SKILL_STEP, Skill};
pub use data::{
    CameraAnchor, HeroCreationView, MapView, MenuView, MessageView, ScreenData, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH,
};
pub use key::Key;
pub use menu::{AboutScreen, HEROES_MENU_ITEMS, HeroesMenu, MAIN_MENU_ITEMS, MainMenu, Menu};
pub use play::{DEATH_TEXT, HeroChoice, LEGEND_TEXT, MapPlay, PlayView, WIN_TEXT};
pub use state::{ERROR_HELP, ErrorScreen, GOODBYE_TEXT, GameCondition, ScreenState};
