//! Game conditions and the active screen state.

use std::fmt;

use crate::error::GameResult;
use crate::screen::{
    AboutScreen, CreateHeroDraft, HeroesMenu, Key, MainMenu, MapPlay, MessageView, ScreenData,
};

/// Shown when the game is over.
pub const GOODBYE_TEXT: &str = "Goodbye!\n";

/// Appended to every error message.
pub const ERROR_HELP: &str = "\n\nPlease check your files.\n\n\
Press ENTER to come back to Main Menu.\n\
Press any key to EXIT the Game.\n";

/// Top-level game condition, one per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCondition {
    /// Main menu.
    MainMenu,
    /// Choice of hero.
    HeroesMenu,
    /// About page.
    About,
    /// Skill allocation for a custom hero.
    CreateHero,
    /// Map play with the preset hero.
    PlayAsChuck,
    /// Map play with the custom hero.
    PlayAsCustom,
    /// An error message.
    Error,
    /// Terminal condition.
    Exit,
}

impl fmt::Display for GameCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameCondition::MainMenu => "main menu",
            GameCondition::HeroesMenu => "heroes menu",
            GameCondition::About => "about",
            GameCondition::CreateHero => "create hero",
            GameCondition::PlayAsChuck => "play as chuck",
            GameCondition::PlayAsCustom => "play as custom",
            GameCondition::Error => "error",
            GameCondition::Exit => "exit",
        };
        f.write_str(name)
    }
}

/// Error page: Enter goes back to the main menu, any other key quits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorScreen {
    text: String,
}

impl ErrorScreen {
    /// Create the page for an error message.
    #[must_use]
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            text: format!("{message}{ERROR_HELP}"),
        }
    }

    /// Full text shown on the page.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Condition requested by a key press on the page.
    #[must_use]
    pub fn handle(key: Key) -> GameCondition {
        if key == Key::Enter {
            GameCondition::MainMenu
        } else {
            GameCondition::Exit
        }
    }
}

/// The screen currently receiving keys.
#[derive(Debug, Clone)]
pub enum ScreenState {
    /// Main menu.
    MainMenu(MainMenu),
    /// Choice of hero.
    HeroesMenu(HeroesMenu),
    /// About page.
    About(AboutScreen),
    /// Skill allocation.
    CreateHero(CreateHeroDraft),
    /// Map play.
    MapPlay(Box<MapPlay>),
    /// Error page.
    Error(ErrorScreen),
    /// Goodbye page; ignores keys.
    Exit,
}

impl ScreenState {
    /// Condition this state belongs to.
    #[must_use]
    pub fn condition(&self) -> GameCondition {
        match self {
            ScreenState::MainMenu(_) => GameCondition::MainMenu,
            ScreenState::HeroesMenu(_) => GameCondition::HeroesMenu,
            ScreenState::About(_) => GameCondition::About,
            ScreenState::CreateHero(_) => GameCondition::CreateHero,
            ScreenState::MapPlay(play) => play.condition(),
            ScreenState::Error(_) => GameCondition::Error,
            ScreenState::Exit => GameCondition::Exit,
        }
    }

    /// Feed one key and return the requested next condition.
    ///
    /// # Errors
    ///
    /// Returns an error if map play detects an inconsistent grid.
    pub fn handle(&mut self, key: Key) -> GameResult<GameCondition> {
        let next = match self {
            ScreenState::MainMenu(menu) => menu.handle(key),
            ScreenState::HeroesMenu(menu) => menu.handle(key),
            ScreenState::About(_) => AboutScreen::handle(key),
            ScreenState::CreateHero(draft) => draft.handle(key),
            ScreenState::MapPlay(play) => play.handle(key)?,
            ScreenState::Error(_) => ErrorScreen::handle(key),
            ScreenState::Exit => GameCondition::Exit,
        };
        Ok(next)
    }

    /// Screen data for the renderer.
    #[must_use]
    pub fn render(&self) -> ScreenData<'_> {
        match self {
            ScreenState::MainMenu(menu) => menu.render(),
            ScreenState::HeroesMenu(menu) => menu.render(),
            ScreenState::About(about) => about.render(),
            ScreenState::CreateHero(draft) => draft.render(),
            ScreenState::MapPlay(play) => play.render(),
            ScreenState::Error(error) => ScreenData::Message(MessageView { text: error.text() }),
            ScreenState::Exit => ScreenData::Message(MessageView { text: GOODBYE_TEXT }),
        }
    }
}
