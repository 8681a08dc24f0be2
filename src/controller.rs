//! Game controller: owns the active screen and drives condition changes.
//!
//! The controller feeds keys to the active [`ScreenState`], builds the
//! next state when the condition changes and routes every failure to the
//! error page. It caches the main menu cursor and the hero creation draft
//! so they survive round trips through other screens.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::error::{GameError, GameResult, InvariantViolation};
use crate::game::{CombatRng, HeroProgress, MapGrid, ReseedPolicy};
use crate::screen::{
    AboutScreen, CreateHeroDraft, ErrorScreen, GameCondition, HeroChoice, HeroesMenu, Key,
    MainMenu, MapPlay, ScreenData, ScreenState,
};

/// Default location of the about text.
pub const DEFAULT_ABOUT_PATH: &str = "assets/about.txt";

/// Where the controller reads map, quest and about texts from.
pub trait TextSource {
    /// Read the whole text at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the text cannot be read.
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// Reads texts from the file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTextSource;

impl TextSource for FsTextSource {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Serves texts from memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryTextSource {
    texts: HashMap<PathBuf, String>,
}

impl MemoryTextSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text and return the source.
    #[must_use]
    pub fn with_text(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Add or replace a text.
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.texts.insert(path.into(), text.into());
    }
}

impl TextSource for MemoryTextSource {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.texts.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no text registered for {}", path.display()),
            )
        })
    }
}

/// Paths and RNG settings for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Map file, read at the start of every session.
    pub map_path: PathBuf,
    /// Quest text file.
    pub quest_path: PathBuf,
    /// About text file.
    pub about_path: PathBuf,
    /// Base seed; session `n` uses `seed + n`.
    pub seed: u64,
    /// Combat RNG reseeding.
    pub reseed: ReseedPolicy,
}

impl GameConfig {
    /// Config with the default about path, seed 0 and continuous RNG.
    #[must_use]
    pub fn new(map_path: impl Into<PathBuf>, quest_path: impl Into<PathBuf>) -> Self {
        Self {
            map_path: map_path.into(),
            quest_path: quest_path.into(),
            about_path: PathBuf::from(DEFAULT_ABOUT_PATH),
            seed: 0,
            reseed: ReseedPolicy::default(),
        }
    }
}

/// Drives the screen state machine.
#[derive(Debug)]
pub struct GameController<S = FsTextSource> {
    config: GameConfig,
    source: S,
    condition: GameCondition,
    state: ScreenState,
    main_menu: Option<MainMenu>,
    draft: Option<CreateHeroDraft>,
    sessions: u64,
}

impl<S: TextSource> GameController<S> {
    /// Create a controller sitting on the main menu.
    #[must_use]
    pub fn new(config: GameConfig, source: S) -> Self {
        Self {
            config,
            source,
            condition: GameCondition::MainMenu,
            state: ScreenState::MainMenu(MainMenu::default()),
            main_menu: None,
            draft: None,
            sessions: 0,
        }
    }

    /// Get the config.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current condition.
    #[must_use]
    pub const fn condition(&self) -> GameCondition {
        self.condition
    }

    /// Active screen state.
    #[must_use]
    pub const fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Number of map-play sessions started so far.
    #[must_use]
    pub const fn sessions(&self) -> u64 {
        self.sessions
    }

    /// Check whether the game reached its terminal condition.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.condition == GameCondition::Exit
    }

    /// Screen data of the initial screen.
    #[must_use]
    pub fn start(&self) -> ScreenData<'_> {
        info!(map = %self.config.map_path.display(), "game started");
        self.state.render()
    }

    /// Feed one key and return the screen to draw.
    pub fn handle_input(&mut self, key: Key) -> ScreenData<'_> {
        if let Err(err) = self.dispatch(key) {
            self.fail(&err);
        }
        self.state.render()
    }

    fn dispatch(&mut self, key: Key) -> GameResult<()> {
        let next = self.state.handle(key)?;
        if next != self.condition {
            self.enter(next)?;
        }
        Ok(())
    }

    fn enter(&mut self, next: GameCondition) -> GameResult<()> {
        let previous = std::mem::replace(&mut self.state, ScreenState::Exit);
        self.stash(previous);

        let state = self.build(next)?;
        info!(from = %self.condition, to = %next, "condition changed");
        self.condition = next;
        self.state = state;
        Ok(())
    }

    fn stash(&mut self, previous: ScreenState) {
        match previous {
            ScreenState::MainMenu(menu) => self.main_menu = Some(menu),
            ScreenState::CreateHero(draft) => self.draft = Some(draft),
            ScreenState::MapPlay(play) => info!(
                won = play.is_won(),
                dead = play.is_dead(),
                remaining = play.grid().remaining_enemies(),
                "session ended"
            ),
            _ => {}
        }
    }

    fn build(&mut self, next: GameCondition) -> GameResult<ScreenState> {
        let state = match next {
            GameCondition::MainMenu => {
                ScreenState::MainMenu(self.main_menu.take().unwrap_or_default())
            }
            GameCondition::HeroesMenu => ScreenState::HeroesMenu(HeroesMenu::default()),
            GameCondition::About => {
                ScreenState::About(AboutScreen::new(self.read_optional(DocKind::About)))
            }
            GameCondition::CreateHero => {
                ScreenState::CreateHero(self.draft.take().unwrap_or_default())
            }
            GameCondition::PlayAsChuck => self.start_session(HeroChoice::Chuck, HeroProgress::chuck())?,
            GameCondition::PlayAsCustom => {
                let draft = self.draft.take().ok_or_else(|| {
                    InvariantViolation::new("Custom hero requested without a hero draft")
                })?;
                self.start_session(HeroChoice::Custom, HeroProgress::custom(draft.stats()))?
            }
            GameCondition::Error => ScreenState::Error(ErrorScreen::new("Unexpected error")),
            GameCondition::Exit => ScreenState::Exit,
        };
        Ok(state)
    }

    fn start_session(&mut self, choice: HeroChoice, hero: HeroProgress) -> GameResult<ScreenState> {
        let path = &self.config.map_path;
        let text = self
            .source
            .read_text(path)
            .map_err(|source| GameError::MapUnavailable {
                path: path.clone(),
                source,
            })?;
        let grid = MapGrid::parse(&text)?;
        let quest = self.read_optional(DocKind::Quest);

        let seed = self.config.seed.wrapping_add(self.sessions);
        self.sessions += 1;
        let rng = CombatRng::new(seed, self.config.reseed);

        let play = MapPlay::new(choice, grid, hero, rng, quest)?;
        Ok(ScreenState::MapPlay(Box::new(play)))
    }

    fn read_optional(&self, kind: DocKind) -> String {
        let path = match kind {
            DocKind::About => &self.config.about_path,
            DocKind::Quest => &self.config.quest_path,
        };
        match self.source.read_text(path) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), %err, "text unavailable, showing nothing");
                String::new()
            }
        }
    }

    fn fail(&mut self, err: &GameError) {
        error!(from = %self.condition, %err, "showing error screen");
        self.condition = GameCondition::Error;
        self.state = ScreenState::Error(ErrorScreen::new(err));
    }
}

#[derive(Debug, Clone, Copy)]
enum DocKind {
    About,
    Quest,
}
