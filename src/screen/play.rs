//! Map play: one hero walking one map until it wins, dies or leaves.

use tracing::{debug, info};

use crate::error::{GameResult, InvariantViolation};
use crate::game::{CombatRng, Direction, HeroProgress, MapGrid, check_invariants, resolve};
use crate::screen::{GameCondition, Key, MapView, MessageView, ScreenData};

/// Shown once every enemy is dead.
pub const WIN_TEXT: &str = "Congratulation, you win!\n";

/// Shown once the hero's health runs out.
pub const DEATH_TEXT: &str = "Sorry, you died\n";

/// Map legend shown on `l`/`L`.
pub const LEGEND_TEXT: &str = "e = enemy you have to kill;\n\
w = whisky you can drink to augment your health;\n\
s = sword you can use to augment your damage;\n\
! = thorn, be careful, it's pain for you;\n\
# = barrier you cannot pass. Really. I don't fool you.\n\
\n\
(Press any key to continue...)\n";

/// Which hero the session was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroChoice {
    /// The preset hero.
    Chuck,
    /// A hero from the creation screen.
    Custom,
}

impl HeroChoice {
    /// Condition a session with this hero runs under.
    #[must_use]
    pub const fn condition(self) -> GameCondition {
        match self {
            HeroChoice::Chuck => GameCondition::PlayAsChuck,
            HeroChoice::Custom => GameCondition::PlayAsCustom,
        }
    }
}

/// What the session currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayView {
    /// The map with the stats panel.
    #[default]
    Map,
    /// The quest text.
    Quest,
    /// The glyph legend.
    Legend,
}

/// A live map-play session.
#[derive(Debug, Clone)]
pub struct MapPlay {
    choice: HeroChoice,
    grid: MapGrid,
    hero: HeroProgress,
    rng: CombatRng,
    quest: String,
    view: PlayView,
    is_dead: bool,
    is_won: bool,
}

impl MapPlay {
    /// Start a session on a parsed grid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::Invariant`] if the grid is not a
    /// consistent game map.
    pub fn new(
        choice: HeroChoice,
        grid: MapGrid,
        hero: HeroProgress,
        rng: CombatRng,
        quest: String,
    ) -> GameResult<Self> {
        ensure_consistent(&grid)?;
        info!(
            hero = %hero.name,
            height = grid.height(),
            width = grid.width(),
            enemies = grid.remaining_enemies(),
            seed = rng.seed(),
            "session started"
        );
        Ok(Self {
            choice,
            grid,
            hero,
            rng,
            quest,
            view: PlayView::Map,
            is_dead: false,
            is_won: false,
        })
    }

    /// Condition this session runs under.
    #[must_use]
    pub const fn condition(&self) -> GameCondition {
        self.choice.condition()
    }

    /// Get the grid.
    #[must_use]
    pub const fn grid(&self) -> &MapGrid {
        &self.grid
    }

    /// Get the hero.
    #[must_use]
    pub const fn hero(&self) -> &HeroProgress {
        &self.hero
    }

    /// Get the combat RNG.
    #[must_use]
    pub const fn rng(&self) -> &CombatRng {
        &self.rng
    }

    /// What the session shows right now.
    #[must_use]
    pub const fn view(&self) -> PlayView {
        self.view
    }

    /// Check whether the hero died.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Check whether every enemy was killed.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.is_won
    }

    /// Check whether the session has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_dead || self.is_won
    }

    /// Handle a key press.
    ///
    /// After a win or a death any key goes back to the main menu. Quest and
    /// legend views last for one key; pressing their key again closes them,
    /// any other key closes them and is then handled on the map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::Invariant`] if the grid became
    /// inconsistent.
    pub fn handle(&mut self, key: Key) -> GameResult<GameCondition> {
        if self.is_over() || key == Key::Escape {
            return Ok(GameCondition::MainMenu);
        }

        let previous = std::mem::take(&mut self.view);
        match key {
            Key::Char('q') => {
                if previous != PlayView::Quest {
                    self.view = PlayView::Quest;
                }
            }
            Key::Char('l' | 'L') => {
                if previous != PlayView::Legend {
                    self.view = PlayView::Legend;
                }
            }
            Key::Char('1') => {
                if self.hero.drink_whisky() {
                    debug!(health = self.hero.stats.health, "whisky drunk");
                }
            }
            Key::Char('2') => {
                if self.hero.equip_sword() {
                    debug!(damage = self.hero.stats.damage, "sword equipped");
                }
            }
            other => {
                if let Some(direction) = other.direction() {
                    self.step(direction)?;
                }
            }
        }

        if self.hero.is_dead() && !self.is_dead {
            self.is_dead = true;
            info!(hero = %self.hero.name, "hero died");
        } else if self.grid.remaining_enemies() == 0 && !self.is_won {
            self.is_won = true;
            info!(hero = %self.hero.name, "all enemies defeated");
        }

        ensure_consistent(&self.grid)?;
        Ok(self.condition())
    }

    fn step(&mut self, direction: Direction) -> GameResult<()> {
        self.hero.facing = direction.into();

        let current = self.grid.hero_index();
        let candidate = self.grid.hero_candidate(direction);
        if candidate == current {
            return Ok(());
        }

        let Some(&target) = self.grid.get(candidate) else {
            return Err(InvariantViolation::new(format!(
                "Move target {candidate} is outside a grid of {} cells",
                self.grid.cell_count()
            ))
            .into());
        };

        let resolution = resolve(&mut self.hero, target, &mut self.rng);
        if resolution.allowed {
            self.grid.move_hero(candidate);
            debug!(from = current, to = candidate, "hero moved");
        } else if resolution.cell_after.is_empty() {
            self.grid.clear_cell(candidate);
        }

        if resolution.enemy_defeated() {
            self.grid.decrement_enemy_count();
            debug!(
                at = candidate,
                remaining = self.grid.remaining_enemies(),
                "enemy defeated"
            );
        }
        Ok(())
    }

    /// Screen data for this state.
    #[must_use]
    pub fn render(&self) -> ScreenData<'_> {
        let text = if self.is_dead {
            DEATH_TEXT
        } else if self.is_won {
            WIN_TEXT
        } else {
            match self.view {
                PlayView::Map => return ScreenData::Map(MapView::new(&self.grid, &self.hero)),
                PlayView::Quest => self.quest.as_str(),
                PlayView::Legend => LEGEND_TEXT,
            }
        };
        ScreenData::Message(MessageView { text })
    }
}

fn ensure_consistent(grid: &MapGrid) -> GameResult<()> {
    match check_invariants(grid).into_iter().next() {
        Some(violation) => Err(violation.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Facing, MapCell, ReseedPolicy, Stats};

    fn session(map: &str, hero: HeroProgress) -> MapPlay {
        let grid = MapGrid::parse(map).unwrap();
        let rng = CombatRng::new(7, ReseedPolicy::Continuous);
        MapPlay::new(HeroChoice::Custom, grid, hero, rng, "Kill them all.\n".into()).unwrap()
    }

    fn message(play: &MapPlay) -> &str {
        match play.render() {
            ScreenData::Message(view) => view.text,
            other => panic!("expected a message, got {other:?}"),
        }
    }

    #[test]
    fn test_walk_and_pickup() {
        let mut play = session(
            "[1,4]\n\"hero\" [0,0]\n\"sword\" [0,1]\n\"whisky\" [0,2]\n\"enemy\" [0,3] (5,5,5)\n",
            HeroProgress::custom(Stats::new(100, 50, 50)),
        );

        assert_eq!(play.handle(Key::Right).unwrap(), GameCondition::PlayAsCustom);
        assert_eq!(play.hero().swords, 1);
        assert_eq!(play.hero().facing, Facing::Right);
        assert_eq!(play.grid().hero_index(), 1);

        play.handle(Key::Char('d')).unwrap();
        assert_eq!(play.hero().whisky, 1);

        play.handle(Key::Char('1')).unwrap();
        play.handle(Key::Char('2')).unwrap();
        assert_eq!(play.hero().stats, Stats::new(150, 70, 50));
        assert_eq!(play.hero().whisky, 0);
        assert_eq!(play.hero().swords, 0);
    }

    #[test]
    fn test_blocked_by_barrier_and_edge() {
        let mut play = session(
            "[2,2]\n\"hero\" [0,0]\n\"barrier\" [0,1]\n\"enemy\" [1,1] (5,5,5)\n",
            HeroProgress::chuck(),
        );

        play.handle(Key::Right).unwrap();
        assert_eq!(play.grid().hero_index(), 0);
        play.handle(Key::Up).unwrap();
        assert_eq!(play.grid().hero_index(), 0);
        assert_eq!(play.hero().facing, Facing::Up);
    }

    #[test]
    fn test_kill_last_enemy_wins() {
        let mut play = session(
            "[1,2]\n\"hero\" [0,0]\n\"enemy\" [0,1] (10,5,5)\n",
            HeroProgress::chuck(),
        );

        play.handle(Key::Right).unwrap();
        assert_eq!(play.grid().hero_index(), 0);
        assert_eq!(play.grid().get(1), Some(&MapCell::Empty));
        assert_eq!(play.grid().remaining_enemies(), 0);
        assert!(play.is_won());
        assert_eq!(message(&play), WIN_TEXT);

        assert_eq!(play.handle(Key::Char('x')).unwrap(), GameCondition::MainMenu);
    }

    #[test]
    fn test_thorn_death() {
        let mut play = session(
            "[1,3]\n\"hero\" [0,0]\n\"thorn\" [0,1]\n\"enemy\" [0,2] (5,5,5)\n",
            HeroProgress::custom(Stats::new(10, 50, 50)),
        );

        play.handle(Key::Right).unwrap();
        assert!(play.is_dead());
        assert!(!play.is_won());
        assert_eq!(message(&play), DEATH_TEXT);
        assert_eq!(play.handle(Key::Enter).unwrap(), GameCondition::MainMenu);
    }

    #[test]
    fn test_thorn_to_zero_health_survives() {
        let mut play = session(
            "[1,3]\n\"hero\" [0,0]\n\"thorn\" [0,1]\n\"enemy\" [0,2] (5,5,5)\n",
            HeroProgress::custom(Stats::new(20, 50, 50)),
        );

        play.handle(Key::Right).unwrap();
        assert_eq!(play.hero().stats.health, 0);
        assert!(!play.is_dead());
        assert!(matches!(play.render(), ScreenData::Map(_)));
    }

    #[test]
    fn test_knockout_at_zero_health_counts_kill() {
        let mut play = session(
            "[1,2]\n\"hero\" [0,0]\n\"enemy\" [0,1] (10,1,1)\n",
            HeroProgress::custom(Stats::new(1, 100, 0)),
        );

        play.handle(Key::Right).unwrap();
        assert_eq!(play.hero().stats.health, 0);
        assert!(!play.is_dead());
        assert_eq!(play.grid().get(1), Some(&MapCell::Empty));
        assert_eq!(play.grid().remaining_enemies(), 0);
        assert!(play.is_won());
        assert_eq!(message(&play), WIN_TEXT);
    }

    #[test]
    fn test_quest_and_legend_views() {
        let mut play = session(
            "[2,2]\n\"hero\" [0,0]\n\"enemy\" [1,1] (5,5,5)\n",
            HeroProgress::chuck(),
        );

        play.handle(Key::Char('q')).unwrap();
        assert_eq!(message(&play), "Kill them all.\n");
        play.handle(Key::Char('q')).unwrap();
        assert_eq!(play.view(), PlayView::Map);

        play.handle(Key::Char('L')).unwrap();
        assert_eq!(message(&play), LEGEND_TEXT);
        play.handle(Key::Char('l')).unwrap();
        assert_eq!(play.view(), PlayView::Map);

        play.handle(Key::Char('q')).unwrap();
        play.handle(Key::Down).unwrap();
        assert_eq!(play.view(), PlayView::Map);
        assert_eq!(play.grid().hero_index(), 2);
        assert!(matches!(play.render(), ScreenData::Map(_)));
    }

    #[test]
    fn test_escape_leaves() {
        let mut play = session("[1,2]\n\"hero\" [0,0]\n\"enemy\" [0,1] (5,5,5)\n", HeroProgress::chuck());
        assert_eq!(play.handle(Key::Escape).unwrap(), GameCondition::MainMenu);
    }

    #[test]
    fn test_inconsistent_grid_rejected() {
        let mut grid = MapGrid::parse("[1,2]\n\"hero\" [0,0]\n\"enemy\" [0,1] (5,5,5)\n").unwrap();
        grid.decrement_enemy_count();
        let rng = CombatRng::new(0, ReseedPolicy::Continuous);
        let result = MapPlay::new(HeroChoice::Chuck, grid, HeroProgress::chuck(), rng, String::new());
        assert!(matches!(result, Err(crate::GameError::Invariant(_))));
    }

    #[test]
    fn test_choice_condition() {
        assert_eq!(HeroChoice::Chuck.condition(), GameCondition::PlayAsChuck);
        assert_eq!(HeroChoice::Custom.condition(), GameCondition::PlayAsCustom);
    }
}
