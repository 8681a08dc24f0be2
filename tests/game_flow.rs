//! Integration tests for the game controller.
//!
//! These drive complete games through the public API, one key at a time.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;

use herocrawl::controller::DEFAULT_ABOUT_PATH;
use herocrawl::screen::{DEATH_TEXT, ERROR_HELP, LEGEND_TEXT, WIN_TEXT};
use herocrawl::{
    FsTextSource, GameCondition, GameConfig, GameController, Key, MapCell, MemoryTextSource,
    ScreenData, ScreenState, Stats,
};

const DUEL_MAP: &str = "[3,3]\n\"hero\" [1,1]\n\"enemy\" [2,2] (10,5,5)\n\"sword\" [1,2]\n";
const QUEST: &str = "Find the enemy in the corner and kill it.\n";
const ABOUT: &str = "A tiny dungeon crawler.\n";

fn game_with_map(map: &str) -> GameController<MemoryTextSource> {
    let source = MemoryTextSource::new()
        .with_text("map.txt", map)
        .with_text("quest.txt", QUEST)
        .with_text(DEFAULT_ABOUT_PATH, ABOUT);
    GameController::new(GameConfig::new("map.txt", "quest.txt"), source)
}

fn press(game: &mut GameController<MemoryTextSource>, keys: &[Key]) {
    for &key in keys {
        game.handle_input(key);
    }
}

fn message(data: ScreenData<'_>) -> String {
    match data {
        ScreenData::Message(view) => view.text.to_string(),
        other => panic!("expected a message, got {other:?}"),
    }
}

#[test]
fn test_chuck_clears_the_map() {
    let mut game = game_with_map(DUEL_MAP);
    press(&mut game, &[Key::Enter, Key::Enter]);
    assert_eq!(game.condition(), GameCondition::PlayAsChuck);

    // Pick up the sword, then attack the enemy below it.
    press(&mut game, &[Key::Right]);
    let data = game.handle_input(Key::Down);
    assert_eq!(message(data), WIN_TEXT);

    let ScreenState::MapPlay(play) = game.state() else {
        panic!("expected map play");
    };
    assert!(play.is_won());
    assert_eq!(play.hero().swords, 1);
    assert_eq!(play.grid().hero_index(), 5);
    assert_eq!(play.grid().get(8), Some(&MapCell::Empty));
    assert_eq!(play.grid().remaining_enemies(), 0);

    game.handle_input(Key::Char(' '));
    assert_eq!(game.condition(), GameCondition::MainMenu);
}

#[test]
fn test_chuck_kills_lone_enemy_and_wins() {
    let map = "[2,2]\n\"enemy\" [0,1] (10,5,5)\n\"hero\" [0,0]\n";
    let mut game = game_with_map(map);
    press(&mut game, &[Key::Enter, Key::Enter]);
    assert_eq!(game.condition(), GameCondition::PlayAsChuck);

    let data = game.handle_input(Key::Right);
    assert_eq!(message(data), WIN_TEXT);

    let ScreenState::MapPlay(play) = game.state() else {
        panic!("expected map play");
    };
    assert!(play.is_won());
    assert!(!play.is_dead());
    assert_eq!(play.grid().hero_index(), 0);
    assert_eq!(play.grid().get(1), Some(&MapCell::Empty));
    assert_eq!(play.grid().remaining_enemies(), 0);

    game.handle_input(Key::Down);
    assert_eq!(game.condition(), GameCondition::MainMenu);
}

#[test]
fn test_custom_hero_dies_on_thorns() {
    let map = "[1,5]\n\"hero\" [0,0]\n\"thorn\" [0,1]\n\"thorn\" [0,2]\n\"thorn\" [0,3]\n\"enemy\" [0,4] (5,5,5)\n";
    let mut game = game_with_map(map);

    // New Game -> New Hero, move every point into damage.
    press(&mut game, &[Key::Enter, Key::Down, Key::Enter]);
    assert_eq!(game.condition(), GameCondition::CreateHero);
    press(&mut game, &[Key::Down]);
    press(&mut game, &[Key::Char('+'); 20]);
    press(&mut game, &[Key::Enter]);
    assert_eq!(game.condition(), GameCondition::PlayAsCustom);

    let ScreenState::MapPlay(play) = game.state() else {
        panic!("expected map play");
    };
    assert_eq!(play.hero().stats, Stats::new(50, 250, 50));

    press(&mut game, &[Key::Right, Key::Right]);
    let data = game.handle_input(Key::Char('d'));
    assert_eq!(message(data), "Sorry, you died\n");
    assert_eq!(DEATH_TEXT, "Sorry, you died\n");

    game.handle_input(Key::Enter);
    assert_eq!(game.condition(), GameCondition::MainMenu);
}

#[test]
fn test_draft_survives_escape_and_is_consumed() {
    let mut game = game_with_map(DUEL_MAP);
    press(&mut game, &[Key::Enter, Key::Down, Key::Enter]);
    press(&mut game, &[Key::Char('+'), Key::Char('+'), Key::Escape]);
    assert_eq!(game.condition(), GameCondition::MainMenu);

    press(&mut game, &[Key::Enter, Key::Down, Key::Enter]);
    let ScreenState::CreateHero(draft) = game.state() else {
        panic!("expected hero creation");
    };
    assert_eq!(draft.stats(), Stats::new(70, 50, 50));
    assert_eq!(draft.remaining_points(), 180);

    press(&mut game, &[Key::Enter, Key::Escape]);
    press(&mut game, &[Key::Enter, Key::Down, Key::Enter]);
    let ScreenState::CreateHero(draft) = game.state() else {
        panic!("expected hero creation");
    };
    assert_eq!(draft.remaining_points(), 200);
}

#[test]
fn test_main_menu_selection_is_kept() {
    let mut game = game_with_map(DUEL_MAP);
    press(&mut game, &[Key::Down]);
    let data = game.handle_input(Key::Enter);
    assert_eq!(message(data), ABOUT);

    game.handle_input(Key::Escape);
    let ScreenState::MainMenu(menu) = game.state() else {
        panic!("expected main menu");
    };
    assert_eq!(menu.menu().selected(), 1);
}

#[test]
fn test_overlays_during_play() {
    let mut game = game_with_map(DUEL_MAP);
    press(&mut game, &[Key::Enter, Key::Enter]);

    assert_eq!(message(game.handle_input(Key::Char('q'))), QUEST);
    assert_eq!(message(game.handle_input(Key::Char('L'))), LEGEND_TEXT);
    assert!(matches!(game.handle_input(Key::Char('l')), ScreenData::Map(_)));

    game.handle_input(Key::Char('q'));
    let data = game.handle_input(Key::Left);
    let ScreenData::Map(view) = data else {
        panic!("expected the map");
    };
    assert_eq!(view.anchor.col, 0);
    assert_eq!(view.symbol_at(3), Some('<'));
}

#[test]
fn test_bad_map_goes_to_error_screen() {
    let mut game = game_with_map("[2,2]\n\"hero\" [0,0]\n\"dragon\" [1,1]\n");
    press(&mut game, &[Key::Enter]);
    let text = message(game.handle_input(Key::Enter));

    assert_eq!(game.condition(), GameCondition::Error);
    assert!(text.starts_with("Map error: line 3"));
    assert!(text.ends_with(ERROR_HELP));

    game.handle_input(Key::Enter);
    assert_eq!(game.condition(), GameCondition::MainMenu);

    press(&mut game, &[Key::Enter, Key::Enter]);
    assert_eq!(game.condition(), GameCondition::Error);
    let data = game.handle_input(Key::Char('n'));
    assert_eq!(message(data), "Goodbye!\n");
    assert!(game.is_finished());
}

#[test]
fn test_exit_ignores_further_keys() {
    let mut game = game_with_map(DUEL_MAP);
    press(&mut game, &[Key::Up, Key::Enter]);
    assert!(game.is_finished());
    press(&mut game, &[Key::Enter, Key::Escape, Key::Char('q')]);
    assert_eq!(game.condition(), GameCondition::Exit);
}

#[test]
fn test_files_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("map.txt");
    let quest_path = dir.path().join("quest.txt");
    fs::write(&map_path, DUEL_MAP).unwrap();
    fs::write(&quest_path, QUEST).unwrap();

    let mut config = GameConfig::new(&map_path, &quest_path);
    config.about_path = dir.path().join("missing-about.txt");
    let mut game = GameController::new(config, FsTextSource);

    game.handle_input(Key::Down);
    assert_eq!(message(game.handle_input(Key::Enter)), "");
    game.handle_input(Key::Escape);
    game.handle_input(Key::Up);

    game.handle_input(Key::Enter);
    game.handle_input(Key::Enter);
    assert_eq!(game.condition(), GameCondition::PlayAsChuck);
    assert_eq!(message(game.handle_input(Key::Char('q'))), QUEST);

    // The map is read again for every session.
    fs::write(&map_path, "[1,1]\n").unwrap();
    game.handle_input(Key::Escape);
    game.handle_input(Key::Enter);
    let text = message(game.handle_input(Key::Enter));
    assert!(text.starts_with("Map error: the map has no hero"));
}

#[test]
fn test_shipped_map_is_playable() {
    let grid = herocrawl::MapGrid::parse(include_str!("../assets/map.txt")).unwrap();
    assert_eq!(grid.remaining_enemies(), 5);
    assert!(herocrawl::game::check_invariants(&grid).is_empty());
}
