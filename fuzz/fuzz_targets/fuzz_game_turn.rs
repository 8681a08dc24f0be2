#![no_main]

use arbitrary::Arbitrary;
use herocrawl::game::check_invariants;
use herocrawl::{GameConfig, GameController, Key, MemoryTextSource, ScreenState};
use libfuzzer_sys::fuzz_target;

const MAP: &str = "[6,8]
\"hero\" [2,3]
\"enemy\" [0,0] (30,20,5)
\"enemy\" [5,7] (60,40,10)
\"enemy\" [3,3] (10,5,5)
\"whisky\" [2,4]
\"whisky\" [4,1]
\"sword\" [1,3]
\"thorn\" [2,2]
\"thorn\" [3,4]
\"barrier\" [1,1]
\"barrier\" [4,4]
";

/// Key pressed by the fuzzer.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Char(u8),
}

impl From<FuzzKey> for Key {
    fn from(key: FuzzKey) -> Self {
        match key {
            FuzzKey::Up => Key::Up,
            FuzzKey::Down => Key::Down,
            FuzzKey::Left => Key::Left,
            FuzzKey::Right => Key::Right,
            FuzzKey::Enter => Key::Enter,
            FuzzKey::Escape => Key::Escape,
            FuzzKey::Char(c) => Key::Char(char::from(c)),
        }
    }
}

/// A seed and a key sequence.
#[derive(Arbitrary, Debug)]
struct GameInput {
    seed: u64,
    keys: Vec<FuzzKey>,
}

fuzz_target!(|input: GameInput| {
    let source = MemoryTextSource::new()
        .with_text("map.txt", MAP)
        .with_text("quest.txt", "Kill them all.\n");
    let mut config = GameConfig::new("map.txt", "quest.txt");
    config.seed = input.seed;
    let mut game = GameController::new(config, source);

    for key in input.keys.into_iter().take(2_000) {
        game.handle_input(key.into());

        // The condition always matches the active screen.
        assert_eq!(game.condition(), game.state().condition());

        // A valid map never reaches the error screen.
        assert!(!matches!(game.state(), ScreenState::Error(_)));

        if let ScreenState::MapPlay(play) = game.state() {
            let violations = check_invariants(play.grid());
            assert!(
                violations.is_empty(),
                "Invariants violated during play: {violations:?}"
            );
        }

        if game.is_finished() {
            break;
        }
    }
});
