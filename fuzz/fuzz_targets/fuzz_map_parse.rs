#![no_main]

use herocrawl::game::{MapGrid, check_invariants};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic; failures are fine.
    let Ok(grid) = MapGrid::parse(text) else {
        return;
    };

    let violations = check_invariants(&grid);
    assert!(
        violations.is_empty(),
        "Invariants violated after parse: {violations:?}"
    );

    // Writing the grid back must give the same grid.
    let written = grid.to_map_text();
    let reparsed = MapGrid::parse(&written).expect("written map must parse");
    assert_eq!(reparsed, grid, "Round trip changed the grid");
});
