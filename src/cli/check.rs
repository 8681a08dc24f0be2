//! Check command implementation - map file validation.

use super::CheckFormat;
use anyhow::{Context, Result, bail};
use herocrawl::game::{MapCell, MapGrid, check_invariants};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// JSON-serializable check result.
#[derive(Debug, Serialize)]
struct JsonCheckResult {
    /// Map file that was checked.
    path: String,
    /// Whether the map parsed and passed every invariant.
    valid: bool,
    /// Map summary (null if invalid).
    summary: Option<MapSummary>,
    /// Parse or invariant error (null if valid).
    error: Option<String>,
}

/// What a valid map contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct MapSummary {
    height: usize,
    width: usize,
    /// Hero position as `[row, col]`.
    hero: [usize; 2],
    enemies: u32,
    whisky: usize,
    swords: usize,
    thorns: usize,
    barriers: usize,
}

impl MapSummary {
    fn from_grid(grid: &MapGrid) -> Self {
        let count = |wanted: fn(&MapCell) -> bool| grid.cells().iter().filter(|c| wanted(c)).count();
        let (row, col) = grid.position(grid.hero_index());
        Self {
            height: grid.height(),
            width: grid.width(),
            hero: [row, col],
            enemies: grid.remaining_enemies(),
            whisky: count(|c| matches!(c, MapCell::Whisky)),
            swords: count(|c| matches!(c, MapCell::Sword)),
            thorns: count(|c| matches!(c, MapCell::Thorn)),
            barriers: count(|c| matches!(c, MapCell::Barrier)),
        }
    }
}

/// Parse a map and run the grid invariants on it.
fn inspect(text: &str) -> Result<MapSummary, String> {
    let grid = MapGrid::parse(text).map_err(|e| e.to_string())?;
    if let Some(violation) = check_invariants(&grid).into_iter().next() {
        return Err(violation.to_string());
    }
    Ok(MapSummary::from_grid(&grid))
}

fn format_text(path: &Path, summary: &MapSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Map {} is valid\n", path.display()));
    output.push_str(&format!("  Size: {}x{}\n", summary.height, summary.width));
    output.push_str(&format!(
        "  Hero: [{},{}]\n",
        summary.hero[0], summary.hero[1]
    ));
    output.push_str(&format!("  Enemies: {}\n", summary.enemies));
    output.push_str(&format!(
        "  Whisky: {}  Swords: {}  Thorns: {}  Barriers: {}\n",
        summary.whisky, summary.swords, summary.thorns, summary.barriers
    ));

    output
}

/// Execute the check command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid map.
pub(crate) fn execute(map: &Path, format: CheckFormat) -> Result<()> {
    let text = fs::read_to_string(map)
        .with_context(|| format!("Failed to read {}", map.display()))?;

    let outcome = inspect(&text);

    match format {
        CheckFormat::Text => {
            let summary = match outcome {
                Ok(summary) => summary,
                Err(error) => bail!("{} is not a valid map: {error}", map.display()),
            };
            print!("{}", format_text(map, &summary));
        }
        CheckFormat::Json => {
            let valid = outcome.is_ok();
            let (summary, error) = match outcome {
                Ok(summary) => (Some(summary), None),
                Err(error) => (None, Some(error)),
            };
            let result = JsonCheckResult {
                path: map.display().to_string(),
                valid,
                summary,
                error,
            };
            let json = serde_json::to_string_pretty(&result)
                .context("Failed to serialize check result")?;
            println!("{json}");
            if !valid {
                bail!("{} is not a valid map", map.display());
            }
        }
    }

    Ok(())
}
