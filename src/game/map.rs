//! Map grid: text parsing, queries and hero movement.
//!
//! Map text format:
//!
//! ```text
//! [H,W]
//! "barrier" [h,w]
//! "enemy" [h,w] (health,damage,defence)
//! "hero" [h,w]
//! ```
//!
//! Lines without a quoted token are skipped. Cells are stored row-major,
//! `index = w + h * W`.

use crate::error::MapFormatError;
use crate::game::{Direction, MapCell, Stats};

/// Largest grid (in cells) the parser accepts.
pub const MAX_CELLS: usize = 1_000_000;

/// The game map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapGrid {
    /// Number of rows.
    height: usize,
    /// Number of columns.
    width: usize,
    /// Cells stored in row-major order, always `height * width` long.
    cells: Vec<MapCell>,
    /// Index of the single `Hero` cell.
    hero_index: usize,
    /// Enemies still alive on the map.
    remaining_enemies: u32,
}

impl MapGrid {
    /// Parse a map description.
    ///
    /// # Errors
    ///
    /// Returns a [`MapFormatError`] when the header or any object line is
    /// malformed, a position is outside the grid or already occupied, an
    /// enemy has a non-positive stat, the object type is unknown, or the
    /// map has zero or several heroes.
    pub fn parse(text: &str) -> Result<Self, MapFormatError> {
        let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));
        let (_, header) = lines.next().ok_or(MapFormatError::MissingSizeHeader)?;
        let (height, width) = parse_size(header)?;

        let mut cells = vec![MapCell::Empty; height * width];
        let mut hero_index = None;
        let mut remaining_enemies = 0u32;

        for (line_no, line) in lines {
            let Some(entry) = parse_entry(line_no, line)? else {
                continue;
            };

            let index = entry
                .index(width, cells.len())
                .ok_or(MapFormatError::OutOfBounds {
                    line: line_no,
                    row: entry.row,
                    col: entry.col,
                })?;

            if !cells[index].is_empty() {
                return Err(MapFormatError::Occupied {
                    line: line_no,
                    row: entry.row,
                    col: entry.col,
                });
            }

            cells[index] = match entry.name {
                "barrier" => MapCell::Barrier,
                "thorn" => MapCell::Thorn,
                "whisky" => MapCell::Whisky,
                "sword" => MapCell::Sword,
                "enemy" => {
                    let stats = parse_enemy_stats(line_no, entry.rest)?;
                    remaining_enemies += 1;
                    MapCell::Enemy(stats)
                }
                "hero" => {
                    if hero_index.is_some() {
                        return Err(MapFormatError::MultipleHeroes { line: line_no });
                    }
                    hero_index = Some(index);
                    MapCell::Hero
                }
                other => {
                    return Err(MapFormatError::UnknownObject {
                        line: line_no,
                        name: other.to_string(),
                    });
                }
            };
        }

        let hero_index = hero_index.ok_or(MapFormatError::MissingHero)?;

        Ok(Self {
            height,
            width,
            cells,
            hero_index,
            remaining_enemies,
        })
    }

    /// Get the number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`height * width`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the raw cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[MapCell] {
        &self.cells
    }

    /// Get the cell at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MapCell> {
        self.cells.get(index)
    }

    /// Index of the hero cell.
    #[must_use]
    pub const fn hero_index(&self) -> usize {
        self.hero_index
    }

    /// Number of enemies still on the map.
    #[must_use]
    pub const fn remaining_enemies(&self) -> u32 {
        self.remaining_enemies
    }

    /// Record that one enemy was defeated.
    pub fn decrement_enemy_count(&mut self) {
        self.remaining_enemies = self.remaining_enemies.saturating_sub(1);
    }

    /// Convert an index into `(row, column)`.
    #[must_use]
    pub const fn position(&self, index: usize) -> (usize, usize) {
        if self.width == 0 {
            return (0, 0);
        }
        (index / self.width, index % self.width)
    }

    /// Neighbour of the hero in `direction`, clamped to the grid edge.
    #[must_use]
    pub fn hero_candidate(&self, direction: Direction) -> usize {
        candidate_index(self.hero_index, direction, self.width, self.height)
    }

    /// Move the hero to `to`, leaving its old cell empty.
    ///
    /// Bounds are not checked beyond slice indexing; callers obtain `to`
    /// from [`candidate_index`].
    pub fn move_hero(&mut self, to: usize) {
        self.cells[self.hero_index] = MapCell::Empty;
        self.cells[to] = MapCell::Hero;
        self.hero_index = to;
    }

    /// Replace the content of a non-hero cell with `Empty`.
    ///
    /// Returns `false` if the index is out of bounds or holds the hero.
    pub fn clear_cell(&mut self, index: usize) -> bool {
        if index == self.hero_index {
            return false;
        }
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = MapCell::Empty;
                true
            }
            None => false,
        }
    }

    /// Iterate over every non-empty cell with its index.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &MapCell)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
    }

    /// Write the grid back in map text format.
    ///
    /// Objects are listed in row-major order, so parsing the output yields
    /// an equal grid.
    #[must_use]
    pub fn to_map_text(&self) -> String {
        let mut output = format!("[{},{}]\n", self.height, self.width);

        for (index, cell) in self.occupied() {
            let Some(name) = cell.type_name() else {
                continue;
            };
            let (row, col) = self.position(index);
            output.push_str(&format!("\"{name}\" [{row},{col}]"));
            if let MapCell::Enemy(stats) = cell {
                output.push_str(&format!(
                    " ({},{},{})",
                    stats.health, stats.damage, stats.defence
                ));
            }
            output.push('\n');
        }

        output
    }
}

/// Neighbour index of `current` in `direction` on a `width` x `height` grid.
///
/// Stepping off the grid is a no-op and returns `current`.
#[must_use]
pub const fn candidate_index(
    current: usize,
    direction: Direction,
    width: usize,
    height: usize,
) -> usize {
    if width == 0 {
        return current;
    }

    match direction {
        Direction::Up => {
            if current >= width {
                current - width
            } else {
                current
            }
        }
        Direction::Down => {
            if current + width < width * height {
                current + width
            } else {
                current
            }
        }
        Direction::Left => {
            if current % width != 0 {
                current - 1
            } else {
                current
            }
        }
        Direction::Right => {
            if (current + 1) % width != 0 {
                current + 1
            } else {
                current
            }
        }
    }
}

/// One object line of the map text.
struct Entry<'a> {
    /// Quoted type name.
    name: &'a str,
    row: i64,
    col: i64,
    /// Text after the position, where enemy stats live.
    rest: &'a str,
}

impl Entry<'_> {
    /// Cell index of this entry, `None` if it falls outside the grid.
    fn index(&self, width: usize, len: usize) -> Option<usize> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        let index = row.checked_mul(width)?.checked_add(col)?;
        (index < len).then_some(index)
    }
}

/// Parse the `[H,W]` header into `(height, width)`.
fn parse_size(header: &str) -> Result<(usize, usize), MapFormatError> {
    let (Some(open), Some(comma), Some(close)) =
        (header.find('['), header.find(','), header.rfind(']'))
    else {
        return Err(MapFormatError::MissingSizeHeader);
    };
    if !(open < comma && comma < close) {
        return Err(MapFormatError::MissingSizeHeader);
    }

    let height = parse_number(1, &header[open + 1..comma])?;
    let width = parse_number(1, &header[comma + 1..close])?;

    if height < 0 || width < 0 {
        return Err(MapFormatError::NegativeSize { height, width });
    }

    let too_large = MapFormatError::TooLarge {
        height,
        width,
        max: MAX_CELLS,
    };
    let (Ok(rows), Ok(cols)) = (usize::try_from(height), usize::try_from(width)) else {
        return Err(too_large);
    };
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_CELLS => Ok((rows, cols)),
        _ => Err(too_large),
    }
}

/// Parse an object line, `None` when the line has no quoted token.
fn parse_entry(line_no: usize, line: &str) -> Result<Option<Entry<'_>>, MapFormatError> {
    let Some(open_quote) = line.find('"') else {
        return Ok(None);
    };
    let after_quote = &line[open_quote + 1..];
    let close_quote = after_quote
        .find('"')
        .ok_or(MapFormatError::MissingTypeQuote { line: line_no })?;
    let name = &after_quote[..close_quote];

    let missing_position = MapFormatError::MissingPosition { line: line_no };
    let (position, rest) =
        split_delimited(&after_quote[close_quote + 1..], '[', ']').ok_or(missing_position.clone())?;
    let (row_text, col_text) = position.split_once(',').ok_or(missing_position)?;

    Ok(Some(Entry {
        name,
        row: parse_number(line_no, row_text)?,
        col: parse_number(line_no, col_text)?,
        rest,
    }))
}

/// Parse the `(health,damage,defence)` triple of an enemy line.
fn parse_enemy_stats(line_no: usize, rest: &str) -> Result<Stats, MapFormatError> {
    let missing = MapFormatError::MissingEnemyStats { line: line_no };
    let (inner, _) = split_delimited(rest, '(', ')').ok_or(missing.clone())?;

    let mut parts = inner.splitn(3, ',');
    let (Some(health), Some(damage), Some(defence)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(missing);
    };

    let [health, damage, defence] = [health, damage, defence].map(|text| {
        parse_number(line_no, text).and_then(|value| {
            i32::try_from(value).map_err(|_| MapFormatError::InvalidNumber {
                line: line_no,
                text: text.trim().to_string(),
            })
        })
    });
    let stats = Stats::new(health?, damage?, defence?);

    if !stats.is_positive() {
        return Err(MapFormatError::NonPositiveEnemyStats { line: line_no });
    }
    Ok(stats)
}

/// Split `text` into the part between `open` and the next `close`, and the
/// remainder after `close`.
fn split_delimited(text: &str, open: char, close: char) -> Option<(&str, &str)> {
    let start = text.find(open)? + open.len_utf8();
    let len = text[start..].find(close)?;
    let end = start + len;
    Some((&text[start..end], &text[end + close.len_utf8()..]))
}

/// Parse a decimal integer, ignoring surrounding whitespace.
fn parse_number(line_no: usize, text: &str) -> Result<i64, MapFormatError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| MapFormatError::InvalidNumber {
            line: line_no,
            text: trimmed.to_string(),
        })
}
