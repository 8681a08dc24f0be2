//! Play command implementation - terminal front end.

use super::logging;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use herocrawl::screen::{
    HeroCreationView, MapView, MenuView, MessageView, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use herocrawl::{
    FsTextSource, GameConfig, GameController, Key, ReseedPolicy, ScreenData, TextSource,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::fs::File;
use std::io::{Stdout, Write, stdout};
use std::path::{Path, PathBuf};
use tracing::info;

const MAP_HELP: &str = "Use arrows or WASD to move on. Press 'q' to show your task. \
'1' key to drink whisky (+health). '2' to equip sword (+damage). \
'L' to show map legend. Press ESC come back to main menu.";

const CREATION_HELP: &str = "Use Up/Down to choose a skill, '+'/'-' to change it. \
Press ENTER to start, ESC to come back to main menu.";

/// Options of the play command.
#[derive(Debug)]
pub(crate) struct PlayOptions {
    pub(crate) map: PathBuf,
    pub(crate) quest: PathBuf,
    pub(crate) about: PathBuf,
    pub(crate) seed: Option<u64>,
    pub(crate) reseed_per_combat: bool,
    pub(crate) log_dir: Option<PathBuf>,
}

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the map or quest file cannot be opened, logging
/// cannot be set up, or the terminal fails.
pub(crate) fn execute(options: PlayOptions) -> Result<()> {
    ensure_readable(&options.map, "map")?;
    ensure_readable(&options.quest, "quest")?;

    let (_guard, log_file) = logging::init(options.log_dir.as_deref())?;

    let seed = options.seed.unwrap_or_else(rand::random);
    let reseed = if options.reseed_per_combat {
        ReseedPolicy::PerCombat
    } else {
        ReseedPolicy::Continuous
    };
    info!(seed, ?reseed, log = %log_file.display(), "herocrawl starting");

    let config = GameConfig {
        map_path: options.map,
        quest_path: options.quest,
        about_path: options.about,
        seed,
        reseed,
    };
    let mut game = GameController::new(config, FsTextSource);

    run_tui(&mut game)
}

fn ensure_readable(path: &Path, what: &str) -> Result<()> {
    File::open(path).with_context(|| format!("Can't open {what} file {}", path.display()))?;
    Ok(())
}

/// Leaves the alternate screen and raw mode when dropped.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal(&mut stdout());
    }
}

fn restore_terminal(out: &mut impl Write) -> Result<()> {
    let left = execute!(out, LeaveAlternateScreen, Show);
    disable_raw_mode().context("Failed to disable raw mode")?;
    left.context("Failed to leave alternate screen")?;
    Ok(())
}

fn run_tui<S: TextSource>(game: &mut GameController<S>) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    event_loop(&mut terminal, game)
}

fn event_loop<S: TextSource>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut GameController<S>,
) -> Result<()> {
    terminal.draw(|frame| draw(frame, game.start()))?;

    while !game.is_finished() {
        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(key) = map_key(key.code) {
                    let data = game.handle_input(key);
                    terminal.draw(|frame| draw(frame, data))?;
                }
            }
            Event::Resize(..) => {
                terminal.draw(|frame| draw(frame, game.state().render()))?;
            }
            _ => {}
        }
    }

    // Goodbye stays up until the next key
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}

/// Map a crossterm key onto a game key.
fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

fn draw(f: &mut Frame, data: ScreenData<'_>) {
    let area = f.area();
    match data {
        ScreenData::Menu(menu) => render_menu(f, area, menu),
        ScreenData::Message(message) => render_message(f, area, message),
        ScreenData::HeroCreation(creation) => render_creation(f, area, creation),
        ScreenData::Map(map) => render_map_screen(f, area, map),
    }
}

fn highlight() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

fn render_menu(f: &mut Frame, area: Rect, menu: MenuView<'_>) {
    let mut lines = vec![Line::from("")];
    for (i, item) in menu.items.iter().enumerate() {
        if i == menu.selected {
            lines.push(Line::from(Span::styled(format!(" > {item}"), highlight())));
        } else {
            lines.push(Line::from(format!("   {item}")));
        }
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Herocrawl "));

    f.render_widget(widget, area);
}

fn render_message(f: &mut Frame, area: Rect, message: MessageView<'_>) {
    let widget = Paragraph::new(message.text)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}

fn render_creation(f: &mut Frame, area: Rect, creation: HeroCreationView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(area);

    let mut lines = vec![
        Line::from(format!(" Points: {}", creation.remaining_points)),
        Line::from(""),
    ];
    for (i, skill) in creation.skills.iter().enumerate() {
        let text = format!(" {}: {}", skill.name, skill.value);
        if i == creation.selected {
            lines.push(Line::from(Span::styled(text, highlight())));
        } else {
            lines.push(Line::from(text));
        }
    }

    let skills = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" New Hero "));
    f.render_widget(skills, chunks[0]);
    render_help(f, chunks[1], CREATION_HELP);
}

fn render_map_screen(f: &mut Frame, area: Rect, map: MapView<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(cells(VIEWPORT_HEIGHT + 2)), Constraint::Min(4)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(cells(VIEWPORT_WIDTH + 2)), Constraint::Min(24)])
        .split(rows[0]);

    render_map(f, columns[0], map);
    render_stats(f, columns[1], map);
    render_help(f, rows[1], MAP_HELP);
}

fn render_map(f: &mut Frame, area: Rect, map: MapView<'_>) {
    let grid = map.grid;
    let (top, left) = map.viewport_origin(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let bottom = (top + VIEWPORT_HEIGHT).min(grid.height());
    let right = (left + VIEWPORT_WIDTH).min(grid.width());

    let mut lines: Vec<Line> = Vec::with_capacity(bottom - top);
    for row in top..bottom {
        let spans: Vec<Span> = (left..right)
            .map(|col| {
                let glyph = map.symbol_at(row * grid.width() + col).unwrap_or(' ');
                Span::styled(glyph.to_string(), glyph_style(glyph))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Map "));

    f.render_widget(widget, area);
}

fn glyph_style(glyph: char) -> Style {
    match glyph {
        '^' | 'v' | '<' | '>' => highlight(),
        'e' => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        'w' => Style::default().fg(Color::Cyan),
        's' => Style::default().fg(Color::LightBlue),
        '!' => Style::default().fg(Color::Magenta),
        '#' => Style::default().fg(Color::Gray),
        _ => Style::default().fg(Color::DarkGray),
    }
}

fn render_stats(f: &mut Frame, area: Rect, map: MapView<'_>) {
    let hero = map.hero;
    let stats = hero.stats;

    let lines = vec![
        Line::from(Span::styled(format!(" {}", hero.name), highlight())),
        Line::from(""),
        Line::from(format!(" Health: {}", stats.health.max(0))),
        Line::from(format!(" Damage: {}", stats.damage)),
        Line::from(format!(" Defence: {}", stats.defence)),
        Line::from(""),
        Line::from(" Inventory:"),
        Line::from(format!("   Whisky: {}", hero.whisky)),
        Line::from(format!("   Swords: {}", hero.swords)),
        Line::from(""),
        Line::from(format!(" Enemies to kill: {}", map.remaining_enemies())),
    ];

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Hero "));

    f.render_widget(widget, area);
}

fn render_help(f: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(widget, area);
}

fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
