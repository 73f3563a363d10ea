//! Terminal front end: keyboard wiring, board drawing and the
//! start/game-over overlays. Reads the session's state snapshot and
//! feeds it direction requests; all game logic stays in the core.

use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use rand::rngs::StdRng;

use crate::config::{APPLE_TIMEOUT_MS, BOMB_PERIOD_MS, FRAME_MS, WALL_MAX, WALL_MIN};
use crate::scoreboard::{ScoreEntry, ScoreStore};
use crate::session::Session;
use crate::types::{decode_direction_key, Block, CornerRadius, Position};

/// Playable cells per axis, including the one-cell slack band.
const CELLS: usize = (WALL_MAX - WALL_MIN + 1) as usize;

/// Terminal row the top board border sits on; row 0 is the status line.
const BOARD_TOP: u16 = 1;

const STATUS_BAR_WIDTH: usize = 10;
const MAX_USERNAME_LEN: usize = 16;
const SCOREBOARD_ROWS: usize = 5;
const INPUT_POLL_MS: u64 = 5;

pub struct App {
    session: Session<StdRng>,
    store: ScoreStore,
    username: String,
    score_submitted: bool,
    cached_scores: Option<Vec<ScoreEntry>>,
}

impl App {
    pub fn new(store: ScoreStore, username: String) -> Self {
        Self {
            session: Session::new(),
            store,
            username,
            score_submitted: false,
            cached_scores: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;

        let result = self.event_loop();

        // Session teardown before the terminal goes back to normal.
        self.session.stop();
        execute!(stdout(), Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        self.draw()?;
        let mut last_advance = Instant::now();
        let mut last_draw = Instant::now();

        loop {
            if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Release && self.handle_key(key.code) {
                        return Ok(());
                    }
                }
            }

            let dt_ms = last_advance.elapsed().as_secs_f64() * 1000.0;
            last_advance = Instant::now();
            self.session.advance(dt_ms);

            if last_draw.elapsed().as_secs_f64() * 1000.0 >= FRAME_MS {
                self.draw()?;
                last_draw = Instant::now();
            }
        }
    }

    /// Dispatch one key press. Returns true when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        let is_game_over = self.session.state().is_game_over;
        let is_playing = self.session.state().is_playing;

        if is_game_over {
            self.handle_game_over_key(code);
            return false;
        }

        if !is_playing {
            return match code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.session.start();
                    false
                }
                KeyCode::Char('q') | KeyCode::Esc => true,
                _ => false,
            };
        }

        if let Some(direction) = decode_direction_key(code) {
            self.session.request_direction(direction);
            return false;
        }
        matches!(code, KeyCode::Char('q') | KeyCode::Esc)
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                if self.score_submitted {
                    self.new_game();
                } else {
                    self.submit_score();
                }
            }
            KeyCode::Esc => self.new_game(),
            KeyCode::Backspace => {
                if !self.score_submitted {
                    self.username.pop();
                }
            }
            KeyCode::Char(c) => {
                if !self.score_submitted
                    && !c.is_control()
                    && self.username.chars().count() < MAX_USERNAME_LEN
                {
                    self.username.push(c);
                }
            }
            _ => {}
        }
    }

    /// Hand the final score to the persistence collaborator, once.
    fn submit_score(&mut self) {
        let username = self.username.trim();
        if username.is_empty() {
            return;
        }
        let entry = ScoreEntry {
            username: username.to_string(),
            score: self.session.state().display_score(),
        };
        match self.store.submit(entry) {
            Ok(()) => {
                info!("score submitted for {username}");
                self.score_submitted = true;
                self.cached_scores = None;
            }
            Err(err) => warn!("could not save score: {err:#}"),
        }
    }

    fn new_game(&mut self) {
        self.session.reset();
        self.score_submitted = false;
        self.cached_scores = None;
    }

    fn draw(&mut self) -> Result<()> {
        let overlay = self.overlay_lines();

        let mut out = stdout();
        execute!(out, Clear(ClearType::All))?;
        self.draw_status(&mut out)?;
        self.draw_board(&mut out)?;
        if let Some(lines) = overlay {
            draw_overlay(&mut out, &lines)?;
        }
        out.flush()?;
        Ok(())
    }

    fn draw_status(&self, out: &mut Stdout) -> Result<()> {
        let state = self.session.state();
        let mut line = format!("Score: {}", state.display_score());

        let apple_left =
            APPLE_TIMEOUT_MS.saturating_sub(state.apple_counter_ms) as f64 / APPLE_TIMEOUT_MS as f64;
        line.push_str(&format!("  {} {}", state.fruit.symbol, bar(apple_left)));

        if state.bomb_active {
            let bomb_left =
                BOMB_PERIOD_MS.saturating_sub(state.bomb_counter_ms) as f64 / BOMB_PERIOD_MS as f64;
            line.push_str(&format!("  {} {}", state.bomb.symbol, bar(bomb_left)));
        }

        execute!(out, MoveTo(0, 0), Print(line))?;
        Ok(())
    }

    fn draw_board(&self, out: &mut Stdout) -> Result<()> {
        let state = self.session.state();
        let mut grid = [[' '; CELLS]; CELLS];

        if let Some((col, row)) = cell_index(state.fruit.pos) {
            grid[row][col] = state.fruit.symbol;
        }
        if state.bomb_active {
            if let Some((col, row)) = cell_index(state.bomb.pos) {
                grid[row][col] = state.bomb.symbol;
            }
        }
        for (i, block) in state.snake.blocks().enumerate() {
            if let Some((col, row)) = cell_index(block.pos) {
                grid[row][col] = block_glyph(i, block);
            }
        }

        let border: String = "#".repeat(CELLS + 2);
        execute!(out, MoveTo(0, BOARD_TOP), Print(&border))?;
        for (row, cells) in grid.iter().enumerate() {
            let line: String = cells.iter().collect();
            execute!(
                out,
                MoveTo(0, BOARD_TOP + 1 + row as u16),
                Print(format!("#{line}#"))
            )?;
        }
        execute!(out, MoveTo(0, BOARD_TOP + 1 + CELLS as u16), Print(&border))?;
        execute!(
            out,
            MoveTo(0, BOARD_TOP + 2 + CELLS as u16),
            Print("wasd / arrows steer, q quits")
        )?;
        Ok(())
    }

    fn overlay_lines(&mut self) -> Option<Vec<String>> {
        let is_game_over = self.session.state().is_game_over;
        let is_playing = self.session.state().is_playing;
        let score = self.session.state().display_score();

        if is_game_over {
            let mut lines = vec!["GAME OVER".to_string(), format!("Score: {score}")];
            lines.push(String::new());
            if self.score_submitted {
                lines.push("score saved!".to_string());
                lines.push("enter starts a new game".to_string());
            } else {
                lines.push(format!("name: {}_", self.username));
                lines.push("enter submits, esc skips".to_string());
            }
            lines.push(String::new());
            lines.push("HIGH SCORES".to_string());
            for entry in self.top_scores() {
                lines.push(format!("{:<10} {:>6}", entry.username, entry.score));
            }
            Some(lines)
        } else if !is_playing {
            Some(vec![
                "SNAKE GAME".to_string(),
                String::new(),
                "press enter to start".to_string(),
            ])
        } else {
            None
        }
    }

    fn top_scores(&mut self) -> Vec<ScoreEntry> {
        if self.cached_scores.is_none() {
            let entries = match self.store.load() {
                Ok(mut entries) => {
                    entries.sort_by(|a, b| b.score.cmp(&a.score));
                    entries
                }
                Err(err) => {
                    warn!("could not read scoreboard: {err:#}");
                    Vec::new()
                }
            };
            self.cached_scores = Some(entries);
        }
        match &self.cached_scores {
            Some(entries) => entries.iter().take(SCOREBOARD_ROWS).cloned().collect(),
            None => Vec::new(),
        }
    }
}

/// Terminal column/row of a cell, or nothing for off-board positions
/// like the parked bomb.
fn cell_index(pos: Position) -> Option<(usize, usize)> {
    if pos.x < WALL_MIN || pos.x > WALL_MAX || pos.y < WALL_MIN || pos.y > WALL_MAX {
        return None;
    }
    Some(((pos.x - WALL_MIN) as usize, (pos.y - WALL_MIN) as usize))
}

fn block_glyph(index: usize, block: &Block) -> char {
    if index == 0 {
        'O'
    } else if block.is_corner {
        corner_glyph(block.radius)
    } else {
        'o'
    }
}

/// Turn blocks lean the way their rounded corner points.
fn corner_glyph(radius: CornerRadius) -> char {
    match radius {
        CornerRadius::PerCorner { tl, br, .. } if tl > 0.0 || br > 0.0 => '/',
        CornerRadius::PerCorner { tr, bl, .. } if tr > 0.0 || bl > 0.0 => '\\',
        _ => 'o',
    }
}

fn bar(remaining: f64) -> String {
    let filled = (remaining.clamp(0.0, 1.0) * STATUS_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(STATUS_BAR_WIDTH - filled)
    )
}

fn draw_overlay(out: &mut Stdout, lines: &[String]) -> Result<()> {
    let width = (CELLS + 2) as u16;
    let mut row = BOARD_TOP + 5;
    for line in lines {
        let col = width.saturating_sub(line.chars().count() as u16) / 2;
        execute!(out, MoveTo(col, row), Print(line))?;
        row += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn off_board_positions_have_no_cell() {
        assert_eq!(cell_index(Position::new(-100, -100)), None);
        assert_eq!(cell_index(Position::new(21, 5)), None);
        assert_eq!(cell_index(Position::new(-1, -1)), Some((0, 0)));
        assert_eq!(cell_index(Position::new(20, 20)), Some((21, 21)));
    }

    #[test]
    fn corner_glyphs_follow_the_curvature() {
        let tl = CornerRadius::from_turn(Direction::Up, Direction::Right);
        assert_eq!(corner_glyph(tl), '/');
        let tr = CornerRadius::from_turn(Direction::Right, Direction::Down);
        assert_eq!(corner_glyph(tr), '\\');
        assert_eq!(corner_glyph(CornerRadius::NONE), 'o');
    }

    #[test]
    fn bars_scale_with_time_remaining() {
        assert_eq!(bar(1.0), "[##########]");
        assert_eq!(bar(0.5), "[#####-----]");
        assert_eq!(bar(0.0), "[----------]");
        // Clamped rather than panicking on counter overshoot.
        assert_eq!(bar(-0.3), "[----------]");
    }
}
