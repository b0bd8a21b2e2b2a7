use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use log::{error, info};
use snekrs_levels::{Difficulty, Direction, GameStatus, LevelTable, Session};

pub const HIGH_SCORE_FILE: &str = ".snekrs_levels_high_score.txt";

pub enum Screen {
    Menu,
    /// Choosing the starting level, 1-based.
    LevelSelect(u32),
    Playing(Session),
    Paused(Session),
    Won(Session),
    Lost(Session),
    Exit,
}

pub struct App {
    pub screen: Screen,
    pub difficulty: Difficulty,
    pub high_score: u32,
    levels: LevelTable,
    high_score_path: PathBuf,
    // First direction key pressed since the last tick.
    pending: Option<Direction>,
}

pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
        _ => None,
    }
}

impl App {
    pub fn new(levels: LevelTable, high_score_path: impl Into<PathBuf>) -> Self {
        let high_score_path = high_score_path.into();
        App {
            screen: Screen::Menu,
            difficulty: Difficulty::default(),
            high_score: Self::load_high_score(&high_score_path),
            levels,
            high_score_path,
            pending: None,
        }
    }

    fn load_high_score(path: &Path) -> u32 {
        match fs::read_to_string(path).map(|s| s.trim().parse().unwrap_or(0)) {
            Ok(score) => score,
            Err(e) => {
                error!("Error loading high score: {}", e);
                0
            }
        }
    }

    fn save_high_score(&self) {
        if let Err(e) = fs::write(&self.high_score_path, self.high_score.to_string()) {
            error!("Error saving high score: {}", e);
        }
    }

    fn update_high_score(&mut self, score: u32) {
        if score > self.high_score {
            self.high_score = score;
            self.save_high_score();
        }
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    pub fn should_exit(&self) -> bool {
        matches!(self.screen, Screen::Exit)
    }

    /// Time to wait between ticks on the current screen.
    pub fn tick_interval(&self) -> Duration {
        match &self.screen {
            Screen::Playing(session) | Screen::Paused(session) => session.tick_interval(),
            _ => self.levels.tick_interval(self.difficulty, 1),
        }
    }

    fn last_level(&self) -> u32 {
        u32::try_from(self.levels.level_count())
            .unwrap_or(u32::MAX)
            .max(1)
    }

    fn start(&mut self, level: u32) -> Screen {
        self.pending = None;
        match Session::for_level(self.levels.clone(), self.difficulty, level, None) {
            Ok(session) => Screen::Playing(session),
            Err(e) => {
                error!("Cannot start game at level {}: {}", level, e);
                Screen::Menu
            }
        }
    }

    fn select_level(&mut self, selected: u32, code: KeyCode) -> Screen {
        let last = self.last_level();
        match code {
            KeyCode::Esc | KeyCode::Char('q') => Screen::Menu,
            KeyCode::Up | KeyCode::Char('w') => {
                Screen::LevelSelect(selected.saturating_sub(1).max(1))
            }
            KeyCode::Down | KeyCode::Char('s') => {
                Screen::LevelSelect(selected.saturating_add(1).min(last))
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.start(selected),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(level) if (1..=last).contains(&level) => self.start(level),
                _ => Screen::LevelSelect(selected),
            },
            _ => Screen::LevelSelect(selected),
        }
    }

    fn give_up(&mut self, session: Session) -> Screen {
        self.pending = None;
        self.update_high_score(session.score());
        Screen::Lost(session)
    }

    fn advance_level(&mut self, finished: Session) -> Screen {
        self.pending = None;
        match Session::new_level(&finished, None) {
            Ok(session) => Screen::Playing(session),
            Err(e) => {
                error!("Cannot start the level after {}: {}", finished.level(), e);
                Screen::Menu
            }
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        let screen = std::mem::replace(&mut self.screen, Screen::Exit);

        self.screen = match screen {
            Screen::Menu => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Screen::Exit,
                KeyCode::Char('d') => {
                    self.difficulty = self.difficulty.next();
                    Screen::Menu
                }
                KeyCode::Char(' ') | KeyCode::Enter => Screen::LevelSelect(1),
                _ => Screen::Menu,
            },
            Screen::LevelSelect(selected) => self.select_level(selected, key.code),
            Screen::Playing(session) => match key.code {
                KeyCode::Esc => Screen::Exit,
                KeyCode::Char('q') => self.give_up(session),
                KeyCode::Char(' ') => Screen::Paused(session),
                code => {
                    if self.pending.is_none() {
                        self.pending = direction_for(code);
                    }
                    Screen::Playing(session)
                }
            },
            Screen::Paused(session) => match key.code {
                KeyCode::Esc => Screen::Exit,
                KeyCode::Char('q') => self.give_up(session),
                KeyCode::Char(' ') => Screen::Playing(session),
                _ => Screen::Paused(session),
            },
            Screen::Won(session) => match key.code {
                KeyCode::Esc => Screen::Exit,
                KeyCode::Enter | KeyCode::Char(' ') => self.advance_level(session),
                _ => Screen::Won(session),
            },
            Screen::Lost(session) => match key.code {
                KeyCode::Esc => Screen::Exit,
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => Screen::Menu,
                _ => Screen::Lost(session),
            },
            Screen::Exit => Screen::Exit,
        };
    }

    pub fn update(&mut self) {
        let status = match &mut self.screen {
            Screen::Playing(session) => session.tick(self.pending.take()),
            _ => return,
        };

        if status == GameStatus::Unfinished {
            return;
        }

        if let Screen::Playing(session) = std::mem::replace(&mut self.screen, Screen::Exit) {
            info!(
                "Level {} ended: {:?}, score {}",
                session.level(),
                status,
                session.score()
            );
            self.update_high_score(session.score());
            self.screen = match status {
                GameStatus::Won => Screen::Won(session),
                _ => Screen::Lost(session),
            };
        }
    }
}
