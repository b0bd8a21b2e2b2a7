use std::time::Duration;

use crate::error::GameError;
use crate::grid::PlayableArea;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Cycles Easy -> Normal -> Hard -> Easy, the way the menu toggles it.
    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelInfo {
    pub area: PlayableArea,
}

/// Static level and pacing data. The engine only stores difficulty and
/// level numbers; drivers look the timing up here.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelTable {
    pub levels: Vec<LevelInfo>,
    pub easy_interval: Duration,
    pub normal_interval: Duration,
    pub hard_interval: Duration,
    /// Interval multiplier applied once per level past the first.
    pub level_speedup: f64,
    pub min_interval: Duration,
    pub points_per_apple: u32,
    pub initial_length: usize,
}

impl Default for LevelTable {
    fn default() -> Self {
        let sizes = [(10, 10), (14, 12), (18, 14), (22, 16), (26, 18)];
        LevelTable {
            levels: sizes
                .iter()
                .map(|&(width, height)| LevelInfo {
                    area: PlayableArea::new(width, height),
                })
                .collect(),
            easy_interval: Duration::from_millis(200),
            normal_interval: Duration::from_millis(150),
            hard_interval: Duration::from_millis(100),
            level_speedup: 0.9,
            min_interval: Duration::from_millis(40),
            points_per_apple: 10,
            initial_length: 1,
        }
    }
}

impl LevelTable {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.levels.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "level table has no levels".to_string(),
            ));
        }
        if self.points_per_apple == 0 {
            return Err(GameError::InvalidConfiguration(
                "points per apple must be non-zero".to_string(),
            ));
        }
        if self.initial_length == 0 {
            return Err(GameError::InvalidConfiguration(
                "initial snake length must be non-zero".to_string(),
            ));
        }
        if !self.level_speedup.is_finite() || self.level_speedup <= 0.0 || self.level_speedup > 1.0
        {
            return Err(GameError::InvalidConfiguration(format!(
                "level speedup {} must lie in (0, 1]",
                self.level_speedup
            )));
        }
        let intervals = [
            self.easy_interval,
            self.normal_interval,
            self.hard_interval,
            self.min_interval,
        ];
        if intervals.iter().any(Duration::is_zero) {
            return Err(GameError::InvalidConfiguration(
                "tick intervals must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Area for a 1-based level number. Levels past the end reuse the last
    /// entry, level 0 is treated as level 1.
    pub fn area_for(&self, level: u32) -> Option<PlayableArea> {
        let index = (level.max(1) as usize - 1).min(self.levels.len().checked_sub(1)?);
        self.levels.get(index).map(|info| info.area)
    }

    pub fn tick_interval(&self, difficulty: Difficulty, level: u32) -> Duration {
        let base = match difficulty {
            Difficulty::Easy => self.easy_interval,
            Difficulty::Normal => self.normal_interval,
            Difficulty::Hard => self.hard_interval,
        };
        let steps = (level.max(1) - 1).min(i32::MAX as u32) as i32;
        let secs = base.as_secs_f64() * self.level_speedup.powi(steps);
        // Tables that skipped `validate` fall back to the floor.
        Duration::try_from_secs_f64(secs)
            .map(|scaled| scaled.max(self.min_interval))
            .unwrap_or(self.min_interval)
    }
}
