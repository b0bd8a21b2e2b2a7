use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::apple;
use crate::error::{GameError, GridFull};
use crate::grid::{Coordinate, Direction, PlayableArea};
use crate::level::{Difficulty, LevelTable};
use crate::snake::SnakeBody;

const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Unfinished,
    Won,
    Lost,
}

/// What the snake ran into when a session was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// One level of play. Owns all simulation state; `tick` is the only way to
/// change it.
#[derive(Debug)]
pub struct Session {
    levels: LevelTable,
    area: PlayableArea,
    body: SnakeBody,
    apple: Coordinate,
    direction: Direction,
    score: u32,
    difficulty: Difficulty,
    level: u32,
    status: GameStatus,
    collision: Option<Collision>,
    ticks: u64,
    seed: u64,
    rng: StdRng,
}

impl Session {
    /// Starts a session on `area` using the default level table for pacing
    /// and later levels. Without a seed the apple sequence is random.
    pub fn new(
        area: PlayableArea,
        difficulty: Difficulty,
        level: u32,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        Self::with_levels(LevelTable::default(), area, difficulty, level, seed)
    }

    /// Starts `level` with the area the table assigns to it.
    pub fn for_level(
        levels: LevelTable,
        difficulty: Difficulty,
        level: u32,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let area = levels.area_for(level).ok_or_else(|| {
            GameError::InvalidConfiguration(format!("no area configured for level {}", level))
        })?;
        Self::with_levels(levels, area, difficulty, level, seed)
    }

    pub fn with_levels(
        levels: LevelTable,
        area: PlayableArea,
        difficulty: Difficulty,
        level: u32,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        levels.validate()?;

        if area.width <= 0 || area.height <= 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "playable area {}x{} is empty",
                area.width, area.height
            )));
        }

        let direction = Direction::Right;
        let body = SnakeBody::new(area.center(), direction, levels.initial_length);
        if body.iter().any(|c| !area.contains(*c)) {
            return Err(GameError::InvalidConfiguration(format!(
                "playable area {}x{} cannot hold a snake of length {}",
                area.width, area.height, levels.initial_length
            )));
        }

        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        let apple = apple::place(area, &body, &mut rng).map_err(|GridFull| {
            GameError::InvalidConfiguration(format!(
                "playable area {}x{} leaves no room for an apple",
                area.width, area.height
            ))
        })?;

        info!(
            "Level {} started on {}x{} at {} difficulty (seed {})",
            level,
            area.width,
            area.height,
            difficulty.label(),
            seed
        );

        Ok(Session {
            levels,
            area,
            body,
            apple,
            direction,
            score: 0,
            difficulty,
            level,
            status: GameStatus::Unfinished,
            collision: None,
            ticks: 0,
            seed,
            rng,
        })
    }

    /// Builds the session for the level after `previous`. The score carries
    /// over; body, apple and area are fresh. `previous` is left untouched.
    pub fn new_level(
        previous: &Session,
        difficulty_override: Option<Difficulty>,
    ) -> Result<Session, GameError> {
        let difficulty = difficulty_override.unwrap_or(previous.difficulty);
        let seed = previous.seed.wrapping_add(SEED_STRIDE);
        let level = previous.level.checked_add(1).ok_or_else(|| {
            GameError::InvalidConfiguration(format!("no level after {}", previous.level))
        })?;
        let mut next = Self::for_level(previous.levels.clone(), difficulty, level, Some(seed))?;
        next.score = previous.score;
        Ok(next)
    }

    /// Advances the game by one step. `None` keeps the current direction.
    /// A finished session is left as is.
    pub fn tick(&mut self, requested: Option<Direction>) -> GameStatus {
        if self.is_finished() {
            return self.status;
        }
        self.ticks += 1;

        if let Some(requested) = requested {
            if requested == self.direction.opposite() && self.body.len() > 1 {
                debug!("Ignoring reversal from {:?} to {:?}", self.direction, requested);
            } else {
                self.direction = requested;
            }
        }

        let new_head = self.body.head().step(self.direction);
        if !self.area.contains(new_head) {
            return self.finish(GameStatus::Lost, Some(Collision::Wall));
        }

        // The tail only stays put when the snake is about to grow.
        let grow = new_head == self.apple;
        let hits_body = if grow {
            self.body.contains(new_head)
        } else {
            self.body.contains_excluding_tail(new_head)
        };
        if hits_body {
            return self.finish(GameStatus::Lost, Some(Collision::SelfCollision));
        }

        self.body.advance(new_head, grow);

        if grow {
            self.score += self.levels.points_per_apple;
            match apple::place(self.area, &self.body, &mut self.rng) {
                Ok(pos) => self.apple = pos,
                Err(GridFull) => return self.finish(GameStatus::Won, None),
            }
        }

        self.status
    }

    fn finish(&mut self, status: GameStatus, collision: Option<Collision>) -> GameStatus {
        self.status = status;
        self.collision = collision;
        match status {
            GameStatus::Won => info!(
                "Level {} won after {} ticks with score {}",
                self.level, self.ticks, self.score
            ),
            _ => info!(
                "Level {} lost ({:?}) after {} ticks with score {}",
                self.level, collision, self.ticks, self.score
            ),
        }
        status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn apple_position(&self) -> Coordinate {
        self.apple
    }

    pub fn snake_head(&self) -> Coordinate {
        self.body.head()
    }

    /// Snake cells from head to tail.
    pub fn snake_segments(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.body.iter()
    }

    pub fn snake_len(&self) -> usize {
        self.body.len()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::Unfinished
    }

    pub fn playable_area(&self) -> PlayableArea {
        self.area
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// How long the driver should wait between ticks of this session.
    pub fn tick_interval(&self) -> Duration {
        self.levels.tick_interval(self.difficulty, self.level)
    }
}
