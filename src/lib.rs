//! Simulation engine for a levelled terminal snake game.
//!
//! The engine owns the grid, the snake, apple placement, scoring and the
//! per-tick status. It never draws, sleeps or reads input: a driver calls
//! [`Session::tick`] at the cadence from [`LevelTable::tick_interval`] and
//! renders from the read-only accessors.

pub mod apple;
pub mod error;
pub mod grid;
pub mod level;
pub mod session;
pub mod snake;

pub use error::{GameError, GridFull};
pub use grid::{Coordinate, Direction, PlayableArea};
pub use level::{Difficulty, LevelInfo, LevelTable};
pub use session::{Collision, GameStatus, Session};
pub use snake::SnakeBody;
