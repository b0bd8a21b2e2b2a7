use thiserror::Error;

/// Failures that stop a session from being built. Gameplay outcomes
/// (hitting a wall, filling the grid) are reported as `GameStatus` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// No free cell is left to put an apple on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("grid is full, no free cell for an apple")]
pub struct GridFull;
