use log::debug;
use rand::Rng;

use crate::error::GridFull;
use crate::grid::{Coordinate, PlayableArea};
use crate::snake::SnakeBody;

/// Picks a uniformly random cell of `area` that `exclude` does not occupy.
///
/// Counts the free cells first, so it terminates no matter how crowded the
/// area is, and fails with `GridFull` when nothing is left.
pub fn place(
    area: PlayableArea,
    exclude: &SnakeBody,
    rng: &mut impl Rng,
) -> Result<Coordinate, GridFull> {
    let occupied = exclude.iter().filter(|c| area.contains(**c)).count();
    let free = area.cell_count().saturating_sub(occupied);
    if free == 0 {
        return Err(GridFull);
    }

    let pick = rng.gen_range(0..free);
    let pos = area
        .cells()
        .filter(|c| !exclude.contains(*c))
        .nth(pick)
        .ok_or(GridFull)?;

    debug!("Apple placed at ({}, {}), {} free cells", pos.x, pos.y, free);
    Ok(pos)
}
