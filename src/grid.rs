#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step for this direction. `y` grows downwards, like terminal rows.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A cell on the grid. May lie outside the playable area while a move is
/// being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    pub fn step(&self, direction: Direction) -> Coordinate {
        let (dx, dy) = direction.delta();
        Coordinate {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate { x, y }
    }
}

/// The rectangle `0..width` x `0..height` the snake and apple may occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayableArea {
    pub width: i32,
    pub height: i32,
}

impl PlayableArea {
    pub fn new(width: i32, height: i32) -> Self {
        PlayableArea { width, height }
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        self.width as usize * self.height as usize
    }

    /// Every cell of the area, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (width, height) = (self.width.max(0), self.height.max(0));
        (0..height).flat_map(move |y| (0..width).map(move |x| Coordinate { x, y }))
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            x: self.width / 2,
            y: self.height / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_all_directions() {
        let pos = Coordinate::new(5, 5);

        assert_eq!(pos.step(Direction::Up), Coordinate::new(5, 4));
        assert_eq!(pos.step(Direction::Down), Coordinate::new(5, 6));
        assert_eq!(pos.step(Direction::Right), Coordinate::new(6, 5));
        assert_eq!(pos.step(Direction::Left), Coordinate::new(4, 5));
    }

    #[test]
    fn test_step_leaves_area_without_wrapping() {
        let pos = Coordinate::new(0, 0);
        assert_eq!(pos.step(Direction::Up), Coordinate::new(0, -1));
        assert_eq!(pos.step(Direction::Left), Coordinate::new(-1, 0));
    }

    #[test]
    fn test_bounds() {
        let area = PlayableArea::new(10, 8);

        assert!(area.contains(Coordinate::new(0, 0)));
        assert!(area.contains(Coordinate::new(9, 7)));
        assert!(!area.contains(Coordinate::new(-1, 0)));
        assert!(!area.contains(Coordinate::new(0, -1)));
        assert!(!area.contains(Coordinate::new(10, 0)));
        assert!(!area.contains(Coordinate::new(0, 8)));
    }

    #[test]
    fn test_cells_cover_area_once() {
        let area = PlayableArea::new(3, 2);
        let cells: Vec<_> = area.cells().collect();

        assert_eq!(cells.len(), area.cell_count());
        assert_eq!(cells[0], Coordinate::new(0, 0));
        assert_eq!(cells[3], Coordinate::new(0, 1));
        assert!(cells.iter().all(|c| area.contains(*c)));
    }

    #[test]
    fn test_degenerate_area_is_empty() {
        let area = PlayableArea::new(0, 5);
        assert_eq!(area.cell_count(), 0);
        assert_eq!(area.cells().count(), 0);

        let area = PlayableArea::new(-3, 5);
        assert_eq!(area.cell_count(), 0);
        assert_eq!(area.cells().count(), 0);
    }
}
