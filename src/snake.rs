use std::collections::{HashSet, VecDeque};

use crate::grid::{Coordinate, Direction};

/// Cells occupied by the snake, head at the front, tail at the back.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeBody {
    segments: VecDeque<Coordinate>,
}

impl SnakeBody {
    /// A straight snake of `length` cells whose head is at `head`, trailing
    /// away from `facing`.
    pub fn new(head: Coordinate, facing: Direction, length: usize) -> Self {
        let behind = facing.opposite();
        let mut segments = VecDeque::with_capacity(length.max(1));
        let mut pos = head;
        segments.push_back(pos);
        for _ in 1..length {
            pos = pos.step(behind);
            segments.push_back(pos);
        }

        SnakeBody { segments }
    }

    /// Builds a body from segments listed head first. Returns `None` for an
    /// empty list or one that visits a cell twice.
    pub fn from_segments(segments: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let segments: VecDeque<Coordinate> = segments.into_iter().collect();
        let mut seen = HashSet::with_capacity(segments.len());
        if segments.is_empty() || !segments.iter().all(|c| seen.insert(*c)) {
            return None;
        }
        Some(SnakeBody { segments })
    }

    /// Pushes `new_head` and drops the tail unless growing. Performs no
    /// collision checks.
    pub fn advance(&mut self, new_head: Coordinate, grow: bool) {
        self.segments.push_front(new_head);
        if !grow {
            self.segments.pop_back();
        }
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.segments.contains(&c)
    }

    /// Like `contains`, but treats the tail cell as free. Used when the tail
    /// is about to move out of the way.
    pub fn contains_excluding_tail(&self, c: Coordinate) -> bool {
        let occupied = self.segments.len() - 1;
        self.segments.iter().take(occupied).any(|s| *s == c)
    }

    pub fn head(&self) -> Coordinate {
        self.segments[0]
    }

    pub fn tail(&self) -> Coordinate {
        self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_new_trails_behind_head() {
        let snake = SnakeBody::new(c(5, 5), Direction::Right, 3);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), c(5, 5));
        let body: Vec<_> = snake.iter().copied().collect();
        assert_eq!(body, vec![c(5, 5), c(4, 5), c(3, 5)]);
        assert_eq!(snake.tail(), c(3, 5));
    }

    #[test]
    fn test_zero_length_still_has_a_head() {
        let snake = SnakeBody::new(c(1, 1), Direction::Up, 0);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), c(1, 1));
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert!(SnakeBody::from_segments(Vec::new()).is_none());

        let snake = SnakeBody::from_segments([c(1, 0), c(0, 0)]).unwrap();
        assert_eq!(snake.head(), c(1, 0));
        assert_eq!(snake.tail(), c(0, 0));
    }

    #[test]
    fn test_from_segments_rejects_overlap() {
        assert!(SnakeBody::from_segments([c(1, 0), c(0, 0), c(1, 0)]).is_none());
        assert!(SnakeBody::from_segments([c(2, 2), c(2, 2)]).is_none());
    }

    #[test]
    fn test_advance_moves() {
        let mut snake = SnakeBody::new(c(5, 5), Direction::Right, 3);

        snake.advance(c(6, 5), false);

        assert_eq!(snake.len(), 3, "Length remained the same");
        assert_eq!(snake.head(), c(6, 5));
        assert!(!snake.contains(c(3, 5)), "Tail was removed");
        assert_eq!(snake.tail(), c(4, 5));
    }

    #[test]
    fn test_advance_grows() {
        let mut snake = SnakeBody::new(c(5, 5), Direction::Right, 1);

        snake.advance(c(6, 5), true);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), c(6, 5));
        assert_eq!(snake.tail(), c(5, 5));
    }

    #[test]
    fn test_contains_includes_tail() {
        let snake = SnakeBody::new(c(5, 5), Direction::Up, 3);

        assert!(snake.contains(c(5, 5))); // head
        assert!(snake.contains(c(5, 7))); // tail
        assert!(!snake.contains(c(4, 6)));
    }

    #[test]
    fn test_contains_excluding_tail() {
        let snake = SnakeBody::new(c(5, 5), Direction::Up, 3);

        assert!(snake.contains_excluding_tail(c(5, 5)));
        assert!(snake.contains_excluding_tail(c(5, 6)));
        assert!(!snake.contains_excluding_tail(c(5, 7)));

        let single = SnakeBody::new(c(0, 0), Direction::Up, 1);
        assert!(!single.contains_excluding_tail(c(0, 0)));
    }

    #[test]
    fn test_iter_is_restartable() {
        let snake = SnakeBody::new(c(2, 2), Direction::Down, 2);
        let first: Vec<_> = snake.iter().collect();
        let second: Vec<_> = snake.iter().collect();
        assert_eq!(first, second);
    }
}
