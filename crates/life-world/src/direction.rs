/// Moore-neighbourhood directions. `+y` is up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// All directions in neighbour scan order.
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Returns (dx, dy) offset for this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::UpLeft => (-1, 1),
            Direction::Up => (0, 1),
            Direction::UpRight => (1, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::DownLeft => (-1, -1),
            Direction::Down => (0, -1),
            Direction::DownRight => (1, -1),
        }
    }

    /// Step from `(x, y)` in this direction, or `None` if that leaves
    /// `[0, width) x [0, height)`.
    pub const fn step(
        self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        let (dx, dy) = self.offset();
        let Some(nx) = x.checked_add_signed(dx) else {
            return None;
        };
        let Some(ny) = y.checked_add_signed(dy) else {
            return None;
        };
        if nx < width && ny < height {
            Some((nx, ny))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_cover_moore_neighbourhood() {
        let mut offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        offsets.sort_unstable();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
    }

    #[test]
    fn step_clamps_at_edges() {
        assert_eq!(Direction::DownLeft.step(0, 0, 3, 3), None);
        assert_eq!(Direction::Left.step(0, 1, 3, 3), None);
        assert_eq!(Direction::Up.step(1, 2, 3, 3), None);
        assert_eq!(Direction::Right.step(2, 0, 3, 3), None);
        assert_eq!(Direction::UpRight.step(0, 0, 3, 3), Some((1, 1)));
        assert_eq!(Direction::Down.step(1, 1, 3, 3), Some((1, 0)));
    }
}
