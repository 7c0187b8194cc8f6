/// A heading, as one of the four grid-axis unit vectors
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The (row, col) displacement of one step along this heading
    pub(super) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Two headings are opposite iff their deltas' dot product is -1
    pub(super) fn is_opposite(self, other: Direction) -> bool {
        let (r1, c1) = self.delta();
        let (r2, c2) = other.delta();
        r1 * r2 + c1 * c2 == -1
    }
}
