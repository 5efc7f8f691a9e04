//! Cardinal directions for walking the doubled grid

/// One of the four cardinal step directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Positive column direction
    East,
    /// Positive row direction
    South,
    /// Negative column direction
    West,
    /// Negative row direction
    North,
}

impl Direction {
    /// All directions in draw order
    pub const ALL: [Self; 4] = [Self::East, Self::South, Self::West, Self::North];

    /// Row and column offset for a unit step in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::North => (-1, 0),
        }
    }

    /// Map a draw index back to a direction
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::East),
            1 => Some(Self::South),
            2 => Some(Self::West),
            3 => Some(Self::North),
            _ => None,
        }
    }
}
