use glam::Vec2;
use strum_macros::{AsRefStr, EnumIter};

use crate::constants::TILE_SIZE;

/// A compass direction of travel, plus the stalled state.
///
/// `Stop` never has a graph neighbor; it is the direction of an entity pinned
/// at a node with nowhere to go.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Stop,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Stop => Direction::Stop,
        }
    }

    /// Unit vector for this direction; zero for `Stop`. Positive y is down.
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Stop => Vec2::ZERO,
        }
    }

    /// Vector spanning `tiles` whole tiles in this direction, in pixels.
    pub fn tiles(self, tiles: f32) -> Vec2 {
        self.vector() * (TILE_SIZE as f32 * tiles)
    }
}

/// The four movement directions, in neighbor-slot order.
pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

/// Tie-break order for goal-seeking steering (classic arcade convention).
pub const PRIORITY: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
