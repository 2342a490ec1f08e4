use serde::{Deserialize, Serialize};

use crate::*;

/// Direction for referencing and moving entities on the grid.
///
/// `Flip` and `None` are sentinels without a spatial offset, so callers can say
/// "no movement" without reaching for an `Option<Direction>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Flip,
    None,
}

impl Direction {
    /// The eight spatial directions, clockwise from `Up`.
    pub const COMPASS: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Orthogonal neighbours in query order: up, left, right, down.
    pub const SURROUNDING: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// Full ring in reading order, top row first.
    pub const RETICLE: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Unit `(dx, dy)` step, `y` growing downwards. `None` for sentinels.
    pub const fn delta(self) -> Option<Coord2> {
        use Direction::*;
        match self {
            Up => Some((0, -1)),
            Down => Some((0, 1)),
            Left => Some((-1, 0)),
            Right => Some((1, 0)),
            UpLeft => Some((-1, -1)),
            UpRight => Some((1, -1)),
            DownLeft => Some((-1, 1)),
            DownRight => Some((1, 1)),
            Flip | None => Option::None,
        }
    }

    /// Step scaled by `distance` on both axes.
    ///
    /// Every spatial direction scales, diagonals included. Returns `None` for
    /// sentinels or when the scaled offset overflows.
    pub fn offset(self, distance: Coord) -> Option<Coord2> {
        let (dx, dy) = self.delta()?;
        Some((dx.checked_mul(distance)?, dy.checked_mul(distance)?))
    }

    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Flip | Self::None)
    }

    /// The direction pointing the other way; sentinels map to themselves.
    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
            UpLeft => DownRight,
            UpRight => DownLeft,
            DownLeft => UpRight,
            DownRight => UpLeft,
            Flip => Flip,
            None => None,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::None
    }
}
