use serde::Serialize;

use crate::error::GameError;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed: a head that leaves the board carries its
/// out-of-bounds position until the collision check reports it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the unit direction leading from `self` to an adjacent `other`.
    ///
    /// `None` when the two cells are not orthogonal neighbours.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        match (other.x - self.x, other.y - self.y) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Square playing field of `size` x `size` cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridField {
    size: i32,
}

impl GridField {
    /// Creates a field; the size must be positive.
    pub fn new(size: i32) -> Result<Self, GameError> {
        if size <= 0 {
            return Err(GameError::invalid(format!(
                "field size must be positive, got {size}"
            )));
        }

        Ok(Self { size })
    }

    #[must_use]
    pub fn size(self) -> i32 {
        self.size
    }

    /// Returns the total number of cells in the field.
    #[must_use]
    pub fn total_cells(self) -> usize {
        let side = self.size.unsigned_abs() as usize;
        side * side
    }

    /// Clips both coordinates into `[0, size - 1]`.
    #[must_use]
    pub fn clamp(self, position: Position) -> Position {
        Position {
            x: position.x.clamp(0, self.size - 1),
            y: position.y.clamp(0, self.size - 1),
        }
    }

    #[must_use]
    pub fn is_in_bounds(self, position: Position) -> bool {
        (0..self.size).contains(&position.x) && (0..self.size).contains(&position.y)
    }

    /// Iterates every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position { x, y }))
    }
}
