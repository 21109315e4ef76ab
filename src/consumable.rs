use rand::Rng;

use crate::error::GameError;
use crate::field::{GridField, Position};

/// Picks a uniformly random cell that is neither occupied nor under the head.
///
/// Returns [`GameError::NoAvailableSpace`] when the board is full.
pub fn spawn<R: Rng + ?Sized>(
    rng: &mut R,
    occupied: &[Position],
    head: Position,
    field: GridField,
) -> Result<Position, GameError> {
    let is_free = |cell: &Position| *cell != head && !occupied.contains(cell);
    let no_space = || GameError::NoAvailableSpace {
        field_size: field.size(),
    };

    let free = field.cells().filter(is_free).count();
    if free == 0 {
        return Err(no_space());
    }

    let index = rng.gen_range(0..free);
    field.cells().filter(is_free).nth(index).ok_or_else(no_space)
}
