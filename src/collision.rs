//! Wall and self-collision predicates over already-advanced state.

use serde::Serialize;

use crate::field::{GridField, Position};

/// Which rule ended the run.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// True when the head lies outside `[0, size - 1]` on either axis.
#[must_use]
pub fn check_wall_collision(head: Position, field: GridField) -> bool {
    !field.is_in_bounds(head)
}

/// True when the head (index 0) shares a cell with any later segment,
/// the neck included.
#[must_use]
pub fn check_self_collision(occupied: &[Position]) -> bool {
    let Some((head, trailing)) = occupied.split_first() else {
        return false;
    };

    trailing.contains(head)
}

/// Runs both predicates; the wall rule is reported first.
#[must_use]
pub fn detect(occupied: &[Position], field: GridField) -> Option<Collision> {
    let head = occupied.first().copied()?;

    if check_wall_collision(head, field) {
        return Some(Collision::Wall);
    }

    if check_self_collision(occupied) {
        return Some(Collision::SelfCollision);
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::field::{GridField, Position};

    use super::{check_self_collision, check_wall_collision, detect, Collision};

    fn field() -> GridField {
        GridField::new(20).expect("valid field size")
    }

    #[test]
    fn wall_collision_on_every_edge() {
        assert!(check_wall_collision(Position::new(-1, 5), field()));
        assert!(check_wall_collision(Position::new(20, 5), field()));
        assert!(check_wall_collision(Position::new(5, -1), field()));
        assert!(check_wall_collision(Position::new(5, 20), field()));
        assert!(!check_wall_collision(Position::new(0, 19), field()));
    }

    #[test]
    fn self_collision_with_neck_is_detected() {
        let chain = [
            Position::new(4, 4),
            Position::new(4, 4),
            Position::new(3, 4),
        ];

        assert!(check_self_collision(&chain));
    }

    #[test]
    fn self_collision_with_tail_is_detected() {
        let chain = [
            Position::new(2, 2),
            Position::new(1, 2),
            Position::new(1, 3),
            Position::new(2, 3),
            Position::new(2, 2),
        ];

        assert!(check_self_collision(&chain));
    }

    #[test]
    fn distinct_chain_has_no_collision() {
        let chain = [Position::new(2, 2), Position::new(1, 2), Position::new(0, 2)];

        assert!(!check_self_collision(&chain));
        assert!(!check_self_collision(&chain[..1]));
        assert!(!check_self_collision(&[]));
        assert_eq!(detect(&chain, field()), None);
    }

    #[test]
    fn detect_names_the_rule() {
        let off_field = [Position::new(-1, 2), Position::new(0, 2)];
        let bitten = [Position::new(1, 1), Position::new(1, 1)];

        assert_eq!(detect(&off_field, field()), Some(Collision::Wall));
        assert_eq!(detect(&bitten, field()), Some(Collision::SelfCollision));
    }
}
