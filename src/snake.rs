use std::collections::VecDeque;

use log::trace;
use serde::Serialize;

use crate::error::GameError;
use crate::field::{GridField, Position};
use crate::input::Direction;

/// Sprite family a segment is drawn with.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeTag {
    Head,
    Straight,
    Bend,
    Tail,
}

/// Clockwise quarter-turn rotation applied to a segment sprite.
///
/// Base sprites: the head faces down, the tail connects upward, a straight
/// piece runs vertically and a bend connects right and down.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Orientation {
    #[serde(rename = "0")]
    Deg0,
    #[serde(rename = "90")]
    Deg90,
    #[serde(rename = "180")]
    Deg180,
    #[serde(rename = "270")]
    Deg270,
}

impl Orientation {
    #[must_use]
    pub fn quarter_turns(self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

}

/// Render-facing view of one segment, derived from chain neighbours.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct SegmentShape {
    pub position: Position,
    pub shape: ShapeTag,
    pub orientation: Orientation,
}

/// Snake chain with buffered steering and deferred growth.
///
/// The head is kept apart from the trailing body so the chain can never be
/// empty; `body` is ordered from the neck to the tail.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    head: Position,
    body: VecDeque<Position>,
    moving_direction: Direction,
    pending_direction: Direction,
    pending_growth: bool,
}

impl Snake {
    /// Builds a head at `start` and `initial_length` body segments trailing
    /// behind it, opposite to `direction`.
    ///
    /// Fails when the length is negative, the head lies off the field, or the
    /// trailing body cannot fit on the field without stacking segments.
    pub fn create(
        start: Position,
        initial_length: i32,
        direction: Direction,
        field: GridField,
    ) -> Result<Self, GameError> {
        if initial_length < 0 {
            return Err(GameError::invalid(format!(
                "initial snake length must not be negative, got {initial_length}"
            )));
        }

        if !field.is_in_bounds(start) {
            return Err(GameError::invalid(format!(
                "start position ({}, {}) lies outside the {}x{} field",
                start.x,
                start.y,
                field.size(),
                field.size()
            )));
        }

        if initial_length.unsigned_abs() as usize >= field.total_cells() {
            return Err(GameError::invalid(format!(
                "a body of {initial_length} segments cannot fit on a {}x{} field",
                field.size(),
                field.size()
            )));
        }

        let backwards = direction.opposite();
        let mut body = VecDeque::new();
        let mut previous = start;
        for _ in 0..initial_length {
            let next = field.clamp(previous.stepped(backwards));
            if next == start || body.contains(&next) {
                return Err(GameError::invalid(format!(
                    "a body of {initial_length} segments does not fit behind ({}, {}) heading {direction:?}",
                    start.x, start.y
                )));
            }
            body.push_back(next);
            previous = next;
        }

        Ok(Self {
            head: start,
            body,
            moving_direction: direction,
            pending_direction: direction,
            pending_growth: false,
        })
    }

    /// Reinitialises the chain in place with the same rules as [`Snake::create`].
    ///
    /// On error the current chain is left untouched.
    pub fn reset(
        &mut self,
        start: Position,
        initial_length: i32,
        direction: Direction,
        field: GridField,
    ) -> Result<(), GameError> {
        *self = Self::create(start, initial_length, direction, field)?;
        Ok(())
    }

    /// Buffers a steering intent for the next [`Snake::advance`].
    ///
    /// A direct reversal of the committed direction is dropped while the
    /// snake has a body; the previously buffered intent then stays in place.
    pub fn set_direction(&mut self, intent: Direction) {
        if !self.body.is_empty() && intent == self.moving_direction.opposite() {
            trace!("rejected reversal {intent:?} while moving {:?}", self.moving_direction);
            return;
        }

        self.pending_direction = intent;
    }

    /// Queues growth on the next movement step.
    pub fn mark_growth(&mut self) {
        self.pending_growth = true;
    }

    /// Moves the chain one cell and returns the new head position.
    ///
    /// The head is not wrapped or clamped; leaving the field is for the
    /// collision check to report.
    pub fn advance(&mut self) -> Position {
        self.moving_direction = self.pending_direction;
        let next_head = self.head.stepped(self.moving_direction);

        self.body.push_front(self.head);
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            let _ = self.body.pop_back();
        }
        self.head = next_head;

        next_head
    }

    #[must_use]
    pub fn head_position(&self) -> Position {
        self.head
    }

    /// Iterates every segment from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Positions of the whole chain, head first.
    #[must_use]
    pub fn occupied_positions(&self) -> Vec<Position> {
        self.segments().collect()
    }

    /// Returns true if any segment, head included, covers `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.head == position || self.body.contains(&position)
    }

    /// Number of segments including the head.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Always false; the head is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn moving_direction(&self) -> Direction {
        self.moving_direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn has_pending_growth(&self) -> bool {
        self.pending_growth
    }

    /// Derives the sprite shape and rotation of every segment, head first.
    #[must_use]
    pub fn derive_segment_shapes(&self) -> Vec<SegmentShape> {
        let mut shapes = Vec::with_capacity(self.len());
        shapes.push(SegmentShape {
            position: self.head,
            shape: ShapeTag::Head,
            orientation: head_orientation(self.moving_direction),
        });

        let last = self.body.len().saturating_sub(1);
        for (index, &position) in self.body.iter().enumerate() {
            let predecessor = if index == 0 {
                self.head
            } else {
                self.body[index - 1]
            };
            let toward_head = position.direction_to(predecessor);

            let (shape, orientation) = if index == last {
                (ShapeTag::Tail, toward_head.map_or(Orientation::Deg0, tail_orientation))
            } else {
                let toward_tail = position.direction_to(self.body[index + 1]);
                classify_body(toward_head, toward_tail)
            };

            shapes.push(SegmentShape {
                position,
                shape,
                orientation,
            });
        }

        shapes
    }
}

fn head_orientation(facing: Direction) -> Orientation {
    match facing {
        Direction::Down => Orientation::Deg0,
        Direction::Left => Orientation::Deg90,
        Direction::Up => Orientation::Deg180,
        Direction::Right => Orientation::Deg270,
    }
}

fn tail_orientation(toward_head: Direction) -> Orientation {
    match toward_head {
        Direction::Up => Orientation::Deg0,
        Direction::Right => Orientation::Deg90,
        Direction::Down => Orientation::Deg180,
        Direction::Left => Orientation::Deg270,
    }
}

fn classify_body(
    toward_head: Option<Direction>,
    toward_tail: Option<Direction>,
) -> (ShapeTag, Orientation) {
    let (Some(a), Some(b)) = (toward_head, toward_tail) else {
        return (ShapeTag::Straight, Orientation::Deg0);
    };

    if a == b.opposite() {
        let orientation = if a.is_horizontal() {
            Orientation::Deg90
        } else {
            Orientation::Deg0
        };
        return (ShapeTag::Straight, orientation);
    }

    use Direction::{Down, Left, Right, Up};
    let orientation = match (a, b) {
        (Right, Down) | (Down, Right) => Orientation::Deg0,
        (Down, Left) | (Left, Down) => Orientation::Deg90,
        (Left, Up) | (Up, Left) => Orientation::Deg180,
        (Up, Right) | (Right, Up) => Orientation::Deg270,
        // Both neighbours on the same side only happens on a broken chain.
        _ => return (ShapeTag::Straight, Orientation::Deg0),
    };

    (ShapeTag::Bend, orientation)
}
