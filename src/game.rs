use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::collision::{self, Collision};
use crate::config::GameConfig;
use crate::consumable;
use crate::error::GameError;
use crate::field::{GridField, Position};
use crate::input::Direction;
use crate::snake::{SegmentShape, Snake};

/// Current high-level lifecycle state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Constructed, waiting for the first input or `start()`.
    Idle,
    Playing,
    GameOver,
}

/// Why a run reached [`GameStatus::GameOver`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell; no consumable can be placed.
    BoardFull,
}

impl From<Collision> for EndReason {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::Wall => Self::WallCollision,
            Collision::SelfCollision => Self::SelfCollision,
        }
    }
}

/// Read-only projection of committed state for the rendering side.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub score: u32,
    pub status: GameStatus,
    pub head: Position,
    pub segments: Vec<SegmentShape>,
    pub consumable: Option<Position>,
    pub end_reason: Option<EndReason>,
    pub tick_count: u64,
    pub field_size: i32,
}

/// One game instance: the snake, the consumable, score and lifecycle.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    field: GridField,
    initial_snake: Snake,
    snake: Snake,
    consumable: Option<Position>,
    score: u32,
    status: GameStatus,
    end_reason: Option<EndReason>,
    tick_count: u64,
    rng: StdRng,
}

impl GameSession {
    /// Creates an idle session seeded from system entropy.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, GameError> {
        let (field, snake) = config.validate()?;
        let consumable = consumable::spawn(
            &mut rng,
            &snake.occupied_positions(),
            snake.head_position(),
            field,
        )?;

        Ok(Self {
            config,
            field,
            initial_snake: snake.clone(),
            snake,
            consumable: Some(consumable),
            score: 0,
            status: GameStatus::Idle,
            end_reason: None,
            tick_count: 0,
            rng,
        })
    }

    /// Moves an idle session into play. Has no effect in other states.
    pub fn start(&mut self) {
        if self.status == GameStatus::Idle {
            debug!("session started");
            self.status = GameStatus::Playing;
        }
    }

    /// Buffers a steering intent; the first one also starts an idle session.
    pub fn handle_input(&mut self, intent: Direction) {
        if self.status == GameStatus::GameOver {
            return;
        }

        self.snake.set_direction(intent);
        self.start();
    }

    /// Advances the simulation by one step.
    ///
    /// Returns [`GameError::NoAvailableSpace`] when the snake has filled the
    /// board; the session is then already in `GameOver`.
    pub fn tick(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Playing {
            return Ok(());
        }

        self.tick_count += 1;
        let head = self.snake.advance();

        if self.consumable == Some(head) {
            self.score += 1;
            self.snake.mark_growth();

            let occupied = self.snake.occupied_positions();
            match consumable::spawn(&mut self.rng, &occupied, head, self.field) {
                Ok(next) => self.consumable = Some(next),
                Err(error) => {
                    warn!("board full after {} ticks, score {}", self.tick_count, self.score);
                    self.consumable = None;
                    self.finish(EndReason::BoardFull);
                    return Err(error);
                }
            }
        }

        let occupied = self.snake.occupied_positions();
        if let Some(collision) = collision::detect(&occupied, self.field) {
            self.finish(collision.into());
        }

        Ok(())
    }

    /// Starts a fresh run from the initial layout, whatever the current state.
    pub fn reset(&mut self) {
        self.snake = self.initial_snake.clone();
        self.score = 0;
        self.tick_count = 0;
        self.end_reason = None;
        self.status = GameStatus::Playing;

        let occupied = self.snake.occupied_positions();
        self.consumable =
            match consumable::spawn(&mut self.rng, &occupied, self.snake.head_position(), self.field)
            {
                Ok(position) => Some(position),
                Err(error) => {
                    warn!("reset could not place a consumable: {error}");
                    None
                }
            };

        info!("session reset");
    }

    /// Moves the consumable to `position`, which must be a free in-bounds cell.
    pub fn place_consumable(&mut self, position: Position) -> Result<(), GameError> {
        if !self.field.is_in_bounds(position) || self.snake.occupies(position) {
            return Err(GameError::invalid(format!(
                "consumable cannot be placed on ({}, {})",
                position.x, position.y
            )));
        }

        self.consumable = Some(position);
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            score: self.score,
            status: self.status,
            head: self.snake.head_position(),
            segments: self.snake.derive_segment_shapes(),
            consumable: self.consumable,
            end_reason: self.end_reason,
            tick_count: self.tick_count,
            field_size: self.field.size(),
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn consumable(&self) -> Option<Position> {
        self.consumable
    }

    #[must_use]
    pub fn field(&self) -> GridField {
        self.field
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn finish(&mut self, reason: EndReason) {
        info!(
            "game over ({reason:?}) with score {} after {} ticks",
            self.score, self.tick_count
        );
        self.status = GameStatus::GameOver;
        self.end_reason = Some(reason);
    }
}
