use std::fs;
use std::path::Path;
use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;
use serde::Deserialize;

use crate::error::GameError;
use crate::field::{GridField, Position};
use crate::input::Direction;
use crate::snake::Snake;

/// Side length of the square board.
pub const DEFAULT_FIELD_SIZE: i32 = 20;

/// Starting head cell.
pub const DEFAULT_START_X: i32 = 7;
pub const DEFAULT_START_Y: i32 = 9;

/// Body segments trailing behind the head at start.
pub const DEFAULT_INITIAL_LENGTH: i32 = 5;

pub const DEFAULT_DIRECTION: Direction = Direction::Right;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 250;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Largest accepted board side.
pub const MAX_FIELD_SIZE: i32 = 256;

/// Game parameters, optionally overridden from a JSON file.
///
/// Every field has a default, so a file only needs to name the values it
/// changes. Sizes are signed on purpose: a negative value must reach
/// [`GameConfig::validate`] and be reported, not fail to parse.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub field_size: i32,
    pub start_x: i32,
    pub start_y: i32,
    pub initial_length: i32,
    pub initial_direction: Direction,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE,
            start_x: DEFAULT_START_X,
            start_y: DEFAULT_START_Y,
            initial_length: DEFAULT_INITIAL_LENGTH,
            initial_direction: DEFAULT_DIRECTION,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let raw = fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn start(&self) -> Position {
        Position::new(self.start_x, self.start_y)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Builds the field and starting snake, rejecting layouts that cannot
    /// be played.
    pub fn validate(&self) -> Result<(GridField, Snake), GameError> {
        if self.field_size > MAX_FIELD_SIZE {
            return Err(GameError::invalid(format!(
                "field size must be at most {MAX_FIELD_SIZE}, got {}",
                self.field_size
            )));
        }

        let field = GridField::new(self.field_size)?;
        let snake = Snake::create(
            self.start(),
            self.initial_length,
            self.initial_direction,
            field,
        )?;

        if snake.len() >= field.total_cells() {
            return Err(GameError::invalid(format!(
                "a snake of {} segments leaves no room for a consumable on a {}x{} field",
                snake.len(),
                field.size(),
                field.size()
            )));
        }

        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(GameError::invalid(format!(
                "tick interval must be at least {MIN_TICK_INTERVAL_MS} ms, got {}",
                self.tick_interval_ms
            )));
        }

        Ok((field, snake))
    }
}

/// Colors applied to the terminal front end.
#[derive(Debug)]
pub struct Theme {
    /// Alternating checkerboard tile colors.
    pub tile_light: Color,
    pub tile_dark: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub consumable: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_bg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Meadow greens with a red apple.
pub const THEME_MEADOW: Theme = Theme {
    tile_light: Color::Rgb(0xa6, 0xd7, 0x15),
    tile_dark: Color::Rgb(0x8e, 0xb8, 0x12),
    snake_head: Color::Rgb(0x1f, 0x3b, 0x8c),
    snake_body: Color::Rgb(0x2e, 0x5c, 0xd6),
    snake_tail: Color::Rgb(0x4a, 0x74, 0xe0),
    consumable: Color::Rgb(0xd6, 0x1f, 0x1f),
    border_fg: Color::Rgb(0x76, 0x99, 0x0f),
    hud_score: Color::White,
    hud_bg: Color::Rgb(0x76, 0x99, 0x0f),
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Rounded border around the play area.
pub const BORDER_PLAY_AREA: border::Set = border::ROUNDED;

/// Terminal columns used per logical cell.
pub const CELL_WIDTH: u16 = 2;

/// Consumable glyph.
pub const GLYPH_CONSUMABLE: &str = "●";

pub mod glyphs {
    /// Head facing down, left, up, right (indexed by quarter turns).
    pub const HEAD: [&str; 4] = ["▼", "◀", "▲", "▶"];
    /// Vertical, horizontal.
    pub const STRAIGHT: [&str; 4] = ["┃", "━", "┃", "━"];
    /// Right+down, down+left, left+up, up+right.
    pub const BEND: [&str; 4] = ["┏", "┓", "┛", "┗"];
    /// Tail connecting up, right, down, left.
    pub const TAIL: [&str; 4] = ["╹", "╺", "╻", "╸"];
    /// Filler drawn in the second column when a segment connects rightward.
    pub const LINK_HORIZONTAL: &str = "━";
}
