use std::io;
use std::path::PathBuf;

/// Errors surfaced by the simulation core and its configuration layer.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Construction or reset parameters that cannot describe a valid game.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Every cell of the board is covered by the snake.
    #[error("no free cell left for a consumable on the {field_size}x{field_size} board")]
    NoAvailableSpace { field_size: i32 },

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl GameError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::GameError;

    #[test]
    fn no_available_space_mentions_board_size() {
        let error = GameError::NoAvailableSpace { field_size: 3 };
        assert_eq!(
            error.to_string(),
            "no free cell left for a consumable on the 3x3 board"
        );
    }
}
