//! Centralized error types for the simulation core.
//!
//! Errors only arise at level-construction time. Once the maze is built the
//! core has no fatal states: blocked movement stalls, and coordinate lookups
//! that miss return `None` (see `maze::graph`).

/// Main error type for the simulation core.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Board parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),

    #[error("House door must have exactly 2 positions, found {0}")]
    InvalidDoorCount(usize),

    #[error("Board rows have inconsistent widths ({0} vs {1})")]
    RaggedBoard(usize, usize),
}

/// Errors related to maze assembly.
#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    #[error("No node at tile ({0}, {1})")]
    NodeNotFound(i32, i32),

    #[error("Player starting position not found on the board")]
    MissingPlayerStart,

    #[error("Invalid maze configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
