use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid board size {width}x{height}, each side must be between {min} and {max}", min = crate::games::snake::MIN_BOARD_SIZE, max = crate::games::snake::MAX_BOARD_SIZE)]
    InvalidBoardSize { width: u8, height: u8 },
    #[error("game is not active")]
    GameNotActive,
    /// Invariant violation: an active game always has a body.
    #[error("snake body is empty")]
    EmptySnake,
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}
