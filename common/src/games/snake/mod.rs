mod apple;
mod game_state;
mod lifecycle;
mod types;

pub use apple::{FALLBACK_APPLE, MAX_APPLE_ATTEMPTS, apple_candidate, place_apple, spawn_apple};
pub use game_state::SnakeGame;
pub use types::{
    DeathReason, Direction, GameMeta, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Point, StepOutcome,
    is_valid_board_size,
};
