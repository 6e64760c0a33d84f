use super::apple::spawn_apple;
use super::game_state::SnakeGame;
use super::types::{Direction, Point, StepOutcome, is_valid_board_size};
use crate::games::{GameError, Operation, RandomSeedSource, bonus_for, evaluate};
use crate::{PlayerId, log};

impl SnakeGame {
    /// Fresh game: a three-cell snake centred on the board heading right,
    /// plus its first apple.
    pub fn start(
        width: u8,
        height: u8,
        seeds: &dyn RandomSeedSource,
        player: &PlayerId,
    ) -> Result<SnakeGame, GameError> {
        if !is_valid_board_size(width, height) {
            return Err(GameError::InvalidBoardSize { width, height });
        }

        // center_x >= 2 for every valid width, so the tail never leaves the board.
        let center_x = width / 2;
        let center_y = height / 2;

        let mut game = SnakeGame {
            width,
            height,
            direction: Direction::Right,
            body: vec![
                Point::new(center_x - 1, center_y),
                Point::new(center_x, center_y),
                Point::new(center_x + 1, center_y),
            ],
            apple: Point::default(),
            score: 0,
            active: true,
        };
        game.apple = spawn_apple(&game, seeds, player);

        log!("[{}] started {}x{} game", player, width, height);
        Ok(game)
    }

    /// One move request against an active game. Death ends the game.
    pub fn advance(
        &mut self,
        requested: Direction,
        seeds: &dyn RandomSeedSource,
        player: &PlayerId,
    ) -> Result<StepOutcome, GameError> {
        if !self.active {
            return Err(GameError::GameNotActive);
        }

        let outcome = self.step(requested, seeds, player)?;
        if !outcome.alive {
            self.active = false;
            log!("[{}] game over, final score {}", player, self.score);
        }
        Ok(outcome)
    }

    /// Evaluates `left op right` and credits the bonus to an active game.
    /// Returns the raw result and the bonus applied.
    pub fn apply_boost(
        &mut self,
        left: i128,
        right: i128,
        op: Operation,
    ) -> Result<(i128, u64), GameError> {
        let result = evaluate(left, right, op)?;
        let bonus = bonus_for(result, self.active);
        self.score = self
            .score
            .checked_add(bonus)
            .ok_or(GameError::ArithmeticOverflow)?;
        Ok((result, bonus))
    }
}
