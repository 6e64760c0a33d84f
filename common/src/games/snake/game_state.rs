use serde::{Deserialize, Serialize};

use super::apple::spawn_apple;
use super::types::{DeathReason, Direction, GameMeta, Point, StepOutcome};
use crate::games::{GameError, RandomSeedSource};
use crate::{PlayerId, log};

/// One player's board. `body` is stored tail first, head last.
///
/// `Default` is the record of a player who never started a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeGame {
    pub width: u8,
    pub height: u8,
    pub direction: Direction,
    pub body: Vec<Point>,
    pub apple: Point,
    pub score: u64,
    pub active: bool,
}

impl SnakeGame {
    pub fn head(&self) -> Option<Point> {
        self.body.last().copied()
    }

    pub fn meta(&self) -> GameMeta {
        GameMeta {
            width: self.width,
            height: self.height,
            direction: self.direction,
            apple: self.apple,
            score: self.score,
            active: self.active,
        }
    }

    /// Heading after `requested`; a reversal onto the body keeps the current one.
    fn heading_after(&self, requested: Direction) -> Direction {
        if requested.is_opposite(&self.direction) {
            self.direction
        } else {
            requested
        }
    }

    fn next_head_position(&self, head: Point, direction: Direction) -> Result<Point, DeathReason> {
        match direction {
            Direction::Up => {
                if head.y == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x, head.y - 1))
            }
            Direction::Down => {
                if head.y + 1 >= self.height {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x, head.y + 1))
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x - 1, head.y))
            }
            Direction::Right => {
                if head.x + 1 >= self.width {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x + 1, head.y))
            }
        }
    }

    /// Moves the snake one cell. A death leaves the body untouched; the
    /// caller decides what dying means for the game. On a wall death the
    /// reported head is the current head, the furthest on-board cell.
    /// An `Err` return leaves the record untouched.
    pub fn step(
        &mut self,
        requested: Direction,
        seeds: &dyn RandomSeedSource,
        player: &PlayerId,
    ) -> Result<StepOutcome, GameError> {
        let head = self.head().ok_or(GameError::EmptySnake)?;

        let direction = self.heading_after(requested);

        let next_head = match self.next_head_position(head, direction) {
            Ok(point) => point,
            Err(reason) => {
                self.direction = direction;
                log!("[{}] hit the wall at ({}, {})", player, head.x, head.y);
                return Ok(StepOutcome::died(head, reason));
            }
        };

        // The tail has not moved yet, so stepping onto it is a collision too.
        if self.body.contains(&next_head) {
            self.direction = direction;
            log!("[{}] bit itself at ({}, {})", player, next_head.x, next_head.y);
            return Ok(StepOutcome::died(next_head, DeathReason::SelfCollision));
        }

        let ate_apple = next_head == self.apple;
        let score = if ate_apple {
            self.score.checked_add(1).ok_or(GameError::ArithmeticOverflow)?
        } else {
            self.score
        };

        self.direction = direction;
        self.body.push(next_head);
        if ate_apple {
            self.score = score;
            self.apple = spawn_apple(self, seeds, player);
            log!(
                "[{}] ate apple at ({}, {}). Score: {}",
                player,
                next_head.x,
                next_head.y,
                self.score
            );
        } else {
            self.body.remove(0);
        }

        Ok(StepOutcome {
            alive: true,
            new_head: next_head,
            ate_apple,
            death_reason: None,
        })
    }
}
