use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MIN_BOARD_SIZE: u8 = 4;
pub const MAX_BOARD_SIZE: u8 = 32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            other => Err(format!("Unknown direction '{}'", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

pub fn is_valid_board_size(width: u8, height: u8) -> bool {
    let range = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
    range.contains(&width) && range.contains(&height)
}

/// Result of advancing a game by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub alive: bool,
    pub new_head: Point,
    pub ate_apple: bool,
    pub death_reason: Option<DeathReason>,
}

impl StepOutcome {
    pub(super) fn died(head: Point, reason: DeathReason) -> Self {
        Self {
            alive: false,
            new_head: head,
            ate_apple: false,
            death_reason: Some(reason),
        }
    }
}

/// Read-only snapshot of everything but the body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameMeta {
    pub width: u8,
    pub height: u8,
    pub direction: Direction,
    pub apple: Point,
    pub score: u64,
    pub active: bool,
}
