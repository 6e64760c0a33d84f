use std::fmt;

use serde::Serialize;

use super::Operation;
use super::snake::{DeathReason, Direction, Point};
use crate::PlayerId;

/// Notifications published after a state change has been committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    GameStarted {
        player: PlayerId,
        width: u8,
        height: u8,
    },
    AppleSpawned {
        player: PlayerId,
        position: Point,
    },
    GameUpdated {
        player: PlayerId,
        direction: Direction,
        head: Point,
        score: u64,
        ate_apple: bool,
    },
    GameOver {
        player: PlayerId,
        score: u64,
        reason: DeathReason,
    },
    CalculatorUsed {
        player: PlayerId,
        left: i128,
        right: i128,
        op: Operation,
        result: i128,
        bonus: u64,
    },
}

impl GameEvent {
    pub fn player(&self) -> &PlayerId {
        match self {
            GameEvent::GameStarted { player, .. }
            | GameEvent::AppleSpawned { player, .. }
            | GameEvent::GameUpdated { player, .. }
            | GameEvent::GameOver { player, .. }
            | GameEvent::CalculatorUsed { player, .. } => player,
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::GameStarted { player, width, height } => {
                write!(f, "[{}] game started on {}x{}", player, width, height)
            }
            GameEvent::AppleSpawned { player, position } => {
                write!(f, "[{}] apple spawned at ({}, {})", player, position.x, position.y)
            }
            GameEvent::GameUpdated { player, direction, head, score, ate_apple } => write!(
                f,
                "[{}] moved {:?} to ({}, {}), score {}{}",
                player,
                direction,
                head.x,
                head.y,
                score,
                if *ate_apple { ", ate apple" } else { "" }
            ),
            GameEvent::GameOver { player, score, reason } => {
                write!(f, "[{}] game over ({:?}), final score {}", player, reason, score)
            }
            GameEvent::CalculatorUsed { player, left, right, op, result, bonus } => write!(
                f,
                "[{}] calculated {} {} {} = {}, bonus {}",
                player, left, op, right, result, bonus
            ),
        }
    }
}
