use std::sync::Arc;

use snake_boost_common::games::snake::{Direction, GameMeta, Point, SnakeGame, StepOutcome};
use snake_boost_common::games::{
    EventSink, GameError, GameEvent, Operation, RandomSeedSource, evaluate,
};
use snake_boost_common::{PlayerId, log};

use crate::game_store::GameStore;

/// Public operations over the per-player game records.
///
/// Every mutating call works on a copy of the record and writes it back only
/// when the call succeeds. Events go out after the write-back while the
/// player's slot is still locked, so each player's events arrive in commit order.
#[derive(Clone)]
pub struct GameService<S: EventSink> {
    store: GameStore,
    seeds: Arc<dyn RandomSeedSource>,
    sink: S,
}

impl<S: EventSink> GameService<S> {
    pub fn new(store: GameStore, seeds: Arc<dyn RandomSeedSource>, sink: S) -> Self {
        Self { store, seeds, sink }
    }

    pub async fn start_game(
        &self,
        player: &PlayerId,
        width: u8,
        height: u8,
    ) -> Result<GameMeta, GameError> {
        let game = SnakeGame::start(width, height, self.seeds.as_ref(), player).inspect_err(|e| {
            log!("[{}] start rejected: {}", player, e);
        })?;

        let slot = self.store.slot(player).await;
        let mut current = slot.lock().await;
        *current = game;

        self.sink
            .publish(GameEvent::GameStarted {
                player: player.clone(),
                width,
                height,
            })
            .await;
        self.sink
            .publish(GameEvent::AppleSpawned {
                player: player.clone(),
                position: current.apple,
            })
            .await;

        Ok(current.meta())
    }

    pub async fn get_game_meta(&self, player: &PlayerId) -> GameMeta {
        self.store.snapshot(player).await.meta()
    }

    pub async fn get_body(&self, player: &PlayerId) -> Vec<Point> {
        self.store.snapshot(player).await.body
    }

    pub async fn move_snake(
        &self,
        player: &PlayerId,
        direction: Direction,
    ) -> Result<StepOutcome, GameError> {
        let Some(slot) = self.store.existing_slot(player).await else {
            return Err(GameError::GameNotActive);
        };
        let mut current = slot.lock().await;

        let mut staged = current.clone();
        let outcome = staged.advance(direction, self.seeds.as_ref(), player)?;
        *current = staged;

        match outcome.death_reason {
            Some(reason) => {
                self.sink
                    .publish(GameEvent::GameOver {
                        player: player.clone(),
                        score: current.score,
                        reason,
                    })
                    .await;
            }
            None => {
                self.sink
                    .publish(GameEvent::GameUpdated {
                        player: player.clone(),
                        direction: current.direction,
                        head: outcome.new_head,
                        score: current.score,
                        ate_apple: outcome.ate_apple,
                    })
                    .await;
                if outcome.ate_apple {
                    self.sink
                        .publish(GameEvent::AppleSpawned {
                            player: player.clone(),
                            position: current.apple,
                        })
                        .await;
                }
            }
        }

        Ok(outcome)
    }

    pub async fn calculate_and_boost(
        &self,
        player: &PlayerId,
        left: i128,
        right: i128,
        op: Operation,
    ) -> Result<i128, GameError> {
        // Players without a record have nothing to credit; no slot is created.
        let Some(slot) = self.store.existing_slot(player).await else {
            let (result, bonus) = SnakeGame::default().apply_boost(left, right, op)?;
            self.publish_calculator_used(player, left, right, op, result, bonus)
                .await;
            return Ok(result);
        };
        let mut current = slot.lock().await;

        let mut staged = current.clone();
        let (result, bonus) = staged.apply_boost(left, right, op)?;
        *current = staged;

        self.publish_calculator_used(player, left, right, op, result, bonus)
            .await;

        Ok(result)
    }

    async fn publish_calculator_used(
        &self,
        player: &PlayerId,
        left: i128,
        right: i128,
        op: Operation,
        result: i128,
        bonus: u64,
    ) {
        self.sink
            .publish(GameEvent::CalculatorUsed {
                player: player.clone(),
                left,
                right,
                op,
                result,
                bonus,
            })
            .await;
    }

    pub async fn player_count(&self) -> usize {
        self.store.len().await
    }

    /// Pure evaluation; touches no record and emits nothing.
    pub fn calculate(&self, left: i128, right: i128, op: Operation) -> Result<i128, GameError> {
        evaluate(left, right, op)
    }
}
