use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use snake_boost_common::PlayerId;
use snake_boost_common::games::snake::SnakeGame;

pub type GameSlot = Arc<Mutex<SnakeGame>>;

/// One record per player, each behind its own lock. The map lock is only held
/// long enough to find or create a slot, so players never wait on each other.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    slots: Arc<Mutex<HashMap<PlayerId, GameSlot>>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for `player`, created with the default record if missing.
    pub async fn slot(&self, player: &PlayerId) -> GameSlot {
        let mut slots = self.slots.lock().await;
        slots
            .entry(player.clone())
            .or_insert_with(|| Arc::new(Mutex::new(SnakeGame::default())))
            .clone()
    }

    /// Slot for `player` only if one was created before.
    pub async fn existing_slot(&self, player: &PlayerId) -> Option<GameSlot> {
        self.slots.lock().await.get(player).cloned()
    }

    /// Copy of the player's record; unknown players read as the default record.
    pub async fn snapshot(&self, player: &PlayerId) -> SnakeGame {
        match self.existing_slot(player).await {
            Some(slot) => slot.lock().await.clone(),
            None => SnakeGame::default(),
        }
    }

    pub async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_player_reads_default_without_slot() {
        let store = GameStore::new();
        let player = PlayerId::from("ghost");
        assert_eq!(store.snapshot(&player).await, SnakeGame::default());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_slot_is_shared_per_player() {
        let store = GameStore::new();
        let alice = PlayerId::from("alice");
        let bob = PlayerId::from("bob");

        store.slot(&alice).await.lock().await.score = 7;

        assert_eq!(store.snapshot(&alice).await.score, 7);
        assert_eq!(store.snapshot(&bob).await.score, 0);
        assert!(Arc::ptr_eq(&store.slot(&alice).await, &store.slot(&alice).await));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_existing_slot_never_creates() {
        let store = GameStore::new();
        let alice = PlayerId::from("alice");

        assert!(store.existing_slot(&alice).await.is_none());
        assert_eq!(store.len().await, 0);

        let created = store.slot(&alice).await;
        let found = store.existing_slot(&alice).await.unwrap();
        assert!(Arc::ptr_eq(&created, &found));
    }
}
