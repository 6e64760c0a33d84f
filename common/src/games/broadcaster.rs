use std::future::Future;

use tokio::sync::mpsc;

use super::GameEvent;
use crate::log;

/// Fire-and-forget delivery of committed game events.
pub trait EventSink: Send + Sync + Clone + 'static {
    fn publish(&self, event: GameEvent) -> impl Future<Output = ()> + Send;
}

/// Writes events through the process logger; a muted sink drops them.
#[derive(Clone, Debug)]
pub struct LogEventSink {
    enabled: bool,
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn with_enabled(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl EventSink for LogEventSink {
    async fn publish(&self, event: GameEvent) {
        if self.enabled {
            log!("event: {}", event);
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChannelEventSink {
    sender: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelEventSink {
    pub fn new(sender: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self { sender }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl EventSink for ChannelEventSink {
    async fn publish(&self, event: GameEvent) {
        if let Err(e) = self.sender.send(event) {
            log!("[{}] Dropped event, receiver closed", e.0.player());
        }
    }
}

/// Publishes every event to both sinks, first then second.
#[derive(Clone, Debug)]
pub struct FanoutEventSink<A, B> {
    first: A,
    second: B,
}

impl<A: EventSink, B: EventSink> FanoutEventSink<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: EventSink, B: EventSink> EventSink for FanoutEventSink<A, B> {
    async fn publish(&self, event: GameEvent) {
        self.first.publish(event.clone()).await;
        self.second.publish(event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;
    use crate::games::snake::Point;

    fn apple_event() -> GameEvent {
        GameEvent::AppleSpawned {
            player: PlayerId::from("alice"),
            position: Point::new(1, 2),
        }
    }

    #[tokio::test]
    async fn test_channel_sink_forwards_events() {
        let (sink, mut receiver) = ChannelEventSink::channel();
        sink.publish(apple_event()).await;
        assert_eq!(receiver.recv().await, Some(apple_event()));
    }

    #[tokio::test]
    async fn test_channel_sink_survives_closed_receiver() {
        let (sink, receiver) = ChannelEventSink::channel();
        drop(receiver);
        sink.publish(apple_event()).await;
    }

    #[tokio::test]
    async fn test_fanout_publishes_to_both() {
        let (first, mut first_rx) = ChannelEventSink::channel();
        let (second, mut second_rx) = ChannelEventSink::channel();
        let sink = FanoutEventSink::new(first, second);
        sink.publish(apple_event()).await;
        assert_eq!(first_rx.recv().await, Some(apple_event()));
        assert_eq!(second_rx.recv().await, Some(apple_event()));
    }
}
