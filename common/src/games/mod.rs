mod broadcaster;
mod calculator;
mod error;
mod events;
mod seed_source;

pub mod snake;

pub use broadcaster::{ChannelEventSink, EventSink, FanoutEventSink, LogEventSink};
pub use calculator::{Operation, bonus_for, evaluate};
pub use error::GameError;
pub use events::GameEvent;
pub use seed_source::{
    EntropySeedSource, RandomSeedSource, ScriptedSeedSource, SeedContext, rehash,
};
