//! Session events and listeners
//!
//! A [`GameSession`](super::GameSession) notifies its subscribers synchronously, in
//! subscription order, right after the state change that caused the event. After a
//! move the order is always `MoveMade`, then `Check` if the mover gave check, then
//! `GameOver` if the game ended.
//!
//! Listeners are either closures or a [`ChannelListener`] feeding a
//! `crossbeam_channel` receiver that another thread can drain.

use crate::rules::GameResult;
use crate::types::{Move, Square};
use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Something observable happened in a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The position was replaced wholesale (FEN load, reset, undo)
    PositionChanged { fen: String },
    MoveMade { mv: Move },
    /// The side to move is in check; `king_square` is its king
    Check { king_square: Square },
    GameOver { result: GameResult },
}

/// Receives session events
pub trait GameEventListener: Send {
    fn on_event(&self, event: &GameEvent);
}

impl<F> GameEventListener for F
where
    F: Fn(&GameEvent) + Send,
{
    fn on_event(&self, event: &GameEvent) {
        self(event)
    }
}

/// Forwards events into a crossbeam channel
#[derive(Debug, Clone)]
pub struct ChannelListener {
    sender: Sender<GameEvent>,
}

impl ChannelListener {
    pub fn new(sender: Sender<GameEvent>) -> Self {
        Self { sender }
    }

    /// Listener plus the unbounded receiver it feeds
    pub fn channel() -> (Self, Receiver<GameEvent>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self::new(sender), receiver)
    }
}

impl GameEventListener for ChannelListener {
    fn on_event(&self, event: &GameEvent) {
        // A dropped receiver only means nobody is listening any more
        if self.sender.send(event.clone()).is_err() {
            warn!("[SESSION] Event receiver dropped, discarding {:?}", event);
        }
    }
}

/// Lifecycle state of a session
///
/// `Active` and `Check` alternate while the game runs; `Terminal` is final until the
/// position is reset, reloaded or a move is undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Check,
    Terminal(GameResult),
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Terminal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_listener_forwards_events() {
        let (listener, receiver) = ChannelListener::channel();
        let event = GameEvent::PositionChanged {
            fen: "8/8/8/8/8/8/8/8 w - - 0 1".to_string(),
        };
        listener.on_event(&event);
        assert_eq!(receiver.try_recv().unwrap(), event);
    }

    #[test]
    fn test_closed_channel_does_not_panic() {
        let (listener, receiver) = ChannelListener::channel();
        drop(receiver);
        listener.on_event(&GameEvent::PositionChanged { fen: String::new() });
    }
}
