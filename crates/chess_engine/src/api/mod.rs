//! Public API for the chess engine
//!
//! [`GameSession`] wraps the rules collaborator, the evaluation function, the search
//! and the position cache behind one stateful object. UIs and the AI opponent talk
//! to the engine through it.
//!
//! ## Module Organization
//!
//! - `session` - Lifecycle, moves and state queries (new, set_fen, make_move, undo)
//! - `analysis` - Cached analysis and search (analyze, legal_moves_from, best_move)
//! - `events` - Session events, listeners and the status state machine

mod analysis;
mod events;
mod session;

pub use events::{ChannelListener, GameEvent, GameEventListener, GameStatus};
pub use session::GameSession;
