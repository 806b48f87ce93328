//! Game logic on top of the core data structures.
//!
//! - [`GameState`] - arena, active piece and score, with the game commands
//! - [`GameSession`] - a [`GameState`] driven by a [`DropTimer`], with pause
//! - [`DropTimer`] - gravity clock fed with elapsed frame time
//! - [`GameConfig`] - arena size, drop interval, scoring and rules
//! - [`PieceGenerator`] / [`PieceSeed`] - uniform, seedable piece selection
//! - [`GameEvent`] - notable state changes reported to the host
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] from a [`GameConfig`]
//! 2. Call [`GameSession::update`] every frame with the elapsed time
//! 3. Forward player input as move/rotate/drop commands
//! 4. Drain [`GameEvent`]s to react to locks, clears and overflows
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use blockfall_engine::{GameConfig, GameSession, MoveDirection};
//!
//! let mut session = GameSession::new(&GameConfig::default());
//! session.move_piece(MoveDirection::Right);
//! session.update(Duration::from_millis(16));
//!
//! for event in session.drain_events() {
//!     println!("{event:?}");
//! }
//! ```

pub use self::{
    drop_timer::*, game_config::*, game_event::*, game_session::*, game_state::*,
    piece_generator::*,
};

mod drop_timer;
mod game_config;
mod game_event;
mod game_session;
mod game_state;
mod piece_generator;
