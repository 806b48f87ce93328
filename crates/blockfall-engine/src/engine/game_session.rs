use std::time::Duration;

use crate::{Arena, Player, RotationDirection, Ruleset};

use super::{DropOutcome, DropTimer, GameConfig, GameEvent, GameState, MoveDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Paused,
}

/// A running game: the [`GameState`] driven by a [`DropTimer`].
///
/// The host calls [`update`](Self::update) once per frame with the time since
/// the previous frame, and forwards player commands in between. While paused,
/// frames and commands are ignored.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    timer: DropTimer,
    session_state: SessionState,
}

impl GameSession {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_state(GameState::new(config), config.drop_interval())
    }

    #[must_use]
    pub fn with_state(state: GameState, drop_interval: Duration) -> Self {
        Self {
            state,
            timer: DropTimer::new(drop_interval),
            session_state: SessionState::Playing,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        self.state.arena()
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        self.state.player()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.state.score()
    }

    #[must_use]
    pub fn rules(&self) -> Ruleset {
        self.state.rules()
    }

    #[must_use]
    pub fn timer(&self) -> &DropTimer {
        &self.timer
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.session_state.is_playing()
    }

    pub fn toggle_pause(&mut self) {
        self.session_state = match self.session_state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
        };
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.state.drain_events()
    }

    /// Runs one frame: sweeps full rows, then applies gravity if it is due.
    pub fn update(&mut self, elapsed: Duration) {
        if !self.is_playing() {
            return;
        }
        self.state.sweep_rows();
        if self.timer.advance(elapsed) {
            self.state.soft_drop_tick();
        }
    }

    pub fn move_piece(&mut self, direction: MoveDirection) -> bool {
        self.is_playing() && self.state.move_piece(direction)
    }

    pub fn rotate_piece(&mut self, direction: RotationDirection) -> bool {
        self.is_playing() && self.state.rotate_piece(direction)
    }

    /// Drops the piece one row right away and restarts the gravity interval.
    pub fn soft_drop(&mut self) -> Option<DropOutcome> {
        if !self.is_playing() {
            return None;
        }
        self.timer.reset();
        Some(self.state.soft_drop_tick())
    }

    pub fn hard_drop(&mut self) -> usize {
        if !self.is_playing() {
            return 0;
        }
        self.state.hard_drop()
    }
}
