use std::mem;

use tracing::{debug, info};

use crate::{
    PieceCollisionError,
    core::{
        arena::{Arena, Ruleset},
        piece::{PieceKind, RotationDirection},
        player::Player,
    },
};

use super::{GameConfig, GameEvent, piece_generator::PieceGenerator};

/// Horizontal move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            MoveDirection::Left => -1,
            MoveDirection::Right => 1,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            MoveDirection::Left => MoveDirection::Right,
            MoveDirection::Right => MoveDirection::Left,
        }
    }
}

/// Result of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece could not move; it was merged and a new piece spawned.
    Locked,
}

/// Arena, active piece and score, plus the commands that change them.
///
/// All commands are synchronous and never fail: a command that would cause a
/// collision is simply not applied. The only "failure" the game knows, a
/// piece that collides the moment it spawns, empties the arena and zeroes the
/// score in place; it is reported as [`GameEvent::BoardOverflow`].
///
/// Every spawn, lock, clear and overflow is queued as a [`GameEvent`]. The
/// queue is unbounded, so hosts must call [`drain_events`](Self::drain_events)
/// regularly, typically once per frame.
///
/// # Example
///
/// ```
/// use blockfall_engine::{GameConfig, GameState, MoveDirection, RotationDirection};
///
/// let mut state = GameState::new(&GameConfig::default());
/// state.move_piece(MoveDirection::Left);
/// state.rotate_piece(RotationDirection::Clockwise);
/// state.hard_drop();
/// state.soft_drop_tick(); // locks the piece and spawns the next one
/// state.sweep_rows();
///
/// for event in state.drain_events() {
///     println!("{event:?}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    arena: Arena,
    player: Player,
    score: usize,
    score_per_row: usize,
    rules: Ruleset,
    generator: PieceGenerator,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Creates a game with an empty arena and a freshly spawned piece.
    ///
    /// The piece sequence is seeded from `config.seed` when present.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let generator = config
            .seed
            .map_or_else(PieceGenerator::new, PieceGenerator::with_seed);
        Self::with_generator(config, generator)
    }

    #[must_use]
    pub fn with_generator(config: &GameConfig, mut generator: PieceGenerator) -> Self {
        let first = generator.next_kind();
        let mut state = Self {
            arena: Arena::new(config.arena_width, config.arena_height),
            player: Player::spawn(first, config.arena_width),
            score: 0,
            score_per_row: config.score_per_row,
            rules: config.rules,
            generator,
            events: Vec::new(),
        };
        state.spawn_piece_of(first);
        state
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Mutable access for hosts that prepare a board (puzzles, tests).
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn rules(&self) -> Ruleset {
        self.rules
    }

    /// Replaces the active piece if it fits.
    pub fn set_player(&mut self, player: Player) -> Result<(), PieceCollisionError> {
        if self.collides(&player) {
            return Err(PieceCollisionError);
        }
        self.player = player;
        Ok(())
    }

    /// Removes and returns the events recorded since the last call.
    ///
    /// Events accumulate until drained.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    fn collides(&self, player: &Player) -> bool {
        self.arena.collides(player, self.rules)
    }

    /// Spawns a uniformly random piece at the top of the arena.
    pub fn spawn_piece(&mut self) {
        let kind = self.generator.next_kind();
        self.spawn_piece_of(kind);
    }

    /// Spawns a piece of the given kind at the top of the arena.
    ///
    /// If it collides right away the arena is cleared and the score reset.
    pub fn spawn_piece_of(&mut self, kind: PieceKind) {
        self.player = Player::spawn(kind, self.arena.width());
        debug!(%kind, x = self.player.x(), "piece spawned");
        self.events.push(GameEvent::PieceSpawned(kind));

        if self.collides(&self.player) {
            let score = mem::take(&mut self.score);
            self.arena.clear();
            info!(score, "board overflow, arena cleared");
            self.events.push(GameEvent::BoardOverflow { score });
        }
    }

    /// Shifts the active piece one column; returns `false` if it was blocked.
    pub fn move_piece(&mut self, direction: MoveDirection) -> bool {
        let moved = self.player.shifted(direction.offset(), 0);
        if self.collides(&moved) {
            return false;
        }
        self.player = moved;
        true
    }

    /// Advances the active piece one row, locking it if it cannot move.
    ///
    /// Locking merges the piece at its last valid position and spawns the next
    /// piece. This is the only way a piece becomes part of the arena.
    pub fn soft_drop_tick(&mut self) -> DropOutcome {
        let moved = self.player.down();
        if !self.collides(&moved) {
            self.player = moved;
            return DropOutcome::Moved;
        }

        self.arena.merge(&self.player);
        if let Some(kind) = self.player.kind() {
            debug!(%kind, x = self.player.x(), y = self.player.y(), "piece locked");
            self.events.push(GameEvent::PieceLocked(kind));
        }
        self.spawn_piece();
        DropOutcome::Locked
    }

    /// Drops the active piece as far as it goes without locking it.
    ///
    /// The lock happens on the next [`soft_drop_tick`](Self::soft_drop_tick).
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> usize {
        let mut rows = 0;
        loop {
            let moved = self.player.down();
            if self.collides(&moved) {
                return rows;
            }
            self.player = moved;
            rows += 1;
        }
    }

    /// Rotates the active piece, kicking it sideways if needed.
    ///
    /// Kicks try column offsets `+1, -1, +2, -2, ...` from the original column
    /// (cumulative shifts of `+1, -2, +3, -4, ...`). Once the next shift would
    /// exceed the shape size the rotation is abandoned and the piece is left
    /// as it was. Returns whether the rotation happened.
    pub fn rotate_piece(&mut self, direction: RotationDirection) -> bool {
        let size = i32::try_from(self.player.shape().size()).unwrap_or(i32::MAX);
        let mut rotated = self.player.rotated(direction);
        let mut offset: i32 = 1;
        while self.collides(&rotated) {
            rotated = rotated.shifted(offset, 0);
            offset = -(offset + offset.signum());
            if offset > size {
                debug!(?direction, "rotation blocked");
                return false;
            }
        }
        self.player = rotated;
        true
    }

    /// Clears full rows and awards points for each one.
    ///
    /// Returns the number of rows cleared.
    pub fn sweep_rows(&mut self) -> usize {
        let rows = self.arena.sweep(self.rules.clear_top_row);
        if rows > 0 {
            self.score += rows * self.score_per_row;
            debug!(rows, score = self.score, "rows cleared");
            self.events.push(GameEvent::RowsCleared {
                rows,
                score: self.score,
            });
        }
        rows
    }
}
