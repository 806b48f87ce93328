use crate::PieceKind;

/// Notable state changes recorded by [`GameState`](super::GameState).
///
/// The state machine itself never stops; events let a host react to things
/// like a board overflow (e.g. by flashing a "game over" banner) without the
/// core having a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameEvent {
    /// A new active piece entered the arena.
    PieceSpawned(PieceKind),
    /// The active piece was merged into the arena.
    PieceLocked(PieceKind),
    /// A sweep removed `rows` full rows; `score` is the new total.
    RowsCleared { rows: usize, score: usize },
    /// A fresh piece collided on spawn, so the arena was emptied and the
    /// score reset. `score` is the score that was lost.
    BoardOverflow { score: usize },
}
