//! Core data structures: cells, the arena, the piece catalog and the active piece.
//!
//! Everything here is free of timing and randomness. [`Arena::collides`],
//! [`Arena::merge`] and [`PieceShape::rotated`] are the building blocks that
//! [`GameState`](crate::GameState) combines into game commands.

pub use self::{arena::*, piece::*, player::*};

pub(crate) mod arena;
pub(crate) mod piece;
pub(crate) mod player;
