pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece colliding when setting active piece")]
pub struct PieceCollisionError;

/// A piece letter outside the `I O J L S Z T` catalog was requested.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown piece kind: {letter:?}")]
pub struct UnknownPieceKindError {
    letter: String,
}

impl UnknownPieceKindError {
    pub(crate) fn new(letter: impl ToString) -> Self {
        Self {
            letter: letter.to_string(),
        }
    }

    #[must_use]
    pub fn letter(&self) -> &str {
        &self.letter
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PieceSeedParseError {
    #[display("invalid seed: expected 32 hex digits, got {len} characters")]
    InvalidLength { len: usize },
    #[display("invalid seed: {text:?} is not hexadecimal")]
    InvalidHex { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("arena must be at least {min}x{min} cells, got {width}x{height}")]
    ArenaTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },
    #[display("drop interval must be greater than zero")]
    ZeroDropInterval,
}
