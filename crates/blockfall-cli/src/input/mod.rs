//! Decoding of terminal input into game commands.
//!
//! Keys map one-to-one onto commands ([`key_command`]). The mouse stands in for
//! a touch screen: [`decode_mouse`] converts terminal cells into virtual pixels
//! and feeds a [`GestureDecoder`], which turns drags and double presses into
//! moves, rotations and hard drops.

use blockfall_engine::{MoveDirection, RotationDirection};

pub use self::{gesture::*, keys::*, mouse::*};

mod gesture;
mod keys;
mod mouse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputCommand {
    Move(MoveDirection),
    Rotate(RotationDirection),
    SoftDrop,
    HardDrop,
    TogglePause,
    Quit,
}
