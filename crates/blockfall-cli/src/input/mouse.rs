use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{GestureCommands, GestureDecoder, PixelPos};

/// Virtual pixels per arena cell.
pub const CELL_PIXELS: i32 = 20;
/// An arena cell is drawn two terminal columns wide and one row tall.
pub const COLUMN_PIXELS: i32 = CELL_PIXELS / 2;
pub const ROW_PIXELS: i32 = CELL_PIXELS;

#[must_use]
pub fn pixel_position(column: u16, row: u16) -> PixelPos {
    PixelPos::new(
        i32::from(column) * COLUMN_PIXELS,
        i32::from(row) * ROW_PIXELS,
    )
}

/// Feeds a left-button mouse event to the gesture decoder.
pub fn decode_mouse(
    decoder: &mut GestureDecoder,
    event: &MouseEvent,
    now: Instant,
) -> GestureCommands {
    let pos = pixel_position(event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => decoder.press(pos, now),
        MouseEventKind::Drag(MouseButton::Left) => decoder.drag(pos),
        MouseEventKind::Up(MouseButton::Left) => {
            decoder.release();
            GestureCommands::new()
        }
        _ => GestureCommands::new(),
    }
}
