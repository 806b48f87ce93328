use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use blockfall_engine::{MoveDirection, RotationDirection};

use super::InputCommand;

/// Pointer position in virtual pixels. One arena cell is
/// [`CELL_PIXELS`](super::CELL_PIXELS) wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Commands produced by a single pointer event. A drag can both move and
/// rotate at once.
pub type GestureCommands = ArrayVec<InputCommand, 2>;

/// Turns press/drag/release pointer events into game commands.
///
/// Drag distances accumulate separately per axis:
///
/// - a horizontal total of at least [`MOVE_THRESHOLD`](Self::MOVE_THRESHOLD)
///   pixels either way moves the piece one column and restarts both totals;
/// - a vertical total at or below [`ROTATE_TRIGGER`](Self::ROTATE_TRIGGER)
///   (an upward drag) rotates clockwise and restarts the vertical total.
///
/// Two presses within [`DOUBLE_PRESS_WINDOW`](Self::DOUBLE_PRESS_WINDOW)
/// hard-drop the piece.
#[derive(Debug, Clone, Default)]
pub struct GestureDecoder {
    last_pos: Option<PixelPos>,
    move_counter: i32,
    rotate_counter: i32,
    last_press: Option<Instant>,
}

impl GestureDecoder {
    pub const MOVE_THRESHOLD: i32 = 24;
    pub const ROTATE_TRIGGER: i32 = -20;
    pub const DOUBLE_PRESS_WINDOW: Duration = Duration::from_millis(500);

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, pos: PixelPos, now: Instant) -> GestureCommands {
        self.reset_counters();
        self.last_pos = Some(pos);

        let mut commands = GestureCommands::new();
        let is_double = self
            .last_press
            .is_some_and(|prev| now.saturating_duration_since(prev) <= Self::DOUBLE_PRESS_WINDOW);
        if is_double {
            // a third press starts a new pair
            self.last_press = None;
            commands.push(InputCommand::HardDrop);
        } else {
            self.last_press = Some(now);
        }
        commands
    }

    pub fn drag(&mut self, pos: PixelPos) -> GestureCommands {
        let mut commands = GestureCommands::new();
        let Some(last) = self.last_pos.replace(pos) else {
            return commands;
        };

        self.move_counter += pos.x - last.x;
        self.rotate_counter += pos.y - last.y;

        if self.move_counter.abs() >= Self::MOVE_THRESHOLD {
            let direction = if self.move_counter > 0 {
                MoveDirection::Right
            } else {
                MoveDirection::Left
            };
            commands.push(InputCommand::Move(direction));
            self.reset_counters();
        }
        if self.rotate_counter <= Self::ROTATE_TRIGGER {
            commands.push(InputCommand::Rotate(RotationDirection::Clockwise));
            self.rotate_counter = 0;
        }
        commands
    }

    pub fn release(&mut self) {
        self.reset_counters();
        self.last_pos = None;
    }

    fn reset_counters(&mut self) {
        self.move_counter = 0;
        self.rotate_counter = 0;
    }
}
