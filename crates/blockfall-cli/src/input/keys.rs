use blockfall_engine::{MoveDirection, RotationDirection};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputCommand;

/// Key bindings shown in the help line, as `(keys, action)`.
pub const KEY_BINDINGS: &[(&[&str], &str)] = &[
    (&["←", "→"], "Move"),
    (&["↑", "X"], "Rotate"),
    (&["Z"], "Rotate Back"),
    (&["↓"], "Soft Drop"),
    (&["Space"], "Hard Drop"),
    (&["P"], "Pause"),
    (&["Q"], "Quit"),
];

#[must_use]
pub fn key_command(key: KeyEvent) -> Option<InputCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let command = match key.code {
        KeyCode::Left => InputCommand::Move(MoveDirection::Left),
        KeyCode::Right => InputCommand::Move(MoveDirection::Right),
        KeyCode::Up | KeyCode::Char('x' | 'X') => {
            InputCommand::Rotate(RotationDirection::Clockwise)
        }
        KeyCode::Char('z' | 'Z') => InputCommand::Rotate(RotationDirection::CounterClockwise),
        KeyCode::Down => InputCommand::SoftDrop,
        KeyCode::Char(' ') => InputCommand::HardDrop,
        KeyCode::Char('p' | 'P') => InputCommand::TogglePause,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputCommand::Quit,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => InputCommand::Quit,
        _ => return None,
    };
    Some(command)
}
