use std::time::{Duration, Instant};

use blockfall_engine::{GameConfig, GameEvent, GameSession, SessionState};
use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use tracing::{debug, info};

use crate::{
    input::{self, GestureCommands, GestureDecoder, InputCommand, KEY_BINDINGS},
    view::widgets::{HelpDisplay, SessionDisplay},
};

/// How long the "BOARD RESET" banner stays up after an overflow.
const RESET_BANNER_DURATION: Duration = Duration::from_millis(1500);

const PAUSED_BINDINGS: &[(&[&str], &str)] = &[(&["P"], "Resume"), (&["Q"], "Quit")];

#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    gestures: GestureDecoder,
    show_grid: bool,
    reset_banner: Option<Duration>,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(config: &GameConfig, show_grid: bool) -> Self {
        let mut screen = Self {
            session: GameSession::new(config),
            gestures: GestureDecoder::new(),
            show_grid,
            reset_banner: None,
            is_exiting: false,
        };
        screen.process_game_events();
        screen
    }

    pub fn score(&self) -> usize {
        self.session.score()
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        let commands = match event {
            Event::Key(key) => input::key_command(*key).into_iter().collect(),
            Event::Mouse(mouse) => input::decode_mouse(&mut self.gestures, mouse, now),
            _ => GestureCommands::new(),
        };
        for command in commands {
            self.apply(command);
        }
        self.process_game_events();
    }

    pub fn update(&mut self, elapsed: Duration) {
        self.session.update(elapsed);
        if self.session.is_playing() {
            self.reset_banner = self
                .reset_banner
                .and_then(|remaining| remaining.checked_sub(elapsed));
        }
        self.process_game_events();
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let bindings = match self.session.session_state() {
            SessionState::Playing => KEY_BINDINGS,
            SessionState::Paused => PAUSED_BINDINGS,
        };
        let session = SessionDisplay::new(&self.session)
            .show_grid(self.show_grid)
            .show_reset_banner(self.reset_banner.is_some());

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(session, main_area);
        frame.render_widget(HelpDisplay::new(bindings), help_area);
    }

    fn apply(&mut self, command: InputCommand) {
        match command {
            InputCommand::Move(direction) => _ = self.session.move_piece(direction),
            InputCommand::Rotate(direction) => _ = self.session.rotate_piece(direction),
            InputCommand::SoftDrop => _ = self.session.soft_drop(),
            InputCommand::HardDrop => _ = self.session.hard_drop(),
            InputCommand::TogglePause => self.session.toggle_pause(),
            InputCommand::Quit => self.is_exiting = true,
        }
    }

    fn process_game_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::PieceSpawned(_) | GameEvent::PieceLocked(_) => {}
                GameEvent::RowsCleared { rows, score } => debug!(rows, score, "rows cleared"),
                GameEvent::BoardOverflow { score } => {
                    info!(score, "showing board reset banner");
                    self.reset_banner = Some(RESET_BANNER_DURATION);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{Cell, PieceKind, PieceSeed};
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn screen() -> PlayScreen {
        let config = GameConfig {
            seed: Some(PieceSeed::from(11)),
            ..GameConfig::default()
        };
        PlayScreen::new(&config, true)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 20,
            row: 5,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_keys_drive_the_piece() {
        let mut screen = screen();
        let now = Instant::now();
        let x = screen.session.player().x();

        screen.handle_event(&key(KeyCode::Left), now);
        assert_eq!(screen.session.player().x(), x - 1);
        screen.handle_event(&key(KeyCode::Down), now);
        assert_eq!(screen.session.player().y(), 1);
        screen.handle_event(&key(KeyCode::Char(' ')), now);
        assert!(screen.session.player().y() > 1);
        assert!(screen.session.arena().is_empty());
    }

    #[test]
    fn test_quit_and_pause() {
        let mut screen = screen();
        let now = Instant::now();
        screen.handle_event(&key(KeyCode::Char('p')), now);
        assert!(screen.session.session_state().is_paused());
        screen.handle_event(&key(KeyCode::Left), now);
        assert!(!screen.is_exiting());
        screen.handle_event(&key(KeyCode::Char('q')), now);
        assert!(screen.is_exiting());
    }

    #[test]
    fn test_double_click_hard_drops() {
        let mut screen = screen();
        let now = Instant::now();
        let down = click(MouseEventKind::Down(MouseButton::Left));
        let up = click(MouseEventKind::Up(MouseButton::Left));

        screen.handle_event(&down, now);
        screen.handle_event(&up, now);
        assert_eq!(screen.session.player().y(), 0);
        screen.handle_event(&down, now + Duration::from_millis(250));
        assert!(screen.session.player().y() > 0);
    }

    #[test]
    fn test_overflow_shows_banner_until_it_expires() {
        let mut screen = screen();
        let arena = screen.session.state_mut().arena_mut();
        for y in 0..arena.height() {
            for x in 0..arena.width() {
                arena.set_cell(x, y, Cell::Filled(PieceKind::Z));
            }
        }
        screen.session.state_mut().spawn_piece();
        screen.update(FRAME);
        assert!(screen.reset_banner.is_some());
        assert!(screen.session.arena().is_empty());

        screen.update(Duration::from_millis(1000));
        assert!(screen.reset_banner.is_some());
        screen.update(Duration::from_millis(1000));
        assert!(screen.reset_banner.is_none());
    }

    #[test]
    fn test_banner_waits_while_paused() {
        let mut screen = screen();
        screen.reset_banner = Some(RESET_BANNER_DURATION);
        screen.handle_event(&key(KeyCode::Char('p')), Instant::now());
        screen.update(Duration::from_secs(5));
        assert_eq!(screen.reset_banner, Some(RESET_BANNER_DURATION));
    }
}
