use blockfall_engine::{GameSession, SessionState};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use super::{ArenaDisplay, ScoreDisplay, color, style};

/// The whole play screen: score panel beside the arena, plus popups.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    show_grid: bool,
    show_reset_banner: bool,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            show_grid: true,
            show_reset_banner: false,
        }
    }

    pub fn show_grid(self, show_grid: bool) -> Self {
        Self { show_grid, ..self }
    }

    pub fn show_reset_banner(self, show_reset_banner: bool) -> Self {
        Self {
            show_reset_banner,
            ..self
        }
    }

    fn popup(&self) -> Option<(&'static str, Style)> {
        match self.session.session_state() {
            SessionState::Paused => Some(("PAUSED", style::PAUSED_POPUP)),
            SessionState::Playing if self.show_reset_banner => {
                Some(("BOARD RESET", style::RESET_POPUP))
            }
            SessionState::Playing => None,
        }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = match self.session.session_state() {
            SessionState::Playing => color::WHITE,
            SessionState::Paused => color::YELLOW,
        };

        let arena = ArenaDisplay::new(self.session.arena())
            .player(*self.session.player())
            .show_grid(self.show_grid)
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let score = ScoreDisplay::new(self.session).block(
            Block::bordered()
                .title(Line::from("BLOCKFALL").centered())
                .padding(Padding::horizontal(1))
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [score_column, arena_column] = Layout::horizontal([
            Constraint::Length(score.width()),
            Constraint::Length(arena.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);
        let [score_area] =
            Layout::vertical([Constraint::Length(score.height())]).areas(score_column);
        let [arena_area] =
            Layout::vertical([Constraint::Length(arena.height())]).areas(arena_column);

        let arena_width = arena.width();
        score.render(score_area, buf);
        arena.render(arena_area, buf);

        if let Some((text, style)) = self.popup() {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area = arena_area.centered(Constraint::Length(arena_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::GameConfig;

    use super::*;

    #[test]
    fn test_popup_follows_session_state() {
        let mut session = GameSession::new(&GameConfig::default());
        assert_eq!(SessionDisplay::new(&session).popup(), None);
        assert_eq!(
            SessionDisplay::new(&session)
                .show_reset_banner(true)
                .popup()
                .map(|(text, _)| text),
            Some("BOARD RESET")
        );

        session.toggle_pause();
        assert_eq!(
            SessionDisplay::new(&session)
                .show_reset_banner(true)
                .popup()
                .map(|(text, _)| text),
            Some("PAUSED")
        );
    }

    #[test]
    fn test_renders_paused_popup() {
        let mut session = GameSession::new(&GameConfig::default());
        session.toggle_pause();
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        SessionDisplay::new(&session).render(area, &mut buf);

        let screen = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        assert!(screen.iter().any(|row| row.contains("PAUSED")));
        assert!(screen.iter().any(|row| row.contains("SCORE:")));
    }
}
