use std::iter;

use blockfall_engine::GameSession;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

/// Side panel mirroring the score and the active rules.
pub struct ScoreDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        14 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        super::saturating_u16(ROWS.len()) + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    Label(&'static str),
    Value(fn(&GameSession) -> String),
}

const ROWS: &[Row] = &[
    Row::Label("SCORE:"),
    Row::Value(|session| session.score().to_string()),
    Row::Empty,
    Row::Label("ARENA:"),
    Row::Value(|session| {
        let arena = session.arena();
        format!("{}x{}", arena.width(), arena.height())
    }),
    Row::Empty,
    Row::Label("WALLS:"),
    Row::Value(|session| on_off(session.rules().wall_collision)),
    Row::Label("TOP ROW:"),
    Row::Value(|session| {
        if session.rules().clear_top_row {
            "clears".to_owned()
        } else {
            "stays".to_owned()
        }
    }),
];

fn on_off(flag: bool) -> String {
    let text = if flag { "on" } else { "off" };
    text.to_owned()
}

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows = Layout::vertical(iter::repeat_n(Constraint::Length(1), ROWS.len())).split(area);
        for (row, area) in iter::zip(ROWS, rows.iter()) {
            match row {
                Row::Empty => {}
                Row::Label(label) => Line::styled(*label, style::LABEL).render(*area, buf),
                Row::Value(value) => Line::styled(value(self.session), style::DEFAULT)
                    .right_aligned()
                    .render(*area, buf),
            }
        }
    }
}
