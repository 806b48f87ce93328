use blockfall_engine::Cell;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::style;

/// One arena cell, drawn two terminal columns wide.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const WIDTH: u16 = 2;
    pub const HEIGHT: u16 = 1;

    #[must_use]
    pub fn from_cell(cell: Cell, show_grid: bool) -> Self {
        match cell {
            Cell::Empty if show_grid => Self {
                style: style::GRID_DOT,
                symbol: ".",
            },
            Cell::Empty => Self {
                style: style::EMPTY,
                symbol: "",
            },
            Cell::Filled(kind) => Self {
                style: style::piece(kind.color_index()),
                symbol: "",
            },
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // A Paragraph fills the whole area with the style, not only the symbol.
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
