use std::iter;

use blockfall_engine::{Arena, Player};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::CellDisplay;

/// Settled cells with the falling piece drawn on top.
#[derive(Debug)]
pub struct ArenaDisplay<'a> {
    arena: &'a Arena,
    player: Option<Player>,
    show_grid: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ArenaDisplay<'a> {
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            player: None,
            show_grid: true,
            block: None,
        }
    }

    pub fn player(self, player: Player) -> Self {
        Self {
            player: Some(player),
            ..self
        }
    }

    pub fn show_grid(self, show_grid: bool) -> Self {
        Self { show_grid, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        super::saturating_u16(self.arena.width())
            .saturating_mul(CellDisplay::WIDTH)
            .saturating_add(super::block_horizontal_margin(self.block.as_ref()))
    }

    pub fn height(&self) -> u16 {
        super::saturating_u16(self.arena.height())
            .saturating_mul(CellDisplay::HEIGHT)
            .saturating_add(super::block_vertical_margin(self.block.as_ref()))
    }
}

impl Widget for ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        // Cells of the piece hanging past a side are not drawn.
        let mut arena = self.arena.clone();
        if let Some(player) = &self.player {
            arena.merge(player);
        }

        let horizontal = Layout::horizontal(iter::repeat_n(
            Constraint::Length(CellDisplay::WIDTH),
            arena.width(),
        ))
        .flex(Flex::Center);
        let vertical = Layout::vertical(iter::repeat_n(
            Constraint::Length(CellDisplay::HEIGHT),
            arena.height(),
        ));

        for (row_area, row) in iter::zip(vertical.split(area).iter(), arena.rows()) {
            for (cell_area, cell) in iter::zip(horizontal.split(*row_area).iter(), row) {
                CellDisplay::from_cell(*cell, self.show_grid).render(*cell_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{Cell, PieceKind};

    use super::*;
    use crate::view::widgets::style;

    fn render(display: &ArenaDisplay<'_>) -> Buffer {
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_size_includes_border() {
        let arena = Arena::new(12, 20);
        let display = ArenaDisplay::new(&arena).block(BlockWidget::bordered());
        assert_eq!(display.width(), 26);
        assert_eq!(display.height(), 22);
    }

    #[test]
    fn test_draws_grid_settled_cells_and_player() {
        let mut arena = Arena::new(4, 4);
        arena.set_cell(0, 3, Cell::Filled(PieceKind::T));
        let player = Player::new(PieceKind::O.shape(), 2, 0);
        let buf = render(&ArenaDisplay::new(&arena).player(player));

        assert_eq!(buf[(0, 3)].bg, style::piece(PieceKind::T.color_index()).bg.unwrap());
        assert_eq!(buf[(4, 0)].bg, style::piece(PieceKind::O.color_index()).bg.unwrap());
        assert_eq!(buf[(7, 1)].bg, style::piece(PieceKind::O.color_index()).bg.unwrap());
        assert_eq!(buf[(0, 0)].symbol(), ".");
        // the source arena is left untouched
        assert_eq!(arena.cell(2, 0), Some(Cell::Empty));
    }

    #[test]
    fn test_grid_can_be_hidden() {
        let arena = Arena::new(4, 4);
        let buf = render(&ArenaDisplay::new(&arena).show_grid(false));
        assert!(buf.content().iter().all(|cell| cell.symbol() == " "));
    }

    #[test]
    fn test_player_past_the_edge_is_clipped() {
        let arena = Arena::new(4, 4);
        let player = Player::new(PieceKind::O.shape(), -1, 0);
        let buf = render(&ArenaDisplay::new(&arena).player(player).show_grid(false));
        let o_bg = style::piece(PieceKind::O.color_index()).bg.unwrap();
        assert_eq!(buf[(0, 0)].bg, o_bg);
        assert_eq!(buf[(2, 0)].bg, style::EMPTY.bg.unwrap());
    }
}
