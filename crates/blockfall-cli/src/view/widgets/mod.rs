use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    arena_display::*, cell_display::*, help_display::*, score_display::*, session_display::*,
};

mod arena_display;
mod cell_display;
mod help_display;
mod score_display;
mod session_display;

mod color {
    use ratatui::style::Color;

    // Piece palette, indexed by cell color index 1..=7
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const PURPLE: Color = Color::Rgb(128, 0, 128);
    pub const ORANGE: Color = Color::Rgb(255, 165, 0);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const TOMATO: Color = Color::Rgb(255, 99, 71);

    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const GRID_DOT: Style = fg_bg(color::DARK_GRAY, color::BLACK);
    pub const LABEL: Style = fg_bg(color::GRAY, color::BLACK);
    pub const PAUSED_POPUP: Style = fg_bg(color::BLACK, color::YELLOW);
    pub const RESET_POPUP: Style = fg_bg(color::WHITE, color::RED);

    const PIECE: [Style; 7] = [
        bg_only(color::RED),
        bg_only(color::BLUE),
        bg_only(color::YELLOW),
        bg_only(color::PURPLE),
        bg_only(color::ORANGE),
        bg_only(color::CYAN),
        bg_only(color::TOMATO),
    ];

    /// Style for a cell color index; index 0 (and anything unknown) is empty.
    #[must_use]
    pub fn piece(color_index: u8) -> Style {
        usize::from(color_index)
            .checked_sub(1)
            .and_then(|i| PIECE.get(i))
            .copied()
            .unwrap_or(EMPTY)
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let probe = Rect::new(0, 0, 100, 100);
    let inner = block.map_or(probe, |block| block.inner(probe));
    probe.height - inner.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let probe = Rect::new(0, 0, 100, 100);
    let inner = block.map_or(probe, |block| block.inner(probe));
    probe.width - inner.width
}

fn saturating_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
