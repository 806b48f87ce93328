use serde::{Deserialize, Serialize};

use super::{piece::PieceKind, player::Player};

/// A single cell of the arena or of a piece grid.
///
/// Cells map onto the palette index used by the presentation layer: `0` for
/// [`Cell::Empty`] and `1..=7` for a filled cell (see [`PieceKind::color_index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a block of the given piece type.
    Filled(PieceKind),
}

impl Cell {
    #[must_use]
    pub const fn color_index(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(kind) => kind.color_index(),
        }
    }

    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Filled(kind) => Some(kind),
        }
    }
}

/// Switches between the classic rules and a corrected variant.
///
/// The classic rules (the default) carry two known quirks:
///
/// - collision only checks the row range, so a piece may hang past the left or
///   right edge as long as no settled cell is there;
/// - the line sweep never looks at row 0, so the top row is never cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Ruleset {
    /// Treat columns outside the arena as solid.
    pub wall_collision: bool,
    /// Let the sweep clear row 0 as well.
    pub clear_top_row: bool,
}

/// Grid of settled cells.
///
/// Row 0 is the top of the arena; `y` grows downward. The dimensions are fixed
/// at creation time and every row always holds exactly `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Arena {
    /// Creates an arena of `height` rows by `width` columns, all empty.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![Cell::Empty; width]; height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the cell at `(x, y)`, or `None` outside the arena.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y)?.get(x).copied()
    }

    /// Overwrites the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the arena.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|cell| cell.is_empty())
    }

    /// A row is full when it has at least one cell and none is empty.
    ///
    /// # Panics
    ///
    /// Panics if `y` lies outside the arena.
    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        let row = &self.rows[y];
        !row.is_empty() && row.iter().all(|cell| cell.is_filled())
    }

    /// Resets every cell to empty, keeping the dimensions.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(Cell::Empty);
        }
    }

    /// Tests whether `player` overlaps a settled cell or leaves the arena.
    ///
    /// Rows outside `[0, height)` always collide. Columns outside
    /// `[0, width)` collide only when [`Ruleset::wall_collision`] is set.
    #[must_use]
    pub fn collides(&self, player: &Player, rules: Ruleset) -> bool {
        player.occupied_positions().any(|(x, y, _)| {
            let Some(row) = usize::try_from(y).ok().and_then(|y| self.rows.get(y)) else {
                return true;
            };
            match usize::try_from(x).ok().and_then(|x| row.get(x)) {
                Some(cell) => cell.is_filled(),
                None => rules.wall_collision,
            }
        })
    }

    /// Writes the cells of `player` into the arena.
    ///
    /// Cells outside the arena are dropped; they can only exist when the
    /// piece hangs past a side edge under the classic rules.
    pub fn merge(&mut self, player: &Player) {
        for (x, y, cell) in player.occupied_positions() {
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            if let Some(slot) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
                *slot = cell;
            }
        }
    }

    /// Removes full rows and shifts everything above them down.
    ///
    /// Rows are scanned from the bottom up. A full row is taken out, emptied
    /// and pushed back in at the top, and the same index is examined again so
    /// that cascaded rows are checked too. Row 0 is skipped unless
    /// `include_top_row` is set.
    ///
    /// Returns the number of rows removed.
    pub fn sweep(&mut self, include_top_row: bool) -> usize {
        let lowest = usize::from(!include_top_row);
        let Some(mut y) = self.height().checked_sub(1) else {
            return 0;
        };

        let mut cleared = 0;
        while y >= lowest {
            if self.is_row_full(y) {
                let mut row = self.rows.remove(y);
                row.fill(Cell::Empty);
                self.rows.insert(0, row);
                cleared += 1;
                continue;
            }
            if y == 0 {
                break;
            }
            y -= 1;
        }
        cleared
    }
}
