use std::str::FromStr;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use crate::UnknownPieceKindError;

use super::arena::Cell;

/// Enum representing the type of piece.
///
/// The set is closed: every piece that can appear in the arena is one of these
/// seven tetrominoes, keyed by its letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, derive_more::Display)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// J-piece.
    J = 2,
    /// L-piece.
    L = 3,
    /// S-piece.
    S = 4,
    /// Z-piece.
    Z = 5,
    /// T-piece.
    T = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl FromStr for PieceKind {
    type Err = UnknownPieceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PieceKind::from_char(c).ok_or_else(|| UnknownPieceKindError::new(s)),
            _ => Err(UnknownPieceKindError::new(s)),
        }
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All piece kinds, in catalog letter order `I O J L S Z T`.
    pub const ALL: [PieceKind; PieceKind::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Returns the canonical (spawn orientation) shape of this piece.
    #[must_use]
    pub const fn shape(self) -> PieceShape {
        PIECE_SHAPES[self as usize]
    }

    /// Returns the palette index (1..=7) used for cells of this piece.
    ///
    /// Index 0 is reserved for empty cells.
    #[must_use]
    pub const fn color_index(self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
            PieceKind::I => 7,
        }
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::T => 'T',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'T' => Some(PieceKind::T),
            _ => None,
        }
    }
}

/// Looks up the canonical shape for a piece letter.
///
/// Only the seven catalog letters are accepted; anything else is a caller bug
/// and is reported as [`UnknownPieceKindError`].
///
/// ```
/// use blockfall_engine::piece_for;
///
/// assert_eq!(piece_for('O').unwrap().size(), 2);
/// assert!(piece_for('Q').is_err());
/// ```
pub fn piece_for(letter: char) -> Result<PieceShape, UnknownPieceKindError> {
    PieceKind::from_char(letter)
        .map(PieceKind::shape)
        .ok_or_else(|| UnknownPieceKindError::new(letter))
}

/// Direction of a 90° rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RotationDirection {
    /// Positive direction.
    Clockwise,
    /// Negative direction.
    CounterClockwise,
}

impl RotationDirection {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }

    /// Maps a signed direction (`> 0` clockwise, otherwise counter-clockwise).
    #[must_use]
    pub const fn from_sign(direction: i32) -> Self {
        if direction > 0 {
            RotationDirection::Clockwise
        } else {
            RotationDirection::CounterClockwise
        }
    }
}

/// Largest bounding box of any catalog piece (the I-piece).
const MAX_PIECE_SIZE: usize = 4;

/// Square cell grid of a piece.
///
/// Only the top-left `size × size` region is meaningful; the rest of the
/// backing array stays empty. Shapes are plain values, so rotating returns a
/// new shape and never aliases the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    size: usize,
    cells: [[Cell; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

impl PieceShape {
    /// Width and height of the bounding box.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at column `x`, row `y` of the bounding box.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not less than [`size`](Self::size).
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.size && y < self.size);
        self.cells[y][x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells[..self.size].iter().map(|row| &row[..self.size])
    }

    /// Returns the piece kind shared by all filled cells.
    #[must_use]
    pub fn kind(&self) -> Option<PieceKind> {
        self.occupied_cells().find_map(|(_, _, cell)| cell.kind())
    }

    /// Iterates `(x, y, cell)` over the non-empty cells of the grid.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_filled())
                .map(move |(x, cell)| (x, y, *cell))
        })
    }

    /// Rotates the grid by 90°.
    ///
    /// The grid is transposed, then each row is reversed for a clockwise turn,
    /// or the row order is reversed for a counter-clockwise turn.
    #[must_use]
    pub fn rotated(&self, direction: RotationDirection) -> Self {
        let n = self.size;
        let mut cells = [[Cell::Empty; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for (y, row) in cells[..n].iter_mut().enumerate() {
            for (x, cell) in row[..n].iter_mut().enumerate() {
                *cell = self.cells[x][y];
            }
        }
        match direction {
            RotationDirection::Clockwise => {
                for row in &mut cells[..n] {
                    row[..n].reverse();
                }
            }
            RotationDirection::CounterClockwise => cells[..n].reverse(),
        }
        Self { size: n, cells }
    }
}

/// Builds a catalog shape from a `size × size` pattern where `true` marks a filled cell.
const fn shape(kind: PieceKind, size: usize, pattern: [[bool; MAX_PIECE_SIZE]; MAX_PIECE_SIZE]) -> PieceShape {
    let mut cells = [[Cell::Empty; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
    let mut y = 0;
    while y < size {
        let mut x = 0;
        while x < size {
            if pattern[y][x] {
                cells[y][x] = Cell::Filled(kind);
            }
            x += 1;
        }
        y += 1;
    }
    PieceShape { size, cells }
}

const PIECE_SHAPES: [PieceShape; PieceKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    const EEEE: [bool; 4] = [E; 4];
    [
        // I-piece
        shape(PieceKind::I, 4, [[E, C, E, E], [E, C, E, E], [E, C, E, E], [E, C, E, E]]),
        // O-piece
        shape(PieceKind::O, 2, [[C, C, E, E], [C, C, E, E], EEEE, EEEE]),
        // J-piece
        shape(PieceKind::J, 3, [[E, C, E, E], [E, C, E, E], [C, C, E, E], EEEE]),
        // L-piece
        shape(PieceKind::L, 3, [[E, C, E, E], [E, C, E, E], [E, C, C, E], EEEE]),
        // S-piece
        shape(PieceKind::S, 3, [[E, C, C, E], [C, C, E, E], EEEE, EEEE]),
        // Z-piece
        shape(PieceKind::Z, 3, [[C, C, E, E], [E, C, C, E], EEEE, EEEE]),
        // T-piece
        shape(PieceKind::T, 3, [[C, C, C, E], [E, C, E, E], EEEE, EEEE]),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "x < self.size")]
    fn test_shape_cell_outside_bounding_box_panics() {
        let _ = PieceKind::O.shape().cell(2, 0);
    }

    fn color_grid(shape: &PieceShape) -> Vec<Vec<u8>> {
        shape
            .rows()
            .map(|row| row.iter().map(|cell| cell.color_index()).collect())
            .collect()
    }

    #[test]
    fn test_catalog_shapes_are_square_and_single_colored() {
        for kind in PieceKind::ALL {
            let shape = kind.shape();
            assert_eq!(shape.rows().count(), shape.size());
            for row in shape.rows() {
                assert_eq!(row.len(), shape.size());
            }

            let colors: Vec<u8> = shape
                .occupied_cells()
                .map(|(_, _, cell)| cell.color_index())
                .collect();
            assert_eq!(colors.len(), 4, "{kind} should have four cells");
            assert!(colors.iter().all(|&c| c == kind.color_index()));
            assert_eq!(shape.kind(), Some(kind));
        }
    }

    #[test]
    fn test_catalog_matches_color_table() {
        assert_eq!(color_grid(&PieceKind::T.shape()), vec![
            vec![1, 1, 1],
            vec![0, 1, 0],
            vec![0, 0, 0]
        ]);
        assert_eq!(color_grid(&PieceKind::O.shape()), vec![vec![2, 2], vec![2, 2]]);
        assert_eq!(color_grid(&PieceKind::J.shape()), vec![
            vec![0, 4, 0],
            vec![0, 4, 0],
            vec![4, 4, 0]
        ]);
        assert_eq!(color_grid(&PieceKind::I.shape()), vec![
            vec![0, 7, 0, 0],
            vec![0, 7, 0, 0],
            vec![0, 7, 0, 0],
            vec![0, 7, 0, 0]
        ]);
    }

    #[test]
    fn test_rotate_clockwise() {
        let rotated = PieceKind::T.shape().rotated(RotationDirection::Clockwise);
        assert_eq!(color_grid(&rotated), vec![
            vec![0, 0, 1],
            vec![0, 1, 1],
            vec![0, 0, 1]
        ]);
    }

    #[test]
    fn test_rotate_counter_clockwise() {
        let rotated = PieceKind::T.shape().rotated(RotationDirection::CounterClockwise);
        assert_eq!(color_grid(&rotated), vec![
            vec![1, 0, 0],
            vec![1, 1, 0],
            vec![1, 0, 0]
        ]);
    }

    #[test]
    fn test_rotate_then_opposite_restores() {
        for kind in PieceKind::ALL {
            let shape = kind.shape();
            for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
                let back = shape.rotated(direction).rotated(direction.opposite());
                assert_eq!(back, shape);
            }
        }
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        for kind in PieceKind::ALL {
            let shape = kind.shape();
            let mut rotated = shape;
            for _ in 0..4 {
                rotated = rotated.rotated(RotationDirection::Clockwise);
            }
            assert_eq!(rotated, shape);
        }
    }

    #[test]
    fn test_piece_kind_char_conversion() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
            assert_eq!(kind.as_char().to_string().parse::<PieceKind>().unwrap(), kind);
        }
        assert_eq!(PieceKind::from_char('X'), None);
        assert_eq!(PieceKind::from_char('t'), None);
    }

    #[test]
    fn test_unknown_letters_are_errors() {
        assert!(piece_for('X').is_err());
        assert!("".parse::<PieceKind>().is_err());
        assert!("TT".parse::<PieceKind>().is_err());

        let err = "q".parse::<PieceKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown piece kind: \"q\"");
    }

    #[test]
    fn test_piece_kind_serialization() {
        let serialized = serde_json::to_string(&PieceKind::S).unwrap();
        assert_eq!(serialized, "\"S\"");
        let deserialized: PieceKind = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, PieceKind::S);
    }
}
