use super::{
    arena::Cell,
    piece::{PieceKind, PieceShape, RotationDirection},
};

/// The active falling piece: a shape and the arena offset of its top-left cell.
///
/// Coordinates are signed because under the classic rules a piece may move
/// past the left edge of the arena.
///
/// Players are plain values. Movement and rotation return new players, and the
/// game state only commits one after checking it for collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    shape: PieceShape,
    x: i32,
    y: i32,
}

impl Player {
    #[must_use]
    pub const fn new(shape: PieceShape, x: i32, y: i32) -> Self {
        Self { shape, x, y }
    }

    /// Places the canonical shape of `kind` on row 0, centered horizontally.
    ///
    /// The column is `floor(arena_width / 2) - ceil(size / 2)`.
    #[must_use]
    pub fn spawn(kind: PieceKind, arena_width: usize) -> Self {
        let shape = kind.shape();
        let half_arena = i32::try_from(arena_width / 2).unwrap_or(i32::MAX);
        let half_piece = i32::try_from(shape.size().div_ceil(2)).unwrap_or(0);
        Self::new(shape, half_arena - half_piece, 0)
    }

    #[must_use]
    pub const fn shape(&self) -> &PieceShape {
        &self.shape
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub fn kind(&self) -> Option<PieceKind> {
        self.shape.kind()
    }

    /// Iterates `(x, y, cell)` in arena coordinates over the filled cells.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.shape.occupied_cells().map(move |(dx, dy, cell)| {
            // Piece grids are at most 4×4, so the offsets always fit.
            #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let (dx, dy) = (dx as i32, dy as i32);
            (self.x + dx, self.y + dy, cell)
        })
    }

    #[must_use]
    pub const fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            shape: self.shape,
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    #[must_use]
    pub const fn left(&self) -> Self {
        self.shifted(-1, 0)
    }

    #[must_use]
    pub const fn right(&self) -> Self {
        self.shifted(1, 0)
    }

    #[must_use]
    pub const fn down(&self) -> Self {
        self.shifted(0, 1)
    }

    #[must_use]
    pub const fn up(&self) -> Self {
        self.shifted(0, -1)
    }

    /// Returns the player with its shape turned by 90°, at the same offset.
    #[must_use]
    pub fn rotated(&self, direction: RotationDirection) -> Self {
        Self {
            shape: self.shape.rotated(direction),
            x: self.x,
            y: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_centered() {
        assert_eq!(Player::spawn(PieceKind::O, 12).x(), 5);
        assert_eq!(Player::spawn(PieceKind::T, 12).x(), 4);
        assert_eq!(Player::spawn(PieceKind::I, 12).x(), 4);
        assert_eq!(Player::spawn(PieceKind::T, 13).x(), 4);
        assert_eq!(Player::spawn(PieceKind::I, 4).x(), 0);
        assert!(Player::spawn(PieceKind::L, 12).y() == 0);
    }

    #[test]
    fn test_occupied_positions_are_offset() {
        let player = Player::new(PieceKind::O.shape(), -1, 3);
        let positions: Vec<_> = player.occupied_positions().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(positions, vec![(-1, 3), (0, 3), (-1, 4), (0, 4)]);
    }

    #[test]
    fn test_moves_keep_shape() {
        let player = Player::spawn(PieceKind::S, 12);
        assert_eq!(player.left().x(), player.x() - 1);
        assert_eq!(player.right().x(), player.x() + 1);
        assert_eq!(player.down().y(), 1);
        assert_eq!(player.down().up(), player);
        assert_eq!(player.left().shape(), player.shape());
        assert_eq!(player.kind(), Some(PieceKind::S));
    }
}
