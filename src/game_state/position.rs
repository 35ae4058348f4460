//! Board coordinates.
//!
//! Files and ranks are 1-based (`file 1 == a`, `rank 1 == White's back rank`).
//! Any `i8` pair is a constructible `Position`; whether it lies on the board is
//! answered by [`Position::is_on_board`], and the board itself is the one place
//! that refuses off-board access.

use crate::game_state::chess_rules::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    file: i8,
    rank: i8,
}

impl Position {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 1 && self.file <= BOARD_SIZE && self.rank >= 1 && self.rank <= BOARD_SIZE
    }

    /// Shift by `(d_file, d_rank)`, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file.checked_add(d_file)?;
        let rank = self.rank.checked_add(d_rank)?;
        let shifted = Self::new(file, rank);
        shifted.is_on_board().then_some(shifted)
    }

    /// Zero-based `(rank, file)` array index, or `None` off the board.
    #[inline]
    pub(crate) fn grid_index(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some(((self.rank - 1) as usize, (self.file - 1) as usize))
        } else {
            None
        }
    }

    /// Every on-board square, rank by rank from a1 to h8.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|rank| (1..=BOARD_SIZE).map(move |file| Position::new(file, rank)))
    }
}
