//! Canonical chess-rule constants.
//!
//! Static layout and geometry shared by board setup, move generation, and
//! check detection. Team-relative pawn geometry lives here so generators and
//! attack probes agree on what "forward" means.

use crate::game_state::chess_types::{PieceKind, Team};

pub const BOARD_SIZE: i8 = 8;

/// Back-rank order from the a-file to the h-file, identical for both teams.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Kinds a pawn may become on the far rank.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// File the king starts on; rooks start on the two corner files.
pub const KING_HOME_FILE: i8 = 5;
pub const ROOK_HOME_FILES: [i8; 2] = [1, BOARD_SIZE];

#[inline]
pub const fn home_rank(team: Team) -> i8 {
    match team {
        Team::White => 1,
        Team::Black => BOARD_SIZE,
    }
}

#[inline]
pub const fn pawn_start_rank(team: Team) -> i8 {
    match team {
        Team::White => 2,
        Team::Black => BOARD_SIZE - 1,
    }
}

/// Rank step a pawn of `team` takes when advancing.
#[inline]
pub const fn pawn_direction(team: Team) -> i8 {
    match team {
        Team::White => 1,
        Team::Black => -1,
    }
}

#[inline]
pub const fn promotion_rank(team: Team) -> i8 {
    home_rank(team.opposite())
}
