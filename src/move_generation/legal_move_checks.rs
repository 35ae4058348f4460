//! Check detection by probing outward from the king.
//!
//! Rather than generating every enemy move, each attack pattern is probed in
//! reverse from the target square: pawn diagonals, knight offsets, adjacent
//! squares for the enemy king, and the first occupant of each ray.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    pawn_direction, DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS,
};
use crate::game_state::chess_types::{PieceKind, Team};
use crate::game_state::position::Position;
use crate::moves::ray_moves::first_occupant;

/// Whether `team`'s king is attacked.
///
/// A board without a king for `team` counts as in check, so a simulated
/// position where the king was captured is never mistaken for a safe one.
pub fn is_in_check(board: &Board, team: Team) -> bool {
    match board.find_king(team) {
        Some(king) => is_square_attacked(board, king, team.opposite()),
        None => true,
    }
}

pub fn is_square_attacked(board: &Board, square: Position, attacker: Team) -> bool {
    let holds = |position: Option<Position>, kind: PieceKind| {
        position
            .and_then(|p| board.piece_at(p))
            .is_some_and(|piece| piece.is(attacker, kind))
    };

    // An attacking pawn stands one rank behind the square, from its own point of view.
    let pawn_rank_step = -pawn_direction(attacker);
    if [-1, 1]
        .into_iter()
        .any(|d_file| holds(square.offset(d_file, pawn_rank_step), PieceKind::Pawn))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(square.offset(df, dr), PieceKind::Knight))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(square.offset(df, dr), PieceKind::King))
    {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kinds: [PieceKind; 2]| {
        directions.iter().any(|&direction| {
            first_occupant(board, square, direction).is_some_and(|(_, piece)| {
                piece.team() == attacker && kinds.contains(&piece.kind())
            })
        })
    };

    slider_hits(&DIAGONAL_DIRECTIONS[..], [PieceKind::Bishop, PieceKind::Queen])
        || slider_hits(&ORTHOGONAL_DIRECTIONS[..], [PieceKind::Rook, PieceKind::Queen])
}
