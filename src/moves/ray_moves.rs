//! Sliding-piece move generation.
//!
//! Rooks, bishops and queens cast rays outward from their square. A ray
//! includes the first opposing piece it meets and stops short of the first
//! friendly one.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::game_state::chess_types::{Piece, Team};
use crate::game_state::position::Position;
use crate::moves::chess_move::{Move, MoveSet};

pub fn rook_moves(board: &Board, from: Position, team: Team, out: &mut MoveSet) {
    for direction in ORTHOGONAL_DIRECTIONS {
        trace_ray(board, from, team, direction, out);
    }
}

pub fn bishop_moves(board: &Board, from: Position, team: Team, out: &mut MoveSet) {
    for direction in DIAGONAL_DIRECTIONS {
        trace_ray(board, from, team, direction, out);
    }
}

pub fn queen_moves(board: &Board, from: Position, team: Team, out: &mut MoveSet) {
    rook_moves(board, from, team, out);
    bishop_moves(board, from, team, out);
}

fn trace_ray(
    board: &Board,
    from: Position,
    team: Team,
    (d_file, d_rank): (i8, i8),
    out: &mut MoveSet,
) {
    let mut cursor = from;
    while let Some(target) = cursor.offset(d_file, d_rank) {
        match board.piece_at(target) {
            None => {
                out.insert(Move::new(from, target));
            }
            Some(blocker) => {
                if blocker.team() != team {
                    out.insert(Move::new(from, target));
                }
                break;
            }
        }
        cursor = target;
    }
}

/// First occupied square along a direction, regardless of team.
pub fn first_occupant(
    board: &Board,
    from: Position,
    (d_file, d_rank): (i8, i8),
) -> Option<(Position, Piece)> {
    let mut cursor = from;
    while let Some(target) = cursor.offset(d_file, d_rank) {
        if let Some(piece) = board.piece_at(target) {
            return Some((target, piece));
        }
        cursor = target;
    }
    None
}
