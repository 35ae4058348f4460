//! King and knight move generation from fixed offset tables.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_OFFSETS, KNIGHT_OFFSETS};
use crate::game_state::chess_types::Team;
use crate::game_state::position::Position;
use crate::moves::chess_move::{Move, MoveSet};

#[inline]
pub fn king_moves(board: &Board, from: Position, team: Team, out: &mut MoveSet) {
    step_moves(board, from, team, &KING_OFFSETS, out);
}

#[inline]
pub fn knight_moves(board: &Board, from: Position, team: Team, out: &mut MoveSet) {
    step_moves(board, from, team, &KNIGHT_OFFSETS, out);
}

fn step_moves(board: &Board, from: Position, team: Team, offsets: &[(i8, i8)], out: &mut MoveSet) {
    for &(d_file, d_rank) in offsets {
        let Some(target) = from.offset(d_file, d_rank) else {
            continue;
        };
        let blocked_by_teammate = board
            .piece_at(target)
            .is_some_and(|occupant| occupant.team() == team);
        if !blocked_by_teammate {
            out.insert(Move::new(from, target));
        }
    }
}
