//! Pawn pushes, captures, and promotion expansion.
//!
//! Direction, start rank, and promotion rank are team relative. A pawn that
//! lands on its promotion rank yields one move per promotable kind and never
//! an unpromoted move. En-passant is not generated.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    pawn_direction, pawn_start_rank, promotion_rank, PROMOTION_KINDS,
};
use crate::game_state::chess_types::Team;
use crate::game_state::position::Position;
use crate::moves::chess_move::{Move, MoveSet};

pub fn pawn_moves(board: &Board, from: Position, team: Team, out: &mut MoveSet) {
    if from.rank() == promotion_rank(team) {
        return;
    }
    let forward = pawn_direction(team);

    if let Some(one_step) = from.offset(0, forward) {
        if board.piece_at(one_step).is_none() {
            push_pawn_move(from, one_step, team, out);

            if from.rank() == pawn_start_rank(team) {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if board.piece_at(two_step).is_none() {
                        push_pawn_move(from, two_step, team, out);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(target) = from.offset(d_file, forward) else {
            continue;
        };
        if board
            .piece_at(target)
            .is_some_and(|occupant| occupant.team() != team)
        {
            push_pawn_move(from, target, team, out);
        }
    }
}

fn push_pawn_move(from: Position, to: Position, team: Team, out: &mut MoveSet) {
    if to.rank() == promotion_rank(team) {
        out.extend(
            PROMOTION_KINDS
                .into_iter()
                .map(|kind| Move::with_promotion(from, to, kind)),
        );
    } else {
        out.insert(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    fn generate(board: &Board, from: Position, team: Team) -> MoveSet {
        let mut out = MoveSet::new();
        pawn_moves(board, from, team, &mut out);
        out
    }

    #[test]
    fn white_pawn_on_start_rank_pushes_one_or_two() {
        let board = Board::standard();
        let e2 = Position::new(5, 2);
        let moves = generate(&board, e2, Team::White);
        let expected: MoveSet = [
            Move::new(e2, Position::new(5, 3)),
            Move::new(e2, Position::new(5, 4)),
        ]
        .into_iter()
        .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn black_pawn_advances_toward_rank_one() {
        let board = Board::standard();
        let d7 = Position::new(4, 7);
        let targets: Vec<Position> = generate(&board, d7, Team::Black)
            .iter()
            .map(|mv| mv.to())
            .collect();
        assert_eq!(targets, vec![Position::new(4, 5), Position::new(4, 6)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::new();
        let c2 = Position::new(3, 2);
        board
            .place(Position::new(3, 3), Piece::new(Team::Black, PieceKind::Knight))
            .expect("c3 is on the board");
        assert!(generate(&board, c2, Team::White).is_empty());

        let mut board = Board::new();
        board
            .place(Position::new(3, 4), Piece::new(Team::Black, PieceKind::Knight))
            .expect("c4 is on the board");
        assert_eq!(generate(&board, c2, Team::White).len(), 1);
    }

    #[test]
    fn captures_only_enemies_on_forward_diagonals() {
        let mut board = Board::new();
        let e4 = Position::new(5, 4);
        board
            .place(Position::new(4, 5), Piece::new(Team::Black, PieceKind::Pawn))
            .expect("d5 is on the board");
        board
            .place(Position::new(6, 5), Piece::new(Team::White, PieceKind::Pawn))
            .expect("f5 is on the board");
        board
            .place(Position::new(4, 3), Piece::new(Team::Black, PieceKind::Pawn))
            .expect("d3 is on the board");

        let targets: Vec<Position> = generate(&board, e4, Team::White)
            .iter()
            .map(|mv| mv.to())
            .collect();
        assert_eq!(targets, vec![Position::new(4, 5), Position::new(5, 5)]);
    }

    #[test]
    fn reaching_far_rank_expands_into_four_promotions() {
        let mut board = Board::new();
        let b7 = Position::new(2, 7);
        board
            .place(Position::new(1, 8), Piece::new(Team::Black, PieceKind::Rook))
            .expect("a8 is on the board");

        let moves = generate(&board, b7, Team::White);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|mv| mv.promotion().is_some()));
        for kind in PROMOTION_KINDS {
            assert!(moves.contains(&Move::with_promotion(b7, Position::new(2, 8), kind)));
            assert!(moves.contains(&Move::with_promotion(b7, Position::new(1, 8), kind)));
        }
    }

    #[test]
    fn black_promotes_on_rank_one() {
        let board = Board::new();
        let h2 = Position::new(8, 2);
        let moves = generate(&board, h2, Team::Black);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.to() == Position::new(8, 1)));
    }
}
