//! Per-kind dispatch of pseudo-legal move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::position::Position;
use crate::moves::chess_move::MoveSet;
use crate::moves::leaper_moves::{king_moves, knight_moves};
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::ray_moves::{bishop_moves, queen_moves, rook_moves};

impl Piece {
    /// Every move this piece could make from `position` on `board`, ignoring
    /// whether it leaves its own king in check.
    ///
    /// Pure in `board` and `position`; the piece does not have to be standing
    /// on `position`. An off-board `position` yields no moves.
    pub fn pseudo_legal_moves(&self, board: &Board, position: Position) -> MoveSet {
        let mut out = MoveSet::new();
        if !position.is_on_board() {
            return out;
        }

        let team = self.team();
        match self.kind() {
            PieceKind::King => king_moves(board, position, team, &mut out),
            PieceKind::Queen => queen_moves(board, position, team, &mut out),
            PieceKind::Bishop => bishop_moves(board, position, team, &mut out),
            PieceKind::Knight => knight_moves(board, position, team, &mut out),
            PieceKind::Rook => rook_moves(board, position, team, &mut out),
            PieceKind::Pawn => pawn_moves(board, position, team, &mut out),
        }
        out
    }
}
