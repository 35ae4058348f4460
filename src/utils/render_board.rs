//! Unicode board diagrams for terminal output and test failure messages.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Piece, PieceKind, Team};
use crate::game_state::position::Position;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render `board` with rank 8 at the top, labelled on all four sides.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);
    out.push('\n');

    for rank in (1..=BOARD_SIZE).rev() {
        let label = char::from(b'0' + rank as u8);
        out.push(label);
        out.push(' ');

        for file in 1..=BOARD_SIZE {
            let glyph = board
                .piece_at(Position::new(file, rank))
                .map_or('·', piece_glyph);
            out.push(glyph);
            if file < BOARD_SIZE {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out
}

fn piece_glyph(piece: Piece) -> char {
    match (piece.team(), piece.kind()) {
        (Team::White, PieceKind::King) => '♔',
        (Team::White, PieceKind::Queen) => '♕',
        (Team::White, PieceKind::Rook) => '♖',
        (Team::White, PieceKind::Bishop) => '♗',
        (Team::White, PieceKind::Knight) => '♘',
        (Team::White, PieceKind::Pawn) => '♙',
        (Team::Black, PieceKind::King) => '♚',
        (Team::Black, PieceKind::Queen) => '♛',
        (Team::Black, PieceKind::Rook) => '♜',
        (Team::Black, PieceKind::Bishop) => '♝',
        (Team::Black, PieceKind::Knight) => '♞',
        (Team::Black, PieceKind::Pawn) => '♟',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
