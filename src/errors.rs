//! Errors returned by board and game operations.
//!
//! Every variant is a recoverable, caller-facing condition. Rejected moves
//! never leave the game partially mutated, so callers can report the error
//! and keep using the same `Game`.

use thiserror::Error;

use crate::game_state::chess_types::Team;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square outside the 8x8 board was referenced.
    #[error("{0} is outside the board")]
    OutOfBounds(Position),

    /// The origin square of a move is empty.
    #[error("no piece at {0}")]
    NoPieceAtOrigin(Position),

    /// The destination holds a piece of the mover's own team.
    #[error("move would capture a teammate at {0}")]
    TeammateCapture(Position),

    /// The moving piece does not belong to the side whose turn it is.
    #[error("{piece} piece moved while it is {turn}'s turn")]
    OutOfTurn { piece: Team, turn: Team },

    /// The move is not in the piece's pseudo-legal move set.
    #[error("{0} is not a move this piece can make")]
    NotInPseudoLegalSet(Move),

    /// The move would leave the mover's own king in check.
    #[error("{0} would leave the mover's king in check")]
    SelfCheck(Move),

    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),
}
