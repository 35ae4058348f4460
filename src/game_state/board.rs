//! 8x8 piece placement.
//!
//! `Board` owns at most one piece per square and performs no chess legality
//! checks of its own; it is the single choke point for bounds. Reads of
//! off-board squares answer "empty" so ray casts can probe freely, while
//! writes to off-board squares are rejected.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{home_rank, pawn_start_rank, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::{Piece, PieceKind, Team};
use crate::game_state::position::Position;

/// Squares are stored `[rank][file]`, zero-based, so `squares[0][0]` is a1.
///
/// Equality and hashing compare team and kind on every square, making a
/// board usable as a position fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A board holding the standard opening layout.
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }

    /// Write `piece` to `position`, returning whatever was there before.
    pub fn place(&mut self, position: Position, piece: Piece) -> ChessResult<Option<Piece>> {
        let (rank, file) = position
            .grid_index()
            .ok_or(ChessError::OutOfBounds(position))?;
        Ok(self.squares[rank][file].replace(piece))
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        let (rank, file) = position.grid_index()?;
        self.squares[rank][file]
    }

    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        let (rank, file) = position.grid_index()?;
        self.squares[rank][file].take()
    }

    pub fn clear(&mut self) {
        self.squares = Default::default();
    }

    /// Clear the board and set up the 32 opening pieces.
    pub fn reset(&mut self) {
        self.clear();
        for team in Team::ALL {
            let back = home_rank(team) as usize - 1;
            let pawns = pawn_start_rank(team) as usize - 1;
            for (file, kind) in BACK_RANK_LAYOUT.into_iter().enumerate() {
                self.squares[back][file] = Some(Piece::new(team, kind));
                self.squares[pawns][file] = Some(Piece::new(team, PieceKind::Pawn));
            }
        }
    }

    /// Relocate the piece at `from` to `to`, returning the captured occupant.
    ///
    /// The origin is left empty. Nothing is checked beyond bounds and origin
    /// occupancy; callers decide whether the move is legal.
    pub fn move_piece(&mut self, from: Position, to: Position) -> ChessResult<Option<Piece>> {
        if !from.is_on_board() {
            return Err(ChessError::OutOfBounds(from));
        }
        if !to.is_on_board() {
            return Err(ChessError::OutOfBounds(to));
        }
        let piece = self.remove(from).ok_or(ChessError::NoPieceAtOrigin(from))?;
        self.place(to, piece)
    }

    /// Occupied squares with their pieces, a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| {
            self.piece_at(position).map(|piece| (position, piece))
        })
    }

    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.team() == team)
    }

    pub fn find_king(&self, team: Team) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.is(team, PieceKind::King))
            .map(|(position, _)| position)
    }

    /// Compare occupancy and piece kinds only, ignoring team.
    ///
    /// Kept for clients that fingerprinted boards this way; `==` compares teams too.
    pub fn same_kinds_as(&self, other: &Board) -> bool {
        Position::all().all(|position| {
            match (self.piece_at(position), other.piece_at(position)) {
                (None, None) => true,
                (Some(a), Some(b)) => a.kind() == b.kind(),
                _ => false,
            }
        })
    }
}
