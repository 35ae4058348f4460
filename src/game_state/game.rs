//! Game state: board, side to move, castle flags, and rule configuration.
//!
//! `Game` is plain owned data, so `clone()` is a full deep copy. Every
//! legality simulation runs on such a copy; the live game is only ever
//! changed by a `make_move` that has already passed all checks.

use log::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{home_rank, KING_HOME_FILE, ROOK_HOME_FILES};
use crate::game_state::chess_types::{CastleRights, Piece, PieceKind, Team};
use crate::game_state::position::Position;
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{self, GameStatus};
use crate::moves::chess_move::{Move, MoveSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Team,
    castle_rights: CastleRights,
    config: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard opening position, White to move.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            board: Board::standard(),
            turn: Team::White,
            castle_rights: CastleRights::default(),
            config,
        }
    }

    /// A game continuing from an arbitrary board with `turn` to move.
    ///
    /// Castle flags start revoked since the history of the position is unknown.
    pub fn from_board(board: Board, turn: Team) -> Self {
        Self {
            board,
            turn,
            castle_rights: CastleRights::none(),
            config: RulesConfig::default(),
        }
    }

    #[inline]
    pub fn team_turn(&self) -> Team {
        self.turn
    }

    #[inline]
    pub fn set_team_turn(&mut self, team: Team) {
        self.turn = team;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn set_config(&mut self, config: RulesConfig) {
        self.config = config;
    }

    /// Legal moves for the piece at `position`; empty when the square is empty.
    pub fn valid_moves(&self, position: Position) -> MoveSet {
        legal_move_generator::valid_moves(self, position)
    }

    /// Legal moves for every piece of `team`.
    pub fn all_valid_moves(&self, team: Team) -> MoveSet {
        legal_move_generator::all_valid_moves(self, team)
    }

    pub fn is_in_check(&self, team: Team) -> bool {
        is_in_check(&self.board, team)
    }

    pub fn is_in_checkmate(&self, team: Team) -> bool {
        legal_move_generator::is_in_checkmate(self, team)
    }

    pub fn is_in_stalemate(&self, team: Team) -> bool {
        legal_move_generator::is_in_stalemate(self, team)
    }

    /// Check/mate/stalemate summary for the side to move.
    pub fn status(&self) -> GameStatus {
        legal_move_generator::game_status(self)
    }

    /// Validate and play `mv` for the side to move.
    ///
    /// On any error the game is left exactly as it was. On success the piece
    /// is relocated, promotion applied, and the turn passes to the other team.
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        match self.checked_successor(mv) {
            Ok(next) => {
                debug!("{} plays {mv}", self.turn);
                *self = next;
                Ok(())
            }
            Err(err) => {
                debug!("rejected {mv}: {err}");
                Err(err)
            }
        }
    }

    fn checked_successor(&self, mv: Move) -> ChessResult<Game> {
        for square in [mv.from(), mv.to()] {
            if !square.is_on_board() {
                return Err(ChessError::OutOfBounds(square));
            }
        }

        let piece = self
            .board
            .piece_at(mv.from())
            .ok_or(ChessError::NoPieceAtOrigin(mv.from()))?;

        if piece.team() != self.turn {
            return Err(ChessError::OutOfTurn {
                piece: piece.team(),
                turn: self.turn,
            });
        }

        if self
            .board
            .piece_at(mv.to())
            .is_some_and(|target| target.team() == piece.team())
        {
            return Err(ChessError::TeammateCapture(mv.to()));
        }

        if !piece.pseudo_legal_moves(&self.board, mv.from()).contains(&mv) {
            return Err(ChessError::NotInPseudoLegalSet(mv));
        }

        let mut next = self.clone();
        next.apply_move(mv)?;
        if is_in_check(&next.board, piece.team()) {
            return Err(ChessError::SelfCheck(mv));
        }
        Ok(next)
    }

    /// Play `mv` without any legality checks beyond origin occupancy.
    ///
    /// Used on scratch copies during legality simulation; returns the captured piece.
    pub(crate) fn apply_move(&mut self, mv: Move) -> ChessResult<Option<Piece>> {
        let piece = self
            .board
            .piece_at(mv.from())
            .ok_or(ChessError::NoPieceAtOrigin(mv.from()))?;
        let captured = self.board.move_piece(mv.from(), mv.to())?;
        if let Some(kind) = mv.promotion() {
            self.board.place(mv.to(), Piece::new(piece.team(), kind))?;
        }
        self.update_castle_rights(piece, mv.from());
        self.turn = self.turn.opposite();
        Ok(captured)
    }

    fn update_castle_rights(&mut self, piece: Piece, from: Position) {
        let team = piece.team();
        if from.rank() != home_rank(team) {
            return;
        }
        let leaves_home = match piece.kind() {
            PieceKind::King => from.file() == KING_HOME_FILE,
            PieceKind::Rook => ROOK_HOME_FILES.contains(&from.file()),
            _ => false,
        };
        if leaves_home {
            self.castle_rights.revoke(team);
        }
    }
}
