//! Legal move filtering and end-of-game queries.
//!
//! Takes each piece's pseudo-legal candidates, applies every candidate to a
//! scratch copy of the game, and discards the ones that leave the mover's own
//! king attacked. Checkmate and stalemate are derived from the filtered sets.

use log::trace;

use crate::game_state::chess_types::{PieceKind, Team};
use crate::game_state::game::Game;
use crate::game_state::position::Position;
use crate::game_state::rules_config::StalemateScope;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::chess_move::{Move, MoveSet};

/// Summary of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check(Team),
    Checkmate(Team),
    Stalemate(Team),
}

/// Legal moves for the piece on `position`, whichever team it belongs to.
pub fn valid_moves(game: &Game, position: Position) -> MoveSet {
    let Some(piece) = game.board().piece_at(position) else {
        return MoveSet::new();
    };

    piece
        .pseudo_legal_moves(game.board(), position)
        .into_iter()
        .filter(|&mv| {
            let keeps_king_safe = !leaves_team_in_check(game, piece.team(), mv);
            if !keeps_king_safe {
                trace!("discarding {mv}: leaves {} in check", piece.team());
            }
            keeps_king_safe
        })
        .collect()
}

pub fn all_valid_moves(game: &Game, team: Team) -> MoveSet {
    game.board()
        .pieces_of(team)
        .flat_map(|(position, _)| valid_moves(game, position))
        .collect()
}

/// Simulate `mv` on a copy of `game` and report whether `team` ends up in check.
pub fn leaves_team_in_check(game: &Game, team: Team, mv: Move) -> bool {
    let mut scratch = game.clone();
    match scratch.apply_move(mv) {
        Ok(_) => is_in_check(scratch.board(), team),
        Err(_) => true,
    }
}

fn has_any_valid_move(game: &Game, team: Team) -> bool {
    game.board()
        .pieces_of(team)
        .any(|(position, _)| !valid_moves(game, position).is_empty())
}

pub fn is_in_checkmate(game: &Game, team: Team) -> bool {
    is_in_check(game.board(), team) && !has_any_valid_move(game, team)
}

/// Not in check and unable to move.
///
/// With [`StalemateScope::KingOnly`] only the king's mobility is inspected,
/// so a team whose king is boxed in but whose other pieces can move still
/// reads as stalemated.
pub fn is_in_stalemate(game: &Game, team: Team) -> bool {
    if is_in_check(game.board(), team) {
        return false;
    }
    match game.config().stalemate_scope {
        StalemateScope::WholeTeam => !has_any_valid_move(game, team),
        StalemateScope::KingOnly => game
            .board()
            .pieces_of(team)
            .filter(|(_, piece)| piece.kind() == PieceKind::King)
            .all(|(position, _)| valid_moves(game, position).is_empty()),
    }
}

pub fn game_status(game: &Game) -> GameStatus {
    let team = game.team_turn();
    if is_in_checkmate(game, team) {
        GameStatus::Checkmate(team)
    } else if is_in_stalemate(game, team) {
        GameStatus::Stalemate(team)
    } else if is_in_check(game.board(), team) {
        GameStatus::Check(team)
    } else {
        GameStatus::Ongoing
    }
}
