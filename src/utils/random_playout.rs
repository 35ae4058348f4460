//! Random legal-move playouts.
//!
//! Drives a game forward by picking uniformly among the side to move's legal
//! moves until the game ends or a ply cap is reached. Seed the RNG to get a
//! reproducible game.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::errors::ChessResult;
use crate::game_state::chess_types::Team;
use crate::game_state::game::Game;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { loser: Team },
    Stalemate { team: Team },
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutRecord {
    pub moves: Vec<Move>,
    pub outcome: PlayoutOutcome,
    pub final_game: Game,
}

/// A uniformly chosen legal move for the side to move, or `None` when it has none.
pub fn random_legal_move<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<Move> {
    let moves: Vec<Move> = game.all_valid_moves(game.team_turn()).into_iter().collect();
    moves.choose(rng).copied()
}

/// Play random legal moves from `game` until mate, stalemate, or `config.max_plies`.
///
/// A side with no legal move ends the playout: checkmate if it is in check,
/// stalemate otherwise. The stalemate check here always looks at the whole
/// team, whatever the game's configured stalemate scope.
pub fn random_playout<R: Rng + ?Sized>(
    game: &Game,
    rng: &mut R,
    config: &PlayoutConfig,
) -> ChessResult<PlayoutRecord> {
    let mut current = game.clone();
    let mut moves = Vec::new();

    let outcome = loop {
        if moves.len() >= usize::from(config.max_plies) {
            break PlayoutOutcome::MaxPlies;
        }

        let team = current.team_turn();
        let Some(mv) = random_legal_move(&current, rng) else {
            break if current.is_in_check(team) {
                PlayoutOutcome::Checkmate { loser: team }
            } else {
                PlayoutOutcome::Stalemate { team }
            };
        };

        current.make_move(mv)?;
        moves.push(mv);
    };

    debug!("playout ended after {} plies: {outcome:?}", moves.len());
    Ok(PlayoutRecord {
        moves,
        outcome,
        final_game: current,
    })
}
