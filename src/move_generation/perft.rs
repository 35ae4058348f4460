//! Perft: exhaustive legal move tree counting.
//!
//! Used to validate the rules against published node counts and as a
//! throughput benchmark for the clone-and-simulate legality filter.

use std::thread;

use crate::errors::ChessResult;
use crate::game_state::game::Game;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{all_valid_moves, is_in_checkmate};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game: &Game, depth: u8) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_recurse(game, depth, &mut counts)?;
    Ok(counts)
}

/// Same counts as [`perft`], with each root move searched on its own thread.
pub fn perft_multi_threaded(game: &Game, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return perft(game, depth);
    }

    let root_moves = all_valid_moves(game, game.team_turn());
    let results: Vec<ChessResult<PerftCounts>> = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                scope.spawn(move || -> ChessResult<PerftCounts> {
                    let mut local = PerftCounts::default();
                    perft_move(game, mv, depth, &mut local)?;
                    Ok(local)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let mut total = PerftCounts::default();
    for result in results {
        total.merge(result?);
    }
    Ok(total)
}

fn perft_recurse(game: &Game, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for mv in all_valid_moves(game, game.team_turn()) {
        perft_move(game, mv, depth, counts)?;
    }
    Ok(())
}

fn perft_move(game: &Game, mv: Move, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    let mut child = game.clone();
    let captured = child.apply_move(mv)?;
    if depth > 1 {
        return perft_recurse(&child, depth - 1, counts);
    }

    counts.nodes += 1;
    if captured.is_some() {
        counts.captures += 1;
    }
    if mv.promotion().is_some() {
        counts.promotions += 1;
    }
    let defender = child.team_turn();
    if is_in_check(child.board(), defender) {
        counts.checks += 1;
        if is_in_checkmate(&child, defender) {
            counts.checkmates += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_node_counts_match_published_values() {
        let game = Game::new();
        assert_eq!(perft(&game, 0).expect("perft runs").nodes, 1);
        assert_eq!(perft(&game, 1).expect("perft runs").nodes, 20);
        assert_eq!(perft(&game, 2).expect("perft runs").nodes, 400);

        let depth_three = perft(&game, 3).expect("perft runs");
        assert_eq!(
            depth_three,
            PerftCounts {
                nodes: 8_902,
                captures: 34,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn threaded_perft_agrees_with_single_thread() {
        let game = Game::new();
        let single = perft(&game, 3).expect("perft runs");
        let threaded = perft_multi_threaded(&game, 3).expect("perft runs");
        assert_eq!(single, threaded);
    }
}
