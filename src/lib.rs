//! Crate root module declarations for the Plum Rules chess rules engine.
//!
//! Exposes the board and game model, per-piece move generation, legality
//! filtering with check/mate/stalemate detection, and a few utilities
//! (square names, board rendering, random playouts) under stable paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod position;
    pub mod rules_config;
}

pub mod moves {
    pub mod chess_move;
    pub mod leaper_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod ray_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_playout;
    pub mod render_board;
}
