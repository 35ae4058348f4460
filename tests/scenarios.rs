use plum_rules::errors::ChessError;
use plum_rules::game_state::board::Board;
use plum_rules::game_state::chess_types::{Piece, PieceKind, Team};
use plum_rules::game_state::game::Game;
use plum_rules::game_state::position::Position;
use plum_rules::move_generation::legal_move_generator::GameStatus;
use plum_rules::moves::chess_move::Move;

fn sq(name: &str) -> Position {
    name.parse().expect("test square names are valid")
}

fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}

fn game_with(pieces: &[(&str, Team, PieceKind)], turn: Team) -> Game {
    let mut board = Board::new();
    for &(name, team, kind) in pieces {
        board
            .place(sq(name), Piece::new(team, kind))
            .expect("test squares are on the board");
    }
    Game::from_board(board, turn)
}

#[test]
fn opening_layout_is_standard() {
    let game = Game::new();
    let board = game.board();

    assert_eq!(board.pieces().count(), 32);
    assert_eq!(board.piece_at(sq("e1")), Some(Piece::new(Team::White, PieceKind::King)));
    assert_eq!(board.piece_at(sq("d8")), Some(Piece::new(Team::Black, PieceKind::Queen)));
    assert_eq!(board.piece_at(sq("g1")), Some(Piece::new(Team::White, PieceKind::Knight)));
    for file in ["a", "b", "c", "d", "e", "f", "g", "h"] {
        assert_eq!(
            board.piece_at(sq(&format!("{file}2"))),
            Some(Piece::new(Team::White, PieceKind::Pawn))
        );
        assert_eq!(
            board.piece_at(sq(&format!("{file}7"))),
            Some(Piece::new(Team::Black, PieceKind::Pawn))
        );
        assert_eq!(board.piece_at(sq(&format!("{file}4"))), None);
    }
}

#[test]
fn opening_pawn_can_step_once_or_twice() {
    let game = Game::new();
    let moves: Vec<Move> = game.valid_moves(sq("e2")).into_iter().collect();
    assert_eq!(moves, vec![mv("e2", "e3"), mv("e2", "e4")]);

    let knight: Vec<Position> = game.valid_moves(sq("g1")).iter().map(|m| m.to()).collect();
    assert_eq!(knight, vec![sq("f3"), sq("h3")]);
}

#[test]
fn rook_on_open_file_checks_the_king() {
    let game = game_with(
        &[
            ("e1", Team::White, PieceKind::King),
            ("e8", Team::Black, PieceKind::Rook),
            ("a8", Team::Black, PieceKind::King),
        ],
        Team::White,
    );
    assert!(game.is_in_check(Team::White));
    assert!(!game.is_in_checkmate(Team::White));
    assert_eq!(game.status(), GameStatus::Check(Team::White));

    // Staying on the e-file is never legal.
    for m in game.valid_moves(sq("e1")) {
        assert_ne!(m.to().file(), 5, "{m} stays on the checked file");
    }
}

#[test]
fn quickest_mate_for_white_ends_the_game() {
    let mut game = Game::new();
    for m in [
        mv("e2", "e4"),
        mv("g7", "g5"),
        mv("d2", "d4"),
        mv("f7", "f6"),
        mv("d1", "h5"),
    ] {
        game.make_move(m).expect("every move in the line is legal");
    }

    assert_eq!(game.team_turn(), Team::Black);
    assert!(game.is_in_check(Team::Black));
    assert!(game.is_in_checkmate(Team::Black));
    assert!(!game.is_in_stalemate(Team::Black));
    assert!(game.all_valid_moves(Team::Black).is_empty());
    assert_eq!(game.status(), GameStatus::Checkmate(Team::Black));

    let any = mv("a7", "a6");
    assert_eq!(game.make_move(any), Err(ChessError::SelfCheck(any)));
}

#[test]
fn lone_king_with_no_safe_square_is_stalemated() {
    let game = game_with(
        &[
            ("a8", Team::Black, PieceKind::King),
            ("c7", Team::White, PieceKind::Queen),
            ("h1", Team::White, PieceKind::King),
        ],
        Team::Black,
    );
    assert!(!game.is_in_check(Team::Black));
    assert!(game.is_in_stalemate(Team::Black));
    assert!(!game.is_in_checkmate(Team::Black));
    assert_eq!(game.status(), GameStatus::Stalemate(Team::Black));
}

#[test]
fn pawn_reaching_the_last_rank_offers_four_promotions() {
    let mut game = game_with(
        &[
            ("b7", Team::White, PieceKind::Pawn),
            ("e1", Team::White, PieceKind::King),
            ("h5", Team::Black, PieceKind::King),
        ],
        Team::White,
    );

    let promotions: Vec<Option<PieceKind>> = game
        .valid_moves(sq("b7"))
        .iter()
        .map(|m| {
            assert_eq!(m.to(), sq("b8"));
            m.promotion()
        })
        .collect();
    assert_eq!(promotions.len(), 4);
    for kind in [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight] {
        assert!(promotions.contains(&Some(kind)), "missing {kind} promotion");
    }

    game.make_move(Move::with_promotion(sq("b7"), sq("b8"), PieceKind::Queen))
        .expect("promotion is legal");
    assert_eq!(
        game.board().piece_at(sq("b8")),
        Some(Piece::new(Team::White, PieceKind::Queen))
    );
    assert_eq!(game.team_turn(), Team::Black);
}

#[test]
fn pinned_piece_is_rejected_with_self_check() {
    let mut game = game_with(
        &[
            ("e1", Team::White, PieceKind::King),
            ("e2", Team::White, PieceKind::Knight),
            ("e8", Team::Black, PieceKind::Queen),
            ("a8", Team::Black, PieceKind::King),
        ],
        Team::White,
    );
    assert!(game.valid_moves(sq("e2")).is_empty());

    let before = game.clone();
    let jump = mv("e2", "c3");
    assert_eq!(game.make_move(jump), Err(ChessError::SelfCheck(jump)));
    assert_eq!(game, before);
}
