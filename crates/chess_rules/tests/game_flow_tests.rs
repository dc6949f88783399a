//! Game Flow Integration Tests
//!
//! Full games driven through the turn controller:
//! - Turn alternation and move numbering
//! - Rejected and returned requests
//! - En passant, castling and promotion across turns
//! - Check and checkmate detection

use chess_rules::rules;
use chess_rules::{
    Board, ChessRulesError, Color, Game, GamePhase, MoveRecord, PendingPromotion, PieceKind,
    ReleaseOutcome, Square, TurnPhase,
};

/// Play a sequence of moves, asserting each one is committed
fn play_all(game: &mut Game, moves: &[((i32, i32), (i32, i32))]) {
    for &(from, to) in moves {
        let outcome = game.play(from.into(), to.into()).unwrap();
        assert!(
            matches!(outcome, ReleaseOutcome::Moved(_)),
            "{from:?} -> {to:?} should be legal, got {outcome:?}"
        );
    }
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_white_moves_first() {
    let mut game = Game::new();
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.move_number(), 1);
    assert_eq!(game.status(), GamePhase::Playing);

    let total: usize = game.legal_moves().unwrap().iter().map(|(_, moves)| moves.len()).sum();
    assert_eq!(total, 20, "White should have 20 moves");
}

#[test]
fn test_turns_alternate_and_count() {
    let mut game = Game::new();

    play_all(&mut game, &[((3, 1), (3, 3))]);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.move_number(), 1);

    play_all(&mut game, &[((3, 6), (3, 4))]);
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.move_number(), 2);
    assert_eq!(game.phase(), TurnPhase::WaitingForInput);
}

#[test]
fn test_cannot_pick_up_opponent_piece() {
    let mut game = Game::new();

    assert_eq!(game.pick_up(3, 6).unwrap(), None);
    assert_eq!(game.held(), None);
    assert_eq!(game.phase(), TurnPhase::WaitingForInput);
}

#[test]
fn test_pick_up_rejects_empty_and_off_board_squares() {
    let mut game = Game::new();

    assert_eq!(
        game.pick_up(3, 3).unwrap_err(),
        ChessRulesError::EmptySquare { x: 3, y: 3 }
    );
    assert!(matches!(
        game.pick_up(8, 0),
        Err(ChessRulesError::OutOfBounds { .. })
    ));
}

#[test]
fn test_second_pick_up_is_ignored_while_holding() {
    let mut game = Game::new();

    assert!(game.pick_up(1, 0).unwrap().is_some());
    assert_eq!(game.pick_up(6, 0).unwrap(), None);
    assert_eq!(game.held(), Some(Square::new(1, 0)));
}

#[test]
fn test_illegal_release_returns_piece() {
    let mut game = Game::new();
    let before = game.board().clone();

    let moves = game.pick_up(3, 1).unwrap().unwrap();
    assert_eq!(moves.len(), 2);
    assert!(!game.board().get(3, 1).unwrap().is_drawing);

    assert_eq!(game.release(3, 5).unwrap(), ReleaseOutcome::Returned);
    assert_eq!(game.held(), None);
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board(), &before);
}

#[test]
fn test_release_without_held_piece_is_ignored() {
    let mut game = Game::new();
    assert_eq!(game.release(3, 3).unwrap(), ReleaseOutcome::Ignored);
}

#[test]
fn test_cancel_drops_held_piece() {
    let mut game = Game::new();

    game.pick_up(6, 0).unwrap();
    assert!(game.cancel().unwrap());
    assert_eq!(game.held(), None);
    assert!(game.board().get(6, 0).unwrap().is_drawing);
    assert!(!game.cancel().unwrap());
}

#[test]
fn test_capture_is_recorded() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[((3, 1), (3, 3)), ((4, 6), (4, 4)), ((3, 3), (4, 4))],
    );

    let record = game.last_move().unwrap();
    assert_eq!(record.kind, PieceKind::Pawn);
    assert_eq!(record.captured, PieceKind::Pawn);
    assert_eq!(game.board().squares_of(Color::Black).len(), 15);
}

// ============================================================================
// En Passant Tests
// ============================================================================

/// Black pawn on (3, 3) with a white pawn arriving beside it on (4, 3)
fn en_passant_game() -> Game {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            ((7, 1), (7, 2)),
            ((3, 6), (3, 4)),
            ((7, 2), (7, 3)),
            ((3, 4), (3, 3)),
            ((4, 1), (4, 3)),
        ],
    );
    game
}

#[test]
fn test_en_passant_adds_one_diagonal() {
    let mut game = en_passant_game();

    let moves = game.pick_up(3, 3).unwrap().unwrap();
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&Square::new(3, 2)));
    assert!(moves.contains(&Square::new(4, 2)));
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    let mut game = en_passant_game();

    let outcome = game.play(Square::new(3, 3), Square::new(4, 2)).unwrap();
    let ReleaseOutcome::Moved(record) = outcome else {
        panic!("en passant should be committed, got {outcome:?}");
    };

    assert_eq!(record.en_passant, Some(Square::new(4, 3)));
    assert_eq!(record.captured, PieceKind::Pawn);
    assert!(game.board().get(4, 3).unwrap().is_empty());
    assert_eq!(game.board().get(4, 2).unwrap().color, Color::Black);
    assert_eq!(game.board().squares_of(Color::White).len(), 15);
}

#[test]
fn test_en_passant_expires_after_one_turn() {
    let mut game = en_passant_game();
    play_all(&mut game, &[((0, 6), (0, 5)), ((7, 3), (7, 4))]);

    let moves = game.pick_up(3, 3).unwrap().unwrap();
    assert_eq!(moves, vec![Square::new(3, 2)]);
}

// ============================================================================
// Castling Tests
// ============================================================================

/// White has cleared the squares between king and the x = 0 rook
fn castling_game() -> Game {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            ((1, 0), (2, 2)),
            ((0, 6), (0, 5)),
            ((1, 1), (1, 2)),
            ((0, 5), (0, 4)),
            ((2, 0), (1, 1)),
            ((0, 4), (0, 3)),
        ],
    );
    game
}

#[test]
fn test_castle_landing_offered() {
    let mut game = castling_game();

    let moves = game.pick_up(3, 0).unwrap().unwrap();
    assert!(moves.contains(&Square::new(1, 0)));
    assert!(moves.contains(&Square::new(2, 0)));
}

#[test]
fn test_castle_moves_king_and_rook_in_one_turn() {
    let mut game = castling_game();

    let outcome = game.play(Square::new(3, 0), Square::new(1, 0)).unwrap();
    let ReleaseOutcome::Moved(record) = outcome else {
        panic!("castling should be committed, got {outcome:?}");
    };
    assert!(record.castle.is_some());

    let board = game.board();
    let king = board.get(1, 0).unwrap();
    let rook = board.get(2, 0).unwrap();
    assert_eq!((king.kind, king.color), (PieceKind::King, Color::White));
    assert_eq!((rook.kind, rook.color), (PieceKind::Rook, Color::White));
    assert!(king.moved);
    assert!(rook.moved);
    assert!(board.get(0, 0).unwrap().is_empty());
    assert!(board.get(3, 0).unwrap().is_empty());
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn test_no_castle_after_king_has_moved() {
    let mut game = castling_game();
    play_all(
        &mut game,
        &[((3, 0), (2, 0)), ((7, 6), (7, 5)), ((2, 0), (3, 0)), ((7, 5), (7, 4))],
    );

    let moves = game.pick_up(3, 0).unwrap().unwrap();
    assert!(!moves.contains(&Square::new(1, 0)));
}

// ============================================================================
// Promotion Tests
// ============================================================================

fn promotion_game() -> Game {
    let mut board = Board::empty(8, 8).unwrap();
    board.place(PieceKind::King, Color::White, 7, 0).unwrap();
    board.place(PieceKind::Pawn, Color::White, 0, 6).unwrap();
    board.place(PieceKind::King, Color::Black, 5, 7).unwrap();
    Game::from_board(board, Color::White).unwrap()
}

#[test]
fn test_promotion_blocks_input_until_resolved() {
    let mut game = promotion_game();
    assert_eq!(game.promote(PieceKind::Queen), Err(ChessRulesError::NoPendingPromotion));

    play_all(&mut game, &[((0, 6), (0, 7))]);
    assert_eq!(game.phase(), TurnPhase::AwaitingPromotion);
    assert!(game.pending_promotion().is_some());
    assert_eq!(game.turn(), Color::Black);

    assert_eq!(game.pick_up(5, 7).unwrap(), None, "input is blocked");
    assert_eq!(game.pick_up(4, 4).unwrap(), None, "empty squares are ignored too");
    assert_eq!(
        game.promote(PieceKind::King),
        Err(ChessRulesError::InvalidPromotion {
            kind: PieceKind::King
        })
    );
    assert!(game.pending_promotion().is_some());
}

#[test]
fn test_promotion_to_queen_gives_check() {
    let mut game = promotion_game();
    play_all(&mut game, &[((0, 6), (0, 7))]);

    game.promote(PieceKind::Queen).unwrap();

    let queen = game.board().get(0, 7).unwrap();
    assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::White));
    assert_eq!(game.pending_promotion(), None);
    assert_eq!(game.last_move().unwrap().promotion, Some(PieceKind::Queen));
    assert_eq!(game.status(), GamePhase::Check(Color::Black));
    assert_eq!(game.phase(), TurnPhase::WaitingForInput);
    assert!(game.pick_up(5, 7).unwrap().is_some());
}

#[test]
fn test_promotion_to_knight_no_check() {
    let mut game = promotion_game();
    play_all(&mut game, &[((0, 6), (0, 7))]);

    game.promote(PieceKind::Knight).unwrap();
    assert_eq!(game.status(), GamePhase::Playing);
}

// ============================================================================
// Check and Checkmate Tests
// ============================================================================

#[test]
fn test_scholars_mate() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            ((3, 1), (3, 3)),
            ((3, 6), (3, 4)),
            ((2, 0), (5, 3)),
            ((6, 7), (5, 5)),
            ((4, 0), (0, 4)),
            ((1, 7), (2, 5)),
            ((0, 4), (2, 6)),
        ],
    );

    assert_eq!(game.status(), GamePhase::Checkmate(Color::Black));
    assert!(game.is_over());
    assert_eq!(game.last_move().unwrap().captured, PieceKind::Pawn);
    assert_eq!(game.board().find_king(Color::Black), Some(Square::new(3, 7)));

    let mut board = game.board().clone();
    assert!(rules::is_checkmate(&mut board, Color::Black).unwrap());
    assert!(rules::is_in_check(&board, Color::Black));

    assert_eq!(game.pick_up(3, 7).unwrap(), None, "no input after mate");
    assert_eq!(game.pick_up(4, 4).unwrap(), None);
}

#[test]
fn test_fools_mate() {
    //! Checkmate of White in two moves along the queen's diagonal
    let mut game = Game::new();
    play_all(
        &mut game,
        &[((2, 1), (2, 2)), ((3, 6), (3, 4)), ((1, 1), (1, 3)), ((4, 7), (0, 3))],
    );

    assert_eq!(game.status(), GamePhase::Checkmate(Color::White));
    assert_eq!(game.phase(), TurnPhase::GameOver);
}

#[test]
fn test_check_allows_only_resolving_moves() {
    //! After the queen checks along the opened diagonal, blocking with the
    //! knight-side pawn is Black's only reply
    let mut game = Game::new();
    play_all(
        &mut game,
        &[((3, 1), (3, 3)), ((2, 6), (2, 4)), ((4, 0), (0, 4))],
    );
    assert_eq!(game.status(), GamePhase::Check(Color::Black));

    let replies = game.legal_moves().unwrap();
    assert_eq!(replies, vec![(Square::new(1, 6), vec![Square::new(1, 5)])]);

    play_all(&mut game, &[((1, 6), (1, 5))]);
    assert_eq!(game.status(), GamePhase::Playing);
}

#[test]
fn test_from_board_detects_mate() {
    let mut board = Board::empty(8, 8).unwrap();
    board.place(PieceKind::King, Color::White, 0, 0).unwrap();
    board.place(PieceKind::Pawn, Color::White, 0, 1).unwrap();
    board.place(PieceKind::Pawn, Color::White, 1, 1).unwrap();
    board.place(PieceKind::Rook, Color::Black, 7, 0).unwrap();
    board.place(PieceKind::King, Color::Black, 5, 7).unwrap();

    let mut game = Game::from_board(board, Color::White).unwrap();
    assert_eq!(game.status(), GamePhase::Checkmate(Color::White));
    assert_eq!(game.phase(), TurnPhase::GameOver);
    assert_eq!(game.pick_up(0, 1).unwrap(), None);
}

#[test]
fn test_reset_restores_start() {
    let mut game = Game::new();
    play_all(&mut game, &[((3, 1), (3, 3))]);

    game.reset();
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.move_number(), 1);
    assert_eq!(game.board().get(3, 1).unwrap().kind, PieceKind::Pawn);
    assert!(game.last_move().is_none());
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_status_and_square_serialize() {
    let json = serde_json::to_string(&GamePhase::Check(Color::Black)).unwrap();
    assert_eq!(
        serde_json::from_str::<GamePhase>(&json).unwrap(),
        GamePhase::Check(Color::Black)
    );

    let square: Square = serde_json::from_str(r#"{"x":3,"y":7}"#).unwrap();
    assert_eq!(square, Square::new(3, 7));
}

#[test]
fn test_move_record_and_pending_promotion_serialize() {
    let mut game = promotion_game();
    play_all(&mut game, &[((0, 6), (0, 7))]);

    let pending = game.pending_promotion().unwrap();
    let json = serde_json::to_string(&pending).unwrap();
    assert_eq!(
        serde_json::from_str::<PendingPromotion>(&json).unwrap(),
        pending
    );

    game.promote(PieceKind::Rook).unwrap();
    let record = *game.last_move().unwrap();
    let json = serde_json::to_string(&record).unwrap();
    let restored: MoveRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, record);
    assert_eq!(restored.promotion, Some(PieceKind::Rook));
}
