//! Property tests
//!
//! - Cached attack sets never leave the board, whatever its size
//! - A committed move never leaves the mover's own king attacked
//! - Simulating any legal move leaves the board byte-identical

use proptest::prelude::*;

use chess_rules::rules;
use chess_rules::{Board, Color, Game, PieceKind, ReleaseOutcome, Square, TurnPhase};

const KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

fn placement() -> impl Strategy<Value = (usize, bool, i32, i32)> {
    (0..KINDS.len(), any::<bool>(), 0..16i32, 0..16i32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn attacked_squares_stay_on_board(
        width in 1..12i32,
        height in 1..12i32,
        pieces in prop::collection::vec(placement(), 0..24),
    ) {
        let mut board = Board::empty(width, height).unwrap();
        for (kind, white, x, y) in pieces {
            let color = if white { Color::White } else { Color::Black };
            let _ = board.place(KINDS[kind], color, x % width, y % height);
        }
        rules::update_all_attacks(&mut board);

        for color in [Color::White, Color::Black] {
            for square in rules::attacked_squares(&board, color) {
                prop_assert!(board.contains(square), "{square} is off a {width}x{height} board");
            }
        }
    }

    #[test]
    fn committed_moves_never_expose_own_king(choices in prop::collection::vec(any::<prop::sample::Index>(), 1..40)) {
        let mut game = Game::new();

        for choice in choices {
            if game.is_over() {
                break;
            }

            let moves: Vec<(Square, Square)> = game
                .legal_moves()
                .unwrap()
                .into_iter()
                .flat_map(|(from, targets)| targets.into_iter().map(move |to| (from, to)))
                .collect();
            prop_assume!(!moves.is_empty());

            let mover = game.turn();
            let (from, to) = moves[choice.index(moves.len())];
            let outcome = game.play(from, to).unwrap();
            prop_assert!(matches!(outcome, ReleaseOutcome::Moved(_)));

            if game.phase() == TurnPhase::AwaitingPromotion {
                game.promote(PieceKind::Queen).unwrap();
            }

            prop_assert!(!rules::is_in_check(game.board(), mover));
        }
    }

    #[test]
    fn simulation_restores_board(choices in prop::collection::vec(any::<prop::sample::Index>(), 0..12)) {
        let mut game = Game::new();
        for choice in choices {
            let moves: Vec<(Square, Square)> = game
                .legal_moves()
                .unwrap()
                .into_iter()
                .flat_map(|(from, targets)| targets.into_iter().map(move |to| (from, to)))
                .collect();
            if moves.is_empty() || game.is_over() {
                break;
            }
            let (from, to) = moves[choice.index(moves.len())];
            game.play(from, to).unwrap();
            if game.phase() == TurnPhase::AwaitingPromotion {
                game.promote(PieceKind::Queen).unwrap();
            }
        }

        let mut board = game.board().clone();
        let before = board.clone();
        let color = game.turn();
        for from in board.squares_of(color) {
            for to in board.squares().collect::<Vec<_>>() {
                rules::would_resolve_check(&mut board, from, to, color).unwrap();
            }
        }
        prop_assert_eq!(board, before);
    }
}
