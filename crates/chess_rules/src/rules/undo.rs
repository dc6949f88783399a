//! Provisional moves for legality testing
//!
//! A provisional move touches exactly the source and destination squares,
//! plus the captured pawn's square for an en passant capture. [`UndoInfo`]
//! owns every piece it displaced so [`unmake_move`] puts the position back
//! exactly, caches included.

use crate::board::Board;
use crate::error::RulesResult;
use crate::piece::Piece;
use crate::types::*;

/// Information needed to undo a provisional move
#[derive(Debug)]
pub(crate) struct UndoInfo {
    from: Square,
    to: Square,
    captured: Piece,
    side_capture: Option<(Square, Piece)>,
}

/// Apply `from -> to` directly on the board
pub(crate) fn make_move(board: &mut Board, from: Square, to: Square) -> RulesResult<UndoInfo> {
    // bounds first so a bad request cannot leave a half-made move behind
    board.piece_at(to)?;
    let mover = board.take(from.x, from.y)?;

    let side_capture = en_passant_victim(board, &mover, from, to)
        .map(|square| board.take(square.x, square.y).map(|piece| (square, piece)))
        .transpose()?;

    let captured = board.replace(to, mover)?;

    Ok(UndoInfo {
        from,
        to,
        captured,
        side_capture,
    })
}

/// Restore the squares recorded by [`make_move`]
pub(crate) fn unmake_move(board: &mut Board, undo: UndoInfo) -> RulesResult<()> {
    let mover = board.replace(undo.to, undo.captured)?;
    board.replace(undo.from, mover)?;

    if let Some((square, piece)) = undo.side_capture {
        board.replace(square, piece)?;
    }
    Ok(())
}

/// A pawn moving diagonally onto an empty square captures en passant; the
/// victim stands beside the pawn's origin on the destination file.
fn en_passant_victim(board: &Board, mover: &Piece, from: Square, to: Square) -> Option<Square> {
    if mover.kind != PieceKind::Pawn || from.x == to.x {
        return None;
    }

    let landing_empty = board.piece_at(to).map(Piece::is_empty).unwrap_or(false);
    let victim = Square::new(to.x, from.y);
    let is_enemy_pawn = board
        .piece_at(victim)
        .map(|piece| piece.kind == PieceKind::Pawn && piece.color != mover.color)
        .unwrap_or(false);

    (landing_empty && is_enemy_pawn).then_some(victim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_unmake_restores_capture() {
        let mut board = Board::standard();
        crate::move_gen::attack::update_all_attacks(&mut board);
        let before = board.clone();

        let undo = make_move(&mut board, Square::new(1, 0), Square::new(1, 6)).unwrap();
        assert!(board.get(1, 0).unwrap().is_empty());
        assert_eq!(board.get(1, 6).unwrap().kind, PieceKind::Knight);

        unmake_move(&mut board, undo).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_make_move_out_of_bounds_is_harmless() {
        let mut board = Board::standard();
        let before = board.clone();

        assert!(make_move(&mut board, Square::new(0, 1), Square::new(0, 8)).is_err());
        assert!(make_move(&mut board, Square::new(-1, 1), Square::new(0, 2)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_make_unmake_en_passant_removes_and_restores_victim() {
        let mut board = Board::empty(8, 8).unwrap();
        board.place(PieceKind::Pawn, Color::White, 4, 4).unwrap();
        board.place(PieceKind::Pawn, Color::Black, 3, 4).unwrap();
        let before = board.clone();

        let undo = make_move(&mut board, Square::new(4, 4), Square::new(3, 5)).unwrap();
        assert!(board.get(3, 4).unwrap().is_empty());
        assert_eq!(board.get(3, 5).unwrap().kind, PieceKind::Pawn);

        unmake_move(&mut board, undo).unwrap();
        assert_eq!(board, before);
    }
}
