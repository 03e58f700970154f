//! Starting arrangement and board lifecycle tests.

use crate::board::{Board, BoardError, Cell, Color, Piece, PieceKind};

#[test]
fn test_empty_board_has_no_pieces() {
    let board = Board::empty();
    assert_eq!(board.piece_count(), 0);
    assert_eq!(board.pieces().count(), 0);
}

#[test]
fn test_start_position_piece_count() {
    let board = Board::new();
    assert_eq!(board.piece_count(), 32);
}

#[test]
fn test_start_position_arrangement() {
    let board = Board::new();
    let back_rank = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    for (file, &kind) in back_rank.iter().enumerate() {
        assert_eq!(
            board.get(Cell(file, 0)).unwrap(),
            Some(Piece::new(Color::Black, kind)),
            "black back rank at file {file}"
        );
        assert_eq!(
            board.get(Cell(file, 1)).unwrap(),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(
            board.get(Cell(file, 6)).unwrap(),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            board.get(Cell(file, 7)).unwrap(),
            Some(Piece::new(Color::White, kind)),
            "white back rank at file {file}"
        );
    }

    for rank in 2..6 {
        for file in 0..8 {
            assert_eq!(
                board.get(Cell(file, rank)).unwrap(),
                None,
                "middle ranks start empty"
            );
        }
    }
}

#[test]
fn test_reset_restores_start_position() {
    let mut board = Board::new();
    board.move_piece(Cell(4, 6), Cell(4, 4)).unwrap();
    board.move_piece(Cell(3, 7), Cell(3, 2)).unwrap();
    board.reset_to_start();
    assert_eq!(board, Board::new());
}

#[test]
fn test_default_is_start_position() {
    assert_eq!(Board::default(), Board::new());
}

#[test]
fn test_get_out_of_range() {
    let board = Board::new();
    assert_eq!(
        board.get(Cell(8, 0)),
        Err(BoardError::OutOfRange { cell: Cell(8, 0) })
    );
    assert_eq!(
        board.get(Cell(0, 8)),
        Err(BoardError::OutOfRange { cell: Cell(0, 8) })
    );
}

#[test]
fn test_set_out_of_range_leaves_board_unchanged() {
    let mut board = Board::new();
    let before = board.clone();
    let piece = Some(Piece::new(Color::White, PieceKind::Queen));
    assert!(board.set(Cell(9, 9), piece).is_err());
    assert_eq!(board, before);
}

#[test]
fn test_in_bounds() {
    let board = Board::empty();
    assert!(board.in_bounds(Cell(0, 0)));
    assert!(board.in_bounds(Cell(7, 7)));
    assert!(!board.in_bounds(Cell(8, 0)));
    assert!(!board.in_bounds(Cell(0, 8)));
}

#[test]
fn test_cell_new_rejects_out_of_range() {
    assert_eq!(Cell::new(3, 4), Some(Cell(3, 4)));
    assert_eq!(Cell::new(8, 0), None);
    assert_eq!(Cell::try_from((2, 5)), Ok(Cell(2, 5)));
    assert!(Cell::try_from((0, 9)).is_err());
}

#[test]
fn test_cell_index_round_trip() {
    for idx in 0..64 {
        let cell = Cell::from_index(idx);
        assert_eq!(cell.as_index(), idx);
    }
    assert_eq!(Cell(3, 2).as_index(), 19);
}

#[test]
fn test_pieces_iterator_matches_board_contents() {
    let board = Board::new();
    for (cell, piece) in board.pieces() {
        assert_eq!(board.get(cell).unwrap(), Some(piece));
    }
    assert_eq!(board.pieces().count(), board.piece_count());
}

#[test]
fn test_display_shows_both_sides() {
    let text = Board::new().to_string();
    assert!(text.contains('K'), "white king rendered uppercase");
    assert!(text.contains('k'), "black king rendered lowercase");
    assert!(text.contains('.'), "empty cells rendered as dots");
}

#[cfg(feature = "serde")]
#[test]
fn test_types_serde_round_trip() {
    let cell = Cell(3, 4);
    let json = serde_json::to_string(&cell).unwrap();
    assert_eq!(serde_json::from_str::<Cell>(&json).unwrap(), cell);

    let piece = Piece::new(Color::Black, PieceKind::Knight);
    let json = serde_json::to_string(&piece).unwrap();
    assert_eq!(serde_json::from_str::<Piece>(&json).unwrap(), piece);
}
