use super::*;

// ==================== FLIPPING TESTS ====================

#[test]
fn test_single_flip() {
    let pos = Position::new().apply_move(mv(2, 3)).unwrap();

    assert_eq!(pos.cell(2, 3), Cell::Black);
    assert_eq!(pos.cell(3, 3), Cell::Black);
    assert_eq!(pos.count(Color::Black), 4);
    assert_eq!(pos.count(Color::White), 1);
}

#[test]
fn test_flips_in_all_eight_directions() {
    let pos = parse(
        "........
         .B.B.B..
         ..WWW...
         .BW.WB..
         ..WWW...
         .B.B.B..
         ........
         ........",
    );

    let after = pos.apply_move(mv(3, 3)).unwrap();

    assert_eq!(after.count(Color::White), 0);
    assert_eq!(after.count(Color::Black), 17);
    assert!(after.is_terminal());
    assert_eq!(after.winner(), Some(Color::Black));
}

#[test]
fn test_unclosed_run_does_not_flip() {
    let pos = parse(
        "BWW.WW..
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );

    let after = pos.apply_move(mv(0, 3)).unwrap();
    assert_eq!(after.cell(0, 1), Cell::Black);
    assert_eq!(after.cell(0, 2), Cell::Black);
    assert_eq!(after.cell(0, 4), Cell::White);
    assert_eq!(after.cell(0, 5), Cell::White);
}

#[test]
fn test_original_position_is_untouched() {
    let pos = Position::new();
    let copy = pos;
    let _ = pos.apply_move(mv(3, 2)).unwrap();
    assert_eq!(pos, copy);
}

#[test]
fn test_occupied_cell_rejected() {
    let err = Position::new().apply_move(mv(3, 3)).unwrap_err();
    assert_eq!(err, GameError::Occupied { row: 3, col: 3 });
}

#[test]
fn test_non_flipping_move_rejected() {
    let err = Position::new().apply_move(mv(0, 0)).unwrap_err();
    assert_eq!(err, GameError::IllegalMove { mv: mv(0, 0) });
}
