use battleship_proba::render::{coord_label, hidden_view, revealed_view, score_table};
use battleship_proba::{find_best_cell, Board, ConstantScorer, Orientation};

fn board_with_carrier() -> Board {
    let mut board = Board::new();
    board
        .place_ship(0, 0, 5, Orientation::Horizontal, "Carrier")
        .unwrap();
    board
}

#[test]
fn test_coord_label() {
    assert_eq!(coord_label(0, 0), "A1");
    assert_eq!(coord_label(6, 2), "C7");
    assert_eq!(coord_label(9, 9), "J10");
}

#[test]
fn test_revealed_view_shows_ships() {
    let mut board = board_with_carrier();
    board.fire(0, 1).unwrap();
    let view = revealed_view(&board);
    assert!(view.contains(" 1 C X C C C . . . . . ║"), "{view}");
}

#[test]
fn test_hidden_view_shows_only_shots() {
    let mut board = board_with_carrier();
    board.fire(0, 0).unwrap();
    board.fire(9, 9).unwrap();
    let view = hidden_view(&board);
    assert!(view.contains(" 1 X . . . . . . . . . ║"), "{view}");
    assert!(view.contains("10 . . . . . . . . . o ║"), "{view}");
}

#[test]
fn test_score_table_after_sweep() {
    let mut board = board_with_carrier();
    board.fire(0, 0).unwrap();
    let before = score_table(&board);
    assert!(before.contains("     -"));

    find_best_cell(&mut board, &ConstantScorer(0.5)).unwrap();
    let table = score_table(&board);
    assert!(table.contains(" 1      X 0.500"), "{table}");
    assert!(!table.contains("     -"));
}
