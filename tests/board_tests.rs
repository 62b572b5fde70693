use minesweeper::{Board, GameConfig, GameError, CLOSED, EDGE, FLAG, MINE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_config_rejects_bad_parameters() {
    assert_eq!(
        GameConfig::new(0, 3, 1).unwrap_err(),
        GameError::InvalidWidth
    );
    assert_eq!(
        GameConfig::new(3, 0, 1).unwrap_err(),
        GameError::InvalidHeight
    );
    assert_eq!(
        GameConfig::new(3, 3, 9).unwrap_err(),
        GameError::TooManyMines
    );
    assert!(GameConfig::new(3, 3, 8).is_ok());
}

#[test]
fn test_init_places_exact_mine_count() {
    let config = GameConfig::new(8, 5, 11).unwrap();
    let mut board = Board::new(config);
    let mut rng = SmallRng::seed_from_u64(42);
    board.init(&mut rng);

    let mut mines = 0;
    for y in 1..=5 {
        for x in 1..=8 {
            if board.is_mine(x, y) {
                mines += 1;
            }
        }
    }
    assert_eq!(mines, 11);
    assert_eq!(board.count_unopened(), 8 * 5);
    assert_eq!(board.count_flagged(), 0);
}

#[test]
fn test_border_is_edge_sentinel() {
    let config = GameConfig::new(4, 3, 2).unwrap();
    let mut board = Board::new(config);
    let mut rng = SmallRng::seed_from_u64(7);
    board.init(&mut rng);

    for x in 0..=5 {
        assert_eq!(board.get(x, 0), EDGE);
        assert_eq!(board.get(x, 4), EDGE);
    }
    for y in 0..=4 {
        assert_eq!(board.get(0, y), EDGE);
        assert_eq!(board.get(5, y), EDGE);
    }
    // far outside the bordered grid reads as edge too
    assert!(board.is_out_of_board(-5, 2));
    assert!(board.is_out_of_board(100, 100));
    assert!(!board.is_out_of_board(1, 1));
}

#[test]
fn test_hints_match_neighbor_mines() {
    let config = GameConfig::new(9, 7, 15).unwrap();
    let mut board = Board::new(config);
    let mut rng = SmallRng::seed_from_u64(99);
    board.init(&mut rng);

    for y in 1..=7 {
        for x in 1..=9 {
            if board.is_mine(x, y) {
                continue;
            }
            let hint = board.get(x, y) - CLOSED;
            let expected = board
                .neighbors(x, y)
                .iter()
                .filter(|&&code| code == MINE)
                .count();
            assert_eq!(hint as usize, expected, "hint mismatch at ({}, {})", x, y);
        }
    }
}

#[test]
fn test_neighbors_block_at_corner() {
    let config = GameConfig::new(3, 3, 1).unwrap();
    let board = Board::with_mines(config, &[(2, 2)]).unwrap();

    // 3x3 block around the top-left interior cell, row-major
    let block = board.neighbors(1, 1);
    assert_eq!(block[0], EDGE);
    assert_eq!(block[1], EDGE);
    assert_eq!(block[2], EDGE);
    assert_eq!(block[3], EDGE);
    assert_eq!(block[4], CLOSED + 1); // center, one mine adjacent
    assert_eq!(block[8], MINE);
}

#[test]
fn test_with_mines_builds_known_layout() {
    let config = GameConfig::new(3, 3, 1).unwrap();
    let board = Board::with_mines(config, &[(1, 1)]).unwrap();

    assert!(board.is_mine(1, 1));
    assert_eq!(board.get(2, 1), CLOSED + 1);
    assert_eq!(board.get(2, 2), CLOSED + 1);
    assert_eq!(board.get(3, 3), CLOSED);
}

#[test]
fn test_with_mines_rejects_bad_layouts() {
    let config = GameConfig::new(3, 3, 1).unwrap();
    assert_eq!(
        Board::with_mines(config, &[(0, 1)]).unwrap_err(),
        GameError::MineOutOfBoard
    );
    assert_eq!(
        Board::with_mines(config, &[(4, 1)]).unwrap_err(),
        GameError::MineOutOfBoard
    );
    assert_eq!(
        Board::with_mines(config, &[]).unwrap_err(),
        GameError::MineCountMismatch
    );

    // duplicates collapse, leaving the count short
    let config2 = GameConfig::new(3, 3, 2).unwrap();
    assert_eq!(
        Board::with_mines(config2, &[(1, 1), (1, 1)]).unwrap_err(),
        GameError::MineCountMismatch
    );
}

#[test]
fn test_reveal_floods_zero_region() {
    let config = GameConfig::new(5, 5, 1).unwrap();
    let mut board = Board::with_mines(config, &[(1, 1)]).unwrap();

    board.reveal_from(5, 5);

    assert!(board.is_fully_cleared());
    assert_eq!(board.get(1, 1), MINE); // the mine never opens
    assert_eq!(board.get(2, 2), 1); // numbered rim of the zero region
    assert_eq!(board.get(5, 5), 0);
}

#[test]
fn test_reveal_on_numbered_cell_opens_only_that_cell() {
    let config = GameConfig::new(3, 3, 1).unwrap();
    let mut board = Board::with_mines(config, &[(1, 1)]).unwrap();

    board.reveal_from(2, 2); // hint 1, no flood
    assert_eq!(board.get(2, 2), 1);
    assert_eq!(board.count_opened(), 1);
}

#[test]
fn test_reveal_skips_flagged_cells() {
    let config = GameConfig::new(3, 3, 1).unwrap();
    let mut board = Board::with_mines(config, &[(1, 1)]).unwrap();

    board.toggle_flag(3, 3);
    board.reveal_from(2, 3);

    assert_eq!(board.get(3, 3), CLOSED + FLAG); // zero hint, still flagged
    assert!(!board.is_fully_cleared());

    board.toggle_flag(3, 3);
    board.reveal_from(3, 3);
    assert!(board.is_fully_cleared());
}

#[test]
fn test_reveal_out_of_range_is_noop() {
    let config = GameConfig::new(3, 3, 1).unwrap();
    let mut board = Board::with_mines(config, &[(1, 1)]).unwrap();
    let before = board.clone();

    board.reveal_from(0, 0);
    board.reveal_from(-3, 7);
    board.reveal_from(50, 2);

    assert_eq!(board, before);
}

#[test]
fn test_toggle_flag_roundtrip_and_open_noop() {
    let config = GameConfig::new(3, 3, 1).unwrap();
    let mut board = Board::with_mines(config, &[(1, 1)]).unwrap();

    let code = board.get(2, 2);
    board.toggle_flag(2, 2);
    assert_eq!(board.get(2, 2), code + FLAG);
    assert_eq!(board.count_flagged(), 1);
    board.toggle_flag(2, 2);
    assert_eq!(board.get(2, 2), code);

    // flags stick to mines like any other closed cell
    board.toggle_flag(1, 1);
    assert_eq!(board.get(1, 1), MINE + FLAG);
    assert!(board.is_mine(1, 1));
    board.toggle_flag(1, 1);

    // opened cells cannot be flagged
    board.reveal_from(2, 2);
    board.toggle_flag(2, 2);
    assert_eq!(board.get(2, 2), 1);

    // neither can the border
    board.toggle_flag(0, 0);
    assert_eq!(board.get(0, 0), EDGE);
}

#[test]
fn test_counts_track_reveals_and_flags() {
    let config = GameConfig::new(3, 3, 1).unwrap();
    let mut board = Board::with_mines(config, &[(1, 1)]).unwrap();

    assert_eq!(board.count_unopened(), 9);
    assert_eq!(board.count_opened(), 0);

    board.toggle_flag(3, 1);
    assert_eq!(board.count_flagged(), 1);
    assert_eq!(board.count_closed(), 8);
    assert_eq!(board.count_unopened(), 9);

    board.reveal_from(2, 2);
    assert_eq!(board.count_opened(), 1);
    assert_eq!(board.count_unopened(), 8);
}
