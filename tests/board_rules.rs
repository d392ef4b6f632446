use roomtactoe::config::{GameConfig, SymbolConfig};
use roomtactoe::errors::StoreError;
use roomtactoe::game::{Board, Game, Player, SessionId, Square};
use roomtactoe::storage::{MemoryStore, StateStore};

fn sq(n: i64) -> Square {
    Square::new(n).unwrap()
}

fn board_with<'a>(store: &'a MemoryStore, marks: &[(Player, i64)]) -> Board<'a> {
    let mut board = Board::load(&SessionId::new("room"), store).unwrap();
    for (player, n) in marks {
        assert!(board.mark_square(*player, sq(*n)).unwrap());
    }
    board
}

const LINES: [[i64; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

#[test]
fn every_empty_square_marks_exactly_once() {
    for player in Player::ALL {
        for n in 1..=9 {
            let store = MemoryStore::new();
            let mut board = board_with(&store, &[]);
            assert!(board.mark_square(player, sq(n)).unwrap());
            assert!(board.is_square_marked(sq(n)));
            for again in Player::ALL {
                assert!(
                    !board.mark_square(again, sq(n)).unwrap(),
                    "square {} marked twice",
                    n
                );
            }
        }
    }
}

#[test]
fn out_of_range_and_non_numeric_tokens_never_mark() {
    let store = MemoryStore::new();
    let mut board = board_with(&store, &[]);
    for n in [-100, -1, 0, 10, 11, 99, i64::MIN, i64::MAX] {
        assert!(Square::new(n).is_none(), "{} accepted", n);
    }
    for token in ["0", "10", "-5", "abc", "4a", "", " ", "3.5", "1e1", "٣"] {
        assert!(!board.mark_token(Player::One, token).unwrap(), "{:?} marked", token);
    }
    assert_eq!(board.marked_count(), 0);
}

#[test]
fn each_line_wins_for_its_owner_only() {
    for line in LINES {
        for player in Player::ALL {
            let store = MemoryStore::new();
            let marks: Vec<_> = line.iter().map(|n| (player, *n)).collect();
            let board = board_with(&store, &marks);
            assert!(board.has_winning_line(player), "{:?} should win {:?}", player, line);
            assert!(!board.has_winning_line(player.opponent()));
        }
    }
}

#[test]
fn empty_and_non_winning_boards_have_no_line() {
    let store = MemoryStore::new();
    let board = board_with(&store, &[]);
    assert!(!board.has_winning_line(Player::One));
    assert!(!board.has_winning_line(Player::Two));

    // X O X / X O O / O X X : full, no line for anyone
    let store = MemoryStore::new();
    let board = board_with(
        &store,
        &[
            (Player::One, 1),
            (Player::Two, 2),
            (Player::One, 3),
            (Player::One, 4),
            (Player::Two, 5),
            (Player::Two, 6),
            (Player::Two, 7),
            (Player::One, 8),
            (Player::One, 9),
        ],
    );
    assert!(board.is_full());
    assert!(!board.has_winning_line(Player::One));
    assert!(!board.has_winning_line(Player::Two));
}

#[test]
fn full_only_at_nine_marks() {
    let store = MemoryStore::new();
    let mut board = board_with(&store, &[]);
    let mut player = Player::One;
    for n in 1..=9 {
        assert!(!board.is_full(), "full after {} marks", n - 1);
        board.mark_square(player, sq(n)).unwrap();
        player = player.opponent();
    }
    assert!(board.is_full());
}

#[test]
fn cleared_board_renders_nine_blanks() {
    let store = MemoryStore::new();
    let symbols = SymbolConfig::default();
    let mut board = board_with(&store, &[(Player::One, 1), (Player::Two, 5)]);
    board.clear().unwrap();
    let rendered = board.render(&symbols, false);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(rendered.ends_with('\n'));
    for line in lines {
        assert_eq!(line, symbols.empty.repeat(3));
    }
}

#[test]
fn label_rendering_ignores_state() {
    let store = MemoryStore::new();
    let symbols = SymbolConfig::default();
    let board = board_with(&store, &[(Player::Two, 1), (Player::Two, 4)]);
    assert_eq!(
        board.render(&symbols, true),
        ":one::two::three:\n:x::five::six:\n:seven::eight::nine:\n"
    );
}

#[test]
fn stored_squares_outside_the_grid_are_corrupt() {
    for raw in [r#"{"0":"x"}"#, r#"{"5":"o","10":"x"}"#] {
        let store = MemoryStore::new();
        store.set_raw("room:board", raw.as_bytes().to_vec()).unwrap();
        let err = Board::load(&SessionId::new("room"), &store).err();
        assert!(matches!(err, Some(StoreError::Corrupt(_))), "{} loaded", raw);
    }
}

// Padding the stored board with bogus squares must not let a two-move game end in a draw.
#[test]
fn padded_board_cannot_force_a_draw() {
    let store = MemoryStore::new();
    let config = GameConfig::default();
    let session = SessionId::new("room");
    Game::load(&session, &store, &config)
        .unwrap()
        .process_command("alice", Some("challenge bob"))
        .unwrap();
    store
        .set_raw(
            "room:board",
            br#"{"0":"x","10":"o","11":"x","12":"o","13":"x","14":"o","15":"o"}"#.to_vec(),
        )
        .unwrap();
    assert!(matches!(
        Game::load(&session, &store, &config),
        Err(StoreError::Corrupt(_))
    ));
}
