use roomtactoe::game::{Player, PlayerRegistry, SessionId};
use roomtactoe::storage::{MemoryStore, StateStoreExt};

#[test]
fn challenge_strips_mentions_and_persists() {
    let store = MemoryStore::new();
    let session = SessionId::new("room");
    {
        let mut players = PlayerRegistry::load(&session, &store).unwrap();
        players.start_challenge("@alice", "@bob").unwrap();
    }
    let players = PlayerRegistry::load(&session, &store).unwrap();
    assert!(players.has_players());
    assert_eq!(players.identity(Player::One), Some("alice"));
    assert_eq!(players.identity(Player::Two), Some("bob"));
    assert_eq!(players.current_turn_identity(), Some("alice"));
}

#[test]
fn resolve_and_turn_checks() {
    let store = MemoryStore::new();
    let mut players = PlayerRegistry::load(&SessionId::new("room"), &store).unwrap();
    players.start_challenge("alice", "bob").unwrap();

    assert_eq!(players.resolve_player("alice"), Some(Player::One));
    assert_eq!(players.resolve_player("bob"), Some(Player::Two));
    assert_eq!(players.resolve_player("carol"), None);
    assert_eq!(players.resolve_player("@alice"), None);

    assert!(players.is_allowed_to_move("alice"));
    assert!(!players.is_allowed_to_move("bob"));
    assert!(!players.is_allowed_to_move("carol"));

    players.toggle_turn().unwrap();
    assert!(players.is_allowed_to_move("bob"));
    assert!(!players.is_allowed_to_move("alice"));
}

#[test]
fn toggle_twice_restores_turn() {
    let store = MemoryStore::new();
    let session = SessionId::new("room");
    let mut players = PlayerRegistry::load(&session, &store).unwrap();
    for start in Player::ALL {
        if players.current_turn() != start {
            players.toggle_turn().unwrap();
        }
        players.toggle_turn().unwrap();
        players.toggle_turn().unwrap();
        assert_eq!(players.current_turn(), start);
    }
}

#[test]
fn turn_is_stored_as_plain_number() {
    let store = MemoryStore::new();
    let session = SessionId::new("room");
    let mut players = PlayerRegistry::load(&session, &store).unwrap();
    players.toggle_turn().unwrap();
    let raw: u8 = store.get_or("room:playerTurn", 0).unwrap();
    assert_eq!(raw, 2);
    players.reset_turn().unwrap();
    let raw: u8 = store.get_or("room:playerTurn", 0).unwrap();
    assert_eq!(raw, 1);
}

#[test]
fn stored_turn_out_of_range_is_a_storage_error() {
    let store = MemoryStore::new();
    store.set("room:playerTurn", &3u8).unwrap();
    assert!(PlayerRegistry::load(&SessionId::new("room"), &store).is_err());
}

#[test]
fn only_one_player_means_no_game() {
    let store = MemoryStore::new();
    store.set("room:p1", "alice").unwrap();
    let players = PlayerRegistry::load(&SessionId::new("room"), &store).unwrap();
    assert!(!players.has_players());
}
