//! Snapshot save/restore integration tests.

use std::time::{Duration, Instant};

use serde_json::Value;

use rust_klondike::core::{GameMode, GameRng, Move, SnapshotError};
use rust_klondike::rules::{Klondike, RulesEngine};
use rust_klondike::snapshot::{CardRecord, Checkpoint, Snapshot};
use rust_klondike::GameState;

fn played_game(seed: u64, mode: GameMode, now: Instant) -> GameState {
    let engine = Klondike::default();
    let mut state = engine.new_game(seed, mode, now);
    // A few draws and whatever the first legal non-draw move is.
    for _ in 0..5 {
        engine.apply_move(&mut state, &Move::Draw).unwrap();
    }
    if let Some(mv) = engine
        .legal_moves(&state)
        .into_iter()
        .find(|mv| *mv != Move::Draw)
    {
        engine.apply_move(&mut state, &mv).unwrap();
    }
    state
}

fn assert_corrupt(snapshot: &Snapshot, now: Instant) {
    match snapshot.restore(now, GameRng::new(0)) {
        Err(SnapshotError::Corrupt(_)) => {}
        other => panic!("expected corrupt snapshot, got {other:?}"),
    }
}

// =============================================================================
// Round Trips
// =============================================================================

#[test]
fn test_json_roundtrip_preserves_table() {
    let start = Instant::now();
    let state = played_game(3, GameMode::Normal, start);
    let saved_at = start + Duration::from_secs(90);

    let text = Snapshot::capture(&state, "blu_verde", saved_at).to_json().unwrap();
    let restored = Snapshot::from_json(&text)
        .unwrap()
        .restore(saved_at, GameRng::new(5))
        .unwrap();

    assert_eq!(restored.state.layout, state.layout);
    assert_eq!(restored.state.score, state.score);
    assert_eq!(restored.state.move_count, state.move_count);
    assert_eq!(restored.state.elapsed(saved_at), Duration::from_secs(90));
    assert_eq!(restored.theme, "blu_verde");
}

#[test]
fn test_checkpoint_roundtrip_preserves_table() {
    let now = Instant::now();
    let state = played_game(8, GameMode::Timed { limit_secs: 900 }, now);

    let bytes = Checkpoint::capture(&state, "classico", now).to_bytes().unwrap();
    let restored = Checkpoint::from_bytes(&bytes).unwrap().restore(now).unwrap();

    assert_eq!(restored.state.layout, state.layout);
    assert_eq!(restored.state.mode, GameMode::Timed { limit_secs: 900 });
}

#[test]
fn test_checkpoint_replays_recycle_shuffles() {
    let engine = Klondike::default();
    let now = Instant::now();
    let mut state = engine.new_game(6, GameMode::Normal, now);
    while !state.layout.stock.is_empty() {
        engine.apply_move(&mut state, &Move::Draw).unwrap();
    }

    let checkpoint = Checkpoint::capture(&state, "classico", now);
    let mut restored = checkpoint.restore(now).unwrap().state;

    engine.apply_move(&mut state, &Move::Draw).unwrap();
    engine.apply_move(&mut restored, &Move::Draw).unwrap();
    assert_eq!(restored.layout.stock, state.layout.stock);
}

#[test]
fn test_json_uses_save_file_keys() {
    let now = Instant::now();
    let state = played_game(1, GameMode::Hard, now);
    let text = Snapshot::capture(&state, "chiaro", now).to_json().unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    for key in [
        "riserva", "scarti", "colonne", "pile_finali", "punteggio", "mosse", "tempo_gioco",
        "modalita", "tema", "tempo_limite",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["modalita"], "difficile");
    assert_eq!(value["tempo_limite"], Value::Null);
    assert_eq!(value["colonne"].as_array().map(Vec::len), Some(7));
    for symbol in ["♠", "♥", "♦", "♣"] {
        assert!(value["pile_finali"].get(symbol).is_some());
        assert!(text.contains(symbol), "symbol {symbol} should not be escaped");
    }
}

#[test]
fn test_timed_without_limit_defaults_to_ten_minutes() {
    let now = Instant::now();
    let state = played_game(2, GameMode::Normal, now);
    let text = Snapshot::capture(&state, "classico", now).to_json().unwrap();

    let mut value: Value = serde_json::from_str(&text).unwrap();
    let object = value.as_object_mut().unwrap();
    object.insert("modalita".to_string(), Value::from("tempo"));
    object.remove("tempo_limite");
    object.remove("tema");

    let snapshot = Snapshot::from_json(&value.to_string()).unwrap();
    let restored = snapshot.restore(now, GameRng::new(0)).unwrap();
    assert_eq!(restored.state.mode, GameMode::Timed { limit_secs: 600 });
    assert_eq!(restored.theme, "classico");
}

#[test]
fn test_timed_with_null_limit_defaults_to_ten_minutes() {
    let now = Instant::now();
    let state = played_game(2, GameMode::Normal, now);
    let text = Snapshot::capture(&state, "classico", now).to_json().unwrap();

    let mut value: Value = serde_json::from_str(&text).unwrap();
    let object = value.as_object_mut().unwrap();
    object.insert("modalita".to_string(), Value::from("tempo"));
    object.insert("tempo_limite".to_string(), Value::Null);

    let snapshot = Snapshot::from_json(&value.to_string()).unwrap();
    assert_eq!(snapshot.time_limit_secs, None);
    let restored = snapshot.restore(now, GameRng::new(0)).unwrap();
    assert_eq!(restored.state.mode, GameMode::Timed { limit_secs: 600 });
}

// =============================================================================
// Rejected Snapshots
// =============================================================================

#[test]
fn test_malformed_json() {
    assert!(matches!(
        Snapshot::from_json("{\"riserva\": 4}"),
        Err(SnapshotError::Malformed(_))
    ));
    assert!(matches!(
        Snapshot::from_json("not json at all"),
        Err(SnapshotError::Malformed(_))
    ));
}

#[test]
fn test_malformed_binary() {
    assert!(matches!(
        Checkpoint::from_bytes(&[1, 2, 3]),
        Err(SnapshotError::Binary(_))
    ));
}

#[test]
fn test_wrong_column_count() {
    let now = Instant::now();
    let mut snapshot = Snapshot::capture(&played_game(4, GameMode::Normal, now), "classico", now);
    let last = snapshot.columns.pop().unwrap();
    snapshot.stock.extend(last);
    assert_corrupt(&snapshot, now);
}

#[test]
fn test_missing_card() {
    let now = Instant::now();
    let mut snapshot = Snapshot::capture(&played_game(4, GameMode::Normal, now), "classico", now);
    snapshot.stock.pop();
    assert_corrupt(&snapshot, now);
}

#[test]
fn test_duplicated_card() {
    let now = Instant::now();
    let mut snapshot = Snapshot::capture(&played_game(4, GameMode::Normal, now), "classico", now);
    let copy = snapshot.stock[0].clone();
    snapshot.stock[1] = copy;
    assert_corrupt(&snapshot, now);
}

#[test]
fn test_unknown_foundation_key() {
    let now = Instant::now();
    let mut snapshot = Snapshot::capture(&played_game(4, GameMode::Normal, now), "classico", now);
    snapshot.foundations.insert("X".to_string(), Vec::new());
    assert_corrupt(&snapshot, now);
}

#[test]
fn test_card_under_wrong_foundation() {
    let now = Instant::now();
    let mut snapshot = Snapshot::capture(&played_game(4, GameMode::Normal, now), "classico", now);

    // Take the Ace of Hearts from wherever it is and put it on the spades.
    let ace = CardRecord {
        suit: "♥".to_string(),
        rank: "A".to_string(),
        face_up: true,
    };
    let mut found = false;
    for pile in snapshot
        .columns
        .iter_mut()
        .chain([&mut snapshot.stock, &mut snapshot.waste])
        .chain(snapshot.foundations.values_mut())
    {
        if let Some(pos) = pile
            .iter()
            .position(|c| c.suit == ace.suit && c.rank == ace.rank)
        {
            pile.remove(pos);
            found = true;
        }
    }
    assert!(found);
    snapshot.foundations.entry("♠".to_string()).or_default().insert(0, ace);

    assert_corrupt(&snapshot, now);
}

#[test]
fn test_foundation_out_of_order() {
    let now = Instant::now();
    let mut snapshot = Snapshot::capture(&played_game(4, GameMode::Normal, now), "classico", now);

    // Two of Clubs alone on its foundation, no Ace below it.
    let two = ("♣".to_string(), "2".to_string());
    for pile in snapshot
        .columns
        .iter_mut()
        .chain([&mut snapshot.stock, &mut snapshot.waste])
        .chain(snapshot.foundations.values_mut())
    {
        pile.retain(|c| (c.suit.clone(), c.rank.clone()) != two);
    }
    snapshot.foundations.insert(
        "♣".to_string(),
        vec![CardRecord {
            suit: two.0,
            rank: two.1,
            face_up: true,
        }],
    );

    assert_corrupt(&snapshot, now);
}

#[test]
fn test_unknown_mode() {
    let now = Instant::now();
    let mut snapshot = Snapshot::capture(&played_game(4, GameMode::Normal, now), "classico", now);
    snapshot.mode = "facile".to_string();
    assert_corrupt(&snapshot, now);
}

#[test]
fn test_face_down_column_top() {
    let now = Instant::now();
    let mut snapshot = Snapshot::capture(&played_game(4, GameMode::Normal, now), "classico", now);
    let top = snapshot.columns[6].last_mut().unwrap();
    top.face_up = false;
    assert_corrupt(&snapshot, now);
}

#[test]
fn test_face_up_card_below_face_down_in_column() {
    let now = Instant::now();
    let mut snapshot = Snapshot::capture(&played_game(4, GameMode::Normal, now), "classico", now);
    // Column 7 is dealt six face-down cards; turning the bottom one up
    // leaves a face-down card above it.
    assert!(!snapshot.columns[6][1].face_up);
    snapshot.columns[6][0].face_up = true;
    assert_corrupt(&snapshot, now);
}

#[test]
fn test_face_up_card_in_stock() {
    let now = Instant::now();
    let mut snapshot = Snapshot::capture(&played_game(4, GameMode::Normal, now), "classico", now);
    assert!(!snapshot.stock.is_empty());
    snapshot.stock[0].face_up = true;
    assert_corrupt(&snapshot, now);
}
