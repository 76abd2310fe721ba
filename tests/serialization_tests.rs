//! Wire-form tests: snapshots must round-trip losslessly through both the
//! readable (JSON) and compact (bincode) encodings, and hostile snapshots
//! must be rejected before they reach the rules engine.

use ludo_engine::core::{Color, DiceRng, GameSnapshot, GameState, SnapshotError};
use ludo_engine::rules;

/// A mid-game state with tokens spread over yard, ring, and home.
fn mid_game_state(seed: u64) -> GameState {
    let mut state = rules::new_game(4);
    let mut dice = DiceRng::new(seed);

    for _ in 0..500 {
        if state.is_finished() {
            break;
        }
        let roll = rules::roll(&mut state, &mut dice).unwrap();
        let moves = rules::legal_moves(&state, roll);
        if let Some(&(color, token_index)) = moves.first() {
            let outcome = rules::apply_move(&mut state, color, token_index, roll).unwrap();
            if !outcome.extra_turn && !state.is_finished() {
                rules::advance_turn(&mut state);
            }
        } else {
            rules::pass_turn(&mut state).unwrap();
        }
    }
    state
}

#[test]
fn test_json_round_trip_is_lossless() {
    let state = mid_game_state(42);
    let snapshot = state.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: GameSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(snapshot, decoded);
    assert_eq!(GameState::from_snapshot(&decoded).unwrap(), state);

    // serialize -> deserialize -> serialize is byte-identical.
    assert_eq!(serde_json::to_string(&decoded).unwrap(), json);
}

#[test]
fn test_bincode_round_trip_is_lossless() {
    let state = mid_game_state(7);
    let snapshot = state.snapshot();

    let bytes = snapshot.encode().unwrap();
    let decoded = GameSnapshot::decode(&bytes).unwrap();

    assert_eq!(snapshot, decoded);
    assert_eq!(decoded.encode().unwrap(), bytes);
}

#[test]
fn test_json_token_records_carry_kind_tags() {
    let snapshot = rules::new_game(2).snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();

    let tokens = json["tokens"].as_array().unwrap();
    assert_eq!(tokens.len(), 8);
    for record in tokens {
        assert_eq!(record["kind"], "yard");
        assert!(record["path_offset"].is_null());
        assert!(record["home_index"].is_null());
    }
    assert_eq!(json["active_colors"][0], "red");
    assert_eq!(json["active_colors"][1], "yellow");
    assert_eq!(json["player_count"], 2);
}

#[test]
fn test_engine_state_survives_process_boundary() {
    // Simulate a request cycle: state lives only as bytes between calls.
    let mut state = rules::new_game(2);
    rules::record_roll(&mut state, 6).unwrap();
    let bytes = state.snapshot().encode().unwrap();
    drop(state);

    let mut state = GameState::from_snapshot(&GameSnapshot::decode(&bytes).unwrap()).unwrap();
    assert_eq!(state.last_roll(), Some(6));

    let outcome = rules::apply_move(&mut state, Color::Red, 0, 6).unwrap();
    assert!(outcome.extra_turn);
}

#[test]
fn test_tampered_snapshot_is_rejected() {
    let mut snapshot = rules::new_game(2).snapshot();
    // Duplicate a slot: one red token too many, one yellow too few.
    snapshot.tokens[4].color = Color::Red;

    assert_eq!(
        GameState::from_snapshot(&snapshot),
        Err(SnapshotError::TokenSlots)
    );
}

#[test]
fn test_dice_state_round_trips_with_game() {
    // A session can park its die next to its game state and resume the
    // exact roll stream.
    let mut dice = DiceRng::new(123);
    let mut state = rules::new_game(2);
    rules::roll(&mut state, &mut dice).unwrap();

    let parked = serde_json::to_string(&dice.state()).unwrap();
    let expected: Vec<u8> = (0..10).map(|_| dice.roll()).collect();

    let restored_state = serde_json::from_str(&parked).unwrap();
    let mut restored = DiceRng::from_state(&restored_state);
    let actual: Vec<u8> = (0..10).map(|_| restored.roll()).collect();

    assert_eq!(expected, actual);
}
