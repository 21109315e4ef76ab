use grid_snake::collision::check_self_collision;
use grid_snake::config::GameConfig;
use grid_snake::field::Position;
use grid_snake::game::{EndReason, GameSession, GameStatus};
use grid_snake::input::Direction;

fn playing_session(seed: u64) -> GameSession {
    let mut state = GameSession::new_with_seed(GameConfig::default(), seed)
        .expect("default config should be valid");
    state.start();
    state
        .place_consumable(Position::new(19, 19))
        .expect("corner is free at start");
    state
}

#[test]
fn one_tick_without_input_moves_head_right() {
    let mut state = playing_session(42);
    let before = state.snake().occupied_positions();

    state.tick().expect("tick succeeds");

    let after = state.snake().occupied_positions();
    assert_eq!(state.snake().head_position(), Position::new(8, 9));
    assert_eq!(after.len(), before.len());
    assert_eq!(after.last(), Some(&Position::new(3, 9)));
    assert_eq!(&after[1..], &before[..before.len() - 1]);
}

#[test]
fn eating_scores_and_grows_on_following_tick() {
    let mut state = playing_session(43);
    state
        .place_consumable(Position::new(8, 9))
        .expect("cell ahead is free");
    let length = state.snake().len();

    state.tick().expect("tick succeeds");
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake().len(), length);

    let spawned = state.consumable().expect("a new consumable is placed");
    assert!(!state.snake().occupies(spawned));

    state.tick().expect("tick succeeds");
    assert_eq!(state.snake().len(), length + 1);
    let current = state.consumable().expect("a consumable stays on the board");
    assert!(!state.snake().occupies(current));
}

#[test]
fn consumable_stays_off_the_chain_across_many_bites() {
    for seed in 0..20 {
        let mut state = playing_session(seed);
        state
            .place_consumable(Position::new(8, 9))
            .expect("cell ahead is free");

        for _ in 0..10 {
            state.tick().expect("tick succeeds");
            if state.status() != GameStatus::Playing {
                break;
            }
            let consumable = state.consumable().expect("a consumable stays on the board");
            assert!(!state.snake().occupies(consumable));
        }
    }
}

#[test]
fn leaving_left_edge_ends_game_and_freezes_state() {
    let config = GameConfig {
        initial_direction: Direction::Left,
        ..GameConfig::default()
    };
    let mut state = GameSession::new_with_seed(config, 44).expect("layout is valid");
    state
        .place_consumable(Position::new(19, 19))
        .expect("corner is free");
    state.start();

    for _ in 0..7 {
        state.tick().expect("tick succeeds");
    }
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.snake().head_position(), Position::new(0, 9));

    state.tick().expect("tick succeeds");
    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.end_reason(), Some(EndReason::WallCollision));
    assert_eq!(state.snapshot().head, Position::new(-1, 9));

    let frozen = state.snapshot();
    for _ in 0..3 {
        state.tick().expect("ticks after game over are no-ops");
    }
    assert_eq!(state.snapshot(), frozen);
}

#[test]
fn reset_after_game_over_restores_initial_run() {
    let mut state = GameSession::new_with_seed(GameConfig::default(), 45)
        .expect("default config should be valid");
    let initial = state.snapshot();

    state
        .place_consumable(Position::new(19, 19))
        .expect("corner is free");
    state.handle_input(Direction::Up);
    for _ in 0..10 {
        state.tick().expect("tick succeeds");
    }
    assert_eq!(state.status(), GameStatus::GameOver);

    state.reset();

    let snapshot = state.snapshot();
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.status, GameStatus::Playing);
    assert_eq!(snapshot.segments, initial.segments);
    assert_eq!(snapshot.end_reason, None);

    state.tick().expect("play resumes after reset");
    assert_eq!(state.tick_count(), 1);
}

#[test]
fn neck_overlap_counts_as_self_collision() {
    let chain = [
        Position::new(5, 5),
        Position::new(5, 5),
        Position::new(4, 5),
        Position::new(3, 5),
    ];

    assert!(check_self_collision(&chain));
}

#[test]
fn snapshot_serializes_for_headless_output() {
    let state = playing_session(46);

    let json = serde_json::to_value(state.snapshot()).expect("snapshot serializes");

    assert_eq!(json["status"], "playing");
    assert_eq!(json["head"]["x"], 7);
    assert_eq!(json["segments"][0]["shape"], "head");
    assert_eq!(json["segments"][0]["orientation"], "270");
    assert_eq!(json["segments"][5]["shape"], "tail");
}
