//! Integration tests for the game session and the per-tick loop step

use classic_tetris::app::{App, Control};
use classic_tetris::core::{GameSession, LockedSet, Phase, Piece, SessionConfig, SimpleRng};
use classic_tetris::types::{
    GameAction, InputEvent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_FALL_INTERVAL_MS,
};

fn session(locked: LockedSet, current: Piece) -> GameSession {
    GameSession::from_parts(SessionConfig::default(), locked, current, PieceKind::T)
}

#[test]
fn test_game_lifecycle() {
    let s = GameSession::new(SessionConfig::default().with_seed(12345));
    assert_eq!(s.phase(), Phase::Falling);
    assert!(s.current().is_some());
    assert!(s.locked().is_empty());
    assert_eq!(s.score(), 0);
}

#[test]
fn test_o_piece_falls_to_floor_and_locks() {
    let mut s = session(LockedSet::new(), Piece::at(PieceKind::O, 4, 0));

    for i in 0..18 {
        assert!(s.apply_action(GameAction::SoftDrop), "down move {} rejected", i + 1);
    }
    assert!(!s.apply_action(GameAction::SoftDrop));
    assert_eq!(s.current().unwrap().y, 18);

    let outcome = s.tick(INITIAL_FALL_INTERVAL_MS as u32);
    assert!(outcome.locked);
    assert_eq!(outcome.rows_cleared, 0);

    let cells: Vec<_> = s.locked().iter().map(|(pos, _)| pos).collect();
    assert_eq!(cells, vec![(4, 18), (4, 19), (5, 18), (5, 19)]);
    assert!(s.locked().iter().all(|(_, kind)| kind == PieceKind::O));

    // Next piece is in play at the spawn origin.
    let next = s.current().unwrap();
    assert_eq!((next.kind, next.x, next.y), (PieceKind::T, 3, 0));
}

#[test]
fn test_horizontal_i_completes_bottom_row() {
    let mut locked = LockedSet::new();
    for x in 0..BOARD_WIDTH as i8 {
        if !(3..=6).contains(&x) {
            locked.insert(x, 19, PieceKind::S);
        }
    }
    locked.insert(0, 18, PieceKind::Z);
    let mut s = session(locked, Piece::new(PieceKind::I));

    while s.apply_action(GameAction::SoftDrop) {}
    assert_eq!(s.current().unwrap().y, 19);

    let outcome = s.tick(1000);
    assert_eq!(outcome.rows_cleared, 1);
    assert_eq!(s.score(), 10);
    assert_eq!(s.lines_cleared(), 1);
    // Only the Z cell survives, one row lower.
    assert_eq!(s.locked().iter().collect::<Vec<_>>(), vec![((0, 19), PieceKind::Z)]);
    assert_eq!(s.fall_interval_ms(), INITIAL_FALL_INTERVAL_MS);
}

#[test]
fn test_locked_cell_in_top_row_is_lost() {
    let mut locked = LockedSet::new();
    locked.insert(3, 0, PieceKind::T);
    let s = session(locked, Piece::at(PieceKind::O, 7, 10));
    assert!(s.is_lost());
    assert!(s.snapshot().lost);
}

#[test]
fn test_blocked_spawn_is_lost() {
    // Stack reaches row 1 under the spawn area without touching row 0.
    let mut locked = LockedSet::new();
    for y in 1..BOARD_HEIGHT as i8 {
        locked.insert(3, y, PieceKind::J);
    }
    locked.remove_if_present(3, 1);
    locked.insert(4, 1, PieceKind::J);
    // The falling piece locks far away, then the queued T cannot spawn.
    let mut s = session(locked, Piece::at(PieceKind::O, 7, 18));

    let outcome = s.tick(1000);
    assert!(outcome.locked);
    assert!(outcome.lost);
    assert_eq!(s.current(), None);
}

#[test]
fn test_app_applies_events_before_gravity() {
    let mut app = App::with_session(session(LockedSet::new(), Piece::at(PieceKind::O, 4, 0)));

    let control = app.step(
        [
            InputEvent::Action(GameAction::MoveLeft),
            InputEvent::Action(GameAction::MoveLeft),
        ],
        1000,
    );

    assert_eq!(control, Control::Continue);
    let piece = app.session().current().unwrap();
    assert_eq!((piece.x, piece.y), (2, 1));
    assert!(app.last_outcome().fell);
}

#[test]
fn test_app_rejected_action_keeps_running() {
    let mut app = App::with_session(session(LockedSet::new(), Piece::at(PieceKind::O, 0, 5)));

    let control = app.step([InputEvent::Action(GameAction::MoveLeft)], 0);

    assert_eq!(control, Control::Continue);
    let piece = app.session().current().unwrap();
    assert_eq!((piece.x, piece.y), (0, 5));
}

#[test]
fn test_app_quit_stops_immediately() {
    let mut app = App::with_session(session(LockedSet::new(), Piece::at(PieceKind::O, 4, 0)));

    let control = app.step(
        [
            InputEvent::Quit,
            InputEvent::Action(GameAction::MoveLeft),
        ],
        1000,
    );

    assert_eq!(control, Control::Quit);
    let piece = app.session().current().unwrap();
    assert_eq!((piece.x, piece.y), (4, 0));
}

#[test]
fn test_app_reports_loss() {
    let mut locked = LockedSet::new();
    for y in 2..BOARD_HEIGHT as i8 {
        locked.insert(4, y, PieceKind::L);
    }
    let mut app = App::with_session(session(locked, Piece::at(PieceKind::O, 3, 0)));

    assert_eq!(app.step([], 1000), Control::Lost);
}

/// Random play: invariants hold on every step until the run ends.
#[test]
fn test_random_play_keeps_invariants() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ];

    for seed in 1..=20u32 {
        let mut s = GameSession::new(SessionConfig::default().with_seed(seed));
        let mut rng = SimpleRng::new(seed.wrapping_mul(7919));
        let mut last_score = s.score();
        let mut last_interval = s.fall_interval_ms();

        for _ in 0..5_000 {
            if s.is_lost() {
                break;
            }
            let action = actions[rng.next_range(actions.len() as u32) as usize];
            s.apply_action(action);
            s.tick(rng.next_range(400));

            for ((x, y), _) in s.locked().iter() {
                assert!((0..BOARD_WIDTH as i8).contains(&x), "seed {seed}: x={x}");
                assert!((0..BOARD_HEIGHT as i8).contains(&y), "seed {seed}: y={y}");
            }
            if let Some(piece) = s.current() {
                for (x, y) in piece.cells() {
                    assert!(!s.locked().contains(x, y), "seed {seed}: overlap at ({x}, {y})");
                }
            }
            assert!(s.score() >= last_score);
            assert!(s.fall_interval_ms() <= last_interval);
            last_score = s.score();
            last_interval = s.fall_interval_ms();
        }
    }
}
