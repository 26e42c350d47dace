use std::time::Duration;

use go_match::{ClientError, Phase, TurnController, TurnError, TurnOutcome};
use go_rules::{Engine, Grid, MoveError, Stone};

use crate::common::{ScriptedClient, StalledClient, controller, init_tracing, p, wire};

fn invalid_reason(outcome: &TurnOutcome) -> Option<MoveError> {
    match outcome {
        TurnOutcome::RemoteFailed {
            error: TurnError::AiInvalidMove { reason, .. },
            ..
        } => Some(*reason),
        _ => None,
    }
}

#[tokio::test]
async fn unavailable_service_keeps_local_move() {
    let client = ScriptedClient::new([Err(ClientError::Transport("connection refused".into()))]);
    let ctl = controller(client, &[]);

    let outcome = ctl.submit_local_move(p(2, 2)).await;
    assert!(
        matches!(
            outcome,
            TurnOutcome::RemoteFailed {
                error: TurnError::AiUnavailable(ClientError::Transport(_)),
                ..
            }
        ),
        "{outcome:?}"
    );
    assert_eq!(outcome.local().map(|l| l.pos), Some(p(2, 2)));

    let engine = ctl.engine();
    assert_eq!(engine.stone_at(p(2, 2)), Some(Stone::Black));
    assert_eq!(engine.moves().len(), 1);
    assert_eq!(ctl.current_player(), Stone::Black);
    assert_eq!(ctl.phase(), Phase::AwaitingLocalMove);
    assert!(!ctl.is_locked());
}

#[tokio::test]
async fn service_replaying_local_point_is_occupied() {
    let ctl = controller(ScriptedClient::moves(&[(2, 2)]), &[]);

    let outcome = ctl.submit_local_move(p(2, 2)).await;
    assert_eq!(invalid_reason(&outcome), Some(MoveError::OccupiedCell));
    assert_eq!(ctl.engine().stone_at(p(2, 2)), Some(Stone::Black));
    assert_eq!(ctl.engine().moves().len(), 1);
}

#[tokio::test]
async fn service_move_off_board() {
    let ctl = controller(ScriptedClient::moves(&[(9, 9)]), &[]);
    let outcome = ctl.submit_local_move(p(0, 0)).await;
    assert_eq!(invalid_reason(&outcome), Some(MoveError::OutOfBounds));

    let ctl = controller(ScriptedClient::moves(&[(-1, 3)]), &[]);
    let outcome = ctl.submit_local_move(p(0, 0)).await;
    assert_eq!(invalid_reason(&outcome), Some(MoveError::OutOfBounds));
}

#[tokio::test]
async fn service_suicide_leaves_board_unchanged() {
    let layout = &["", "", "", "", "", "+++++B", "++++B+B", "+++++B"];
    let ctl = controller(ScriptedClient::moves(&[(6, 5)]), layout);

    let outcome = ctl.submit_local_move(p(0, 0)).await;
    assert_eq!(invalid_reason(&outcome), Some(MoveError::SuicideMove));

    let engine = ctl.engine();
    assert_eq!(engine.stone_at(p(6, 5)), None);
    assert_eq!(engine.board().history().len(), 1);
    assert_eq!(engine.moves().len(), 1);
}

#[tokio::test]
async fn service_repeating_position_is_refused() {
    init_tracing();
    // Black's capture at (2,3) takes two stones; White retaking one of them
    // at (1,3) would restore the position after Black's first move.
    let grid = Grid::from_layout(&["B+B+", "WW+W", "WWW+", "B+WW"]);
    let client = ScriptedClient::moves(&[(0, 3), (1, 3)]);
    let ctl = TurnController::with_engine(client, Engine::with_grid(grid), None);

    let first = ctl.submit_local_move(p(1, 2)).await;
    assert_eq!(first.remote().map(|r| r.pos), Some(p(0, 3)));

    let outcome = ctl.submit_local_move(p(2, 3)).await;
    assert_eq!(outcome.local().map(|l| l.captured_count()), Some(2));
    assert_eq!(invalid_reason(&outcome), Some(MoveError::SuperkoViolation));

    let engine = ctl.engine();
    assert_eq!(engine.stone_at(p(1, 3)), None);
    assert_eq!(engine.stone_at(p(2, 3)), Some(Stone::Black));
    assert_eq!(engine.board().history().len(), 3);
    assert_eq!(engine.moves().len(), 3);
    assert_eq!(engine.last_move().map(|t| t.pos), Some(p(2, 3)));
    assert_eq!(ctl.current_player(), Stone::Black);
    assert_eq!(ctl.phase(), Phase::AwaitingLocalMove);
    assert!(!ctl.is_locked());
}

#[tokio::test]
async fn timeout_counts_as_unavailable() {
    init_tracing();
    let limit = Duration::from_millis(20);
    let ctl = TurnController::with_engine(StalledClient, Engine::new(9), Some(limit));

    let outcome = ctl.submit_local_move(p(4, 4)).await;
    match outcome {
        TurnOutcome::RemoteFailed {
            local,
            error: TurnError::AiUnavailable(ClientError::Timeout(waited)),
        } => {
            assert_eq!(waited, limit);
            assert_eq!(local.pos, p(4, 4));
        }
        other => panic!("expected a timeout, got {other:?}"),
    }
    assert_eq!(ctl.current_player(), Stone::Black);
    assert!(!ctl.is_locked());
}

#[tokio::test]
async fn play_resumes_after_failure() {
    let client = ScriptedClient::new([
        Err(ClientError::Status(503)),
        Ok(wire(2, 2)),
        Ok(wire(6, 6)),
    ]);
    let ctl = controller(client, &[]);

    let first = ctl.submit_local_move(p(2, 2)).await;
    assert!(first.remote().is_none());

    let second = ctl.submit_local_move(p(4, 4)).await;
    assert_eq!(invalid_reason(&second), Some(MoveError::OccupiedCell));

    let third = ctl.submit_local_move(p(2, 6)).await;
    assert_eq!(third.remote().map(|r| r.pos), Some(p(6, 6)));

    let engine = ctl.engine();
    let record: Vec<_> = engine.moves().iter().map(|t| (t.stone, t.pos)).collect();
    assert_eq!(
        record,
        vec![
            (Stone::Black, p(2, 2)),
            (Stone::Black, p(4, 4)),
            (Stone::Black, p(2, 6)),
            (Stone::White, p(6, 6)),
        ]
    );
    assert_eq!(ctl.client().requests().len(), 3);
}
