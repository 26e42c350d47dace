use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use go_rules::{Engine, GameState, MoveError, Placement, Point, Stone};
use serde::Serialize;

use crate::client::{MoveClient, MoveRequest, WireMove};
use crate::config::MatchConfig;
use crate::error::{ClientError, TurnError};
use crate::http::HttpMoveClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingLocalMove,
    ValidatingLocal,
    AwaitingRemoteMove,
    ValidatingRemote,
    ErrorRecovery,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingLocalMove => write!(f, "awaiting_local_move"),
            Phase::ValidatingLocal => write!(f, "validating_local"),
            Phase::AwaitingRemoteMove => write!(f, "awaiting_remote_move"),
            Phase::ValidatingRemote => write!(f, "validating_remote"),
            Phase::ErrorRecovery => write!(f, "error_recovery"),
        }
    }
}

/// Result of one submitted local move.
#[derive(Debug)]
pub enum TurnOutcome {
    /// A cycle was already in flight; nothing happened.
    Ignored,
    /// The local move broke a rule. The same player moves again.
    Rejected(MoveError),
    /// Local and remote moves were both committed.
    Completed { local: Placement, remote: Placement },
    /// The local move was committed but no remote move was.
    RemoteFailed { local: Placement, error: TurnError },
}

impl TurnOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, TurnOutcome::Ignored)
    }

    pub fn local(&self) -> Option<&Placement> {
        match self {
            TurnOutcome::Completed { local, .. } | TurnOutcome::RemoteFailed { local, .. } => {
                Some(local)
            }
            TurnOutcome::Ignored | TurnOutcome::Rejected(_) => None,
        }
    }

    pub fn remote(&self) -> Option<&Placement> {
        match self {
            TurnOutcome::Completed { remote, .. } => Some(remote),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct TurnState {
    engine: Engine,
    current: Stone,
    phase: Phase,
}

/// Drives a game between a local player and a remote move service.
///
/// Each submitted move runs a full cycle: validate and commit the local move,
/// ask the service for a reply, validate and commit that reply, then hand the
/// turn back. Only one cycle runs at a time; submissions that arrive while one
/// is in flight are dropped.
pub struct TurnController<C> {
    client: C,
    state: Mutex<TurnState>,
    move_lock: AtomicBool,
    ai_timeout: Option<Duration>,
}

impl TurnController<HttpMoveClient> {
    /// A controller that reaches the move service over HTTP.
    pub fn connect(config: &MatchConfig) -> Self {
        Self::new(HttpMoveClient::from_config(config), config)
    }
}

impl<C: MoveClient> TurnController<C> {
    pub fn new(client: C, config: &MatchConfig) -> Self {
        Self::with_engine(client, Engine::new(config.grid_size), config.ai_timeout)
    }

    /// Resume from an existing engine. Black is to move.
    pub fn with_engine(client: C, engine: Engine, ai_timeout: Option<Duration>) -> Self {
        TurnController {
            client,
            state: Mutex::new(TurnState {
                engine,
                current: Stone::Black,
                phase: Phase::AwaitingLocalMove,
            }),
            move_lock: AtomicBool::new(false),
            ai_timeout,
        }
    }

    // -- Accessors --

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn current_player(&self) -> Stone {
        self.lock_state().current
    }

    pub fn phase(&self) -> Phase {
        self.lock_state().phase
    }

    pub fn is_locked(&self) -> bool {
        self.move_lock.load(Ordering::Acquire)
    }

    /// A copy of the committed game.
    pub fn engine(&self) -> Engine {
        self.lock_state().engine.clone()
    }

    pub fn game_state(&self) -> GameState {
        self.lock_state().engine.game_state()
    }

    // -- Turn cycle --

    /// Play `point` for the player to move, then let the move service reply.
    pub async fn submit_local_move(&self, point: Point) -> TurnOutcome {
        if self
            .move_lock
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(%point, "move cycle in flight, dropping submission");
            return TurnOutcome::Ignored;
        }

        let mover = self.current_player();
        let _cycle = CycleGuard {
            state: &self.state,
            move_lock: &self.move_lock,
            mover,
        };

        self.run_cycle(mover, point).await
    }

    async fn run_cycle(&self, mover: Stone, point: Point) -> TurnOutcome {
        let (local, request) = {
            let mut state = self.lock_state();
            state.phase = Phase::ValidatingLocal;

            match state.engine.try_play(mover, point) {
                Ok(placement) => {
                    tracing::info!(
                        stone = %mover,
                        %point,
                        captured = placement.captured_count(),
                        "local move committed"
                    );
                    state.current = mover.opp();
                    state.phase = Phase::AwaitingRemoteMove;
                    let request = MoveRequest {
                        last_move: point,
                        board_state: state.engine.board().rows(),
                    };
                    (placement, request)
                }
                Err(reason) => {
                    state.phase = Phase::ErrorRecovery;
                    tracing::debug!(stone = %mover, %point, %reason, "local move rejected");
                    return TurnOutcome::Rejected(reason);
                }
            }
        };

        let wire = match self.request_remote(&request).await {
            Ok(wire) => wire,
            Err(e) => {
                tracing::warn!(error = %e, "AI move unavailable, turn returns to {mover}");
                return TurnOutcome::RemoteFailed {
                    local,
                    error: TurnError::AiUnavailable(e),
                };
            }
        };

        let mut state = self.lock_state();
        state.phase = Phase::ValidatingRemote;
        let remote_stone = mover.opp();

        let result = match wire.to_point(state.engine.size()) {
            Some(p) => state.engine.try_play(remote_stone, p),
            None => Err(MoveError::OutOfBounds),
        };

        match result {
            Ok(remote) => {
                tracing::info!(
                    stone = %remote_stone,
                    point = %remote.pos,
                    captured = remote.captured_count(),
                    "AI move committed"
                );
                TurnOutcome::Completed { local, remote }
            }
            Err(reason) => {
                state.phase = Phase::ErrorRecovery;
                tracing::error!(proposed = %wire, %reason, "AI proposed an illegal move");
                TurnOutcome::RemoteFailed {
                    local,
                    error: TurnError::AiInvalidMove {
                        proposed: wire,
                        reason,
                    },
                }
            }
        }
    }

    /// The single suspension point of a cycle.
    async fn request_remote(&self, request: &MoveRequest) -> Result<WireMove, ClientError> {
        let pending = self.client.request_move(request);
        match self.ai_timeout {
            Some(limit) => match tokio::time::timeout(limit, pending).await {
                Ok(reply) => reply,
                Err(_) => Err(ClientError::Timeout(limit)),
            },
            None => pending.await,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, TurnState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Ends a cycle: the turn goes back to the local player and the lock opens,
/// whichever way the cycle finished.
struct CycleGuard<'a> {
    state: &'a Mutex<TurnState>,
    move_lock: &'a AtomicBool,
    mover: Stone,
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.current = self.mover;
            state.phase = Phase::AwaitingLocalMove;
        }
        self.move_lock.store(false, Ordering::Release);
        tracing::debug!(stone = %self.mover, "turn returned to local player");
    }
}
