#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use go_match::{ClientError, MoveClient, MoveRequest, TurnController, WireMove};
use go_rules::{Engine, Grid, Point};
use tokio::sync::Notify;

pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "go_match=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn p(row: u8, col: u8) -> Point {
    Point::new(row, col)
}

pub fn wire(row: i32, col: i32) -> WireMove {
    WireMove { row, col }
}

/// 9×9 board built from up to nine layout rows; missing rows are empty.
fn grid_9x9(layout: &[&str]) -> Grid {
    let mut rows: Vec<String> = layout
        .iter()
        .map(|r| format!("{r}{}", "+".repeat(9 - r.len())))
        .collect();
    rows.resize(9, "+".repeat(9));
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    Grid::from_layout(&rows)
}

pub fn controller<C: MoveClient>(client: C, layout: &[&str]) -> TurnController<C> {
    init_tracing();
    TurnController::with_engine(client, Engine::with_grid(grid_9x9(layout)), None)
}

/// Answers each request with the next scripted reply and keeps every request.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<WireMove, ClientError>>>,
    requests: Mutex<Vec<MoveRequest>>,
}

impl ScriptedClient {
    pub fn new(replies: impl IntoIterator<Item = Result<WireMove, ClientError>>) -> Self {
        ScriptedClient {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn moves(moves: &[(i32, i32)]) -> Self {
        Self::new(moves.iter().map(|&(row, col)| Ok(wire(row, col))))
    }

    pub fn requests(&self) -> Vec<MoveRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl MoveClient for ScriptedClient {
    async fn request_move(&self, request: &MoveRequest) -> Result<WireMove, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("script exhausted".to_string())))
    }
}

/// Holds every request until the gate is opened.
pub struct GatedClient {
    pub gate: Arc<Notify>,
    reply: WireMove,
}

impl GatedClient {
    pub fn new(reply: WireMove) -> Self {
        GatedClient {
            gate: Arc::new(Notify::new()),
            reply,
        }
    }
}

impl MoveClient for GatedClient {
    async fn request_move(&self, _request: &MoveRequest) -> Result<WireMove, ClientError> {
        self.gate.notified().await;
        Ok(self.reply)
    }
}

/// Never answers.
pub struct StalledClient;

impl MoveClient for StalledClient {
    async fn request_move(&self, _request: &MoveRequest) -> Result<WireMove, ClientError> {
        std::future::pending::<()>().await;
        Err(ClientError::Timeout(Duration::ZERO))
    }
}
