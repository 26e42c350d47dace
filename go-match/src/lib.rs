pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;

pub use client::{MoveClient, MoveRequest, MoveResponse, WireMove};
pub use config::MatchConfig;
pub use controller::{Phase, TurnController, TurnOutcome};
pub use error::{ClientError, TurnError};
pub use http::HttpMoveClient;
