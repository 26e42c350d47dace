use std::fmt;
use std::time::Duration;

use go_rules::MoveError;

use crate::client::WireMove;

/// Failure to obtain any answer from the move service.
#[derive(Debug)]
pub enum ClientError {
    Transport(String),
    Status(u16),
    Decode(String),
    Timeout(Duration),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport error: {msg}"),
            ClientError::Status(code) => write!(f, "move service returned status {code}"),
            ClientError::Decode(msg) => write!(f, "undecodable move response: {msg}"),
            ClientError::Timeout(limit) => {
                write!(f, "no move within {}ms", limit.as_millis())
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ClientError::Status(status.as_u16())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

/// Remote half of a turn that could not be completed. The local move that
/// preceded it stays committed.
#[derive(Debug)]
pub enum TurnError {
    AiUnavailable(ClientError),
    AiInvalidMove { proposed: WireMove, reason: MoveError },
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::AiUnavailable(e) => write!(f, "AI unavailable: {e}"),
            TurnError::AiInvalidMove { proposed, reason } => {
                write!(f, "AI proposed an illegal move at {proposed}: {reason}")
            }
        }
    }
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::AiUnavailable(e) => Some(e),
            TurnError::AiInvalidMove { reason, .. } => Some(reason),
        }
    }
}

impl From<ClientError> for TurnError {
    fn from(e: ClientError) -> Self {
        TurnError::AiUnavailable(e)
    }
}
