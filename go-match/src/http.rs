use crate::client::{MoveClient, MoveRequest, MoveResponse, WireMove};
use crate::config::MatchConfig;
use crate::error::ClientError;

/// Talks to a move service that accepts a JSON `POST` and answers with
/// `{"move": {"row": .., "col": ..}}`.
#[derive(Debug, Clone)]
pub struct HttpMoveClient {
    http: reqwest::Client,
    url: String,
}

impl HttpMoveClient {
    pub fn new(url: impl Into<String>) -> Self {
        HttpMoveClient {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.ai_url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MoveClient for HttpMoveClient {
    async fn request_move(&self, request: &MoveRequest) -> Result<WireMove, ClientError> {
        tracing::debug!(url = %self.url, last_move = %request.last_move, "requesting AI move");

        let response = self.http.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: MoveResponse = response.json().await?;
        Ok(body.mv)
    }
}
