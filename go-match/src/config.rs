use std::time::Duration;

pub const DEFAULT_GRID_SIZE: u8 = 19;
pub const DEFAULT_AI_URL: &str = "http://127.0.0.1:5000/api/move";
pub const DEFAULT_AI_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for one match against the remote move service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub grid_size: u8,
    pub ai_url: String,
    /// `None` waits for the move service indefinitely.
    pub ai_timeout: Option<Duration>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            grid_size: DEFAULT_GRID_SIZE,
            ai_url: DEFAULT_AI_URL.to_string(),
            ai_timeout: Some(DEFAULT_AI_TIMEOUT),
        }
    }
}

impl MatchConfig {
    /// Read `GO_GRID_SIZE`, `AI_MOVE_URL` and `AI_TIMEOUT_MS`, falling back to
    /// the defaults for anything unset or unparsable. `AI_TIMEOUT_MS=0`
    /// disables the timeout.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = MatchConfig::default();

        let grid_size = match lookup("GO_GRID_SIZE").map(|v| v.trim().parse::<u8>()) {
            Some(Ok(size)) if size > 0 => size,
            Some(_) => {
                tracing::warn!("ignoring invalid GO_GRID_SIZE, using {DEFAULT_GRID_SIZE}");
                defaults.grid_size
            }
            None => defaults.grid_size,
        };

        let ai_url = lookup("AI_MOVE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.ai_url);

        let ai_timeout = match lookup("AI_TIMEOUT_MS").map(|v| v.trim().parse::<u64>()) {
            Some(Ok(0)) => None,
            Some(Ok(ms)) => Some(Duration::from_millis(ms)),
            Some(Err(e)) => {
                tracing::warn!("ignoring invalid AI_TIMEOUT_MS: {e}");
                defaults.ai_timeout
            }
            None => defaults.ai_timeout,
        };

        MatchConfig {
            grid_size,
            ai_url,
            ai_timeout,
        }
    }
}
