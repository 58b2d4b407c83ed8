use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::stream;
use crate::types::{EventCategory, LogEntry, UpdateEvent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    #[default]
    Idle,
    Connecting,
    Open,
    Closed,
    Errored,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Connecting => "CONNECTING",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Errored => "ERRORED",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Connecting | Self::Open)
    }
}

/// One connection attempt's lifecycle: `Connecting -> Open -> (Closed |
/// Errored)`. `Errored` is terminal for the instance; restarting means a new
/// session via [`UpdateFeed::connect`].
#[derive(Debug)]
pub struct StreamSession {
    state: ConnectionState,
}

impl StreamSession {
    fn start() -> Self {
        Self {
            state: ConnectionState::Connecting,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    // The returned entry is display-only.
    pub fn on_open(&mut self) -> LogEntry {
        self.state = ConnectionState::Open;
        LogEntry::synthetic(EventCategory::Connection, "Connected to update stream")
    }

    /// Named `bookOperation` event. A malformed payload leaves the session
    /// state untouched.
    pub fn on_operation(&mut self, data: &str) -> Result<LogEntry, FeedError> {
        let event: UpdateEvent = serde_json::from_str(data)?;
        Ok(LogEntry::from_event(event))
    }

    /// Unnamed default event: arbitrary JSON rendered under `message`.
    pub fn on_message(&mut self, data: &str) -> Result<LogEntry, FeedError> {
        let value: serde_json::Value = serde_json::from_str(data)?;
        Ok(LogEntry::generic(value))
    }

    pub fn on_transport_error(&mut self) -> LogEntry {
        self.state = ConnectionState::Errored;
        LogEntry::synthetic(
            EventCategory::Error,
            "Update stream error, connection closed",
        )
    }

    pub fn close(&mut self) {
        self.state = ConnectionState::Closed;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectAttempt {
    pub url: String,
    pub closed_previous: bool,
}

/// Owns at most one live session; re-triggering closes the previous one
/// before the new attempt starts.
#[derive(Debug, Default)]
pub struct UpdateFeed {
    session: Option<StreamSession>,
}

impl UpdateFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.session
            .as_ref()
            .map_or(ConnectionState::Idle, StreamSession::state)
    }

    pub fn session_mut(&mut self) -> Option<&mut StreamSession> {
        self.session.as_mut()
    }

    /// Validates the token, closes any prior session, and hands back the
    /// stream URL for the transport to open. An invalid token leaves an
    /// existing session untouched.
    pub fn connect(&mut self, base: &str, token: &str) -> Result<ConnectAttempt, FeedError> {
        let url = stream::stream_url(base, token)?;
        let closed_previous = match self.session.as_mut() {
            Some(session) => {
                session.close();
                true
            }
            None => false,
        };
        self.session = Some(StreamSession::start());
        Ok(ConnectAttempt {
            url,
            closed_previous,
        })
    }
}
