use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FeedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    Connection,
    BookCreated,
    BookUpdated,
    BookDeleted,
    Error,
    Message,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::BookCreated => "bookCreated",
            Self::BookUpdated => "bookUpdated",
            Self::BookDeleted => "bookDeleted",
            Self::Error => "error",
            Self::Message => "message",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "connection" => Some(Self::Connection),
            "bookCreated" => Some(Self::BookCreated),
            "bookUpdated" => Some(Self::BookUpdated),
            "bookDeleted" => Some(Self::BookDeleted),
            "error" => Some(Self::Error),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wire shape of a `bookOperation` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_data: Option<serde_json::Value>,
}

/// A rendered line of the update log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub category: String,
    pub timestamp: String,
    pub message: String,
    pub detail: Option<serde_json::Value>,
}

impl LogEntry {
    pub fn from_event(event: UpdateEvent) -> Self {
        Self {
            category: event.kind,
            timestamp: event.timestamp,
            message: event.message,
            detail: event.book_data.filter(|v| !v.is_null()),
        }
    }

    pub fn synthetic(category: EventCategory, message: impl Into<String>) -> Self {
        Self {
            category: category.as_str().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            message: message.into(),
            detail: None,
        }
    }

    pub fn parse_failure(err: &FeedError) -> Self {
        Self::synthetic(
            EventCategory::Error,
            format!("Failed to parse event payload: {err}"),
        )
    }

    /// Default-channel payloads are arbitrary JSON; objects contribute their
    /// `message` and `book_data` fields, anything else is shown verbatim.
    pub fn generic(value: serde_json::Value) -> Self {
        let timestamp = value
            .get("timestamp")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .unwrap_or_else(|| Utc::now().to_rfc3339());
        let message = match value.get("message").and_then(|v| v.as_str()) {
            Some(text) => text.to_owned(),
            None => value.to_string(),
        };
        let detail = value.get("book_data").cloned().filter(|v| !v.is_null());
        Self {
            category: EventCategory::Message.as_str().to_string(),
            timestamp,
            message,
            detail,
        }
    }

    pub fn pretty_detail(&self) -> Option<String> {
        self.detail
            .as_ref()
            .map(|v| serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()))
    }
}
