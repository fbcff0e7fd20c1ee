//! Output values produced by the parser.
//!
//! Every record that survives parsing becomes exactly one [`SseItem`]. The two
//! variants come from the same grammar but mean different things to the
//! consumer: an [`StreamEvent`] is handed to whatever handlers are registered
//! for its type, while a [`SetRetryInterval`] adjusts the reconnect delay.
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Event type used when a record carries no `event` field.
pub const DEFAULT_EVENT_TYPE: &str = "message";

/// A dispatchable event.
///
/// Instances leaving the parser always have a non-empty `event_type` and a
/// non-empty `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct StreamEvent {
    /// The event type, `"message"` unless the record named one.
    #[serde(rename = "type")]
    #[builder(into, default = DEFAULT_EVENT_TYPE.to_string())]
    pub event_type: String,
    /// All `data` values of the record joined with `\n`.
    #[builder(into)]
    pub data: String,
    /// The last `id` value of the record, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,
}

impl StreamEvent {
    /// An empty candidate, the starting point for folding a record.
    pub(crate) fn empty() -> Self {
        Self {
            event_type: DEFAULT_EVENT_TYPE.to_string(),
            data: String::new(),
            id: None,
        }
    }

    /// Whether this event carries enough to be dispatched.
    pub fn is_dispatchable(&self) -> bool {
        !self.event_type.is_empty() && !self.data.is_empty()
    }
}

/// Server-advised reconnect delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetRetryInterval {
    pub milliseconds: u64,
}

impl SetRetryInterval {
    pub fn new(milliseconds: u64) -> Self {
        Self { milliseconds }
    }

    pub fn as_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.milliseconds)
    }
}

/// One item emitted by the parser, in stream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SseItem {
    Event(StreamEvent),
    Retry(SetRetryInterval),
}

impl SseItem {
    pub fn as_event(&self) -> Option<&StreamEvent> {
        match self {
            SseItem::Event(event) => Some(event),
            SseItem::Retry(_) => None,
        }
    }

    pub fn as_retry(&self) -> Option<SetRetryInterval> {
        match self {
            SseItem::Event(_) => None,
            SseItem::Retry(retry) => Some(*retry),
        }
    }
}

impl From<StreamEvent> for SseItem {
    fn from(event: StreamEvent) -> Self {
        SseItem::Event(event)
    }
}

impl From<SetRetryInterval> for SseItem {
    fn from(retry: SetRetryInterval) -> Self {
        SseItem::Retry(retry)
    }
}
