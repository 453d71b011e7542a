//! Outbound messages to the process hosting the native windows.
//!
//! Geometry changes are applied to the local mirror synchronously. Animated
//! changes additionally go out as a single [`HostMessage`] that the host is
//! expected to play back; delivery is fire-and-forget.

use std::sync::Mutex;

use casement_common::{GeometryPatch, TransitionOptions, WindowOptions};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

/// Payload of a `window.transition` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionMessage {
    /// The window's option snapshot before the change.
    pub window: WindowOptions,
    pub from: GeometryPatch,
    pub to: GeometryPatch,
    pub options: TransitionOptions,
}

/// Messages the window host understands.
///
/// Serialized as `{"event": "...", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum HostMessage {
    #[serde(rename = "window.transition")]
    Transition(TransitionMessage),
}

impl HostMessage {
    pub fn event_name(&self) -> &'static str {
        match self {
            HostMessage::Transition(_) => "window.transition",
        }
    }
}

/// Where outbound host messages go.
pub trait HostSink: Send + Sync {
    fn send(&self, message: HostMessage);
}

/// Drops every message. Used when no host is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl HostSink for NullSink {
    fn send(&self, _message: HostMessage) {}
}

/// Forwards messages into a tokio channel drained by the host bridge.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<HostMessage>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HostMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl HostSink for ChannelSink {
    fn send(&self, message: HostMessage) {
        if self.tx.send(message).is_err() {
            warn!("host channel closed, dropping message");
        }
    }
}

/// Keeps every message in memory, in send order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<HostMessage>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<HostMessage> {
        match self.messages.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.messages.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<HostMessage> {
        match self.messages.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl HostSink for RecordingSink {
    fn send(&self, message: HostMessage) {
        match self.messages.lock() {
            Ok(mut guard) => guard.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
    }
}
