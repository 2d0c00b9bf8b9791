//! Message transports: the outbound [`MessageTarget`] seam and an
//! in-process window used when both contexts live in the same program.

use std::sync::{Arc, Mutex};

use brick_common::BridgeError;
use serde_json::Value;
use tracing::debug;

use crate::message::MessageEvent;

/// Destination origin meaning "whatever origin the target has".
pub const ANY_ORIGIN: &str = "*";

/// Whether a post addressed to `target_origin` may reach a window whose own
/// origin is `window_origin`. Anything but `*` must match exactly.
pub fn target_origin_matches(target_origin: &str, window_origin: Option<&str>) -> bool {
    target_origin == ANY_ORIGIN || window_origin == Some(target_origin)
}

/// Something a message can be posted to.
pub trait MessageTarget {
    /// Post `message` to the target. Delivery is not confirmed; an `Err`
    /// only means the transport itself could not accept the message.
    fn post_message(&self, message: &Value, target_origin: &str) -> Result<(), BridgeError>;
}

/// Queue of received messages waiting for the owning event loop to drain.
#[derive(Debug, Clone, Default)]
pub struct Inbox {
    events: Arc<Mutex<Vec<MessageEvent>>>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: MessageEvent) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(event);
        }
    }

    /// Take all pending messages in arrival order.
    pub fn drain(&self) -> Vec<MessageEvent> {
        match self.events.lock() {
            Ok(mut evts) => std::mem::take(&mut *evts),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|evts| evts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-process stand-in for a browser window.
///
/// Messages posted through a [`WindowHandle`] land in this window's inbox
/// stamped with the handle's sender origin.
#[derive(Debug, Clone)]
pub struct MemoryWindow {
    origin: String,
    inbox: Inbox,
}

impl MemoryWindow {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            inbox: Inbox::new(),
        }
    }

    /// This window's own origin.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// A reference to this window as seen by a sender at `sender_origin`.
    pub fn handle(&self, sender_origin: impl Into<String>) -> WindowHandle {
        WindowHandle {
            window_origin: self.origin.clone(),
            sender_origin: sender_origin.into(),
            inbox: self.inbox.clone(),
        }
    }

    pub fn drain(&self) -> Vec<MessageEvent> {
        self.inbox.drain()
    }

    pub fn pending(&self) -> usize {
        self.inbox.len()
    }
}

/// Posting end of a [`MemoryWindow`].
#[derive(Debug, Clone)]
pub struct WindowHandle {
    window_origin: String,
    sender_origin: String,
    inbox: Inbox,
}

impl MessageTarget for WindowHandle {
    fn post_message(&self, message: &Value, target_origin: &str) -> Result<(), BridgeError> {
        // A concrete target origin that does not match drops the message silently
        if !target_origin_matches(target_origin, Some(&self.window_origin)) {
            debug!(
                target_origin,
                window_origin = %self.window_origin,
                "message not posted: target origin mismatch"
            );
            return Ok(());
        }
        self.inbox
            .push(MessageEvent::new(self.sender_origin.clone(), message.clone()));
        Ok(())
    }
}
