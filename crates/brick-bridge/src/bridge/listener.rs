use tracing::{debug, warn};

use crate::events::EventName;
use crate::message::{Envelope, MessageEvent};
use crate::origin::OriginPolicy;

use super::registry::CallbackRegistry;

/// Outcome of offering one inbound message to one listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The callback ran with the message payload.
    Delivered,
    /// The sender origin is not on the allow-list.
    ForbiddenOrigin,
    /// No callback is registered for the listener's event.
    NoSubscriber,
    /// The message names a different event.
    EventMismatch,
    /// The message or its payload could not be decoded.
    Malformed,
}

/// A message listener bound to one event name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Listener {
    event: EventName,
}

impl Listener {
    pub fn new(event: EventName) -> Self {
        Self { event }
    }

    /// Filter `message` and, if it passes, hand its payload to the
    /// callback currently registered for this listener's event.
    pub fn receive(
        &self,
        message: &MessageEvent,
        policy: &OriginPolicy,
        registry: &mut CallbackRegistry,
    ) -> Delivery {
        if !policy.allows(&message.origin) {
            return Delivery::ForbiddenOrigin;
        }

        let Some(callback) = registry.get_mut(self.event) else {
            return Delivery::NoSubscriber;
        };

        let envelope = match Envelope::parse(&message.data) {
            Ok(env) => env,
            Err(e) => {
                warn!(
                    event = %self.event,
                    origin = %message.origin,
                    error = %e,
                    "message rejected: not an event envelope"
                );
                return Delivery::Malformed;
            }
        };

        if envelope.event != self.event.as_str() {
            return Delivery::EventMismatch;
        }

        if let Err(e) = callback.invoke(envelope.data) {
            warn!(
                event = %self.event,
                origin = %message.origin,
                error = %e,
                "message rejected: payload does not match event"
            );
            return Delivery::Malformed;
        }

        debug!(event = %self.event, origin = %message.origin, "message delivered");
        Delivery::Delivered
    }
}
