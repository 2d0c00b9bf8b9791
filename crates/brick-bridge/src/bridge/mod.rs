//! The bridge: subscriptions, inbound filtering, and outbound sends.
//!
//! A `Bridge` owns its callback registry and one listener per subscribed
//! event. The host's event loop feeds every received message to
//! [`Bridge::dispatch`]; each listener independently checks the sender
//! origin and the event name before calling its subscriber.

use std::collections::BTreeMap;

use brick_common::BridgeError;
use brick_config::BridgeConfig;
use serde_json::Value;
use tracing::{debug, warn};

use crate::events::{EventName, GameLoopEvent, Key, KeyEvent, ShakeIntensity};
use crate::message::{Message, MessageEvent};
use crate::origin::OriginPolicy;
use crate::target::{MessageTarget, ANY_ORIGIN};

mod listener;
mod registry;


pub use listener::Delivery;
pub use registry::{Callback, CallbackRegistry, Subscription};

use listener::Listener;

/// Typed event bridge between two window contexts.
///
/// `V` is the viewport accessor handed in by the embedder. The bridge only
/// exposes it through [`Bridge::viewport`].
pub struct Bridge<V = ()> {
    viewport: V,
    policy: OriginPolicy,
    registry: CallbackRegistry,
    listeners: BTreeMap<EventName, Listener>,
}

impl<V> Bridge<V> {
    /// Create a bridge with the default origin allow-list.
    pub fn new(viewport: V) -> Self {
        Self::with_policy(viewport, OriginPolicy::default())
    }

    pub fn with_policy(viewport: V, policy: OriginPolicy) -> Self {
        Self {
            viewport,
            policy,
            registry: CallbackRegistry::default(),
            listeners: BTreeMap::new(),
        }
    }

    /// Create a bridge whose allow-list comes from `config.origins`.
    pub fn from_config(viewport: V, config: &BridgeConfig) -> Result<Self, BridgeError> {
        let policy = OriginPolicy::from_config(&config.origins)?;
        debug!(pattern = policy.as_str(), "origin allow-list configured");
        Ok(Self::with_policy(viewport, policy))
    }

    /// The viewport accessor supplied at construction.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn policy(&self) -> &OriginPolicy {
        &self.policy
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a callback, replacing any previous one for the same event,
    /// and make sure a listener is attached for that event.
    pub fn subscribe(&mut self, subscription: Subscription) {
        let (event, callback) = subscription.into_parts();
        if self.registry.insert(event, callback).is_some() {
            debug!(event = %event, "callback replaced");
        }
        if !self.listeners.contains_key(&event) {
            self.listeners.insert(event, Listener::new(event));
            debug!(event = %event, "listener attached");
        }
    }

    pub fn on_key(&mut self, event: KeyEvent, callback: impl FnMut(Key) + 'static) {
        self.subscribe(Subscription::Key(event, Box::new(callback)));
    }

    pub fn on_game_loop(&mut self, event: GameLoopEvent, callback: impl FnMut(Value) + 'static) {
        self.subscribe(Subscription::GameLoop(event, Box::new(callback)));
    }

    pub fn on_shake(&mut self, callback: impl FnMut(ShakeIntensity) + 'static) {
        self.subscribe(Subscription::Shake(Box::new(callback)));
    }

    pub fn on_load_audio(&mut self, callback: impl FnMut(Vec<String>) + 'static) {
        self.subscribe(Subscription::LoadAudio(Box::new(callback)));
    }

    pub fn on_play_audio(&mut self, callback: impl FnMut(String) + 'static) {
        self.subscribe(Subscription::PlayAudio(Box::new(callback)));
    }

    /// Remove the callback and detach the listener for `event`.
    ///
    /// Returns whether anything was subscribed. Unsubscribing twice is a no-op.
    pub fn unsubscribe(&mut self, event: impl Into<EventName>) -> bool {
        let event = event.into();
        let had_callback = self.registry.remove(event).is_some();
        let had_listener = self.listeners.remove(&event).is_some();
        if had_listener {
            debug!(event = %event, "listener detached");
        }
        had_callback || had_listener
    }

    pub fn is_subscribed(&self, event: impl Into<EventName>) -> bool {
        self.registry.contains(event.into())
    }

    /// Events that currently have a listener attached, in a stable order.
    pub fn subscriptions(&self) -> Vec<EventName> {
        self.listeners.keys().copied().collect()
    }

    // -------------------------------------------------------------------------
    // Messaging
    // -------------------------------------------------------------------------

    /// Post `message` to `target` for any origin. Fire-and-forget: transport
    /// failures are logged, never returned.
    pub fn send<T: MessageTarget + ?Sized>(&self, target: &T, message: &Message) {
        let event = message.event();
        let value = match message.to_value() {
            Ok(v) => v,
            Err(e) => {
                warn!(event = %event, error = %e, "failed to encode message");
                return;
            }
        };
        match target.post_message(&value, ANY_ORIGIN) {
            Ok(()) => debug!(event = %event, "message sent"),
            Err(e) => warn!(event = %event, error = %e, "failed to post message"),
        }
    }

    /// Offer one received message to every attached listener.
    ///
    /// Returns how many callbacks ran; anything filtered out is dropped
    /// silently.
    pub fn dispatch(&mut self, message: &MessageEvent) -> usize {
        let mut delivered = 0;
        for listener in self.listeners.values() {
            if listener.receive(message, &self.policy, &mut self.registry) == Delivery::Delivered {
                delivered += 1;
            }
        }
        if delivered == 0 && !self.policy.allows(&message.origin) {
            debug!(origin = %message.origin, "message dropped: origin not allowed");
        }
        delivered
    }

    /// Dispatch a batch of messages in order, e.g. a drained inbox.
    pub fn dispatch_all(&mut self, messages: impl IntoIterator<Item = MessageEvent>) -> usize {
        messages
            .into_iter()
            .map(|message| self.dispatch(&message))
            .sum()
    }

    /// Offer a message to the listener for `event` alone and report what
    /// happened to it.
    pub fn deliver_to(&mut self, event: impl Into<EventName>, message: &MessageEvent) -> Delivery {
        match self.listeners.get(&event.into()) {
            Some(listener) => listener.receive(message, &self.policy, &mut self.registry),
            None => Delivery::NoSubscriber,
        }
    }
}

impl<V> std::fmt::Debug for Bridge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("policy", &self.policy.as_str())
            .field("subscriptions", &self.subscriptions())
            .finish()
    }
}
