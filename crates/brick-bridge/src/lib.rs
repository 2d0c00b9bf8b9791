//! Typed event bridge between a host shell and an embedded game surface.
//!
//! Provides:
//! - Typed events: keys, shake gestures, game-loop transitions, audio requests
//! - A single-subscriber callback registry per event name
//! - Origin allow-listing of inbound messages
//! - Fire-and-forget sends to any [`MessageTarget`]
//! - An in-process window for same-program contexts, and a `wry` WebView
//!   transport behind the `webview` feature

pub mod bridge;
pub mod events;
pub mod message;
pub mod origin;
pub mod script;
pub mod target;
#[cfg(feature = "webview")]
pub mod webview;

pub use bridge::{Bridge, Callback, CallbackRegistry, Delivery, Subscription};
pub use events::{EventName, GameLoopEvent, Key, KeyEvent, ShakeIntensity};
pub use message::{Message, MessageEvent};
pub use origin::{origin_of_url, OriginPolicy, DEFAULT_ORIGIN_PATTERN};
pub use target::{
    target_origin_matches, Inbox, MemoryWindow, MessageTarget, WindowHandle, ANY_ORIGIN,
};

/// Load the bridge configuration from the platform default path and build
/// a bridge from it.
pub fn load_bridge<V>(viewport: V) -> brick_common::Result<Bridge<V>> {
    let config = brick_config::load_config()?;
    Ok(Bridge::from_config(viewport, &config)?)
}
