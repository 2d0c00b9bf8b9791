//! Native host transport over an embedded `wry` WebView.
//!
//! [`attach_bridge`] wires a `WebViewBuilder` so that page posts land in an
//! [`Inbox`] the host drains into [`Bridge::dispatch_all`]. [`WebViewTarget`]
//! posts host messages into the page.
//!
//! [`Bridge::dispatch_all`]: crate::Bridge::dispatch_all

use brick_common::BridgeError;
use brick_config::HostConfig;
use serde_json::Value;
use tracing::{debug, warn};
use wry::{WebView, WebViewBuilder};

use crate::message::MessageEvent;
use crate::origin::origin_of_url;
use crate::script::{js_post_message, BRIDGE_INIT_SCRIPT};
use crate::target::{target_origin_matches, Inbox, MessageTarget, ANY_ORIGIN};

/// Install the page-side bridge script and an IPC handler that queues every
/// page post into `inbox`, stamped with the page's origin.
pub fn attach_bridge<'a>(builder: WebViewBuilder<'a>, inbox: Inbox) -> WebViewBuilder<'a> {
    builder
        .with_initialization_script(BRIDGE_INIT_SCRIPT)
        .with_ipc_handler(move |request| {
            let origin =
                origin_of_url(&request.uri().to_string()).unwrap_or_else(|| "null".to_string());
            let body = request.body();

            let data = match serde_json::from_str::<Value>(body) {
                Ok(v) => v,
                Err(_) => {
                    warn!(
                        origin = %origin,
                        body_len = body.len(),
                        "bridge message rejected: invalid JSON"
                    );
                    return;
                }
            };

            debug!(origin = %origin, body_len = body.len(), "bridge message from page");
            inbox.push(MessageEvent::new(origin, data));
        })
}

/// Posts messages into an embedded page.
pub struct WebViewTarget<'a> {
    webview: &'a WebView,
    /// Origin the page sees on messages from the host.
    origin: String,
}

impl<'a> WebViewTarget<'a> {
    pub fn new(webview: &'a WebView, origin: impl Into<String>) -> Self {
        Self {
            webview,
            origin: origin.into(),
        }
    }

    pub fn from_config(webview: &'a WebView, config: &HostConfig) -> Self {
        Self::new(webview, config.origin.clone())
    }
}

impl MessageTarget for WebViewTarget<'_> {
    fn post_message(&self, message: &Value, target_origin: &str) -> Result<(), BridgeError> {
        if target_origin != ANY_ORIGIN {
            let page = self
                .webview
                .url()
                .map_err(|e| BridgeError::Transport(e.to_string()))?;
            let page_origin = origin_of_url(&page);
            if !target_origin_matches(target_origin, page_origin.as_deref()) {
                debug!(target_origin, page = %page, "message not posted: target origin mismatch");
                return Ok(());
            }
        }

        self.webview
            .evaluate_script(&js_post_message(message, &self.origin))
            .map_err(|e| BridgeError::Transport(e.to_string()))
    }
}
