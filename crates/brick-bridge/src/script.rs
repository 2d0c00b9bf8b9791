//! JavaScript glue between a native host and an embedded page.
//!
//! Messages flow in both directions:
//! - **Page -> host**: page code calls `window.brick.bridge.send(event, data)`,
//!   which posts `{event, data}` through `window.ipc.postMessage`.
//! - **Host -> page**: the host evaluates a script that dispatches a standard
//!   `message` event on the page's `window`, so page code listening with
//!   `addEventListener("message", ...)` receives it as if it had been posted
//!   by a parent window.

use serde_json::Value;

/// Initialization script injected into every embedded page.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    window.brick = window.brick || {};
    window.brick.bridge = {
        send: function(event, data) {
            window.ipc.postMessage(JSON.stringify({
                event: event,
                data: data === undefined ? null : data
            }));
        }
    };
})();
"#;

/// Build a script that delivers `message` to the page as a `message` event
/// whose `origin` is `origin`.
pub fn js_post_message(message: &Value, origin: &str) -> String {
    let data = serde_json::to_string(message).unwrap_or_else(|_| "null".to_string());
    let origin = serde_json::to_string(origin).unwrap_or_else(|_| "\"null\"".to_string());
    format!(
        r#"window.dispatchEvent(new MessageEvent("message", {{data: {data}, origin: {origin}}}));"#
    )
}
