//! Origin allow-list for inbound messages.

use std::sync::LazyLock;

use brick_common::BridgeError;
use brick_config::OriginConfig;
use regex::Regex;

/// Allow-list used when no configuration is supplied: loopback or the
/// kiosk host, over http, https or the capacitor app scheme.
pub const DEFAULT_ORIGIN_PATTERN: &str = r"^(https?|capacitor)://(localhost|brick1100)(:\d+)?$";

static DEFAULT_ORIGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_ORIGIN_PATTERN).unwrap());

/// Decides which sender origins may deliver messages.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    pattern: Regex,
}

impl OriginPolicy {
    /// Build a policy accepting `<scheme>://<host>[:port]` for any listed
    /// scheme and host. Entries are matched literally.
    pub fn new<S: AsRef<str>>(schemes: &[S], hosts: &[S]) -> Result<Self, BridgeError> {
        if schemes.is_empty() || hosts.is_empty() {
            return Err(BridgeError::InvalidOriginPattern(
                "allow-list needs at least one scheme and one host".into(),
            ));
        }
        let pattern = format!(
            r"^({})://({})(:\d+)?$",
            alternation(schemes),
            alternation(hosts)
        );
        let pattern =
            Regex::new(&pattern).map_err(|e| BridgeError::InvalidOriginPattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    pub fn from_config(config: &OriginConfig) -> Result<Self, BridgeError> {
        Self::new(&config.schemes, &config.hosts)
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.pattern.is_match(origin)
    }

    /// The compiled pattern, for diagnostics.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for OriginPolicy {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_ORIGIN_RE.clone(),
        }
    }
}

fn alternation<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| regex::escape(s.as_ref()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Reduce a URL to its serialized origin (`scheme://host[:port]`), in
/// lowercase as browsers serialize it.
///
/// Returns `None` for URLs without an authority such as `about:blank`.
pub fn origin_of_url(url: &str) -> Option<String> {
    let (scheme, rest) = url.split_once("://")?;
    if scheme.is_empty() {
        return None;
    }
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let authority = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if authority.is_empty() {
        return None;
    }
    Some(format!(
        "{}://{}",
        scheme.to_ascii_lowercase(),
        authority.to_ascii_lowercase()
    ))
}
