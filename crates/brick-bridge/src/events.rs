//! Event names and the payload types each one carries.

use std::fmt;
use std::str::FromStr;

use brick_common::BridgeError;
use serde::{Deserialize, Serialize};

/// Every event the bridge can carry. The serde names are the wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventName {
    #[serde(rename = "keypress")]
    KeyPress,
    #[serde(rename = "keyrelease")]
    KeyRelease,
    #[serde(rename = "keyhold")]
    KeyHold,
    #[serde(rename = "numpress")]
    NumPress,
    #[serde(rename = "numrelease")]
    NumRelease,
    #[serde(rename = "numhold")]
    NumHold,
    #[serde(rename = "shake")]
    Shake,
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "pause")]
    Pause,
    #[serde(rename = "stop")]
    Stop,
    #[serde(rename = "loadAudio")]
    LoadAudio,
    #[serde(rename = "playAudio")]
    PlayAudio,
}

impl EventName {
    pub const ALL: [EventName; 12] = [
        EventName::KeyPress,
        EventName::KeyRelease,
        EventName::KeyHold,
        EventName::NumPress,
        EventName::NumRelease,
        EventName::NumHold,
        EventName::Shake,
        EventName::Start,
        EventName::Pause,
        EventName::Stop,
        EventName::LoadAudio,
        EventName::PlayAudio,
    ];

    /// The name as it appears in the `event` field of a message.
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::KeyPress => "keypress",
            EventName::KeyRelease => "keyrelease",
            EventName::KeyHold => "keyhold",
            EventName::NumPress => "numpress",
            EventName::NumRelease => "numrelease",
            EventName::NumHold => "numhold",
            EventName::Shake => "shake",
            EventName::Start => "start",
            EventName::Pause => "pause",
            EventName::Stop => "stop",
            EventName::LoadAudio => "loadAudio",
            EventName::PlayAudio => "playAudio",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(BridgeError::MissingEventName);
        }
        EventName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| BridgeError::UnknownEvent(s.to_string()))
    }
}

/// Key events. `Key*` carry alphabetic keys, `Num*` numeric keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    Press,
    Release,
    Hold,
    NumPress,
    NumRelease,
    NumHold,
}

impl From<KeyEvent> for EventName {
    fn from(e: KeyEvent) -> Self {
        match e {
            KeyEvent::Press => EventName::KeyPress,
            KeyEvent::Release => EventName::KeyRelease,
            KeyEvent::Hold => EventName::KeyHold,
            KeyEvent::NumPress => EventName::NumPress,
            KeyEvent::NumRelease => EventName::NumRelease,
            KeyEvent::NumHold => EventName::NumHold,
        }
    }
}

/// Game-loop transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameLoopEvent {
    Start,
    Pause,
    Stop,
}

impl From<GameLoopEvent> for EventName {
    fn from(e: GameLoopEvent) -> Self {
        match e {
            GameLoopEvent::Start => EventName::Start,
            GameLoopEvent::Pause => EventName::Pause,
            GameLoopEvent::Stop => EventName::Stop,
        }
    }
}

/// Key identifier carried by key events.
///
/// Senders use a number for numeric keys and a string for everything else.
/// Single-character strings decode as `Char`, longer ones such as `"Enter"`
/// as `Name`. `"7"` arrives as `Char('7')` while `7` arrives as `Number(7)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Number(i64),
    Char(char),
    Name(String),
}

impl Key {
    /// Value of a single-digit key, whichever form it was sent in.
    pub fn digit(&self) -> Option<u8> {
        match self {
            Key::Number(n) => u8::try_from(*n).ok().filter(|d| *d <= 9),
            Key::Char(c) => c.to_digit(10).map(|d| d as u8),
            Key::Name(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Number(n) => write!(f, "{n}"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Strength of a shake gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShakeIntensity {
    Light,
    Medium,
    Heavy,
}
