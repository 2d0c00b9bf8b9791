//! Wire format of bridge messages.
//!
//! Every message is a JSON object `{ "event": <name>, "data": <payload> }`.
//! Outbound messages are built from the typed [`Message`] enum, so the
//! payload always agrees with the event name. Inbound messages arrive as a
//! [`MessageEvent`] and are only decoded once a listener has accepted them.

use brick_common::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::events::{EventName, GameLoopEvent, Key, KeyEvent, ShakeIntensity};

/// A typed outbound message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum Message {
    #[serde(rename = "keypress")]
    KeyPress(Key),
    #[serde(rename = "keyrelease")]
    KeyRelease(Key),
    #[serde(rename = "keyhold")]
    KeyHold(Key),
    #[serde(rename = "numpress")]
    NumPress(Key),
    #[serde(rename = "numrelease")]
    NumRelease(Key),
    #[serde(rename = "numhold")]
    NumHold(Key),
    #[serde(rename = "shake")]
    Shake(ShakeIntensity),
    #[serde(rename = "start")]
    Start(Value),
    #[serde(rename = "pause")]
    Pause(Value),
    #[serde(rename = "stop")]
    Stop(Value),
    #[serde(rename = "loadAudio")]
    LoadAudio(Vec<String>),
    #[serde(rename = "playAudio")]
    PlayAudio(String),
}

impl Message {
    pub fn key(event: KeyEvent, key: Key) -> Self {
        match event {
            KeyEvent::Press => Message::KeyPress(key),
            KeyEvent::Release => Message::KeyRelease(key),
            KeyEvent::Hold => Message::KeyHold(key),
            KeyEvent::NumPress => Message::NumPress(key),
            KeyEvent::NumRelease => Message::NumRelease(key),
            KeyEvent::NumHold => Message::NumHold(key),
        }
    }

    pub fn game_loop(event: GameLoopEvent, args: Value) -> Self {
        match event {
            GameLoopEvent::Start => Message::Start(args),
            GameLoopEvent::Pause => Message::Pause(args),
            GameLoopEvent::Stop => Message::Stop(args),
        }
    }

    /// The event name this message is sent under.
    pub fn event(&self) -> EventName {
        match self {
            Message::KeyPress(_) => EventName::KeyPress,
            Message::KeyRelease(_) => EventName::KeyRelease,
            Message::KeyHold(_) => EventName::KeyHold,
            Message::NumPress(_) => EventName::NumPress,
            Message::NumRelease(_) => EventName::NumRelease,
            Message::NumHold(_) => EventName::NumHold,
            Message::Shake(_) => EventName::Shake,
            Message::Start(_) => EventName::Start,
            Message::Pause(_) => EventName::Pause,
            Message::Stop(_) => EventName::Stop,
            Message::LoadAudio(_) => EventName::LoadAudio,
            Message::PlayAudio(_) => EventName::PlayAudio,
        }
    }

    /// Encode as the `{event, data}` JSON object posted across the boundary.
    pub fn to_value(&self) -> Result<Value, BridgeError> {
        serde_json::to_value(self).map_err(|e| BridgeError::MalformedMessage(e.to_string()))
    }
}

/// A message as received from the platform, before any filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    /// Serialized origin of the sender, e.g. `http://localhost:5173`.
    pub origin: String,
    /// The posted value, expected to be an `{event, data}` object.
    pub data: Value,
}

impl MessageEvent {
    pub fn new(origin: impl Into<String>, data: Value) -> Self {
        Self {
            origin: origin.into(),
            data,
        }
    }
}

/// The untyped `{event, data}` shape of an inbound message.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    pub fn parse(value: &Value) -> Result<Self, BridgeError> {
        Envelope::deserialize(value).map_err(|e| BridgeError::MalformedMessage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shake_message_shape() {
        let value = Message::Shake(ShakeIntensity::Heavy).to_value().unwrap();
        assert_eq!(value, json!({"event": "shake", "data": "HEAVY"}));
    }

    #[test]
    fn key_messages_use_requested_event() {
        let value = Message::key(KeyEvent::NumHold, Key::Number(5)).to_value().unwrap();
        assert_eq!(value, json!({"event": "numhold", "data": 5}));

        let value = Message::key(KeyEvent::Release, Key::Char('w')).to_value().unwrap();
        assert_eq!(value, json!({"event": "keyrelease", "data": "w"}));
    }

    #[test]
    fn audio_messages_shape() {
        let value = Message::LoadAudio(vec!["theme.mp3".into(), "hit.wav".into()])
            .to_value()
            .unwrap();
        assert_eq!(
            value,
            json!({"event": "loadAudio", "data": ["theme.mp3", "hit.wav"]})
        );

        let value = Message::PlayAudio("hit.wav".into()).to_value().unwrap();
        assert_eq!(value, json!({"event": "playAudio", "data": "hit.wav"}));
    }

    #[test]
    fn game_loop_args_pass_through() {
        let args = json!({"level": 3, "seed": [1, 2]});
        let msg = Message::game_loop(GameLoopEvent::Start, args.clone());
        assert_eq!(msg.event(), EventName::Start);
        assert_eq!(msg.to_value().unwrap(), json!({"event": "start", "data": args}));
    }

    #[test]
    fn message_event_name_matches_wire_name() {
        let messages = [
            Message::KeyPress(Key::Char('a')),
            Message::NumPress(Key::Number(1)),
            Message::Shake(ShakeIntensity::Light),
            Message::Pause(Value::Null),
            Message::Stop(Value::Null),
            Message::LoadAudio(vec![]),
            Message::PlayAudio("x".into()),
        ];
        for msg in messages {
            let value = msg.to_value().unwrap();
            assert_eq!(value["event"], msg.event().as_str());
        }
    }

    #[test]
    fn envelope_defaults_missing_data_to_null() {
        let env = Envelope::parse(&json!({"event": "stop"})).unwrap();
        assert_eq!(env.event, "stop");
        assert_eq!(env.data, Value::Null);
    }

    #[test]
    fn envelope_rejects_non_objects() {
        assert!(Envelope::parse(&json!("shake")).is_err());
        assert!(Envelope::parse(&json!({"data": 1})).is_err());
        assert!(Envelope::parse(&json!({"event": 7, "data": 1})).is_err());
    }
}
