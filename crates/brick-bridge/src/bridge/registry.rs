use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::events::{EventName, GameLoopEvent, Key, KeyEvent, ShakeIntensity};

/// A subscriber for one event name, typed by the payload that event carries.
pub enum Callback {
    Key(Box<dyn FnMut(Key)>),
    Shake(Box<dyn FnMut(ShakeIntensity)>),
    GameLoop(Box<dyn FnMut(Value)>),
    LoadAudio(Box<dyn FnMut(Vec<String>)>),
    PlayAudio(Box<dyn FnMut(String)>),
}

impl Callback {
    /// Decode `data` into this callback's payload type and call it.
    pub(crate) fn invoke(&mut self, data: Value) -> Result<(), serde_json::Error> {
        match self {
            Callback::Key(f) => f(decode(data)?),
            Callback::Shake(f) => f(decode(data)?),
            Callback::GameLoop(f) => f(data),
            Callback::LoadAudio(f) => f(decode(data)?),
            Callback::PlayAudio(f) => f(decode(data)?),
        }
        Ok(())
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Callback::Key(_) => "Key",
            Callback::Shake(_) => "Shake",
            Callback::GameLoop(_) => "GameLoop",
            Callback::LoadAudio(_) => "LoadAudio",
            Callback::PlayAudio(_) => "PlayAudio",
        };
        write!(f, "Callback::{kind}")
    }
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(data)
}

/// A request to subscribe, pairing an event with a callback of the matching
/// type. Only these pairings can be expressed.
pub enum Subscription {
    Key(KeyEvent, Box<dyn FnMut(Key)>),
    GameLoop(GameLoopEvent, Box<dyn FnMut(Value)>),
    Shake(Box<dyn FnMut(ShakeIntensity)>),
    LoadAudio(Box<dyn FnMut(Vec<String>)>),
    PlayAudio(Box<dyn FnMut(String)>),
}

impl Subscription {
    pub fn event(&self) -> EventName {
        match self {
            Subscription::Key(event, _) => (*event).into(),
            Subscription::GameLoop(event, _) => (*event).into(),
            Subscription::Shake(_) => EventName::Shake,
            Subscription::LoadAudio(_) => EventName::LoadAudio,
            Subscription::PlayAudio(_) => EventName::PlayAudio,
        }
    }

    pub(crate) fn into_parts(self) -> (EventName, Callback) {
        let event = self.event();
        let callback = match self {
            Subscription::Key(_, f) => Callback::Key(f),
            Subscription::GameLoop(_, f) => Callback::GameLoop(f),
            Subscription::Shake(f) => Callback::Shake(f),
            Subscription::LoadAudio(f) => Callback::LoadAudio(f),
            Subscription::PlayAudio(f) => Callback::PlayAudio(f),
        };
        (event, callback)
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Subscription").field(&self.event()).finish()
    }
}

/// Event name to its single current callback.
#[derive(Debug, Default)]
pub struct CallbackRegistry {
    callbacks: HashMap<EventName, Callback>,
}

impl CallbackRegistry {
    /// Store `callback`, returning the one it replaced.
    pub fn insert(&mut self, event: EventName, callback: Callback) -> Option<Callback> {
        self.callbacks.insert(event, callback)
    }

    pub fn remove(&mut self, event: EventName) -> Option<Callback> {
        self.callbacks.remove(&event)
    }

    pub fn get_mut(&mut self, event: EventName) -> Option<&mut Callback> {
        self.callbacks.get_mut(&event)
    }

    pub fn contains(&self, event: EventName) -> bool {
        self.callbacks.contains_key(&event)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}
