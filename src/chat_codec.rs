//! JSON encoding of chat components.
//!
//! Decoding never fails. Input that isn't a JSON object becomes a legacy
//! plain-text component, unknown tokens fall back to their defaults, and
//! `extra` entries that are neither strings nor objects are demoted to legacy
//! components carrying their JSON text.
//!
//! Trees are limited to [`MAX_DEPTH`] components from root to leaf. Both
//! directions cut `extra` at that depth, so whatever `encode` writes stays
//! under the JSON parser's nesting limit and decodes back to the same tree.

use crate::chat::{ChatColor, ChatComponent, ClickAction, HoverAction};
use log::{debug, trace};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Deepest component nesting kept by the codec, the root counting as 1.
///
/// Each level costs two JSON nesting levels (the object and its `extra`
/// array), which keeps encoded trees well inside serde_json's limit of 128.
pub const MAX_DEPTH: usize = 32;

pub fn decode(message: &str) -> ChatComponent {
    match serde_json::from_str::<Value>(message) {
        Ok(Value::Object(obj)) => {
            let mut component = decode_object(&obj, 1);
            component.raw = Some(message.to_owned());
            component
        }
        Ok(_) => {
            debug!("chat message is JSON but not an object, using legacy text");
            ChatComponent::legacy(message)
        }
        Err(e) => {
            debug!("chat message is not JSON ({}), using legacy text", e);
            ChatComponent::legacy(message)
        }
    }
}

pub fn decode_bytes(message: &[u8]) -> ChatComponent {
    decode(&String::from_utf8_lossy(message))
}

/// Decodes an already parsed node. Strings take the legacy path.
pub fn decode_value(value: &Value) -> ChatComponent {
    decode_value_at(value, 1)
}

fn decode_value_at(value: &Value, depth: usize) -> ChatComponent {
    match value {
        Value::Object(obj) => decode_object(obj, depth),
        Value::String(s) => ChatComponent::legacy(s),
        other => {
            let fragment = other.to_string();
            debug!("malformed chat component {}, demoting to legacy text", fragment);
            ChatComponent::legacy(&fragment)
        }
    }
}

fn decode_object(obj: &Map<String, Value>, depth: usize) -> ChatComponent {
    let (click_action, click_value) = read_event(obj, "clickEvent", ClickAction::from_token);
    let (hover_action, hover_value) = read_event(obj, "hoverEvent", HoverAction::from_token);
    let click_value = match click_action {
        Some(_) => click_value,
        None => String::new(),
    };
    let hover_value = match hover_action {
        Some(_) => hover_value,
        None => String::new(),
    };

    let extra = match obj.get("extra") {
        Some(Value::Array(items)) if depth < MAX_DEPTH => items
            .iter()
            .map(|item| decode_value_at(item, depth + 1))
            .collect(),
        Some(Value::Array(items)) => {
            debug!("dropping {} chat components nested past depth {}", items.len(), MAX_DEPTH);
            Vec::new()
        }
        _ => Vec::new(),
    };

    ChatComponent {
        raw: None,
        text: read_str(obj, "text").unwrap_or_default().to_owned(),
        color: read_color(obj),
        bold: read_bool(obj, "bold"),
        italic: read_bool(obj, "italic"),
        underlined: read_bool(obj, "underlined"),
        strikethrough: read_bool(obj, "strikethrough"),
        obfuscated: read_bool(obj, "obfuscated"),
        click_action: click_action.unwrap_or(ClickAction::None),
        click_value,
        hover_action: hover_action.unwrap_or(HoverAction::None),
        hover_value,
        is_legacy_command: false,
        extra,
    }
}

fn read_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

fn read_bool(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn read_color(obj: &Map<String, Value>) -> ChatColor {
    match read_str(obj, "color") {
        Some(token) => ChatColor::from_token(token).unwrap_or_else(|| {
            trace!("unknown chat color {:?}", token);
            ChatColor::Reset
        }),
        None => ChatColor::Reset,
    }
}

/// Reads `{"action": ..., "value": ...}`. The value is returned even when the
/// action is unknown; callers decide whether to keep it.
fn read_event<A>(
    obj: &Map<String, Value>,
    key: &str,
    parse: fn(&str) -> Option<A>,
) -> (Option<A>, String) {
    let event = match obj.get(key) {
        Some(Value::Object(event)) => event,
        _ => return (None, String::new()),
    };
    let action = read_str(event, "action").and_then(|token| {
        let action = parse(token);
        if action.is_none() && !token.is_empty() {
            trace!("unknown {} action {:?}", key, token);
        }
        action
    });
    let value = read_str(event, "value").unwrap_or_default().to_owned();
    (action, value)
}

/// Event objects are always written. `none` becomes an empty action and value.
/// Children nested past [`MAX_DEPTH`] are left out.
pub fn to_value(component: &ChatComponent) -> Value {
    to_value_at(component, 1)
}

fn to_value_at(component: &ChatComponent, depth: usize) -> Value {
    let extra: Vec<Value> = if depth < MAX_DEPTH {
        component
            .extra
            .iter()
            .map(|child| to_value_at(child, depth + 1))
            .collect()
    } else {
        Vec::new()
    };
    json!({
        "text": component.text,
        "bold": component.bold,
        "italic": component.italic,
        "underlined": component.underlined,
        "strikethrough": component.strikethrough,
        "obfuscated": component.obfuscated,
        "color": component.color.as_str(),
        "clickEvent": {
            "action": component.click_action.as_str(),
            "value": component.click_value,
        },
        "hoverEvent": {
            "action": component.hover_action.as_str(),
            "value": component.hover_value,
        },
        "extra": extra,
    })
}

pub fn encode(component: &ChatComponent) -> String {
    to_value(component).to_string()
}

impl Serialize for ChatComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_value(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChatComponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(decode_value(&value))
    }
}
