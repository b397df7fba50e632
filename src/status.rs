//! Body of the status response sent to the server list ping.

use crate::chat::ChatComponent;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusVersion {
    pub name: String,
    pub protocol: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusPlayerSample {
    pub name: String,
    pub id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusPlayers {
    pub max: u32,
    pub online: u32,
    #[serde(default)]
    pub sample: Vec<StatusPlayerSample>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusResponse {
    pub version: StatusVersion,
    pub players: StatusPlayers,
    pub description: ChatComponent,
}

impl StatusResponse {
    pub fn new(version: &str, protocol: i32, max_players: u32, description: ChatComponent) -> Self {
        StatusResponse {
            version: StatusVersion {
                name: version.to_owned(),
                protocol,
            },
            players: StatusPlayers {
                max: max_players,
                online: 0,
                sample: Vec::new(),
            },
            description,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatColor;
    use serde_json::{json, Value};

    #[test]
    fn description_is_a_chat_component() {
        let response = StatusResponse::new(
            "1.14.4",
            498,
            100,
            ChatComponent::new("Hello World!").with_color(ChatColor::Gold),
        );
        let json: Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(json["version"], json!({"name": "1.14.4", "protocol": 498}));
        assert_eq!(json["players"]["max"], 100);
        assert_eq!(json["players"]["sample"], json!([]));
        assert_eq!(json["description"]["text"], "Hello World!");
        assert_eq!(json["description"]["color"], "gold");
    }

    #[test]
    fn parses_legacy_string_description() {
        let body = r#"{
            "version": {"name": "1.14.4", "protocol": 498},
            "players": {"max": 20, "online": 1},
            "description": "A Minecraft Server"
        }"#;
        let response: StatusResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.description.full_text(), "A Minecraft Server");
        assert!(response.players.sample.is_empty());
    }
}
