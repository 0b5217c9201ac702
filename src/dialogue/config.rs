//! Dialogue content loaded from `config/dialogue.toml`.
//!
//! Sequences and zones reference each other by name here; names are resolved
//! against the map and each other when the scene is assembled.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/dialogue.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawDialogueConfig {
    decline_message: String,
    hint: String,
    sequences: Vec<RawSequence>,
    zones: Vec<RawZone>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawSequence {
    name: String,
    #[serde(default)]
    lines: Vec<String>,
    /// Sequence started when the player answers "yes".
    #[serde(default)]
    accept: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawZone {
    trigger: String,
    #[serde(default)]
    sign: Option<String>,
    #[serde(default)]
    conversation: Option<String>,
}

impl Default for RawDialogueConfig {
    fn default() -> Self {
        Self {
            decline_message: "Hmm... that's not the answer I was hoping for. Ask me again?"
                .to_string(),
            hint: "Press E to talk".to_string(),
            sequences: vec![
                RawSequence {
                    name: "proposal".to_string(),
                    lines: vec![
                        "Oh! You found me down by the lake.".to_string(),
                        "I've been waiting here all afternoon, working up the nerve.".to_string(),
                        "So... will you come on the next adventure with me?".to_string(),
                    ],
                    accept: Some("celebration".to_string()),
                },
                RawSequence {
                    name: "celebration".to_string(),
                    lines: vec![
                        "You said yes!".to_string(),
                        "Pack light. We leave at sunrise.".to_string(),
                    ],
                    accept: None,
                },
            ],
            zones: vec![
                RawZone {
                    trigger: "dialogue1".to_string(),
                    sign: Some("Welcome! Use the arrow keys to look around.".to_string()),
                    conversation: None,
                },
                RawZone {
                    trigger: "dialogue2".to_string(),
                    sign: Some("The path to the east leads down to the lake.".to_string()),
                    conversation: None,
                },
                RawZone {
                    trigger: "dialogue3".to_string(),
                    sign: None,
                    conversation: Some("proposal".to_string()),
                },
            ],
        }
    }
}

/// A sequence as written in the config, before names are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSpec {
    pub name: String,
    pub lines: Vec<String>,
    pub accept: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoneSpecScript {
    Sign(String),
    Conversation(String),
}

/// Binding of a map trigger object to a sign or a conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSpec {
    pub trigger: String,
    pub script: ZoneSpecScript,
}

/// Unresolved dialogue content.
#[derive(Debug, Clone)]
pub struct DialogueContent {
    pub decline_message: String,
    pub hint: String,
    pub sequences: Vec<SequenceSpec>,
    pub zones: Vec<ZoneSpec>,
}

impl DialogueContent {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => Self::from_toml_or_default(&data),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Using built-in dialogue.",
                    CONFIG_PATH, err
                );
                RawDialogueConfig::default().into()
            }
        }
    }

    fn from_toml_or_default(data: &str) -> Self {
        match toml::from_str::<RawDialogueConfig>(data) {
            Ok(raw) => raw.into(),
            Err(err) => {
                warn!(
                    "Failed to parse {} ({}). Using built-in dialogue.",
                    CONFIG_PATH, err
                );
                RawDialogueConfig::default().into()
            }
        }
    }
}

impl Default for DialogueContent {
    fn default() -> Self {
        RawDialogueConfig::default().into()
    }
}

impl From<RawDialogueConfig> for DialogueContent {
    fn from(value: RawDialogueConfig) -> Self {
        let sequences = value
            .sequences
            .into_iter()
            .map(|raw| SequenceSpec {
                name: raw.name,
                lines: raw.lines,
                accept: raw.accept.filter(|name| !name.is_empty()),
            })
            .collect();

        let zones = value
            .zones
            .into_iter()
            .filter_map(|raw| {
                let script = match (raw.sign, raw.conversation) {
                    (Some(text), None) => ZoneSpecScript::Sign(text),
                    (None, Some(sequence)) => ZoneSpecScript::Conversation(sequence),
                    (Some(_), Some(_)) => {
                        warn!(
                            "Zone '{}' sets both sign and conversation; ignoring it",
                            raw.trigger
                        );
                        return None;
                    }
                    (None, None) => {
                        warn!(
                            "Zone '{}' sets neither sign nor conversation; ignoring it",
                            raw.trigger
                        );
                        return None;
                    }
                };
                Some(ZoneSpec {
                    trigger: raw.trigger,
                    script,
                })
            })
            .collect();

        Self {
            decline_message: value.decline_message,
            hint: value.hint,
            sequences,
            zones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_content_has_three_zones() {
        let content = DialogueContent::from_toml_or_default("");

        assert_eq!(content.zones.len(), 3);
        assert_eq!(
            content.zones[2].script,
            ZoneSpecScript::Conversation("proposal".to_string())
        );
        assert_eq!(content.sequences[0].lines.len(), 3);
        assert_eq!(content.sequences[0].accept.as_deref(), Some("celebration"));
    }

    #[test]
    fn parses_custom_content() {
        let content = DialogueContent::from_toml_or_default(
            r#"
            decline_message = "Nope."

            [[sequences]]
            name = "greeting"
            lines = ["Hello", "Bye"]

            [[zones]]
            trigger = "porch"
            conversation = "greeting"

            [[zones]]
            trigger = "mailbox"
            sign = "No mail today."
            "#,
        );

        assert_eq!(content.decline_message, "Nope.");
        assert_eq!(content.hint, "Press E to talk");
        assert_eq!(
            content.sequences,
            vec![SequenceSpec {
                name: "greeting".to_string(),
                lines: vec!["Hello".to_string(), "Bye".to_string()],
                accept: None,
            }]
        );
        assert_eq!(
            content.zones[1].script,
            ZoneSpecScript::Sign("No mail today.".to_string())
        );
    }

    #[test]
    fn ambiguous_zones_are_dropped() {
        let content = DialogueContent::from_toml_or_default(
            r#"
            [[zones]]
            trigger = "both"
            sign = "a"
            conversation = "b"

            [[zones]]
            trigger = "neither"
            "#,
        );
        assert!(content.zones.is_empty());
    }
}
