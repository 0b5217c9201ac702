//! Game settings loaded from `config/game.toml`.
use std::{fs, path::Path, time::Duration};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/game.toml";

const MIN_PLAYER_SPEED: f32 = 1.0;
const MIN_REVEAL_INTERVAL_MS: u64 = 1;
const MIN_WALK_FPS: f32 = 1.0;
const MAX_WALK_FPS: f32 = 60.0;
const MIN_TIME_SCALE: f32 = 0.001;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawGameConfig {
    #[serde(default)]
    simulation: RawSimulationSection,
    #[serde(default)]
    map: RawMapSection,
    #[serde(default)]
    player: RawPlayerSection,
    #[serde(default)]
    dialogue: RawDialogueSection,
    #[serde(default)]
    audio: RawAudioSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSimulationSection {
    time_scale: f32,
}

impl Default for RawSimulationSection {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMapSection {
    path: String,
    object_layer: String,
    background: Option<String>,
}

impl Default for RawMapSection {
    fn default() -> Self {
        Self {
            path: "assets/maps/lakeside.json".to_string(),
            object_layer: "objects".to_string(),
            background: Some("background/Hills.png".to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPlayerSection {
    speed: f32,
    sprite_sheet: String,
    frame_size: [u32; 2],
    sheet_columns: u32,
    sheet_rows: u32,
    hitbox: [f32; 2],
    walk_fps: f32,
}

impl Default for RawPlayerSection {
    fn default() -> Self {
        Self {
            speed: 160.0,
            sprite_sheet: "player/spritesheet.png".to_string(),
            frame_size: [32, 32],
            sheet_columns: 4,
            sheet_rows: 5,
            hitbox: [14.0, 14.0],
            walk_fps: 8.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawDialogueSection {
    reveal_interval_ms: u64,
}

impl Default for RawDialogueSection {
    fn default() -> Self {
        Self {
            reveal_interval_ms: 25,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawAudioSection {
    background: Option<String>,
    typing: Option<String>,
    background_volume: f32,
    typing_volume: f32,
}

impl Default for RawAudioSection {
    fn default() -> Self {
        Self {
            background: Some("audio/background.wav".to_string()),
            typing: Some("audio/typing.wav".to_string()),
            background_volume: 0.4,
            typing_volume: 0.6,
        }
    }
}

/// Multiplier applied to every frame delta fed to gameplay timers.
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    pub time_scale: f32,
}

/// Where the scene map lives and which object layer holds spawn/trigger objects.
#[derive(Debug, Clone)]
pub struct MapSettings {
    pub path: String,
    pub object_layer: String,
    /// Optional pre-rendered image asset drawn beneath the player.
    pub background: Option<String>,
}

/// Player movement and sprite sheet layout.
#[derive(Debug, Clone)]
pub struct PlayerSettings {
    pub speed: f32,
    pub sprite_sheet: String,
    pub frame_size: UVec2,
    pub sheet_columns: u32,
    pub sheet_rows: u32,
    pub hitbox: Vec2,
    pub walk_fps: f32,
}

#[derive(Debug, Clone)]
pub struct DialogueSettings {
    pub reveal_interval: Duration,
}

#[derive(Debug, Clone)]
pub struct AudioSettings {
    pub background: Option<String>,
    pub typing: Option<String>,
    pub background_volume: f32,
    pub typing_volume: f32,
}

/// Runtime settings derived from `config/game.toml`.
#[derive(Resource, Debug, Clone)]
pub struct GameSettings {
    pub simulation: SimulationSettings,
    pub map: MapSettings,
    pub player: PlayerSettings,
    pub dialogue: DialogueSettings,
    pub audio: AudioSettings,
}

impl GameSettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => Self::from_toml_or_default(&data),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawGameConfig::default().into()
            }
        }
    }

    fn from_toml_or_default(data: &str) -> Self {
        match toml::from_str::<RawGameConfig>(data) {
            Ok(raw) => raw.into(),
            Err(err) => {
                warn!(
                    "Failed to parse {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawGameConfig::default().into()
            }
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        RawGameConfig::default().into()
    }
}

impl From<RawGameConfig> for GameSettings {
    fn from(value: RawGameConfig) -> Self {
        let simulation = value.simulation;
        let map = value.map;
        let player = value.player;
        let dialogue = value.dialogue;
        let audio = value.audio;
        let player_defaults = RawPlayerSection::default();
        let audio_defaults = RawAudioSection::default();

        Self {
            simulation: SimulationSettings {
                time_scale: finite_or(
                    simulation.time_scale,
                    RawSimulationSection::default().time_scale,
                )
                .max(MIN_TIME_SCALE),
            },
            map: MapSettings {
                path: map.path,
                object_layer: map.object_layer,
                background: map.background.filter(|path| !path.is_empty()),
            },
            player: PlayerSettings {
                speed: finite_or(player.speed, player_defaults.speed).max(MIN_PLAYER_SPEED),
                sprite_sheet: player.sprite_sheet,
                frame_size: UVec2::new(player.frame_size[0].max(1), player.frame_size[1].max(1)),
                sheet_columns: player.sheet_columns.max(1),
                sheet_rows: player.sheet_rows.max(1),
                hitbox: Vec2::new(
                    finite_or(player.hitbox[0], player_defaults.hitbox[0]).max(1.0),
                    finite_or(player.hitbox[1], player_defaults.hitbox[1]).max(1.0),
                ),
                walk_fps: finite_or(player.walk_fps, player_defaults.walk_fps)
                    .clamp(MIN_WALK_FPS, MAX_WALK_FPS),
            },
            dialogue: DialogueSettings {
                reveal_interval: Duration::from_millis(
                    dialogue.reveal_interval_ms.max(MIN_REVEAL_INTERVAL_MS),
                ),
            },
            audio: AudioSettings {
                background: audio.background.filter(|path| !path.is_empty()),
                typing: audio.typing.filter(|path| !path.is_empty()),
                background_volume: finite_or(
                    audio.background_volume,
                    audio_defaults.background_volume,
                )
                .clamp(0.0, 1.0),
                typing_volume: finite_or(audio.typing_volume, audio_defaults.typing_volume)
                    .clamp(0.0, 1.0),
            },
        }
    }
}

/// TOML accepts `inf` and `nan`; neither is a usable tuning value.
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = GameSettings::from_toml_or_default("");
        assert_eq!(settings.map.path, "assets/maps/lakeside.json");
        assert_eq!(settings.map.object_layer, "objects");
        assert_eq!(settings.player.speed, 160.0);
        assert_eq!(settings.dialogue.reveal_interval, Duration::from_millis(25));
    }

    #[test]
    fn clamps_invalid_values() {
        let settings = GameSettings::from_toml_or_default(
            r#"
            [player]
            speed = -20.0
            hitbox = [0.0, 8.0]

            [dialogue]
            reveal_interval_ms = 0

            [audio]
            typing = ""
            background_volume = 3.0
            "#,
        );

        assert_eq!(settings.player.speed, MIN_PLAYER_SPEED);
        assert_eq!(settings.player.hitbox, Vec2::new(1.0, 8.0));
        assert_eq!(settings.dialogue.reveal_interval, Duration::from_millis(1));
        assert!(settings.audio.typing.is_none());
        assert_eq!(settings.audio.background_volume, 1.0);
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let settings = GameSettings::from_toml_or_default(
            r#"
            [simulation]
            time_scale = nan

            [player]
            speed = inf
            walk_fps = inf
            hitbox = [nan, -inf]

            [audio]
            background_volume = nan
            typing_volume = -inf
            "#,
        );

        assert_eq!(settings.simulation.time_scale, 1.0);
        assert_eq!(settings.player.speed, 160.0);
        assert_eq!(settings.player.walk_fps, 8.0);
        assert_eq!(settings.player.hitbox, Vec2::new(14.0, 14.0));
        assert_eq!(settings.audio.background_volume, 0.4);
        assert_eq!(settings.audio.typing_volume, 0.6);
    }

    #[test]
    fn walk_fps_is_capped() {
        let settings = GameSettings::from_toml_or_default("[player]\nwalk_fps = 1e9");
        assert_eq!(settings.player.walk_fps, MAX_WALK_FPS);
    }

    #[test]
    fn malformed_file_falls_back() {
        let settings = GameSettings::from_toml_or_default("[player\nspeed = ");
        assert_eq!(settings.player.speed, 160.0);
    }
}
