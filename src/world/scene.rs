//! Assembles the scene from the map and the dialogue content, validating
//! every cross-reference up front.
use std::collections::HashMap;

use bevy::prelude::*;

use crate::{
    core::settings::GameSettings,
    dialogue::{
        config::{DialogueContent, ZoneSpecScript},
        types::{DialogueBook, DialogueSequence, SequenceEnding, SequenceId, ZoneScript},
    },
    proximity::detector::TriggerZone,
};

use super::{errors::SceneLoadError, map::TiledMap};

/// Static facts about the loaded map.
#[derive(Resource, Debug, Clone)]
pub struct MapLayout {
    pub spawn: Vec2,
    pub size_px: Vec2,
    pub tile_layers: Vec<String>,
}

/// Everything the scene needs, checked and resolved.
#[derive(Debug, Clone)]
pub struct SceneBlueprint {
    pub layout: MapLayout,
    pub zones: Vec<TriggerZone>,
    pub book: DialogueBook,
    pub hint: String,
    pub decline_message: String,
}

impl SceneBlueprint {
    pub fn load(settings: &GameSettings) -> Result<Self, SceneLoadError> {
        let map = TiledMap::load(&settings.map.path)?;
        let content = DialogueContent::load_or_default();
        Self::assemble(&map, &settings.map.object_layer, &content)
    }

    pub fn assemble(
        map: &TiledMap,
        object_layer: &str,
        content: &DialogueContent,
    ) -> Result<Self, SceneLoadError> {
        let layer = map.object_layer(object_layer)?;
        let spawn = layer.spawn()?;

        let ids = sequence_ids(content);
        let book = build_book(content, &ids)?;

        let mut zones = Vec::with_capacity(content.zones.len());
        for spec in &content.zones {
            let bounds = layer.trigger(&spec.trigger)?;
            let script = match &spec.script {
                ZoneSpecScript::Sign(text) => ZoneScript::Sign { text: text.clone() },
                ZoneSpecScript::Conversation(name) => ZoneScript::Conversation {
                    sequence: resolve(&ids, &spec.trigger, name)?,
                },
            };
            zones.push(TriggerZone::new(spec.trigger.clone(), bounds, script));
        }

        for object in &layer.objects {
            let bound = object.name == super::map::SPAWN_OBJECT
                || zones.iter().any(|zone| zone.tag == object.name);
            if !bound {
                debug!("Map object '{}' has no dialogue bound to it", object.name);
            }
        }

        Ok(Self {
            layout: MapLayout {
                spawn,
                size_px: map.size_px,
                tile_layers: map.tile_layers.clone(),
            },
            zones,
            book,
            hint: content.hint.clone(),
            decline_message: content.decline_message.clone(),
        })
    }
}

/// Sequence ids follow config order; the first of duplicate names wins.
fn sequence_ids(content: &DialogueContent) -> HashMap<&str, SequenceId> {
    let mut ids = HashMap::new();
    for (index, spec) in content.sequences.iter().enumerate() {
        ids.entry(spec.name.as_str())
            .or_insert_with(|| SequenceId::new(index));
    }
    ids
}

fn build_book(
    content: &DialogueContent,
    ids: &HashMap<&str, SequenceId>,
) -> Result<DialogueBook, SceneLoadError> {
    let mut book = DialogueBook::default();
    for spec in &content.sequences {
        let ending = match &spec.accept {
            Some(name) => SequenceEnding::Choice {
                on_accept: resolve(ids, &spec.name, name)?,
            },
            None => SequenceEnding::Complete,
        };
        book.push(DialogueSequence::new(
            spec.name.clone(),
            spec.lines.clone(),
            ending,
        ));
    }
    Ok(book)
}

fn resolve(
    ids: &HashMap<&str, SequenceId>,
    referrer: &str,
    name: &str,
) -> Result<SequenceId, SceneLoadError> {
    ids.get(name)
        .copied()
        .ok_or_else(|| SceneLoadError::UnknownSequence {
            referrer: referrer.to_string(),
            sequence: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dialogue::config::{SequenceSpec, ZoneSpec},
        world::map::tests::SAMPLE_MAP,
    };

    fn sample_map() -> TiledMap {
        TiledMap::from_json("sample", SAMPLE_MAP).unwrap()
    }

    #[test]
    fn assembles_built_in_content() {
        let scene =
            SceneBlueprint::assemble(&sample_map(), "objects", &DialogueContent::default())
                .unwrap();

        assert_eq!(scene.layout.spawn, Vec2::new(32.0, -48.0));
        assert_eq!(scene.zones.len(), 3);
        assert_eq!(scene.book.len(), 2);

        let proposal = scene.book.get(SequenceId::new(0)).unwrap();
        assert_eq!(proposal.name(), "proposal");
        assert_eq!(
            proposal.ending(),
            SequenceEnding::Choice {
                on_accept: SequenceId::new(1)
            }
        );
        assert_eq!(
            scene.zones[2].script,
            ZoneScript::Conversation {
                sequence: SequenceId::new(0)
            }
        );
    }

    #[test]
    fn missing_trigger_fails_fast() {
        let mut content = DialogueContent::default();
        content.zones.push(ZoneSpec {
            trigger: "dialogue9".to_string(),
            script: ZoneSpecScript::Sign("?".to_string()),
        });

        let err = SceneBlueprint::assemble(&sample_map(), "objects", &content).unwrap_err();
        assert!(matches!(
            err,
            SceneLoadError::MissingTrigger { ref name, .. } if name == "dialogue9"
        ));
    }

    #[test]
    fn unknown_sequences_are_rejected() {
        let mut content = DialogueContent::default();
        content.sequences.push(SequenceSpec {
            name: "dangling".to_string(),
            lines: vec!["..".to_string()],
            accept: Some("nowhere".to_string()),
        });

        let err = SceneBlueprint::assemble(&sample_map(), "objects", &content).unwrap_err();
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn wrong_object_layer_is_reported() {
        let err = SceneBlueprint::assemble(&sample_map(), "triggers", &DialogueContent::default())
            .unwrap_err();
        assert!(matches!(err, SceneLoadError::MissingObjectLayer { .. }));
    }

    #[test]
    fn shipped_scene_loads() {
        let scene = SceneBlueprint::load(&GameSettings::default()).unwrap();

        assert_eq!(scene.layout.size_px, Vec2::new(480.0, 320.0));
        assert_eq!(scene.layout.spawn, Vec2::new(48.0, -136.0));
        assert_eq!(scene.layout.tile_layers, vec!["water", "grass", "pathway"]);
        assert_eq!(scene.zones.len(), 3);
        assert!(!scene.zones.iter().any(|zone| zone.bounds.contains(scene.layout.spawn)));
    }

    #[test]
    fn shipped_assets_exist() {
        let settings = GameSettings::default();
        let assets = std::path::Path::new("assets");

        let mut paths = vec![settings.player.sprite_sheet.clone()];
        paths.extend(settings.map.background.clone());
        paths.extend(settings.audio.background.clone());
        paths.extend(settings.audio.typing.clone());
        assert_eq!(paths.len(), 4);

        for path in paths {
            assert!(assets.join(&path).is_file(), "missing asset {}", path);
        }
    }
}
