//! Tiled JSON map reader.
//!
//! Only the parts the scene needs are read: tile layer names (for logging)
//! and object layers (spawn point and trigger rectangles). Tile data itself is
//! left to the renderer.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use super::errors::SceneLoadError;

/// Name of the object holding the player's start position.
pub const SPAWN_OBJECT: &str = "spawn";

#[derive(Debug, Deserialize)]
struct RawTiledMap {
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    tilewidth: u32,
    #[serde(default)]
    tileheight: u32,
    #[serde(default)]
    layers: Vec<RawLayer>,
}

#[derive(Debug, Deserialize)]
struct RawLayer {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    objects: Vec<RawObject>,
    /// Children of a `group` layer.
    #[serde(default)]
    layers: Vec<RawLayer>,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    #[serde(default)]
    name: String,
    x: f32,
    y: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
}

/// A named object converted to world space (y-up).
#[derive(Debug, Clone, PartialEq)]
pub struct MapObject {
    pub name: String,
    pub bounds: Rect,
}

impl MapObject {
    fn from_raw(raw: RawObject) -> Self {
        // Tiled is y-down with the origin at the top-left of the map.
        let min = Vec2::new(raw.x, -(raw.y + raw.height));
        let max = Vec2::new(raw.x + raw.width, -raw.y);
        Self {
            name: raw.name,
            bounds: Rect::from_corners(min, max),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObjectLayer {
    pub name: String,
    pub objects: Vec<MapObject>,
}

impl ObjectLayer {
    pub fn find(&self, name: &str) -> Option<&MapObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    /// World position of the `spawn` object (its centre when it has an area).
    pub fn spawn(&self) -> Result<Vec2, SceneLoadError> {
        self.find(SPAWN_OBJECT)
            .map(|object| object.bounds.center())
            .ok_or_else(|| SceneLoadError::MissingSpawn {
                layer: self.name.clone(),
            })
    }

    pub fn trigger(&self, name: &str) -> Result<Rect, SceneLoadError> {
        self.find(name)
            .map(|object| object.bounds)
            .ok_or_else(|| SceneLoadError::MissingTrigger {
                name: name.to_string(),
                layer: self.name.clone(),
            })
    }
}

/// The subset of a Tiled map the scene consumes.
#[derive(Debug, Clone)]
pub struct TiledMap {
    pub size_px: Vec2,
    pub tile_layers: Vec<String>,
    pub object_layers: Vec<ObjectLayer>,
}

impl TiledMap {
    pub fn load(path: &str) -> Result<Self, SceneLoadError> {
        let data =
            fs::read_to_string(Path::new(path)).map_err(|err| SceneLoadError::io(path, err))?;
        Self::from_json(path, &data)
    }

    pub fn from_json(path: &str, data: &str) -> Result<Self, SceneLoadError> {
        let raw: RawTiledMap =
            serde_json::from_str(data).map_err(|err| SceneLoadError::parse(path, err))?;

        // Widened before multiplying; tile counts and sizes come straight from the file.
        let size_px = Vec2::new(
            raw.width as f32 * raw.tilewidth as f32,
            raw.height as f32 * raw.tileheight as f32,
        );

        let mut map = Self {
            size_px,
            tile_layers: Vec::new(),
            object_layers: Vec::new(),
        };
        map.collect_layers(raw.layers);
        Ok(map)
    }

    fn collect_layers(&mut self, layers: Vec<RawLayer>) {
        for layer in layers {
            match layer.kind.as_str() {
                "tilelayer" => self.tile_layers.push(layer.name),
                "objectgroup" => self.object_layers.push(ObjectLayer {
                    name: layer.name,
                    objects: layer.objects.into_iter().map(MapObject::from_raw).collect(),
                }),
                "group" => self.collect_layers(layer.layers),
                _ => {}
            }
        }
    }

    pub fn object_layer(&self, name: &str) -> Result<&ObjectLayer, SceneLoadError> {
        self.object_layers
            .iter()
            .find(|layer| layer.name == name)
            .ok_or_else(|| SceneLoadError::MissingObjectLayer {
                layer: name.to_string(),
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE_MAP: &str = r#"{
        "width": 10, "height": 8, "tilewidth": 16, "tileheight": 16,
        "layers": [
            { "name": "water", "type": "tilelayer", "data": [] },
            { "name": "grass", "type": "tilelayer", "data": [] },
            { "name": "decor", "type": "group", "layers": [
                { "name": "pathway", "type": "tilelayer", "data": [] }
            ]},
            { "name": "objects", "type": "objectgroup", "objects": [
                { "id": 1, "name": "spawn", "x": 32, "y": 48, "point": true },
                { "id": 2, "name": "dialogue1", "x": 0, "y": 0, "width": 32, "height": 16 },
                { "id": 3, "name": "dialogue2", "x": 64, "y": 0, "width": 32, "height": 16 },
                { "id": 4, "name": "dialogue3", "x": 96, "y": 96, "width": 32, "height": 32 }
            ]}
        ]
    }"#;

    #[test]
    fn reads_layers_and_flattens_groups() {
        let map = TiledMap::from_json("sample", SAMPLE_MAP).unwrap();

        assert_eq!(map.size_px, Vec2::new(160.0, 128.0));
        assert_eq!(map.tile_layers, vec!["water", "grass", "pathway"]);
        assert_eq!(map.object_layers.len(), 1);
        assert_eq!(map.object_layers[0].objects.len(), 4);
    }

    #[test]
    fn converts_objects_to_world_space() {
        let map = TiledMap::from_json("sample", SAMPLE_MAP).unwrap();
        let layer = map.object_layer("objects").unwrap();

        assert_eq!(layer.spawn().unwrap(), Vec2::new(32.0, -48.0));

        let trigger = layer.trigger("dialogue1").unwrap();
        assert_eq!(trigger.min, Vec2::new(0.0, -16.0));
        assert_eq!(trigger.max, Vec2::new(32.0, 0.0));
    }

    #[test]
    fn missing_objects_are_named() {
        let map = TiledMap::from_json(
            "sample",
            r#"{ "layers": [ { "name": "objects", "type": "objectgroup", "objects": [] } ] }"#,
        )
        .unwrap();
        let layer = map.object_layer("objects").unwrap();

        assert!(matches!(
            layer.spawn(),
            Err(SceneLoadError::MissingSpawn { .. })
        ));
        match layer.trigger("dialogue2") {
            Err(SceneLoadError::MissingTrigger { name, .. }) => assert_eq!(name, "dialogue2"),
            other => panic!("expected missing trigger, got {:?}", other),
        }
        assert!(matches!(
            map.object_layer("zones"),
            Err(SceneLoadError::MissingObjectLayer { .. })
        ));
    }

    #[test]
    fn oversized_dimensions_do_not_overflow() {
        let map = TiledMap::from_json(
            "huge",
            r#"{ "width": 100000, "height": 3, "tilewidth": 100000, "tileheight": 16 }"#,
        )
        .unwrap();

        assert_eq!(map.size_px, Vec2::new(1.0e10, 48.0));
        assert!(map.object_layers.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = TiledMap::from_json("broken.json", "{ \"layers\": [").unwrap_err();
        assert!(matches!(err, SceneLoadError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
