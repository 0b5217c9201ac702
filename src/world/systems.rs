//! Systems for the world module.
use bevy::prelude::*;

use crate::{
    core::settings::GameSettings,
    player::components::Player,
    world::{components::MainCamera, scene::MapLayout},
};

const CAMERA_Z: f32 = 100.0;

/// Spawns the 2D camera centred on the spawn point.
pub fn spawn_camera(mut commands: Commands, layout: Res<MapLayout>) {
    commands.spawn((
        Camera2d,
        Transform::from_translation(layout.spawn.extend(CAMERA_Z)),
        MainCamera,
        Name::new("Main Camera"),
    ));
}

/// Draws the map's pre-rendered image, if one is configured.
pub fn spawn_map_background(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<GameSettings>,
    layout: Res<MapLayout>,
) {
    let Some(path) = settings.map.background.clone() else {
        return;
    };

    let mut sprite = Sprite::from_image(asset_server.load(path));
    let mut center = Vec2::ZERO;
    if layout.size_px.cmpgt(Vec2::ZERO).all() {
        sprite.custom_size = Some(layout.size_px);
        center = Vec2::new(layout.size_px.x / 2.0, -layout.size_px.y / 2.0);
    }

    commands.spawn((
        sprite,
        Transform::from_translation(center.extend(0.0)),
        Name::new("Map Background"),
    ));
}

/// Logs what was read from the map.
pub fn log_map_layout(layout: Res<MapLayout>, settings: Res<GameSettings>) {
    info!(
        "Map {} loaded: {:.0}x{:.0}px, tile layers [{}]",
        settings.map.path,
        layout.size_px.x,
        layout.size_px.y,
        layout.tile_layers.join(", ")
    );
}

/// Keeps the camera centred on the player.
pub fn follow_player_camera(
    player_query: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, (With<MainCamera>, Without<Player>)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    let target = player.translation.truncate();
    if camera.translation.truncate() != target {
        camera.translation.x = target.x;
        camera.translation.y = target.y;
    }
}
