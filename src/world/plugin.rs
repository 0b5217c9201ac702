//! WorldPlugin publishes the map layout and owns the camera and background.
use bevy::prelude::*;

use crate::player::plugin::PlayerMovementSet;

use super::{
    scene::MapLayout,
    systems::{follow_player_camera, log_map_layout, spawn_camera, spawn_map_background},
};

pub struct WorldPlugin {
    layout: MapLayout,
}

impl WorldPlugin {
    pub fn new(layout: MapLayout) -> Self {
        Self { layout }
    }
}

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.layout.clone())
            .add_systems(
                Startup,
                (log_map_layout, spawn_camera, spawn_map_background),
            )
            .add_systems(Update, follow_player_camera.after(PlayerMovementSet));
    }
}
