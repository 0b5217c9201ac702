//! Player plugin wiring movement and animation systems.
use bevy::prelude::*;

use crate::{
    core::settings::GameSettings,
    player::{
        animation::AnimationClips,
        systems::{animate_player_sprite, drive_player_controller, move_player, spawn_player},
    },
};

/// Systems that move the player; other plugins order themselves after this.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerMovementSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        let player = app
            .world()
            .get_resource::<GameSettings>()
            .map(|settings| settings.player.clone())
            .unwrap_or_else(|| GameSettings::default().player);
        let clips =
            AnimationClips::from_grid(player.sheet_columns, player.sheet_rows, player.walk_fps);

        app.insert_resource(clips)
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    (drive_player_controller, move_player)
                        .chain()
                        .in_set(PlayerMovementSet),
                    animate_player_sprite.after(PlayerMovementSet),
                ),
            );
    }
}
