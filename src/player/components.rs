//! Components attached to the player entity.
use bevy::prelude::*;

use super::controller::AnimationKey;

/// Marker component identifying the player sprite.
#[derive(Component, Debug)]
pub struct Player;

/// Velocity and clip chosen by the controller this tick.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerMotion {
    pub velocity: Vec2,
    pub animation: AnimationKey,
}

/// Size of the box used for zone overlap, centred on the player.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerHitbox {
    pub size: Vec2,
}

impl PlayerHitbox {
    pub fn bounds(&self, center: Vec2) -> Rect {
        Rect::from_center_size(center, self.size)
    }
}
