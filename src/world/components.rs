//! Components used by the world module.
use bevy::prelude::*;

/// Marker component for the 2D camera that follows the player.
#[derive(Component, Debug, Default)]
pub struct MainCamera;
