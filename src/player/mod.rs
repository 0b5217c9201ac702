//! Player module: directional controller, sprite animation, and movement.

pub mod animation;
pub mod components;
pub mod controller;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
