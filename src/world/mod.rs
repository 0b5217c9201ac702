//! World module: Tiled map loading, scene assembly, camera, and background.
pub mod components;
pub mod errors;
pub mod map;
pub mod plugin;
pub mod scene;
pub mod systems;

pub use plugin::WorldPlugin;
