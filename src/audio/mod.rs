//! Audio module: background loop and typing sound.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::SceneAudioPlugin;
