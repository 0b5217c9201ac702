//! Proximity module - trigger zones and player overlap detection.

pub mod detector;
pub mod plugin;
pub mod systems;

pub use plugin::ProximityPlugin;
