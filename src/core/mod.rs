//! Core module: scaled simulation clock and game-wide settings.
pub mod plugin;
pub mod settings;

pub use plugin::CorePlugin;
