// src/ui/dialogue_panel/mod.rs
//
// Dialogue panel module: conversation box with typewriter text, sign box for
// static zones, interact hint, and the yes/no choice panel.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::UiPlugin;
