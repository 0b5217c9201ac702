// src/ui/mod.rs
//
// UI module providing screen-space UI elements for dialogue.

pub mod dialogue_panel;

// Re-export the main plugin
pub use dialogue_panel::UiPlugin;
